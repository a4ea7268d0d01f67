//! Command-line configuration for the windowed front end.

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::domain::{Automaton, AutomatonError};

pub const DEFAULT_SIZE: i64 = 50;
pub const DEFAULT_SPEED_MS: u64 = 200;
pub const DEFAULT_WINDOW: u32 = 800;

#[derive(Parser, Debug, Clone)]
#[command(name = "bounded_life", version, about = "Conway's Game of Life on a bounded grid")]
pub struct Args {
    /// Rows and columns of a square grid
    #[arg(value_name = "SIZE", allow_negative_numbers = true)]
    pub size: Option<i64>,

    /// Milliseconds between generations while running; 0 steps every frame
    #[arg(value_name = "SPEED_MS")]
    pub speed_ms: Option<u64>,

    /// Override the row count
    #[arg(long, allow_negative_numbers = true)]
    pub rows: Option<i64>,

    /// Override the column count
    #[arg(long, allow_negative_numbers = true)]
    pub cols: Option<i64>,

    /// Window side length in pixels
    #[arg(long, default_value_t = DEFAULT_WINDOW)]
    pub window: u32,

    /// Seed the grid at random with this fraction of live cells
    #[arg(long, value_name = "DENSITY")]
    pub random: Option<f64>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error(transparent)]
    Grid(#[from] AutomatonError),

    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("window of {window}px cannot fit {cells} cells across")]
    WindowTooSmall { window: u32, cells: usize },

    #[error("random density {0} is not in [0, 1]")]
    Density(f64),
}

/// Validated settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub rows: usize,
    pub cols: usize,
    pub step: Duration,
    pub window: u32,
    pub density: Option<f64>,
}

impl Settings {
    /// Pixel side of one cell, sized so the longer grid side fits the window
    pub fn cell_size(&self) -> f32 {
        (self.window as usize / self.rows.max(self.cols).max(1)) as f32
    }
}

impl TryFrom<Args> for Settings {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let size = args.size.unwrap_or(DEFAULT_SIZE);
        let (rows, cols) = Automaton::validate_dimensions(
            args.rows.unwrap_or(size),
            args.cols.unwrap_or(size),
        )?;

        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }

        let speed_ms = args.speed_ms.unwrap_or(DEFAULT_SPEED_MS);

        let widest = rows.max(cols);
        if (args.window as usize) < widest {
            return Err(ConfigError::WindowTooSmall { window: args.window, cells: widest });
        }

        if let Some(density) = args.random {
            if !(0.0..=1.0).contains(&density) {
                return Err(ConfigError::Density(density));
            }
        }

        Ok(Self {
            rows,
            cols,
            step: Duration::from_millis(speed_ms),
            window: args.window,
            density: args.random,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Settings, ConfigError> {
        let args = Args::try_parse_from(std::iter::once("bounded_life").chain(argv.iter().copied()))
            .expect("arguments should parse");
        Settings::try_from(args)
    }

    #[test]
    fn test_defaults() {
        let settings = parse(&[]).unwrap();
        assert_eq!((settings.rows, settings.cols), (50, 50));
        assert_eq!(settings.step, Duration::from_millis(200));
        assert_eq!(settings.window, 800);
        assert_eq!(settings.cell_size(), 16.0);
        assert_eq!(settings.density, None);
    }

    #[test]
    fn test_positional_size_and_speed() {
        let settings = parse(&["80", "50"]).unwrap();
        assert_eq!((settings.rows, settings.cols), (80, 80));
        assert_eq!(settings.step, Duration::from_millis(50));
        assert_eq!(settings.cell_size(), 10.0);
    }

    #[test]
    fn test_rows_cols_override() {
        let settings = parse(&["--rows", "20", "--cols", "40"]).unwrap();
        assert_eq!((settings.rows, settings.cols), (20, 40));
        assert_eq!(settings.cell_size(), 20.0);
    }

    #[test]
    fn test_non_square_grid_fits_window() {
        for argv in [["--rows", "100", "--cols", "10"], ["--rows", "10", "--cols", "100"]] {
            let settings = parse(&argv).unwrap();
            let cell = settings.cell_size();
            assert_eq!(cell, 8.0);
            assert!(settings.rows as f32 * cell <= settings.window as f32);
            assert!(settings.cols as f32 * cell <= settings.window as f32);
        }
    }

    #[test]
    fn test_zero_speed_steps_every_frame() {
        let settings = parse(&["10", "0"]).unwrap();
        assert_eq!(settings.step, Duration::ZERO);
    }

    #[test]
    fn test_negative_size_rejected() {
        assert_eq!(
            parse(&["-3"]),
            Err(ConfigError::Grid(AutomatonError::NegativeDimension { rows: -3, cols: -3 }))
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(parse(&["0"]), Err(ConfigError::EmptyGrid { .. })));
        assert!(matches!(
            parse(&["900"]),
            Err(ConfigError::WindowTooSmall { window: 800, cells: 900 })
        ));
        assert_eq!(parse(&["--random", "1.5"]), Err(ConfigError::Density(1.5)));
    }
}
