use super::{Automaton, Cell};

/// A small figure of live cells that can be stamped onto the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<(usize, usize)>, // (row, col) offsets of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(r, _)| *r).max().map_or(0, |r| r + 1);
        let cols = cells.iter().map(|(_, c)| *c).max().map_or(0, |c| c + 1);
        Self { name, description, rows, cols, cells }
    }

    /// Stamp the pattern with its top-left corner at (row, col).
    /// Cells falling past the grid edge are dropped.
    pub fn place_on(&self, automaton: &mut Automaton, row: usize, col: usize) {
        for &(dr, dc) in &self.cells {
            if let (Some(r), Some(c)) = (row.checked_add(dr), col.checked_add(dc)) {
                automaton.set(r, c, Cell::Alive);
            }
        }
    }
}

/// Classic Game of Life patterns
pub mod presets {
    use super::*;

    /// Block - 2x2 still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator, horizontal phase
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (0, 1), (0, 2)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Glider - moves one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider()]
    }
}
