use std::time::Duration;

use crate::domain::Automaton;
use super::Settings;

/// Grids at least this large are advanced with the rayon update
const PARALLEL_THRESHOLD: usize = 100 * 100;

/// Fraction of live cells used by the randomize action
pub const RANDOM_DENSITY: f64 = 0.3;

/// Session drives an automaton from the frame loop.
/// Run/pause lives here, not in the automaton.
pub struct Session {
    pub automaton: Automaton,
    pub is_running: bool,
    pub update_timer: f32,
    pub update_interval: f32,
}

impl Session {
    /// Create a paused session that steps every `interval` while running
    pub fn new(automaton: Automaton, interval: Duration) -> Self {
        Self {
            automaton,
            is_running: false,
            update_timer: 0.0,
            update_interval: interval.as_secs_f32(),
        }
    }

    /// Build the initial session from validated settings
    pub fn from_settings(settings: &Settings) -> Self {
        let mut automaton = Automaton::new(settings.rows, settings.cols);
        if let Some(density) = settings.density {
            automaton.randomize(&mut rand::rng(), density);
        }
        Self::new(automaton, settings.step)
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self.update_timer = 0.0;
        tracing::debug!(running = self.is_running, "toggled run state");
        self
    }

    /// Kill every cell and pause
    pub fn clear(mut self) -> Self {
        self.automaton.clear();
        self.is_running = false;
        self
    }

    /// Randomize the grid and pause
    pub fn randomize(mut self) -> Self {
        self.automaton.randomize(&mut rand::rng(), RANDOM_DENSITY);
        self.is_running = false;
        self
    }

    /// Advance a single generation while paused
    pub fn step(mut self) -> Self {
        if !self.is_running {
            self.advance();
        }
        self
    }

    /// Update simulation by one frame of `delta_time` seconds
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        if self.update_timer >= self.update_interval {
            self.advance();
            self.update_timer = 0.0;
        }

        self
    }

    fn advance(&mut self) {
        let (rows, cols) = self.automaton.dimensions();
        if rows * cols >= PARALLEL_THRESHOLD {
            self.automaton.update_parallel();
        } else {
            self.automaton.update();
        }
    }
}
