// Domain layer - automaton core
pub mod domain;

// Application layer - run/pause session and configuration
pub mod application;

// Infrastructure layer - rendering and input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Automaton, AutomatonError, Cell, Pattern, presets};
pub use application::{Args, ConfigError, Session, Settings};
