mod cell;
mod automaton;
mod error;
mod patterns;

pub use cell::Cell;
pub use automaton::Automaton;
pub use error::{AutomatonError, Result};
pub use patterns::{Pattern, presets};
