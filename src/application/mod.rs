mod session;
mod settings;

pub use session::{Session, RANDOM_DENSITY};
pub use settings::{Args, ConfigError, Settings};
