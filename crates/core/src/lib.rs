pub mod clock;
pub mod config;
pub mod error;
pub mod output;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{BuildIntelConfig, ConfigError};
pub use error::NormalizeError;
pub use output::schema::ProjectAnalysis;
