pub mod client;
pub mod error;

pub use client::{AnalysisBackend, HttpAnalysisClient};
pub use error::ClientError;
