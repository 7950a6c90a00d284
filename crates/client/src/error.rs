use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned status {code}: {message}")]
    Status { code: u16, message: String },

    #[error("Project '{0}' was not found by the backend")]
    NotFound(String),

    #[error("Invalid analyze endpoint '{0}' (is BUILDINTEL_API_URL set?)")]
    InvalidEndpoint(String),
}
