use thiserror::Error;

/// Failure surface of the normalization step.
///
/// Normalization is all-or-nothing: field-level absences degrade to explicit
/// defaults, so the only way it refuses to produce a record is a payload with
/// no usable structure at all.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("malformed analysis response: {0}")]
    MalformedResponse(String),
}

impl NormalizeError {
    pub fn malformed(message: impl Into<String>) -> Self {
        NormalizeError::MalformedResponse(message.into())
    }
}
