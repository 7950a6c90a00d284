//! Locates the aggregation content inside the backend's response envelope.
//!
//! The backend answers in one of two shapes: a cache hit is relayed as the
//! agent event map (`data.CACHED_RESULT.content`), a fresh analysis comes back
//! flattened (`data` is the content itself). The cached wrapper wins when both
//! could apply.

use buildintel_core::NormalizeError;
use serde_json::Value;
use tracing::debug;

use super::value::get;

pub fn unwrap_content(raw: &Value) -> Result<&Value, NormalizeError> {
    if let Some(content) = get(raw, &["data", "CACHED_RESULT", "content"]) {
        if content.is_object() {
            debug!("unwrapped cached-result envelope");
            return Ok(content);
        }
    }

    match raw.get("data") {
        Some(data) if data.is_object() => Ok(data),
        _ => Err(NormalizeError::malformed(
            "no content object at data.CACHED_RESULT.content or data",
        )),
    }
}
