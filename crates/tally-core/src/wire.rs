//! JSON wire rules (request bodies and error bodies).
//!
//! Decoding order for a request body:
//! 1. An empty (or whitespace-only) body is "no body".
//! 2. A present body must declare `application/json`, otherwise 415.
//! 3. The JSON must match the target type, otherwise 400.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};

/// The only media type accepted for request bodies.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// True when the `Content-Type` value names JSON. Parameters are ignored.
pub fn is_json(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(|mt| mt.trim().eq_ignore_ascii_case(JSON_MEDIA_TYPE))
        .unwrap_or(false)
}

/// Decode a body that may be absent.
pub fn decode_optional<T: DeserializeOwned>(
    content_type: Option<&str>,
    body: &[u8],
) -> Result<Option<T>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    if !is_json(content_type) {
        tracing::debug!(content_type = ?content_type, "rejecting non-json body");
        return Err(TallyError::UnsupportedMediaType(format!(
            "Content-Type must be {JSON_MEDIA_TYPE}"
        )));
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| TallyError::BadRequest(format!("invalid body: {e}")))
}

/// Decode a body that must be present.
pub fn decode_required<T: DeserializeOwned>(content_type: Option<&str>, body: &[u8]) -> Result<T> {
    decode_optional(content_type, body)?.ok_or_else(|| {
        TallyError::BadRequest("request body contained no data".into())
    })
}

/// JSON error body: `{"status": 404, "error": "NOT_FOUND", "message": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub message: String,
}

impl From<&TallyError> for ErrorBody {
    fn from(e: &TallyError) -> Self {
        let code = e.client_code();
        Self {
            status: code.http_status(),
            error: code.as_str().to_string(),
            message: e.to_string(),
        }
    }
}
