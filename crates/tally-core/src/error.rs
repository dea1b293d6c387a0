//! Shared error type across tally crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed body or name.
    BadRequest,
    /// No resource with that name.
    NotFound,
    /// Method not wired for the path.
    MethodNotAllowed,
    /// Name already taken, or the resource is in the wrong state.
    Conflict,
    /// Body exceeds the configured limit.
    PayloadTooLarge,
    /// Body is not JSON.
    UnsupportedMediaType,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ClientCode::Conflict => "CONFLICT",
            ClientCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ClientCode::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// HTTP status code carried by responses with this code.
    pub fn http_status(self) -> u16 {
        match self {
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => 400,
            ClientCode::NotFound => 404,
            ClientCode::MethodNotAllowed => 405,
            ClientCode::Conflict => 409,
            ClientCode::PayloadTooLarge => 413,
            ClientCode::UnsupportedMediaType => 415,
            ClientCode::Internal => 500,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    MethodNotAllowed(String),
    #[error("{0}")]
    Conflict(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("{0}")]
    UnsupportedMediaType(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl TallyError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TallyError::BadRequest(_) => ClientCode::BadRequest,
            TallyError::NotFound(_) => ClientCode::NotFound,
            TallyError::MethodNotAllowed(_) => ClientCode::MethodNotAllowed,
            TallyError::Conflict(_) => ClientCode::Conflict,
            TallyError::PayloadTooLarge(_) => ClientCode::PayloadTooLarge,
            TallyError::UnsupportedMediaType(_) => ClientCode::UnsupportedMediaType,
            TallyError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            TallyError::Internal(_) => ClientCode::Internal,
        }
    }

    pub fn http_status(&self) -> u16 {
        self.client_code().http_status()
    }
}
