use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use tally_core::wire::ErrorBody;
use tally_core::TallyError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// `TallyError` as an HTTP response: mapped status plus a JSON error body.
#[derive(Debug)]
pub struct ApiError(pub TallyError);

impl From<TallyError> for ApiError {
    fn from(e: TallyError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::info!(code = self.0.client_code().as_str(), error = %self.0, "request rejected");
        }
        (status, Json(ErrorBody::from(&self.0))).into_response()
    }
}
