//! Request extractors whose rejections use the JSON error body.
//!
//! axum's own `Path` and `Bytes` rejections answer in plain text; these
//! wrappers route them through `ApiError` instead.

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, StatusCode},
};
use bytes::Bytes;

use tally_core::error::TallyError;
use tally_core::resource::validate_name;

use super::ApiError;
use crate::app_state::AppState;

/// The `:name` path segment, decoded and checked against the name rules.
#[derive(Debug, Clone)]
pub struct ItemName(pub String);

#[async_trait]
impl FromRequestParts<AppState> for ItemName {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let Path(name) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| TallyError::BadRequest(format!("invalid name: {}", e.body_text())))?;
        validate_name(&name, state.cfg().server.max_name_len)?;
        Ok(Self(name))
    }
}

/// The raw request body, limited by `DefaultBodyLimit`.
#[derive(Debug, Clone)]
pub struct RawBody(pub Bytes);

#[async_trait]
impl<S: Send + Sync> FromRequest<S> for RawBody {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, ApiError> {
        Bytes::from_request(req, state).await.map(Self).map_err(|e| {
            let err = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                TallyError::PayloadTooLarge(e.body_text())
            } else {
                TallyError::BadRequest(e.body_text())
            };
            ApiError(err)
        })
    }
}
