//! CRUD handlers generic over the resource kind.
//!
//! | Method | Path            | Success        | Failure            |
//! |--------|-----------------|----------------|--------------------|
//! | POST   | `{PATH}/{name}` | 201 + Location | 409, 400, 413, 415 |
//! | GET    | `{PATH}/{name}` | 200            | 404                |
//! | PUT    | `{PATH}/{name}` | 200            | 404, 400, 413, 415 |
//! | DELETE | `{PATH}/{name}` | 204            | none               |
//! | GET    | `{PATH}`        | 200, by name   | none               |

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use tally_core::error::{Result, TallyError};
use tally_core::resource::Resource;

use super::{ApiResult, ItemName, RawBody};
use crate::app_state::AppState;
use crate::store::ResourceStore;

/// A resource kind exposed as an HTTP collection.
pub trait Collection: Resource + Serialize {
    /// Collection path, e.g. `/counters`.
    const PATH: &'static str;

    fn store(state: &AppState) -> &dyn ResourceStore<Self>;

    /// Build the resource to insert from a `POST` body.
    fn decode_create(name: &str, content_type: Option<&str>, body: &[u8]) -> Result<Self>;

    /// Build the change to apply from a `PUT` body.
    fn decode_update(name: &str, content_type: Option<&str>, body: &[u8]) -> Result<Self::Change>;

    /// Route template for a single resource, e.g. `/counters/:name`.
    fn item_route() -> String {
        format!("{}/:name", Self::PATH)
    }

    fn location(name: &str) -> String {
        format!("{}/{}", Self::PATH, name)
    }
}

pub(crate) fn content_type(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
}

pub async fn create<R: Collection>(
    State(state): State<AppState>,
    ItemName(name): ItemName,
    headers: HeaderMap,
    RawBody(body): RawBody,
) -> ApiResult<Response> {
    let resource = R::decode_create(&name, content_type(&headers), &body)?;

    let created = match R::store(&state).create(resource).await {
        Ok(r) => r,
        Err(e) => {
            if matches!(e, TallyError::Conflict(_)) {
                state.metrics().store_conflicts.inc(&[("kind", R::KIND)]);
            }
            return Err(e.into());
        }
    };
    tracing::info!(kind = R::KIND, %name, "created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, R::location(&name))],
        Json(created),
    )
        .into_response())
}

pub async fn read<R: Collection>(
    State(state): State<AppState>,
    ItemName(name): ItemName,
) -> ApiResult<Json<R>> {
    Ok(Json(R::store(&state).read(&name).await?))
}

pub async fn update<R: Collection>(
    State(state): State<AppState>,
    ItemName(name): ItemName,
    headers: HeaderMap,
    RawBody(body): RawBody,
) -> ApiResult<Json<R>> {
    let change = R::decode_update(&name, content_type(&headers), &body)?;
    let updated = R::store(&state).update(&name, change).await?;
    tracing::info!(kind = R::KIND, %name, "updated");
    Ok(Json(updated))
}

/// Idempotent: deleting an absent resource is still 204.
pub async fn delete<R: Collection>(
    State(state): State<AppState>,
    ItemName(name): ItemName,
) -> ApiResult<StatusCode> {
    let removed = R::store(&state).delete(&name).await?;
    tracing::info!(kind = R::KIND, %name, removed, "delete complete");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list<R: Collection>(State(state): State<AppState>) -> ApiResult<Json<Vec<R>>> {
    let all = R::store(&state).list().await?;
    tracing::debug!(kind = R::KIND, count = all.len(), "listing");
    Ok(Json(all))
}
