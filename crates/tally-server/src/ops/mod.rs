//! Operational HTTP endpoints.
//!
//! - `/`        : service index
//! - `/health`  : liveness
//! - `/readyz`  : readiness (503 when draining)
//! - `/metrics` : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use tally_core::{Counter, Pet};

use crate::api::Collection;
use crate::app_state::AppState;

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    tracing::debug!("request for root url");
    Json(json!({
        "name": state.cfg().service.name,
        "version": env!("CARGO_PKG_VERSION"),
        "paths": [Counter::PATH, Pet::PATH],
    }))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": 200, "message": "Healthy" }))
}

pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    if state.is_draining() {
        (StatusCode::SERVICE_UNAVAILABLE, "draining")
    } else {
        (StatusCode::OK, "ready")
    }
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        state.render_metrics(),
    )
        .into_response()
}
