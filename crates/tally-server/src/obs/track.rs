//! Per-request span, access log and request metrics.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;

use crate::app_state::AppState;

/// Route-layer middleware. Runs after routing, so `MatchedPath` is the
/// route template (`/counters/:name`) and label cardinality stays bounded.
pub async fn track(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let path = req.uri().path().to_owned();

    let span = tracing::info_span!("request", %method, %route);
    let started = Instant::now();
    let resp = next.run(req).instrument(span.clone()).await;
    let elapsed = started.elapsed();
    let micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);

    let status = resp.status();
    let m = state.metrics();
    m.requests.inc(&[
        ("method", method.as_str()),
        ("route", route.as_str()),
        ("status", status.as_str()),
    ]);
    m.request_duration
        .observe(&[("method", method.as_str()), ("route", route.as_str())], elapsed);

    span.in_scope(|| {
        if status.is_server_error() {
            tracing::error!(%path, status = status.as_u16(), micros, "request failed");
        } else {
            tracing::info!(%path, status = status.as_u16(), micros, "request");
        }
    });

    resp
}
