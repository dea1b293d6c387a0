//! Lightweight in-process metrics and per-request tracing.
//!
//! Metrics are stored as atomics in `DashMap`s and rendered by the `/metrics`
//! handler in Prometheus text format. `track` is the route-layer middleware
//! that feeds them.

pub mod metrics;
pub mod track;

pub use metrics::HttpMetrics;
