//! tally server library entry.
//!
//! This crate wires the stores, the HTTP controller, the route table and the
//! ops endpoints into one axum service. It is consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
