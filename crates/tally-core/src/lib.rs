//! tally core: transport-agnostic resource models, error types, and wire rules.
//!
//! This crate defines the resource contracts and the error surface shared by
//! the HTTP server and its tests. It carries no transport or runtime
//! dependencies so the same models can back any store or front end.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `TallyError`/`Result` so a malformed
//! request body can never take the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;
pub mod resource;
pub mod wire;

/// Shared result type.
pub use error::{ClientCode, Result, TallyError};
pub use model::{Counter, CounterChange, Gender, Pet, PetChange, PetFields};
pub use resource::{validate_name, Resource};
