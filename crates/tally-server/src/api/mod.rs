//! HTTP controller.
//!
//! `collection` holds the CRUD handlers shared by every resource kind;
//! `counters` and `pets` plug their kind into it (and add any extra actions).
//! `extract` turns path and body rejections into JSON errors.

pub mod collection;
pub mod counters;
pub mod error;
pub mod extract;
pub mod pets;

pub use collection::Collection;
pub use error::{ApiError, ApiResult};
pub use extract::{ItemName, RawBody};
