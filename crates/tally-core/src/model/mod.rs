//! Resource models served by tally.
//!
//! - `Counter`: a named integer, `{"name": ..., "counter": ...}`.
//! - `Pet`: a named pet record with category, availability, gender and birthday.

pub mod counter;
pub mod pet;

pub use counter::{Counter, CounterChange, CounterRequest};
pub use pet::{Gender, Pet, PetChange, PetFields, PetRequest};
