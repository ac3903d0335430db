//! Genetic operators
//!
//! The three operators of the simple evolutionary loop:
//!
//! ```text
//! select (tournament) -> mate (two-point crossover) -> mutate (ins/del/sub)
//! ```
//!
//! Operators are free functions over [`crate::message::Message`] and a
//! caller-supplied RNG, so the engine owns the single RNG stream and runs
//! stay reproducible under a fixed seed.

mod crossover;
mod mutation;
mod selection;

pub use crossover::two_point;
pub use mutation::{mutate, MutationRates};
pub use selection::tournament;
