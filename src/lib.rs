//! # Criar: Evolutionary String Search Engine
//!
//! Criar evolves a population of candidate strings toward a goal phrase
//! with a simple evolutionary loop: tournament selection, two-point
//! crossover, and insert/delete/substitute mutation, scored by Levenshtein
//! distance. Runs are reproducible under a fixed seed, per-generation
//! statistics land in a logbook, and sweeps across generation budgets and
//! population-initialization strategies are tracked through the experiment
//! schema.
//!
//! ## Design Principles (Toyota Way Aligned)
//!
//! - **Muda elimination**: fitness caching skips re-evaluating untouched survivors
//! - **Poka-Yoke safety**: configs are validated before an engine exists
//! - **Genchi Genbutsu**: every generation is measured (avg/std/min/max), not guessed
//! - **Jidoka**: seeded runs reproduce the entire logbook bit-for-bit
//!
//! ## Example Usage
//!
//! ```rust
//! use criar::config::EvolveConfig;
//! use criar::engine::Evolution;
//!
//! let config = EvolveConfig::builder("HELLO WORLD")
//!     .population_size(60)
//!     .generations(40)
//!     .seed(4)
//!     .build()?;
//!
//! let outcome = Evolution::new(config)?.run()?;
//! println!("best: {} (distance {})", outcome.best, outcome.best_distance);
//! # Ok::<(), criar::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod distance;
pub mod engine;
pub mod error;
pub mod experiment;
pub mod genetic;
pub mod message;
pub mod stats;
pub mod sweep;

pub use error::{Error, Result};
