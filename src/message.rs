//! Message individuals and the evolvable alphabet
//!
//! A `Message` is one candidate string in the population. Characters are
//! restricted to `VALID_CHARS` (uppercase A-Z plus space) so every genetic
//! operator stays closed over the same alphabet.
//!
//! Fitness (Levenshtein distance to the goal) is cached on the individual
//! and invalidated whenever an operator touches it, so unchanged survivors
//! are not re-evaluated.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Legal alphabet: ASCII uppercase letters and space (27 symbols).
pub const VALID_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ ";

/// Default minimum length for randomly initialized individuals.
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Default maximum length for randomly initialized individuals.
pub const DEFAULT_MAX_LENGTH: usize = 30;

/// Draw one random legal character.
pub(crate) fn random_char<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    VALID_CHARS[rng.gen_range(0..VALID_CHARS.len())]
}

/// Validate that `text` is non-empty and drawn entirely from `VALID_CHARS`.
///
/// # Errors
///
/// Returns [`Error::EmptyGoal`] for empty input and
/// [`Error::IllegalCharacter`] naming the first offending character.
pub fn validate_text(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(Error::EmptyGoal);
    }
    for ch in text.chars() {
        if !ch.is_ascii() || !VALID_CHARS.contains(&(ch as u8)) {
            return Err(Error::IllegalCharacter {
                text: text.to_string(),
                character: ch,
            });
        }
    }
    Ok(())
}

/// One candidate string in the population.
///
/// Invariants:
/// - every byte is in [`VALID_CHARS`]
/// - never empty (mutation skips a deletion that would empty it)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    chars: Vec<u8>,
    fitness: Option<u32>,
}

impl Message {
    /// Create a random individual with length drawn uniformly from
    /// `min_length..=max_length`.
    ///
    /// # Panics
    ///
    /// Panics if `min_length` is 0 or greater than `max_length`; callers go
    /// through [`crate::config::EvolveConfig::validate`] first.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R, min_length: usize, max_length: usize) -> Self {
        assert!(min_length >= 1 && min_length <= max_length);
        let length = rng.gen_range(min_length..=max_length);
        let chars = (0..length).map(|_| random_char(rng)).collect();
        Self {
            chars,
            fitness: None,
        }
    }

    /// Create an individual from existing text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is empty or contains a character outside
    /// the legal alphabet.
    pub fn from_text(text: &str) -> Result<Self> {
        validate_text(text)?;
        Ok(Self {
            chars: text.bytes().collect(),
            fitness: None,
        })
    }

    /// The individual's characters.
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Mutable access for genetic operators (crate-internal).
    pub(crate) fn chars_mut(&mut self) -> &mut Vec<u8> {
        &mut self.chars
    }

    /// The individual rendered as text.
    #[must_use]
    pub fn text(&self) -> String {
        // Invariant: chars is always valid ASCII from VALID_CHARS
        String::from_utf8_lossy(&self.chars).into_owned()
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the individual has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Cached fitness (Levenshtein distance to the goal), if current.
    #[must_use]
    pub const fn fitness(&self) -> Option<u32> {
        self.fitness
    }

    /// Whether the cached fitness is current.
    #[must_use]
    pub const fn has_valid_fitness(&self) -> bool {
        self.fitness.is_some()
    }

    /// Record a freshly computed fitness.
    pub fn set_fitness(&mut self, distance: u32) {
        self.fitness = Some(distance);
    }

    /// Mark the cached fitness stale after a genetic operator touched this
    /// individual.
    pub fn invalidate_fitness(&mut self) {
        self.fitness = None;
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}
