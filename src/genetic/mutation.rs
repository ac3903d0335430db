//! Mutation operator - insertion, deletion, substitution
//!
//! Each sub-operator fires independently with its own probability, so a
//! single call can apply zero, one, or all three edits.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::message::{random_char, Message};

/// Default probability for each mutation sub-operator.
pub const DEFAULT_RATE: f64 = 0.05;

/// Independent probabilities for the three mutation edits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MutationRates {
    /// Probability of inserting a random legal character.
    pub insert: f64,
    /// Probability of deleting one character.
    pub delete: f64,
    /// Probability of substituting one character.
    pub substitute: f64,
}

impl Default for MutationRates {
    fn default() -> Self {
        Self {
            insert: DEFAULT_RATE,
            delete: DEFAULT_RATE,
            substitute: DEFAULT_RATE,
        }
    }
}

/// Mutate `message` in place.
///
/// Insertion picks a uniform position in `0..len` (never appends past the
/// last character), deletion removes a uniform position, substitution
/// overwrites a uniform position with a random legal character. Deletion is
/// skipped when it would leave the message empty.
pub fn mutate<R: Rng + ?Sized>(message: &mut Message, rates: &MutationRates, rng: &mut R) {
    if rng.gen::<f64>() < rates.insert {
        let chars = message.chars_mut();
        if !chars.is_empty() {
            let i = rng.gen_range(0..chars.len());
            let ch = random_char(rng);
            chars.insert(i, ch);
        }
    }
    if rng.gen::<f64>() < rates.delete {
        let chars = message.chars_mut();
        if chars.len() > 1 {
            let i = rng.gen_range(0..chars.len());
            chars.remove(i);
        }
    }
    if rng.gen::<f64>() < rates.substitute {
        let chars = message.chars_mut();
        if !chars.is_empty() {
            let i = rng.gen_range(0..chars.len());
            chars[i] = random_char(rng);
        }
    }
}
