//! Tournament selection
//!
//! Each of the `k` winners is the lowest-distance individual among
//! `tournament_size` aspirants sampled with replacement, so selection
//! pressure is set by the tournament size alone.

use rand::Rng;

use crate::message::Message;

/// Select `k` individuals from `population` by tournament.
///
/// Winners are cloned; the population is left untouched.
///
/// # Panics
///
/// Panics if the population is empty, `tournament_size` is 0, or any
/// individual carries a stale fitness. The engine evaluates the whole
/// population before selecting.
#[must_use]
pub fn tournament<R: Rng + ?Sized>(
    population: &[Message],
    k: usize,
    tournament_size: usize,
    rng: &mut R,
) -> Vec<Message> {
    assert!(!population.is_empty());
    assert!(tournament_size >= 1);

    (0..k)
        .map(|_| {
            let mut best: Option<(&Message, u32)> = None;
            for _ in 0..tournament_size {
                let aspirant = &population[rng.gen_range(0..population.len())];
                let distance = aspirant
                    .fitness()
                    .expect("tournament requires evaluated individuals");
                if best.map_or(true, |(_, d)| distance < d) {
                    best = Some((aspirant, distance));
                }
            }
            best.expect("tournament_size >= 1").0.clone()
        })
        .collect()
}
