//! Comprehensive property-based tests for criar
//!
//! Following ruchy/trueno/aprender pattern:
//! - Test mathematical invariants (Levenshtein is a metric)
//! - Test data integrity properties (operators stay inside the alphabet)
//! - Run with ProptestConfig::with_cases(100)
//! - Must complete in <30 seconds for pre-commit hook

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use criar::distance::{edit_distance, levenshtein};
use criar::genetic::{mutate, tournament, two_point, MutationRates};
use criar::message::{Message, VALID_CHARS};
use criar::stats::GenerationStats;

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

/// Generate text over the legal alphabet (non-empty)
fn arb_legal_text(max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(0usize..VALID_CHARS.len(), 1..=max_len)
        .prop_map(|indices| indices.iter().map(|&i| VALID_CHARS[i] as char).collect())
}

/// Generate a population of evaluated messages
fn arb_evaluated_population(size: usize) -> impl Strategy<Value = Vec<Message>> {
    proptest::collection::vec((arb_legal_text(12), 0u32..40), 1..=size).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(text, distance)| {
                let mut msg = Message::from_text(&text).unwrap();
                msg.set_fitness(distance);
                msg
            })
            .collect()
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ========================================================================
    // Levenshtein Metric Properties
    // ========================================================================

    /// Property: distance to self is zero
    #[test]
    fn prop_distance_identity(text in arb_legal_text(24)) {
        prop_assert_eq!(edit_distance(&text, &text), 0);
    }

    /// Property: distance is symmetric
    #[test]
    fn prop_distance_symmetry(a in arb_legal_text(24), b in arb_legal_text(24)) {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    /// Property: triangle inequality
    #[test]
    fn prop_distance_triangle(
        a in arb_legal_text(16),
        b in arb_legal_text(16),
        c in arb_legal_text(16)
    ) {
        let ab = edit_distance(&a, &b);
        let bc = edit_distance(&b, &c);
        let ac = edit_distance(&a, &c);
        prop_assert!(ac <= ab + bc, "d(a,c)={ac} > d(a,b)+d(b,c)={}", ab + bc);
    }

    /// Property: distance bounded by length difference and max length
    #[test]
    fn prop_distance_bounds(a in arb_legal_text(24), b in arb_legal_text(24)) {
        let d = levenshtein(a.as_bytes(), b.as_bytes());
        let len_a = u32::try_from(a.len()).unwrap();
        let len_b = u32::try_from(b.len()).unwrap();
        prop_assert!(d >= len_a.abs_diff(len_b));
        prop_assert!(d <= len_a.max(len_b));
    }

    /// Property: single substitution costs exactly one
    #[test]
    fn prop_distance_single_substitution(
        text in arb_legal_text(24),
        pos_pick in any::<prop::sample::Index>()
    ) {
        let bytes = text.as_bytes();
        let pos = pos_pick.index(bytes.len());
        let mut edited = bytes.to_vec();
        // Pick a different character deterministically
        edited[pos] = if bytes[pos] == b'A' { b'B' } else { b'A' };
        prop_assert_eq!(levenshtein(bytes, &edited), 1);
    }

    // ========================================================================
    // Mutation Properties
    // ========================================================================

    /// Property: mutation output stays inside the alphabet and non-empty
    #[test]
    fn prop_mutation_stays_legal(text in arb_legal_text(24), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut msg = Message::from_text(&text).unwrap();
        let rates = MutationRates { insert: 1.0, delete: 1.0, substitute: 1.0 };
        for _ in 0..16 {
            mutate(&mut msg, &rates, &mut rng);
        }
        prop_assert!(!msg.is_empty());
        prop_assert!(msg.chars().iter().all(|c| VALID_CHARS.contains(c)));
    }

    /// Property: mutation changes length by at most one per sub-operator
    #[test]
    fn prop_mutation_length_delta(text in arb_legal_text(24), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut msg = Message::from_text(&text).unwrap();
        let before = msg.len();
        mutate(&mut msg, &MutationRates::default(), &mut rng);
        let after = msg.len();
        prop_assert!(before.abs_diff(after) <= 1);
    }

    // ========================================================================
    // Crossover Properties
    // ========================================================================

    /// Property: two-point crossover preserves both lengths
    #[test]
    fn prop_crossover_preserves_lengths(
        a in arb_legal_text(24),
        b in arb_legal_text(24),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ma = Message::from_text(&a).unwrap();
        let mut mb = Message::from_text(&b).unwrap();
        two_point(&mut ma, &mut mb, &mut rng);
        prop_assert_eq!(ma.len(), a.len());
        prop_assert_eq!(mb.len(), b.len());
    }

    /// Property: crossover preserves the combined character multiset
    #[test]
    fn prop_crossover_preserves_multiset(
        a in arb_legal_text(24),
        b in arb_legal_text(24),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ma = Message::from_text(&a).unwrap();
        let mut mb = Message::from_text(&b).unwrap();
        let mut before: Vec<u8> = [ma.chars(), mb.chars()].concat();
        two_point(&mut ma, &mut mb, &mut rng);
        let mut after: Vec<u8> = [ma.chars(), mb.chars()].concat();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    // ========================================================================
    // Selection Properties
    // ========================================================================

    /// Property: tournament returns exactly k members of the population
    #[test]
    fn prop_tournament_returns_k_members(
        pop in arb_evaluated_population(20),
        k in 1usize..30,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let selected = tournament(&pop, k, 3.min(pop.len()), &mut rng);
        prop_assert_eq!(selected.len(), k);
        for winner in &selected {
            prop_assert!(pop.contains(winner));
        }
    }

    /// Property: every tournament winner is at least as fit as the
    /// population's worst individual
    #[test]
    fn prop_tournament_never_exceeds_worst(
        pop in arb_evaluated_population(20),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let worst = pop.iter().filter_map(Message::fitness).max().unwrap();
        let selected = tournament(&pop, 10, 3.min(pop.len()), &mut rng);
        for winner in &selected {
            prop_assert!(winner.fitness().unwrap() <= worst);
        }
    }

    // ========================================================================
    // Statistics Properties
    // ========================================================================

    /// Property: min <= avg <= max and std >= 0
    #[test]
    fn prop_stats_ordering(distances in proptest::collection::vec(0u32..100, 1..200)) {
        let stats = GenerationStats::from_distances(0, distances.len(), &distances);
        prop_assert!(f64::from(stats.min) <= stats.avg + 1e-9);
        prop_assert!(stats.avg <= f64::from(stats.max) + 1e-9);
        prop_assert!(stats.std >= 0.0);
    }

    /// Property: constant distances have zero spread
    #[test]
    fn prop_stats_constant_population(value in 0u32..100, n in 1usize..50) {
        let distances = vec![value; n];
        let stats = GenerationStats::from_distances(0, n, &distances);
        prop_assert!((stats.avg - f64::from(value)).abs() < 1e-9);
        prop_assert!(stats.std.abs() < 1e-9);
        prop_assert_eq!(stats.min, value);
        prop_assert_eq!(stats.max, value);
    }
}
