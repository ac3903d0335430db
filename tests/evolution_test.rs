//! Integration test for the evolution engine
//!
//! Tests the complete pipeline:
//! 1. Build a validated config
//! 2. Run the engine
//! 3. Check the logbook and outcome against what a seeded run guarantees

use criar::config::{EvolveConfig, PopulationInit};
use criar::engine::Evolution;

fn seeded_config(goal: &str, generations: u64, seed: u64) -> EvolveConfig {
    EvolveConfig::builder(goal)
        .population_size(50)
        .generations(generations)
        .seed(seed)
        .build()
        .expect("valid config")
}

#[test]
fn test_full_run_produces_complete_logbook() {
    let mut engine = Evolution::new(seeded_config("HELLO WORLD", 30, 4)).unwrap();
    let outcome = engine.run().unwrap();

    // generation 0 plus one row per generation
    assert_eq!(outcome.logbook.len(), 31);
    let rows = outcome.logbook.rows();
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.generation, i as u64, "generations must be contiguous");
        assert!(f64::from(row.min) <= row.avg + 1e-9);
        assert!(row.avg <= f64::from(row.max) + 1e-9);
    }
    assert_eq!(rows[0].evaluations, 50, "initial population fully evaluated");
}

#[test]
fn test_same_seed_same_history() {
    let out_a = Evolution::new(seeded_config("SKYNET IS NOW ONLINE", 25, 4))
        .unwrap()
        .run()
        .unwrap();
    let out_b = Evolution::new(seeded_config("SKYNET IS NOW ONLINE", 25, 4))
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(out_a.logbook, out_b.logbook);
    assert_eq!(out_a.best.text(), out_b.best.text());
    assert_eq!(out_a.best_distance, out_b.best_distance);
}

#[test]
fn test_different_seeds_diverge() {
    let out_a = Evolution::new(seeded_config("SKYNET IS NOW ONLINE", 25, 4))
        .unwrap()
        .run()
        .unwrap();
    let out_b = Evolution::new(seeded_config("SKYNET IS NOW ONLINE", 25, 5))
        .unwrap()
        .run()
        .unwrap();

    // Distinct RNG streams should produce distinct histories
    assert_ne!(out_a.logbook, out_b.logbook);
}

#[test]
fn test_selection_pressure_improves_average() {
    // Over a reasonable budget the population average must drop well below
    // the initial random level
    let mut engine = Evolution::new(
        EvolveConfig::builder("HELLO")
            .population_size(100)
            .generations(50)
            .seed(4)
            .build()
            .unwrap(),
    )
    .unwrap();
    let outcome = engine.run().unwrap();

    let first = outcome.logbook.rows()[0].avg;
    let last = outcome.logbook.last().unwrap().avg;
    assert!(
        last < first,
        "average distance should improve: gen0 {first} vs final {last}"
    );
}

#[test]
fn test_uniform_population_starts_degenerate() {
    let config = EvolveConfig::builder("HELLO WORLD")
        .population_size(40)
        .generations(5)
        .init(PopulationInit::Uniform {
            text: "AAAA BBBB".to_string(),
        })
        .seed(4)
        .build()
        .unwrap();
    let outcome = Evolution::new(config).unwrap().run().unwrap();

    let gen0 = outcome.logbook.rows()[0];
    assert_eq!(gen0.min, gen0.max, "identical individuals, identical distance");
    assert!(gen0.std.abs() < f64::EPSILON);
}

#[test]
fn test_outcome_best_is_member_of_final_population_stats() {
    let mut engine = Evolution::new(seeded_config("HELLO", 20, 7)).unwrap();
    let outcome = engine.run().unwrap();
    let last = outcome.logbook.last().unwrap();
    assert_eq!(outcome.best_distance, last.min);
    assert_eq!(
        outcome.best_distance,
        criar::distance::edit_distance(&outcome.best.text(), "HELLO")
    );
}

#[test]
fn test_halt_on_perfect_short_circuits() {
    let config = EvolveConfig::builder("HELLO")
        .population_size(20)
        .generations(1000)
        .init(PopulationInit::Uniform {
            text: "HELLO".to_string(),
        })
        .halt_on_perfect(true)
        .seed(4)
        .build()
        .unwrap();
    let outcome = Evolution::new(config).unwrap().run().unwrap();

    assert_eq!(outcome.converged_at, Some(0));
    assert!(outcome.logbook.len() < 1000, "must not run the full budget");
    assert_eq!(outcome.best_distance, 0);
    assert_eq!(outcome.best.text(), "HELLO");
}

#[test]
fn test_rejects_malformed_goal() {
    let config = EvolveConfig::builder("hello, world!").build();
    assert!(config.is_err());

    // validation also guards Evolution::new directly
    let mut raw = EvolveConfig::new("HELLO");
    raw.goal = "lower".to_string();
    assert!(Evolution::new(raw).is_err());
}
