//! Tests for the top-level config builder API

use criar::config::{EvolveConfig, PopulationInit};
use criar::genetic::MutationRates;

#[test]
fn test_config_builder() {
    // Test EvolveConfig::builder() returns a builder
    let config = EvolveConfig::builder("HELLO").build();
    assert!(config.is_ok(), "default config should validate");
}

#[test]
fn test_config_builder_chain() {
    let config = EvolveConfig::builder("HELLO WORLD")
        .population_size(120)
        .generations(250)
        .crossover_prob(0.6)
        .mutation_prob(0.3)
        .tournament_size(5)
        .mutation_rates(MutationRates {
            insert: 0.1,
            delete: 0.1,
            substitute: 0.1,
        })
        .init(PopulationInit::Randomized {
            min_length: 2,
            max_length: 40,
        })
        .seed(4)
        .halt_on_perfect(true)
        .build()
        .unwrap();

    assert_eq!(config.goal, "HELLO WORLD");
    assert_eq!(config.population_size, 120);
    assert_eq!(config.generations, 250);
    assert_eq!(config.tournament_size, 5);
    assert_eq!(config.seed, Some(4));
    assert!(config.halt_on_perfect);
}

#[test]
fn test_config_defaults() {
    let config = EvolveConfig::new("HELLO");
    assert_eq!(config.population_size, 300);
    assert_eq!(config.generations, 500);
    assert_eq!(config.tournament_size, 3);
    assert_eq!(config.seed, None);
    assert!(!config.halt_on_perfect);
    assert_eq!(config.init.label(), "randomized");
}

#[test]
fn test_config_rejects_degenerate_population() {
    assert!(EvolveConfig::builder("HELLO")
        .population_size(1)
        .build()
        .is_err());
}

#[test]
fn test_config_rejects_probability_out_of_range() {
    assert!(EvolveConfig::builder("HELLO")
        .mutation_prob(-0.1)
        .build()
        .is_err());
    assert!(EvolveConfig::builder("HELLO")
        .crossover_prob(1.01)
        .build()
        .is_err());
}

#[test]
fn test_config_rejects_inverted_lengths() {
    assert!(EvolveConfig::builder("HELLO")
        .init(PopulationInit::Randomized {
            min_length: 10,
            max_length: 4,
        })
        .build()
        .is_err());
}

#[test]
fn test_init_labels() {
    assert_eq!(PopulationInit::default().label(), "randomized");
    assert_eq!(
        PopulationInit::Uniform {
            text: "AAAA".to_string()
        }
        .label(),
        "uniform"
    );
}

#[test]
fn test_init_serde_tagging() {
    let init = PopulationInit::Uniform {
        text: "AAAA".to_string(),
    };
    let json = serde_json::to_string(&init).unwrap();
    assert!(json.contains("\"strategy\":\"uniform\""));
    let back: PopulationInit = serde_json::from_str(&json).unwrap();
    assert_eq!(init, back);
}
