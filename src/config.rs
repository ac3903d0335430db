//! Run configuration for the evolution engine
//!
//! `EvolveConfig` captures everything that determines a run: the goal text,
//! population size and generation budget, operator probabilities, the
//! population-initialization strategy, and an optional RNG seed for
//! reproducibility. A validated config plus a seed fully determines the run.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::genetic::MutationRates;
use crate::message::{validate_text, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};

/// Default population size.
pub const DEFAULT_POPULATION_SIZE: usize = 300;

/// Default generation budget.
pub const DEFAULT_GENERATIONS: u64 = 500;

/// Default crossover (mating) probability.
pub const DEFAULT_CROSSOVER_PROB: f64 = 0.5;

/// Default mutation probability.
pub const DEFAULT_MUTATION_PROB: f64 = 0.2;

/// Default tournament size.
pub const DEFAULT_TOURNAMENT_SIZE: usize = 3;

/// How the initial population is constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum PopulationInit {
    /// Every individual is an independent random string with length drawn
    /// from `min_length..=max_length`.
    Randomized {
        /// Minimum initial length (inclusive).
        min_length: usize,
        /// Maximum initial length (inclusive).
        max_length: usize,
    },
    /// Every individual starts as an identical copy of `text`.
    Uniform {
        /// The shared starting string.
        text: String,
    },
}

impl PopulationInit {
    /// Short label used in results tables and run summaries.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Randomized { .. } => "randomized",
            Self::Uniform { .. } => "uniform",
        }
    }
}

impl Default for PopulationInit {
    fn default() -> Self {
        Self::Randomized {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

/// Full configuration for one evolution run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvolveConfig {
    /// Target phrase the population evolves toward.
    pub goal: String,
    /// Number of individuals per generation.
    pub population_size: usize,
    /// Number of generations to run (generation 0 is the initial population).
    pub generations: u64,
    /// Probability that a consecutive offspring pair is mated.
    pub crossover_prob: f64,
    /// Probability that an offspring is mutated.
    pub mutation_prob: f64,
    /// Tournament size for selection.
    pub tournament_size: usize,
    /// Independent per-operator mutation rates.
    pub mutation_rates: MutationRates,
    /// Initial population strategy.
    pub init: PopulationInit,
    /// RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Stop as soon as a generation reaches distance 0.
    pub halt_on_perfect: bool,
}

impl EvolveConfig {
    /// Create a config with default parameters for the given goal.
    #[must_use]
    pub fn new(goal: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            population_size: DEFAULT_POPULATION_SIZE,
            generations: DEFAULT_GENERATIONS,
            crossover_prob: DEFAULT_CROSSOVER_PROB,
            mutation_prob: DEFAULT_MUTATION_PROB,
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
            mutation_rates: MutationRates::default(),
            init: PopulationInit::default(),
            seed: None,
            halt_on_perfect: false,
        }
    }

    /// Create a builder for the given goal.
    #[must_use]
    pub fn builder(goal: impl Into<String>) -> EvolveConfigBuilder {
        EvolveConfigBuilder::new(goal)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGoal`] / [`Error::IllegalCharacter`] for a bad
    /// goal and [`Error::InvalidConfig`] for out-of-range parameters.
    pub fn validate(&self) -> Result<()> {
        validate_text(&self.goal)?;

        if self.population_size < 2 {
            return Err(Error::InvalidConfig(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        for (name, p) in [
            ("crossover_prob", self.crossover_prob),
            ("mutation_prob", self.mutation_prob),
            ("mutation_rates.insert", self.mutation_rates.insert),
            ("mutation_rates.delete", self.mutation_rates.delete),
            ("mutation_rates.substitute", self.mutation_rates.substitute),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be in [0, 1], got {p}"
                )));
            }
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(Error::InvalidConfig(format!(
                "tournament_size must be in 1..={}, got {}",
                self.population_size, self.tournament_size
            )));
        }
        match &self.init {
            PopulationInit::Randomized {
                min_length,
                max_length,
            } => {
                if *min_length == 0 {
                    return Err(Error::InvalidConfig(
                        "init.min_length must be at least 1".to_string(),
                    ));
                }
                if min_length > max_length {
                    return Err(Error::InvalidConfig(format!(
                        "init.min_length ({min_length}) exceeds init.max_length ({max_length})"
                    )));
                }
            }
            PopulationInit::Uniform { text } => validate_text(text)?,
        }
        Ok(())
    }
}

/// Builder for `EvolveConfig`.
#[derive(Debug)]
pub struct EvolveConfigBuilder {
    config: EvolveConfig,
}

impl EvolveConfigBuilder {
    /// Create a new builder with default parameters.
    #[must_use]
    pub fn new(goal: impl Into<String>) -> Self {
        Self {
            config: EvolveConfig::new(goal),
        }
    }

    /// Set the population size.
    #[must_use]
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the generation budget.
    #[must_use]
    pub fn generations(mut self, generations: u64) -> Self {
        self.config.generations = generations;
        self
    }

    /// Set the crossover probability.
    #[must_use]
    pub fn crossover_prob(mut self, prob: f64) -> Self {
        self.config.crossover_prob = prob;
        self
    }

    /// Set the mutation probability.
    #[must_use]
    pub fn mutation_prob(mut self, prob: f64) -> Self {
        self.config.mutation_prob = prob;
        self
    }

    /// Set the tournament size.
    #[must_use]
    pub fn tournament_size(mut self, size: usize) -> Self {
        self.config.tournament_size = size;
        self
    }

    /// Set the per-operator mutation rates.
    #[must_use]
    pub fn mutation_rates(mut self, rates: MutationRates) -> Self {
        self.config.mutation_rates = rates;
        self
    }

    /// Set the population-initialization strategy.
    #[must_use]
    pub fn init(mut self, init: PopulationInit) -> Self {
        self.config.init = init;
        self
    }

    /// Seed the RNG for a reproducible run.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Stop early once distance 0 is reached.
    #[must_use]
    pub fn halt_on_perfect(mut self, halt: bool) -> Self {
        self.config.halt_on_perfect = halt;
        self
    }

    /// Validate and build the config.
    ///
    /// # Errors
    ///
    /// Returns the first validation error, if any.
    pub fn build(self) -> Result<EvolveConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_run() {
        let config = EvolveConfig::new("SKYNET IS NOW ONLINE");
        assert_eq!(config.population_size, 300);
        assert_eq!(config.generations, 500);
        assert!((config.crossover_prob - 0.5).abs() < f64::EPSILON);
        assert!((config.mutation_prob - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.tournament_size, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let config = EvolveConfig::builder("HELLO")
            .population_size(50)
            .generations(100)
            .seed(4)
            .halt_on_perfect(true)
            .build()
            .unwrap();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.generations, 100);
        assert_eq!(config.seed, Some(4));
        assert!(config.halt_on_perfect);
    }

    #[test]
    fn test_rejects_illegal_goal() {
        let err = EvolveConfig::builder("hello").build().unwrap_err();
        assert!(matches!(err, Error::IllegalCharacter { .. }));
    }

    #[test]
    fn test_rejects_bad_probability() {
        let err = EvolveConfig::builder("HELLO")
            .crossover_prob(1.5)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_oversized_tournament() {
        let err = EvolveConfig::builder("HELLO")
            .population_size(2)
            .tournament_size(3)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_uniform_init_validated() {
        let err = EvolveConfig::builder("HELLO")
            .init(PopulationInit::Uniform {
                text: "bad".to_string(),
            })
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::IllegalCharacter { .. }));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = EvolveConfig::builder("HELLO WORLD")
            .seed(7)
            .build()
            .unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let back: EvolveConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
