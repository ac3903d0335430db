//! Evolution engine - the simple EA loop
//!
//! ```text
//! init population -> evaluate -> [select -> mate -> mutate -> evaluate]* -> outcome
//! ```
//!
//! One generation: tournament-select `population_size` parents, pair off
//! consecutive offspring for two-point crossover (probability
//! `crossover_prob`), mutate each offspring (probability `mutation_prob`),
//! then re-evaluate every individual whose fitness a variation operator
//! invalidated. Statistics are recorded for the initial population
//! (generation 0) and after every generation.
//!
//! The engine owns a single `StdRng` stream, so a seeded config reproduces
//! the entire run, logbook included.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::config::{EvolveConfig, PopulationInit};
use crate::distance::levenshtein;
use crate::error::Result;
use crate::genetic::{mutate, tournament, two_point};
use crate::message::Message;
use crate::stats::{GenerationStats, Logbook};

/// Result of one evolution run.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Lowest-distance individual of the final population.
    pub best: Message,
    /// Its distance to the goal.
    pub best_distance: u32,
    /// Per-generation statistics, generation 0 first.
    pub logbook: Logbook,
    /// First generation whose minimum distance reached 0, if any.
    pub converged_at: Option<u64>,
}

/// Evolution engine for one configured run.
#[derive(Debug)]
pub struct Evolution {
    config: EvolveConfig,
    rng: StdRng,
}

impl Evolution {
    /// Create an engine from a validated config.
    ///
    /// # Errors
    ///
    /// Returns the config's validation error, if any.
    pub fn new(config: EvolveConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &EvolveConfig {
        &self.config
    }

    /// Run the evolutionary loop to completion.
    ///
    /// # Errors
    ///
    /// Currently infallible after construction; the `Result` reserves the
    /// signature for persistent-logging backends.
    pub fn run(&mut self) -> Result<Outcome> {
        let goal: Vec<u8> = self.config.goal.bytes().collect();
        let mut population = self.initial_population();

        let mut logbook = Logbook::new();
        let nevals = evaluate(&mut population, &goal);
        logbook.push(record(0, nevals, &population));
        debug_row(logbook.last().expect("row just pushed"));

        for generation in 1..=self.config.generations {
            if self.config.halt_on_perfect && logbook.last().map(|r| r.min) == Some(0) {
                info!(generation = generation - 1, "goal reached, halting early");
                break;
            }

            let mut offspring = tournament(
                &population,
                self.config.population_size,
                self.config.tournament_size,
                &mut self.rng,
            );

            // Variation: mate consecutive pairs, then mutate individually.
            // Both operators invalidate fitness unconditionally so nevals
            // counts every touched individual.
            for i in (1..offspring.len()).step_by(2) {
                if self.rng.gen::<f64>() < self.config.crossover_prob {
                    let (left, right) = offspring.split_at_mut(i);
                    two_point(&mut left[i - 1], &mut right[0], &mut self.rng);
                    left[i - 1].invalidate_fitness();
                    right[0].invalidate_fitness();
                }
            }
            for child in &mut offspring {
                if self.rng.gen::<f64>() < self.config.mutation_prob {
                    mutate(child, &self.config.mutation_rates, &mut self.rng);
                    child.invalidate_fitness();
                }
            }

            let nevals = evaluate(&mut offspring, &goal);
            population = offspring;
            logbook.push(record(generation, nevals, &population));
            debug_row(logbook.last().expect("row just pushed"));
        }

        let best = population
            .iter()
            .min_by_key(|m| m.fitness().expect("population fully evaluated"))
            .expect("population is non-empty")
            .clone();
        let best_distance = best.fitness().expect("population fully evaluated");
        let converged_at = logbook.converged_at();

        info!(
            goal = %self.config.goal,
            generations = logbook.len() - 1,
            best = %best,
            best_distance,
            "evolution complete"
        );

        Ok(Outcome {
            best,
            best_distance,
            logbook,
            converged_at,
        })
    }

    fn initial_population(&mut self) -> Vec<Message> {
        match &self.config.init {
            PopulationInit::Randomized {
                min_length,
                max_length,
            } => {
                let (min, max) = (*min_length, *max_length);
                (0..self.config.population_size)
                    .map(|_| Message::random(&mut self.rng, min, max))
                    .collect()
            }
            PopulationInit::Uniform { text } => {
                let prototype = Message::from_text(text).expect("validated by config");
                vec![prototype; self.config.population_size]
            }
        }
    }
}

/// Evaluate every individual with a stale fitness. Returns the number of
/// evaluations performed.
fn evaluate(population: &mut [Message], goal: &[u8]) -> usize {
    #[cfg(feature = "rayon")]
    {
        population
            .par_iter_mut()
            .filter(|m| !m.has_valid_fitness())
            .map(|m| m.set_fitness(levenshtein(m.chars(), goal)))
            .count()
    }
    #[cfg(not(feature = "rayon"))]
    {
        let mut nevals = 0;
        for m in population.iter_mut().filter(|m| !m.has_valid_fitness()) {
            m.set_fitness(levenshtein(m.chars(), goal));
            nevals += 1;
        }
        nevals
    }
}

fn record(generation: u64, evaluations: usize, population: &[Message]) -> GenerationStats {
    let distances: Vec<u32> = population
        .iter()
        .map(|m| m.fitness().expect("population fully evaluated"))
        .collect();
    GenerationStats::from_distances(generation, evaluations, &distances)
}

fn debug_row(row: &GenerationStats) {
    debug!(
        generation = row.generation,
        nevals = row.evaluations,
        avg = row.avg,
        std = row.std,
        min = row.min,
        max = row.max,
        "generation complete"
    );
}
