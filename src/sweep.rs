//! Experiment sweeps - the generation-count x init-strategy grid
//!
//! A sweep runs the engine once per cell of a (generation budget x
//! population-initialization strategy) grid against a single goal, records
//! every run in an [`ExperimentStore`], and renders the aggregate results
//! table: one row per run with the final population's avg/std/min/max
//! distance.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{EvolveConfig, PopulationInit};
use crate::engine::Evolution;
use crate::error::Result;
use crate::experiment::{
    ArtifactRecord, ExperimentRecord, ExperimentStore, MetricRecord, RunRecord, RunStatus,
    RunSummary,
};

/// Configuration for one sweep.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepConfig {
    /// Goal phrase shared by every cell.
    pub goal: String,
    /// Generation budgets to try.
    pub generation_counts: Vec<u64>,
    /// Init strategies to try.
    pub inits: Vec<PopulationInit>,
    /// Population size shared by every cell.
    pub population_size: usize,
    /// Base seed; cell seeds are derived from it. `None` = entropy per cell.
    pub seed: Option<u64>,
}

impl SweepConfig {
    /// Create a sweep over the given generation budgets with both init
    /// strategies (randomized with default lengths, uniform over `uniform_text`).
    #[must_use]
    pub fn new(
        goal: impl Into<String>,
        generation_counts: Vec<u64>,
        uniform_text: impl Into<String>,
    ) -> Self {
        Self {
            goal: goal.into(),
            generation_counts,
            inits: vec![
                PopulationInit::default(),
                PopulationInit::Uniform {
                    text: uniform_text.into(),
                },
            ],
            population_size: crate::config::DEFAULT_POPULATION_SIZE,
            seed: None,
        }
    }

    /// Override the population size.
    #[must_use]
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Override the init strategies.
    #[must_use]
    pub fn with_inits(mut self, inits: Vec<PopulationInit>) -> Self {
        self.inits = inits;
        self
    }

    /// Seed the sweep for full reproducibility.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A completed sweep: the populated store plus the rendered summaries in
/// grid order.
#[derive(Debug)]
pub struct SweepReport {
    /// Every run, metric series, and artifact of the sweep.
    pub store: ExperimentStore,
    /// One summary row per cell, in (generations, init) order.
    pub summaries: Vec<RunSummary>,
}

impl SweepReport {
    /// Render the aggregate results table.
    #[must_use]
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{:<6} {:<6} {:<12} {:<10} {:<10} {:<5} {:<5}\n",
            "gens", "pop", "init", "avg", "std", "min", "max"
        ));
        for row in &self.summaries {
            out.push_str(&format!(
                "{:<6} {:<6} {:<12} {:<10.4} {:<10.4} {:<5} {:<5}\n",
                row.generations, row.population_size, row.init, row.avg, row.std, row.min, row.max
            ));
        }
        out
    }
}

/// Derive a per-cell seed from the sweep seed so cells are independent but
/// the sweep as a whole is reproducible. Splitmix64 finalizer.
fn cell_seed(base: u64, index: u64) -> u64 {
    let mut z = base
        .wrapping_add(index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Run every cell of the sweep and collect the results.
///
/// # Errors
///
/// Returns the first cell's configuration or engine error. Already-completed
/// cells are preserved in the report only on success; a sweep is
/// all-or-nothing.
pub fn run_sweep(config: &SweepConfig) -> Result<SweepReport> {
    let experiment_id = "sweep-001";
    let mut store = ExperimentStore::new();
    store.add_experiment(
        ExperimentRecord::builder(experiment_id, "generation sweep", config.goal.clone())
            .config(serde_json::to_value(config)?)
            .build(),
    );

    let mut summaries = Vec::new();
    let mut cell_index: u64 = 0;

    for &generations in &config.generation_counts {
        for init in &config.inits {
            let run_id = format!("run-{:03}", cell_index + 1);
            let seed = match config.seed {
                Some(base) => cell_seed(base, cell_index),
                None => StdRng::from_entropy().gen(),
            };

            info!(
                run_id = %run_id,
                generations,
                init = init.label(),
                seed,
                "sweep cell starting"
            );

            let evolve_config = EvolveConfig::builder(config.goal.clone())
                .population_size(config.population_size)
                .generations(generations)
                .init(init.clone())
                .seed(seed)
                .build()?;

            let mut run = RunRecord::new(run_id.clone(), experiment_id);
            run.start();

            let outcome = Evolution::new(evolve_config)?.run()?;

            for row in outcome.logbook.rows() {
                for metric in MetricRecord::from_stats(&run_id, row) {
                    store.add_metric(metric);
                }
            }

            let last = outcome
                .logbook
                .last()
                .expect("a completed run has at least generation 0");
            let summary = RunSummary::new(
                last.generation,
                config.population_size,
                init.label(),
                last.avg,
                last.std,
                last.min,
                last.max,
            )
            .with_best_text(outcome.best.text());

            store.add_artifact(ArtifactRecord::from_bytes(
                &run_id,
                "best.txt",
                outcome.best.text().as_bytes(),
            ));
            store.add_artifact(ArtifactRecord::from_bytes(
                &run_id,
                "logbook.json",
                serde_json::to_vec(&outcome.logbook)?.as_slice(),
            ));

            run.complete_with_summary(RunStatus::Success, summary.clone());
            store.add_run(run);
            summaries.push(summary);
            cell_index += 1;
        }
    }

    info!(cells = cell_index, goal = %config.goal, "sweep complete");
    Ok(SweepReport { store, summaries })
}
