//! Experiment Store - storage for experiment tracking data
//!
//! This module provides the storage layer for experiment tracking,
//! optimized for time-series metric queries, plus JSON persistence so a
//! sweep's results survive the process.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ArtifactRecord, ExperimentRecord, MetricRecord, RunRecord, RunStatus, RunSummary};
use crate::error::Result;

/// In-memory store for experiment tracking data.
///
/// ## Design
///
/// The store uses hash maps for O(1) lookups by ID, and stores metrics
/// in a vector that can be filtered and sorted for time-series queries.
///
/// ## Results Table
///
/// [`ExperimentStore::results_table`] collects the summaries of completed
/// runs ordered by (generations, init label) - the aggregate view of an
/// experiment sweep.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ExperimentStore {
    experiments: HashMap<String, ExperimentRecord>,
    runs: HashMap<String, RunRecord>,
    metrics: Vec<MetricRecord>,
    artifacts: Vec<ArtifactRecord>,
}

impl ExperimentStore {
    /// Create a new empty experiment store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the store is empty (no experiments, runs, metrics, or
    /// artifacts).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
            && self.runs.is_empty()
            && self.metrics.is_empty()
            && self.artifacts.is_empty()
    }

    /// Get the number of experiments in the store.
    #[must_use]
    pub fn experiment_count(&self) -> usize {
        self.experiments.len()
    }

    /// Get the number of runs in the store.
    #[must_use]
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Get the number of metrics in the store.
    #[must_use]
    pub fn metric_count(&self) -> usize {
        self.metrics.len()
    }

    /// Get the number of artifacts in the store.
    #[must_use]
    pub fn artifact_count(&self) -> usize {
        self.artifacts.len()
    }

    /// Add an experiment to the store.
    pub fn add_experiment(&mut self, experiment: ExperimentRecord) {
        self.experiments
            .insert(experiment.experiment_id().to_string(), experiment);
    }

    /// Get an experiment by ID.
    #[must_use]
    pub fn get_experiment(&self, experiment_id: &str) -> Option<&ExperimentRecord> {
        self.experiments.get(experiment_id)
    }

    /// Add a run to the store (replacing any prior record with the same ID).
    pub fn add_run(&mut self, run: RunRecord) {
        self.runs.insert(run.run_id().to_string(), run);
    }

    /// Get a run by ID.
    #[must_use]
    pub fn get_run(&self, run_id: &str) -> Option<&RunRecord> {
        self.runs.get(run_id)
    }

    /// Get all runs for an experiment.
    #[must_use]
    pub fn get_runs_for_experiment(&self, experiment_id: &str) -> Vec<&RunRecord> {
        self.runs
            .values()
            .filter(|run| run.experiment_id() == experiment_id)
            .collect()
    }

    /// Add a metric to the store.
    pub fn add_metric(&mut self, metric: MetricRecord) {
        self.metrics.push(metric);
    }

    /// Add an artifact to the store.
    pub fn add_artifact(&mut self, artifact: ArtifactRecord) {
        self.artifacts.push(artifact);
    }

    /// Get artifacts for a run.
    #[must_use]
    pub fn get_artifacts_for_run(&self, run_id: &str) -> Vec<&ArtifactRecord> {
        self.artifacts
            .iter()
            .filter(|a| a.run_id() == run_id)
            .collect()
    }

    /// Get metrics for a specific run and key, ordered by step.
    ///
    /// This is the primary query function for per-generation metric data.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use criar::experiment::{ExperimentStore, MetricRecord};
    ///
    /// let mut store = ExperimentStore::new();
    ///
    /// // Log an average-distance curve
    /// for generation in 0..100 {
    ///     let avg = 22.0 / (generation as f64 + 1.0);
    ///     store.add_metric(MetricRecord::new("run-001", "avg", generation, avg));
    /// }
    ///
    /// let curve = store.get_metrics_for_run("run-001", "avg");
    /// assert_eq!(curve.len(), 100);
    /// ```
    #[must_use]
    pub fn get_metrics_for_run(&self, run_id: &str, key: &str) -> Vec<MetricRecord> {
        let mut metrics: Vec<MetricRecord> = self
            .metrics
            .iter()
            .filter(|m| m.run_id() == run_id && m.key() == key)
            .cloned()
            .collect();

        // Sort by step for time-series ordering
        metrics.sort_by_key(MetricRecord::step);

        metrics
    }

    /// Summaries of all successfully completed runs, ordered by
    /// (generations, init label, run id).
    #[must_use]
    pub fn results_table(&self) -> Vec<(String, RunSummary)> {
        let mut rows: Vec<(String, RunSummary)> = self
            .runs
            .values()
            .filter(|run| run.status() == RunStatus::Success)
            .filter_map(|run| {
                run.summary()
                    .map(|s| (run.run_id().to_string(), s.clone()))
            })
            .collect();
        rows.sort_by(|(id_a, a), (id_b, b)| {
            (a.generations, &a.init, id_a).cmp(&(b.generations, &b.init, id_b))
        });
        rows
    }

    /// Persist the store as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a store previously saved with [`ExperimentStore::save_json`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
