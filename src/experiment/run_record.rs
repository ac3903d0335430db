//! Run Record - one engine execution of an experiment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    /// Run is created but not yet started.
    Pending,
    /// Run is currently executing.
    Running,
    /// Run completed successfully.
    Success,
    /// Run failed with an error.
    Failed,
    /// Run was cancelled by user or system.
    Cancelled,
}

/// One results-table row: the final-population statistics of a completed
/// run, keyed by the configuration that produced them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunSummary {
    /// Generations run (the configured budget, or fewer on early halt).
    pub generations: u64,
    /// Population size.
    pub population_size: usize,
    /// Init-strategy label (`randomized` or `uniform`).
    pub init: String,
    /// Mean distance over the final population.
    pub avg: f64,
    /// Population standard deviation of distance.
    pub std: f64,
    /// Minimum distance in the final population.
    pub min: u32,
    /// Maximum distance in the final population.
    pub max: u32,
    /// Best evolved text, if captured.
    pub best_text: Option<String>,
}

impl RunSummary {
    /// Create a summary row.
    #[must_use]
    pub fn new(
        generations: u64,
        population_size: usize,
        init: impl Into<String>,
        avg: f64,
        std: f64,
        min: u32,
        max: u32,
    ) -> Self {
        Self {
            generations,
            population_size,
            init: init.into(),
            avg,
            std,
            min,
            max,
            best_text: None,
        }
    }

    /// Attach the best evolved text.
    #[must_use]
    pub fn with_best_text(mut self, text: impl Into<String>) -> Self {
        self.best_text = Some(text.into());
        self
    }
}

/// Run Record represents a single execution of an experiment.
///
/// Each experiment can have multiple runs. A run tracks the execution
/// lifecycle from start to completion and, once complete, carries its
/// results-table row as a [`RunSummary`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunRecord {
    run_id: String,
    experiment_id: String,
    status: RunStatus,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    summary: Option<RunSummary>,
}

impl RunRecord {
    /// Create a new run record in Pending status.
    ///
    /// # Arguments
    ///
    /// * `run_id` - Unique identifier for the run
    /// * `experiment_id` - ID of the parent experiment
    #[must_use]
    pub fn new(run_id: impl Into<String>, experiment_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            experiment_id: experiment_id.into(),
            status: RunStatus::Pending,
            started_at: None,
            ended_at: None,
            summary: None,
        }
    }

    /// Get the run ID.
    #[must_use]
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Get the parent experiment ID.
    #[must_use]
    pub fn experiment_id(&self) -> &str {
        &self.experiment_id
    }

    /// Get the current run status.
    #[must_use]
    pub const fn status(&self) -> RunStatus {
        self.status
    }

    /// Get the start timestamp, if the run has started.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Get the end timestamp, if the run has completed.
    #[must_use]
    pub const fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Get the results-table row, if the run completed with one.
    #[must_use]
    pub const fn summary(&self) -> Option<&RunSummary> {
        self.summary.as_ref()
    }

    /// Start the run, transitioning from Pending to Running.
    ///
    /// Sets the `started_at` timestamp to now.
    pub fn start(&mut self) {
        self.status = RunStatus::Running;
        self.started_at = Some(Utc::now());
    }

    /// Complete the run with the given final status.
    ///
    /// Sets the `ended_at` timestamp to now.
    pub fn complete(&mut self, status: RunStatus) {
        self.status = status;
        self.ended_at = Some(Utc::now());
    }

    /// Complete the run and attach its results-table row.
    pub fn complete_with_summary(&mut self, status: RunStatus, summary: RunSummary) {
        self.summary = Some(summary);
        self.complete(status);
    }
}
