//! Experiment Tracking Schema
//!
//! Data structures for tracking evolution experiments: one experiment per
//! goal phrase, one run per engine execution, per-generation metric series,
//! and content-addressed artifacts (best evolved text, serialized logbooks).
//!
//! ## Schema Overview
//!
//! ```text
//! ExperimentRecord (1) ──< RunRecord (N)  [carries RunSummary on completion]
//!                              │
//!                              ├──< MetricRecord (N) [avg/std/min/max per generation]
//!                              └──< ArtifactRecord (N) [CAS]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use criar::experiment::{ExperimentRecord, RunRecord, MetricRecord, RunStatus, RunSummary};
//!
//! // Create an experiment for a goal phrase
//! let experiment = ExperimentRecord::new("exp-001", "Skynet baseline", "SKYNET IS NOW ONLINE");
//!
//! // Start a run
//! let mut run = RunRecord::new("run-001", experiment.experiment_id());
//! run.start();
//!
//! // Log a metric
//! let metric = MetricRecord::new(run.run_id(), "avg", 0, 21.9467);
//!
//! // Complete the run with its results-table row
//! let summary = RunSummary::new(500, 300, "randomized", 0.0333, 0.1795, 0, 1)
//!     .with_best_text("SKYNET IS NOW ONLINE");
//! run.complete_with_summary(RunStatus::Success, summary);
//! ```

mod artifact_record;
mod experiment_record;
mod metric_record;
mod run_record;
mod store;

pub use artifact_record::ArtifactRecord;
pub use experiment_record::{ExperimentRecord, ExperimentRecordBuilder};
pub use metric_record::{MetricRecord, METRIC_KEYS};
pub use run_record::{RunRecord, RunStatus, RunSummary};
pub use store::ExperimentStore;
