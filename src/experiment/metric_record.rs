//! Metric Record - per-generation fitness series for runs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::stats::GenerationStats;

/// The four metric keys an evolution run emits each generation.
pub const METRIC_KEYS: [&str; 4] = ["avg", "std", "min", "max"];

/// Metric Record represents a single metric data point.
///
/// Designed for time-series storage, where metrics are ordered by step
/// (= generation) and can be efficiently queried by `run_id` and key.
///
/// A run emits one point per key in [`METRIC_KEYS`] per generation, so the
/// four series together reconstruct the run's logbook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricRecord {
    run_id: String,
    key: String,
    step: u64,
    value: f64,
    timestamp: DateTime<Utc>,
}

impl MetricRecord {
    /// Create a new metric record.
    ///
    /// # Arguments
    ///
    /// * `run_id` - ID of the parent run
    /// * `key` - Metric name (e.g., "avg", "min")
    /// * `step` - Generation number
    /// * `value` - Metric value
    #[must_use]
    pub fn new(run_id: impl Into<String>, key: impl Into<String>, step: u64, value: f64) -> Self {
        Self {
            run_id: run_id.into(),
            key: key.into(),
            step,
            value,
            timestamp: Utc::now(),
        }
    }

    /// Fan one generation row out into its four metric points.
    #[must_use]
    pub fn from_stats(run_id: &str, stats: &GenerationStats) -> Vec<Self> {
        vec![
            Self::new(run_id, "avg", stats.generation, stats.avg),
            Self::new(run_id, "std", stats.generation, stats.std),
            Self::new(run_id, "min", stats.generation, f64::from(stats.min)),
            Self::new(run_id, "max", stats.generation, f64::from(stats.max)),
        ]
    }

    /// Get the run ID.
    #[must_use]
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Get the metric key/name.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the generation number.
    #[must_use]
    pub const fn step(&self) -> u64 {
        self.step
    }

    /// Get the metric value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Get the timestamp when the metric was recorded.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
