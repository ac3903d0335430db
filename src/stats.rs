//! Per-generation statistics and the logbook
//!
//! Every generation (including generation 0, the initial population) is
//! summarized as one [`GenerationStats`] row: number of fitness evaluations
//! performed that generation plus mean, population standard deviation,
//! minimum, and maximum distance over the whole population. The [`Logbook`]
//! collects the rows in order and renders the classic
//! `gen  nevals  avg  std  min  max` table.

use serde::{Deserialize, Serialize};

/// Statistics for one generation of the population.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GenerationStats {
    /// Generation number (0 = initial population).
    pub generation: u64,
    /// Individuals whose fitness was computed this generation.
    pub evaluations: usize,
    /// Mean distance over the population.
    pub avg: f64,
    /// Population standard deviation of distance (ddof = 0).
    pub std: f64,
    /// Minimum distance in the population.
    pub min: u32,
    /// Maximum distance in the population.
    pub max: u32,
}

impl GenerationStats {
    /// Compute the row for one generation from the population's distances.
    ///
    /// # Panics
    ///
    /// Panics if `distances` is empty; the engine never produces an empty
    /// population.
    #[must_use]
    pub fn from_distances(generation: u64, evaluations: usize, distances: &[u32]) -> Self {
        assert!(!distances.is_empty());

        #[allow(clippy::cast_precision_loss)]
        let n = distances.len() as f64;
        let sum: f64 = distances.iter().map(|&d| f64::from(d)).sum();
        let avg = sum / n;
        let variance = distances
            .iter()
            .map(|&d| {
                let delta = f64::from(d) - avg;
                delta * delta
            })
            .sum::<f64>()
            / n;

        Self {
            generation,
            evaluations,
            avg,
            std: variance.sqrt(),
            min: *distances.iter().min().expect("non-empty"),
            max: *distances.iter().max().expect("non-empty"),
        }
    }
}

/// Ordered per-generation statistics for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Logbook {
    rows: Vec<GenerationStats>,
}

impl Logbook {
    /// Create an empty logbook.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a generation row.
    pub fn push(&mut self, stats: GenerationStats) {
        self.rows.push(stats);
    }

    /// All rows in generation order.
    #[must_use]
    pub fn rows(&self) -> &[GenerationStats] {
        &self.rows
    }

    /// The most recent row, if any.
    #[must_use]
    pub fn last(&self) -> Option<&GenerationStats> {
        self.rows.last()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the logbook has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The lowest minimum distance seen across all generations.
    #[must_use]
    pub fn best_min(&self) -> Option<u32> {
        self.rows.iter().map(|r| r.min).min()
    }

    /// First generation whose minimum distance reached 0, if any.
    #[must_use]
    pub fn converged_at(&self) -> Option<u64> {
        self.rows.iter().find(|r| r.min == 0).map(|r| r.generation)
    }

    /// Render the aligned statistics table.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{:<6} {:<7} {:<10} {:<10} {:<5} {:<5}\n",
            "gen", "nevals", "avg", "std", "min", "max"
        ));
        for row in &self.rows {
            out.push_str(&format!(
                "{:<6} {:<7} {:<10.4} {:<10.4} {:<5} {:<5}\n",
                row.generation, row.evaluations, row.avg, row.std, row.min, row.max
            ));
        }
        out
    }
}
