//! Execution hints for indexing operations
//!
//! Hints never change results. They bound how much work a query may do and
//! choose between sequential and parallel execution paths.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of requested columns (or odometer partitions) at which
/// parallel execution becomes worthwhile.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

/// Tuning knobs for projection and extraction
///
/// # Examples
///
/// ```
/// use gcrs_core::IndexHints;
///
/// let hints = IndexHints::default()
///     .with_max_combinations(1_000_000)
///     .with_parallel_threshold(64);
/// assert_eq!(hints.max_combinations, Some(1_000_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndexHints {
    /// Minimum amount of independent work before the parallel path is taken
    pub parallel_threshold: usize,
    /// Upper bound on Cartesian-product size walked by projection, None = unlimited
    pub max_combinations: Option<usize>,
}

impl Default for IndexHints {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            max_combinations: None,
        }
    }
}

impl IndexHints {
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn with_max_combinations(mut self, limit: usize) -> Self {
        self.max_combinations = Some(limit);
        self
    }

    /// Whether `work` independent units justify parallel execution
    pub fn prefers_parallel(&self, work: usize) -> bool {
        work >= self.parallel_threshold
    }
}
