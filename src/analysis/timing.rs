//! Response-time summaries

use crate::algorithm::statistics::DescriptiveStats;

/// Statistics of a time variable in seconds
#[derive(Debug, Clone, PartialEq)]
pub struct TimingSummary {
    /// Statistics over the usable values
    pub stats: DescriptiveStats,
    /// Number of valid cases, usable or not
    pub total: usize,
}

impl TimingSummary {
    /// Number of cases with a usable value
    #[must_use]
    pub fn with_data(&self) -> usize {
        self.stats.count
    }
}

/// Summarize a time column
///
/// Missing values are dropped; with `positive_only`, zero and negative values
/// are dropped as well. Returns `None` when no usable value remains.
#[must_use]
pub fn summarize_timing(values: &[Option<f64>], positive_only: bool) -> Option<TimingSummary> {
    let usable = values
        .iter()
        .flatten()
        .copied()
        .filter(|v| !positive_only || *v > 0.0);

    DescriptiveStats::new(usable).map(|stats| TimingSummary {
        stats,
        total: values.len(),
    })
}
