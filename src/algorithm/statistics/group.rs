//! Group-wise rates of a binary indicator

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::utils::format::percentage;

/// Positives out of the records of one group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRate {
    /// Group label
    pub group: String,
    /// Records in the group with the indicator set
    pub positives: usize,
    /// Records in the group
    pub total: usize,
}

impl GroupRate {
    /// Percentage of positives within the group
    #[must_use]
    pub fn percentage(&self) -> f64 {
        percentage(self.positives, self.total)
    }
}

/// Compute the indicator rate for every group present in `keys`
///
/// `keys` and `indicator` are parallel per-record sequences. Records without
/// a group key are skipped. Groups are returned in `order` first, then any
/// other groups alphabetically; groups with no records are omitted.
pub fn group_rates<'a, K, I>(keys: K, indicator: I, order: &[&str]) -> Vec<GroupRate>
where
    K: IntoIterator<Item = Option<&'a str>>,
    I: IntoIterator<Item = bool>,
{
    let mut tallies: FxHashMap<&str, (usize, usize)> = FxHashMap::default();
    for (key, positive) in keys.into_iter().zip(indicator) {
        let Some(key) = key else { continue };
        let tally = tallies.entry(key).or_insert((0, 0));
        tally.1 += 1;
        if positive {
            tally.0 += 1;
        }
    }

    let rank = |label: &str| {
        order
            .iter()
            .position(|o| *o == label)
            .unwrap_or(order.len())
    };

    tallies
        .into_iter()
        .sorted_by(|(a, _), (b, _)| rank(*a).cmp(&rank(*b)).then_with(|| a.cmp(b)))
        .map(|(group, (positives, total))| GroupRate {
            group: group.to_string(),
            positives,
            total,
        })
        .collect()
}
