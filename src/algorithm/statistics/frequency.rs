//! Frequency tables over categorical values

use std::cmp::Reverse;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::utils::format::percentage;

/// Label used for missing categorical values
pub const MISSING_LABEL: &str = "(missing)";

/// One row of a frequency table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    /// Category label
    pub label: String,
    /// Number of records in the category
    pub count: usize,
}

/// Category counts with percentages over a fixed denominator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    denominator: usize,
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Count values, most frequent first (ties ordered by label)
    ///
    /// Missing values are counted under [`MISSING_LABEL`], so the counts
    /// always sum to the number of values, which is also the denominator.
    pub fn by_count<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let counts = count_labels(values.into_iter().map(|v| v.unwrap_or(MISSING_LABEL)));
        let denominator = counts.values().sum();
        let entries = counts
            .into_iter()
            .sorted_by_key(|(label, count)| (Reverse(*count), *label))
            .map(|(label, count)| FrequencyEntry {
                label: label.to_string(),
                count,
            })
            .collect();

        Self {
            denominator,
            entries,
        }
    }

    /// Count values in a canonical category order
    ///
    /// Every label in `order` gets an entry, zero counts included. Labels not
    /// in `order` follow in alphabetical order. Missing values are skipped and
    /// do not contribute to the denominator.
    pub fn in_order<'a, I>(values: I, order: &[&str]) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut counts = count_labels(values.into_iter().flatten());
        let denominator = counts.values().sum();

        let mut entries: Vec<FrequencyEntry> = order
            .iter()
            .map(|label| FrequencyEntry {
                label: (*label).to_string(),
                count: counts.remove(*label).unwrap_or(0),
            })
            .collect();
        entries.extend(
            counts
                .into_iter()
                .sorted_by_key(|(label, _)| *label)
                .map(|(label, count)| FrequencyEntry {
                    label: label.to_string(),
                    count,
                }),
        );

        Self {
            denominator,
            entries,
        }
    }

    /// Entries in display order
    #[must_use]
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Denominator used for percentages
    #[must_use]
    pub fn denominator(&self) -> usize {
        self.denominator
    }

    /// Count for a label, 0 when absent
    #[must_use]
    pub fn count(&self, label: &str) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map_or(0, |entry| entry.count)
    }

    /// Sum of all counts
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Percentage of an entry over the table denominator
    #[must_use]
    pub fn percentage(&self, entry: &FrequencyEntry) -> f64 {
        percentage(entry.count, self.denominator)
    }

    /// Whether the table has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn count_labels<'a, I>(labels: I) -> FxHashMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = FxHashMap::default();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }
    counts
}
