//! Summary of the excluded population

use arrow::record_batch::RecordBatch;

use crate::algorithm::statistics::{DescriptiveStats, FrequencyTable};
use crate::analysis::EXCLUDED_TABLE;
use crate::config::ColumnNames;
use crate::error::Result;
use crate::utils::arrow::{float_values, string_values};

/// Statistics of the excluded cases
#[derive(Debug, Clone, PartialEq)]
pub struct ExclusionSummary {
    /// Number of excluded cases
    pub total: usize,
    /// Cases per exclusion reason, over all excluded cases
    pub reasons: FrequencyTable,
    /// Age statistics over non-missing ages; `None` without an age column or ages
    pub age: Option<DescriptiveStats>,
    /// Cases per sex over all excluded cases, missing included;
    /// `None` without a sex column
    pub sex: Option<FrequencyTable>,
}

impl ExclusionSummary {
    /// Cases whose reason equals `reason`, ignoring ASCII case
    #[must_use]
    pub fn reason_count(&self, reason: &str) -> usize {
        self.reasons
            .entries()
            .iter()
            .filter(|entry| entry.label.eq_ignore_ascii_case(reason))
            .map(|entry| entry.count)
            .sum()
    }
}

/// Summarize the excluded-cases table
///
/// The exclusion-reason column is required; age and sex are optional.
pub fn analyze_exclusions(excluded: &RecordBatch, columns: &ColumnNames) -> Result<ExclusionSummary> {
    let total = excluded.num_rows();

    let reasons = string_values(excluded, &columns.exclusion_reason, true, EXCLUDED_TABLE)?
        .unwrap_or_default();
    let reasons = FrequencyTable::by_count(reasons.iter().map(Option::as_deref));

    let age = float_values(excluded, &columns.age, false, EXCLUDED_TABLE)?
        .and_then(|ages| DescriptiveStats::new(ages.into_iter().flatten()));

    let sex = string_values(excluded, &columns.sex, false, EXCLUDED_TABLE)?
        .map(|values| FrequencyTable::by_count(values.iter().map(Option::as_deref)));

    Ok(ExclusionSummary {
        total,
        reasons,
        age,
        sex,
    })
}
