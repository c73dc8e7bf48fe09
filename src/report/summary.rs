//! Two-column summary table of the cohort
//!
//! The table has a fixed manifest of rows: the flow from original records to
//! valid records, the characteristics of the valid population and the main
//! outcomes. It is serialized with `serde_arrow` and written as delimited text.

use std::path::Path;
use std::time::Instant;

use arrow::csv::WriterBuilder;
use arrow::datatypes::FieldRef;
use arrow::record_batch::RecordBatch;
use serde::{Deserialize, Serialize};
use serde_arrow::schema::{SchemaLike, TracingOptions};

use crate::algorithm::classification::{CPC_LABELS, ResuscitationGroup};
use crate::analysis::{ExclusionSummary, Outcome, ValidCaseAnalysis};
use crate::config::Vocabulary;
use crate::error::Result;
use crate::error::util::safe_create_file;
use crate::utils::format::{NOT_AVAILABLE, format_count, format_count_pct, format_mean_sd};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Header of the label column
pub const VARIABLE_HEADER: &str = "Variable";
/// Header of the value column
pub const VALUE_HEADER: &str = "n (%)";

/// Exclusion reasons broken out individually, matched ignoring case
pub const LISTED_EXCLUSION_REASONS: [&str; 3] = ["TRAUMA", "SVB", "CADAVER"];

/// One row of the summary table; separator rows have both fields empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    #[serde(rename = "Variable")]
    pub variable: String,
    #[serde(rename = "n (%)")]
    pub value: String,
}

impl SummaryRow {
    fn new(variable: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            value: value.into(),
        }
    }

    fn blank() -> Self {
        Self::new("", "")
    }

    fn heading(title: &str) -> Self {
        Self::new(title, "")
    }

    /// Whether this row only separates subsections
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.variable.is_empty() && self.value.is_empty()
    }
}

/// The summary table in row order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTable {
    rows: Vec<SummaryRow>,
}

impl SummaryTable {
    /// Assemble the table from the two analyses
    ///
    /// The first block uses the original record count (valid + excluded) as
    /// denominator; every later row uses the valid-case count.
    #[must_use]
    pub fn build(
        exclusions: &ExclusionSummary,
        valid: &ValidCaseAnalysis,
        vocabulary: &Vocabulary,
    ) -> Self {
        let total_original = exclusions.total + valid.total;
        let of_original = |count: usize| format_count_pct(count, total_original);
        let of_valid = |count: usize| format_count_pct(count, valid.total);

        let mut rows = Vec::with_capacity(25);

        // Record flow
        rows.push(SummaryRow::new(
            "Total original records",
            format_count(total_original),
        ));
        rows.push(SummaryRow::new(
            "Excluded records",
            of_original(exclusions.total),
        ));
        let mut listed = 0;
        for reason in LISTED_EXCLUSION_REASONS {
            let count = exclusions.reason_count(reason);
            listed += count;
            rows.push(SummaryRow::new(format!("  - {reason}"), of_original(count)));
        }
        rows.push(SummaryRow::new(
            "  - Other reasons",
            of_original(exclusions.total.saturating_sub(listed)),
        ));
        rows.push(SummaryRow::new(
            "Valid records for analysis",
            of_original(valid.total),
        ));

        // Valid population
        rows.push(SummaryRow::blank());
        rows.push(SummaryRow::heading("VALID POPULATION CHARACTERISTICS"));
        let age = valid
            .age
            .as_ref()
            .map_or_else(|| NOT_AVAILABLE.to_string(), |a| format_mean_sd(Some(a.mean), a.std_dev));
        rows.push(SummaryRow::new("Age, mean ± SD (years)", age));
        let male = valid.sex.as_ref().map_or_else(
            || NOT_AVAILABLE.to_string(),
            |sex| {
                let count = sex
                    .entries()
                    .iter()
                    .filter(|entry| entry.label.eq_ignore_ascii_case(&vocabulary.male))
                    .map(|entry| entry.count)
                    .sum();
                of_valid(count)
            },
        );
        rows.push(SummaryRow::new("Male sex", male));
        for group in [
            ResuscitationGroup::Transtelephonic,
            ResuscitationGroup::LayBystander,
            ResuscitationGroup::FirstResponder,
            ResuscitationGroup::NoPriorCpr,
        ] {
            rows.push(SummaryRow::new(
                group.label(),
                of_valid(valid.groups.count(group.label())),
            ));
        }

        // Outcomes
        rows.push(SummaryRow::blank());
        rows.push(SummaryRow::heading("MAIN OUTCOMES"));
        for outcome in [Outcome::Rosc, Outcome::Survival7d, Outcome::FavorableCpc] {
            let value = valid
                .positives(outcome)
                .map_or_else(|| NOT_AVAILABLE.to_string(), of_valid);
            rows.push(SummaryRow::new(outcome.label(), value));
        }
        for (label, count) in CPC_LABELS.iter().zip(valid.cpc_categories) {
            rows.push(SummaryRow::new(*label, of_valid(count)));
        }

        Self { rows }
    }

    /// Rows in table order
    #[must_use]
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    /// Number of rows, separators included
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value of the first row labelled `variable`
    #[must_use]
    pub fn value(&self, variable: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.variable == variable)
            .map(|row| row.value.as_str())
    }

    /// Convert the rows to a two-column Arrow table
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let fields = Vec::<FieldRef>::from_type::<SummaryRow>(TracingOptions::default())?;
        Ok(serde_arrow::to_record_batch(&fields, &self.rows)?)
    }

    /// Write the table to `path`, replacing any existing file
    pub fn write_csv(&self, path: &Path, delimiter: u8) -> Result<()> {
        log_operation_start("Writing summary table to", path);
        let start = Instant::now();

        let batch = self.to_record_batch()?;
        let file = safe_create_file(path, "summary table")?;
        let mut writer = WriterBuilder::new()
            .with_header(true)
            .with_delimiter(delimiter)
            .build(file);
        writer.write(&batch)?;

        log_operation_complete("wrote", path, batch.num_rows(), Some(start.elapsed()));
        Ok(())
    }
}
