//! Analyzers for the excluded and valid populations
//!
//! - [`exclusions`]: exclusion reasons and demographics of excluded cases
//! - [`derive`]: derived grouping columns of the valid-cases table
//! - [`valid`]: group-wise outcome statistics of valid cases
//! - [`timing`]: arrival time and CPR duration summaries

pub mod derive;
pub mod exclusions;
pub mod timing;
pub mod valid;

use std::fmt;

pub use derive::{
    AGE_BAND_COLUMN, DerivedAttributes, FAVORABLE_CPC_COLUMN, RESUSCITATION_GROUP_COLUMN,
    derive_attributes, derive_columns,
};
pub use exclusions::{ExclusionSummary, analyze_exclusions};
pub use timing::{TimingSummary, summarize_timing};
pub use valid::{AgeStratification, OutcomeRates, ValidCaseAnalysis, analyze_valid_cases};

/// Table name used in messages about the valid-cases table
pub const VALID_TABLE: &str = "valid cases";
/// Table name used in messages about the excluded-cases table
pub const EXCLUDED_TABLE: &str = "excluded cases";

/// Binary outcome indicators reported per group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Return of spontaneous circulation
    Rosc,
    /// Survival at seven days
    Survival7d,
    /// CPC category 1 or 2
    FavorableCpc,
}

impl Outcome {
    /// Report label of the outcome
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rosc => "ROSC",
            Self::Survival7d => "7-day survival",
            Self::FavorableCpc => "Favorable CPC (1-2)",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
