//! Descriptive report of out-of-hospital cardiac arrest (OHCA) registry data,
//! comparing transtelephonic CPR with other resuscitation pathways.
//!
//! A run loads the cleaned valid-cases and excluded-cases tables, derives
//! per-case grouping columns, computes group-wise outcome statistics, prints
//! a text report and writes a two-column summary table.

pub mod algorithm;
pub mod analysis;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod utils;

// Core types
pub use config::{ColumnNames, ReportConfig, Vocabulary};
pub use error::{ReportError, Result};
pub use loader::{Datasets, load_datasets, read_delimited};
pub use pipeline::{RunOutcome, run};

// Classification and analysis
pub use algorithm::classification::{
    AgeBand, ResuscitationClassifier, ResuscitationGroup, age_band, favorable_cpc, parse_cpc,
};
pub use analysis::{
    ExclusionSummary, Outcome, ValidCaseAnalysis, analyze_exclusions, analyze_valid_cases,
    derive_columns,
};
pub use report::{SummaryRow, SummaryTable};

// Arrow types
pub use arrow::record_batch::RecordBatch;
