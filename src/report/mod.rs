//! Report rendering and the persisted summary table
//!
//! - [`console`]: human-readable report sections
//! - [`summary`]: the two-column summary table and its CSV output

pub mod console;
pub mod summary;

pub use console::{
    REPORT_TITLE, write_completion, write_exclusions, write_header, write_load_counts,
    write_summary_table, write_valid_analysis,
};
pub use summary::{SummaryRow, SummaryTable, VALUE_HEADER, VARIABLE_HEADER};
