//! One report run, from loading to the written summary
//!
//! Loading happens before anything is written, so a failed load leaves any
//! existing summary file untouched.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use chrono::Local;

use crate::analysis::{
    ExclusionSummary, ValidCaseAnalysis, analyze_exclusions, analyze_valid_cases, derive_columns,
};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::error::util::validate_directory;
use crate::loader::load_datasets;
use crate::report::{self, SummaryTable};

/// Results of a completed run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Excluded population statistics
    pub exclusions: ExclusionSummary,
    /// Valid population statistics
    pub valid: ValidCaseAnalysis,
    /// The summary table as written
    pub summary: SummaryTable,
    /// Where the summary table was written
    pub summary_path: PathBuf,
}

/// Run the full analysis and write the text report to `out`
pub fn run<W: Write>(config: &ReportConfig, out: &mut W) -> Result<RunOutcome> {
    let start = Instant::now();
    log::info!("Starting report run\n{config}");

    validate_directory(&config.data_dir, "input data directory")?;
    let datasets = load_datasets(config)?;

    report::write_header(out, Local::now())?;
    report::write_load_counts(out, datasets.valid.num_rows(), datasets.excluded.num_rows())?;

    let exclusions = analyze_exclusions(&datasets.excluded, &config.columns)?;
    report::write_exclusions(out, &exclusions)?;

    let extended = derive_columns(&datasets.valid, config)?;
    let valid = analyze_valid_cases(&extended, config)?;
    report::write_valid_analysis(out, &valid)?;

    let summary = SummaryTable::build(&exclusions, &valid, &config.vocabulary);
    let summary_path = config.summary_path();
    summary.write_csv(&summary_path, config.delimiter)?;
    report::write_summary_table(out, &summary, &summary_path)?;
    report::write_completion(out, &summary_path)?;
    out.flush()?;

    log::info!("Report run completed in {:?}", start.elapsed());
    Ok(RunOutcome {
        exclusions,
        valid,
        summary,
        summary_path,
    })
}
