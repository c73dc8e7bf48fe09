//! Text rendering of the analyses
//!
//! Each section writes to a generic [`Write`]; the pipeline calls them in
//! report order.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::algorithm::statistics::{FrequencyTable, GroupRate};
use crate::analysis::{
    AgeStratification, ExclusionSummary, OutcomeRates, TimingSummary, ValidCaseAnalysis,
};
use crate::error::Result;
use crate::report::summary::SummaryTable;
use crate::utils::format::{format_count, percentage};
use crate::utils::logging::{BANNER_WIDTH, write_banner, write_section};

/// Title of the report banner
pub const REPORT_TITLE: &str = "DETAILED DESCRIPTIVE ANALYSIS - TRANSTELEPHONIC CPR";

const LIST_RULE: usize = 40;
const OUTCOME_RULE: usize = 30;

fn write_list_rule<W: Write>(out: &mut W, width: usize) -> Result<()> {
    writeln!(out, "{}", "-".repeat(width))?;
    Ok(())
}

/// Title banner with the analysis timestamp
pub fn write_header<W: Write>(out: &mut W, timestamp: DateTime<Local>) -> Result<()> {
    write_banner(out, REPORT_TITLE)?;
    writeln!(out, "Analysis date: {}", timestamp.format("%Y-%m-%d %H:%M:%S"))?;
    Ok(())
}

/// Record counts of both input tables
pub fn write_load_counts<W: Write>(out: &mut W, valid: usize, excluded: usize) -> Result<()> {
    writeln!(out, "Valid data loaded: {} records", format_count(valid))?;
    writeln!(out, "Excluded data loaded: {} records", format_count(excluded))?;
    Ok(())
}

fn write_frequencies<W: Write>(
    out: &mut W,
    table: &FrequencyTable,
    width: usize,
) -> Result<()> {
    for entry in table.entries() {
        writeln!(
            out,
            "{:width$}: {:4} cases ({:5.1}%)",
            entry.label,
            entry.count,
            table.percentage(entry),
        )?;
    }
    Ok(())
}

fn write_rates<W: Write>(out: &mut W, rates: &[GroupRate], indent: &str, width: usize) -> Result<()> {
    for rate in rates {
        writeln!(
            out,
            "{indent}{:width$}: {:3}/{:3} ({:5.1}%)",
            rate.group,
            rate.positives,
            rate.total,
            rate.percentage(),
        )?;
    }
    Ok(())
}

/// Exclusion reasons and characteristics of the excluded cases
pub fn write_exclusions<W: Write>(out: &mut W, summary: &ExclusionSummary) -> Result<()> {
    write_banner(out, "DETAILED EXCLUSION ANALYSIS")?;

    writeln!(out, "Exclusion reasons:")?;
    write_list_rule(out, LIST_RULE)?;
    write_frequencies(out, &summary.reasons, 15)?;
    writeln!(out)?;
    writeln!(out, "Total excluded: {} cases", format_count(summary.total))?;

    writeln!(out)?;
    writeln!(out, "Characteristics of excluded cases:")?;
    write_list_rule(out, LIST_RULE)?;
    if let Some(age) = &summary.age {
        writeln!(out, "Mean age: {:.1} years", age.mean)?;
        writeln!(out, "Age range: {:.0} - {:.0} years", age.min, age.max)?;
    }
    if let Some(sex) = &summary.sex {
        writeln!(out, "Sex distribution:")?;
        for entry in sex.entries() {
            writeln!(
                out,
                "  {}: {} ({:.1}%)",
                entry.label,
                entry.count,
                sex.percentage(entry)
            )?;
        }
    }
    Ok(())
}

/// Every section of the valid-case analysis, in report order
pub fn write_valid_analysis<W: Write>(out: &mut W, analysis: &ValidCaseAnalysis) -> Result<()> {
    write_banner(out, "DETAILED ANALYSIS OF VALID CASES")?;
    writeln!(
        out,
        "Total valid cases for analysis: {}",
        format_count(analysis.total)
    )?;

    write_section(out, "ANALYSIS BY CPR GROUP")?;
    writeln!(out, "Distribution by CPR group:")?;
    write_list_rule(out, LIST_RULE)?;
    write_frequencies(out, &analysis.groups, 30)?;

    write_section(out, "MAIN OUTCOMES BY CPR GROUP")?;
    for OutcomeRates { outcome, rates } in &analysis.outcomes_by_group {
        writeln!(out)?;
        writeln!(out, "{outcome}:")?;
        write_list_rule(out, OUTCOME_RULE)?;
        write_rates(out, rates, "", 30)?;
    }

    writeln!(out)?;
    writeln!(out, "Favorable CPC (1-2):")?;
    write_list_rule(out, OUTCOME_RULE)?;
    write_rates(out, &analysis.favorable_cpc_by_group, "", 30)?;

    write_section(out, "AGE STRATIFICATION")?;
    match &analysis.age_stratification {
        Some(strata) => write_age_stratification(out, strata)?,
        None => writeln!(out, "Age not available, section skipped")?,
    }

    write_section(out, "RESPONSE TIME ANALYSIS")?;
    if let Some(arrival) = &analysis.arrival_time {
        writeln!(out, "Arrival time (seconds):")?;
        write_timing(out, arrival)?;
    }
    if let Some(duration) = &analysis.cpr_duration {
        if analysis.arrival_time.is_some() {
            writeln!(out)?;
        }
        writeln!(out, "CPR duration (seconds, excluding 0s):")?;
        write_timing(out, duration)?;
    }
    Ok(())
}

fn write_age_stratification<W: Write>(out: &mut W, strata: &AgeStratification) -> Result<()> {
    writeln!(out, "Distribution by age group:")?;
    write_list_rule(out, LIST_RULE)?;
    write_frequencies(out, &strata.distribution, 15)?;
    if strata.missing_age > 0 {
        writeln!(
            out,
            "Records without usable age (not stratified): {}",
            format_count(strata.missing_age)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Outcomes by age group:")?;
    write_list_rule(out, LIST_RULE)?;
    for OutcomeRates { outcome, rates } in &strata.outcomes {
        writeln!(out)?;
        writeln!(out, "{outcome}:")?;
        write_rates(out, rates, "  ", 15)?;
    }
    Ok(())
}

fn write_timing<W: Write>(out: &mut W, timing: &TimingSummary) -> Result<()> {
    let stats = &timing.stats;
    writeln!(
        out,
        "  Mean: {:.0}s ({:.1} min)",
        stats.mean,
        stats.mean / 60.0
    )?;
    writeln!(
        out,
        "  Median: {:.0}s ({:.1} min)",
        stats.median,
        stats.median / 60.0
    )?;
    writeln!(out, "  Range: {:.0}s - {:.0}s", stats.min, stats.max)?;
    writeln!(
        out,
        "  Cases with data: {}/{} ({:.1}%)",
        format_count(timing.with_data()),
        format_count(timing.total),
        percentage(timing.with_data(), timing.total)
    )?;
    Ok(())
}

/// The saved summary table, blank rows printed as empty lines
pub fn write_summary_table<W: Write>(
    out: &mut W,
    table: &SummaryTable,
    path: &Path,
) -> Result<()> {
    write_banner(out, "SUMMARY TABLE")?;
    writeln!(out, "Summary table saved: {}", path.display())?;

    writeln!(out)?;
    writeln!(out, "SUMMARY TABLE OF CHARACTERISTICS:")?;
    writeln!(out, "{}", "-".repeat(BANNER_WIDTH))?;
    for row in table.rows() {
        if row.is_blank() {
            writeln!(out)?;
        } else {
            writeln!(out, "{:45} {:>20}", row.variable, row.value)?;
        }
    }
    Ok(())
}

/// Completion banner naming the generated file
pub fn write_completion<W: Write>(out: &mut W, path: &Path) -> Result<()> {
    write_banner(out, "DESCRIPTIVE ANALYSIS COMPLETED")?;
    writeln!(out, "Generated file:")?;
    writeln!(out, "- {}", path.display())?;
    Ok(())
}
