use std::fs;

use ohca_report::{Outcome, ReportError, ResuscitationGroup, pipeline};

use crate::utils::{Fixture, VALID_HEADER, VALID_ROWS, write_table};

fn run_to_string(fixture: &Fixture) -> (ohca_report::RunOutcome, String) {
    let mut out = Vec::new();
    let outcome = pipeline::run(&fixture.config(), &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn test_full_run() {
    let fixture = Fixture::new();
    let (outcome, text) = run_to_string(&fixture);

    assert_eq!(outcome.exclusions.total, 6);
    assert_eq!(outcome.valid.total, 10);
    assert_eq!(
        outcome.valid.groups.count(ResuscitationGroup::Transtelephonic.label()),
        3
    );
    assert_eq!(outcome.valid.positives(Outcome::Rosc), Some(4));
    assert_eq!(outcome.valid.positives(Outcome::Survival7d), Some(3));
    assert_eq!(outcome.valid.positives(Outcome::FavorableCpc), Some(4));
    assert_eq!(outcome.valid.cpc_categories, [2, 2, 1, 1, 2]);
    assert_eq!(outcome.summary_path, fixture.summary_path());
    assert!(fixture.summary_path().exists());

    assert!(text.contains("Valid data loaded: 10 records"));
    assert!(text.contains("Excluded data loaded: 6 records"));
    assert!(text.contains("Transtelephonic CPR           :   2/  3 ( 66.7%)"));
    assert!(text.contains("No prior CPR                  :   1/  2 ( 50.0%)"));
    assert!(text.contains("Records without usable age (not stratified): 1"));
    assert!(text.contains("Cases with data: 8/10"));
    assert!(text.contains("Cases with data: 6/10"));
}

#[test]
fn test_sections_in_report_order() {
    let fixture = Fixture::new();
    let (_, text) = run_to_string(&fixture);

    let sections = [
        "DETAILED EXCLUSION ANALYSIS",
        "ANALYSIS BY CPR GROUP",
        "MAIN OUTCOMES BY CPR GROUP",
        "Favorable CPC (1-2):",
        "AGE STRATIFICATION",
        "Outcomes by age group:",
        "RESPONSE TIME ANALYSIS",
        "SUMMARY TABLE OF CHARACTERISTICS:",
        "DESCRIPTIVE ANALYSIS COMPLETED",
    ];
    let positions: Vec<usize> = sections
        .iter()
        .map(|section| text.find(section).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_summary_values() {
    let fixture = Fixture::new();
    let (outcome, _) = run_to_string(&fixture);
    let summary = &outcome.summary;

    assert_eq!(summary.len(), 25);
    assert_eq!(summary.value("Total original records"), Some("16"));
    assert_eq!(summary.value("Excluded records"), Some("6 (37.5%)"));
    assert_eq!(summary.value("  - TRAUMA"), Some("2 (12.5%)"));
    assert!(summary.value("  - SVB").unwrap().starts_with("1 (6."));
    assert_eq!(summary.value("  - CADAVER"), Some("2 (12.5%)"));
    assert!(summary.value("  - Other reasons").unwrap().starts_with("1 (6."));
    assert_eq!(summary.value("Valid records for analysis"), Some("10 (62.5%)"));
    assert_eq!(summary.value("Male sex"), Some("5 (50.0%)"));
    assert_eq!(summary.value("Lay-bystander CPR"), Some("2 (20.0%)"));
    assert_eq!(summary.value("ROSC"), Some("4 (40.0%)"));
}

#[test]
fn test_missing_input_leaves_summary_untouched() {
    let fixture = Fixture::empty();
    fs::write(fixture.summary_path(), "previous summary\n").unwrap();

    let mut out = Vec::new();
    let result = pipeline::run(&fixture.config(), &mut out);

    assert!(matches!(result, Err(ReportError::NotFound { .. })));
    assert!(out.is_empty());
    assert_eq!(
        fs::read_to_string(fixture.summary_path()).unwrap(),
        "previous summary\n"
    );
}

#[test]
fn test_missing_required_column_fails() {
    let fixture = Fixture::new();
    let header = VALID_HEADER.replace(",CPC,", ",CPC_CATEGORY,");
    write_table(&fixture.valid_path(), &header, VALID_ROWS);

    let mut out = Vec::new();
    let result = pipeline::run(&fixture.config(), &mut out);
    assert!(matches!(
        result,
        Err(ReportError::ColumnNotFound { ref column, .. }) if column == "CPC"
    ));
}

#[test]
fn test_optional_columns_soft_skip() {
    let fixture = Fixture::empty();
    write_table(
        &fixture.valid_path(),
        "RCP_TRANSTELEFONICA,RCP_TESTIGOS,CPC",
        &["1,none,1", "0,lay,3", "0,,2"],
    );
    write_table(&fixture.excluded_path(), "Excluido", &["TRAUMA", "SVB"]);

    let (outcome, text) = run_to_string(&fixture);
    assert!(outcome.valid.age_stratification.is_none());
    assert!(outcome.valid.outcomes_by_group.is_empty());
    assert_eq!(outcome.summary.value("ROSC"), Some("n/a"));
    assert_eq!(outcome.summary.value("Age, mean ± SD (years)"), Some("n/a"));
    assert!(text.contains("Age not available, section skipped"));
}
