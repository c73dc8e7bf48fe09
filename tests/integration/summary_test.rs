use std::fs;

use ohca_report::report::{VALUE_HEADER, VARIABLE_HEADER};
use ohca_report::{pipeline, read_delimited};

use crate::utils::Fixture;

#[test]
fn test_summary_round_trip() {
    let fixture = Fixture::new();
    let mut out = Vec::new();
    let outcome = pipeline::run(&fixture.config(), &mut out).unwrap();

    let in_memory = outcome.summary.to_record_batch().unwrap();
    let reread = read_delimited(&fixture.summary_path(), b',').unwrap();

    assert_eq!(reread.num_rows(), in_memory.num_rows());
    let headers: Vec<String> = reread
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    assert_eq!(headers, [VARIABLE_HEADER, VALUE_HEADER]);
}

#[test]
fn test_summary_is_overwritten() {
    let fixture = Fixture::new();
    fs::write(fixture.summary_path(), "stale\ncontent\n").unwrap();

    let mut out = Vec::new();
    pipeline::run(&fixture.config(), &mut out).unwrap();

    let content = fs::read_to_string(fixture.summary_path()).unwrap();
    assert!(!content.contains("stale"));
    assert!(content.starts_with("Variable,n (%)"));
    assert_eq!(content.lines().count(), 26);
}

#[test]
fn test_semicolon_delimiter() {
    let fixture = Fixture::new();
    for path in [fixture.valid_path(), fixture.excluded_path()] {
        let content = fs::read_to_string(&path).unwrap().replace(',', ";");
        fs::write(&path, content).unwrap();
    }
    let mut config = fixture.config();
    config.delimiter = b';';

    let mut out = Vec::new();
    let outcome = pipeline::run(&config, &mut out).unwrap();
    assert_eq!(outcome.valid.total, 10);

    let content = fs::read_to_string(fixture.summary_path()).unwrap();
    assert!(content.starts_with("Variable;n (%)"));
}
