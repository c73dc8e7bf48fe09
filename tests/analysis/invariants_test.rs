//! Randomized checks of the classification and aggregation invariants

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Float64Array, Int64Array, StringArray, UInt8Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use ohca_report::analysis::{AGE_BAND_COLUMN, FAVORABLE_CPC_COLUMN, RESUSCITATION_GROUP_COLUMN};
use ohca_report::config::ColumnNames;
use ohca_report::{
    ReportConfig, ResuscitationGroup, analyze_exclusions, analyze_valid_cases, derive_columns,
};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

const BYSTANDER_CODES: &[Option<&str>] = &[
    Some("none"),
    Some("lay"),
    Some("true"),
    Some("healthcare"),
    Some("police"),
    Some("firefighter"),
    Some("unknown"),
    Some("NONE"),
    None,
];

const CPC_VALUES: &[Option<&str>] = &[
    Some("1"),
    Some("2"),
    Some("3"),
    Some("4"),
    Some("5"),
    Some("2.5"),
    Some("0"),
    Some("abc"),
    None,
];

const REASONS: &[&str] = &["TRAUMA", "SVB", "CADAVER", "DNR", "PEDIATRIC", "trauma"];

fn random_valid(rng: &mut StdRng, rows: usize) -> RecordBatch {
    let ages: Float64Array = (0..rows)
        .map(|_| match rng.random_range(0..10) {
            0 => None,
            1 => Some(65.0),
            _ => Some(f64::from(rng.random_range(18..100))),
        })
        .collect();
    let transtelephonic: Int64Array = (0..rows)
        .map(|_| rng.random_bool(0.9).then(|| i64::from(rng.random_bool(0.3))))
        .collect();
    let bystander: StringArray = (0..rows)
        .map(|_| *BYSTANDER_CODES.choose(rng).unwrap())
        .collect();
    let cpc: StringArray = (0..rows).map(|_| *CPC_VALUES.choose(rng).unwrap()).collect();
    let rosc: Int64Array = (0..rows)
        .map(|_| Some(i64::from(rng.random_bool(0.4))))
        .collect();

    let schema = Schema::new(vec![
        Field::new("EDAD", DataType::Float64, true),
        Field::new("RCP_TRANSTELEFONICA", DataType::Int64, true),
        Field::new("RCP_TESTIGOS", DataType::Utf8, true),
        Field::new("CPC", DataType::Utf8, true),
        Field::new("ROSC", DataType::Int64, true),
    ]);
    let columns: Vec<ArrayRef> = vec![
        Arc::new(ages),
        Arc::new(transtelephonic),
        Arc::new(bystander),
        Arc::new(cpc),
        Arc::new(rosc),
    ];
    RecordBatch::try_new(Arc::new(schema), columns).unwrap()
}

fn string_column<'a>(batch: &'a RecordBatch, name: &str) -> &'a StringArray {
    batch
        .column_by_name(name)
        .unwrap()
        .as_any()
        .downcast_ref::<StringArray>()
        .unwrap()
}

#[test]
fn test_groups_partition_valid_cases() {
    let mut rng = StdRng::seed_from_u64(7);
    let config = ReportConfig::default();

    for _ in 0..20 {
        let rows = rng.random_range(0..300);
        let extended = derive_columns(&random_valid(&mut rng, rows), &config).unwrap();

        let labels = ResuscitationGroup::labels();
        let groups = string_column(&extended, RESUSCITATION_GROUP_COLUMN);
        assert_eq!(groups.null_count(), 0);
        assert!(groups.iter().flatten().all(|g| labels.contains(&g)));

        let analysis = analyze_valid_cases(&extended, &config).unwrap();
        assert_eq!(analysis.groups.entries().len(), labels.len());
        assert_eq!(analysis.groups.total_count(), rows);
    }
}

#[test]
fn test_favorable_cpc_is_binary() {
    let mut rng = StdRng::seed_from_u64(11);
    let config = ReportConfig::default();
    let valid = random_valid(&mut rng, 500);
    let extended = derive_columns(&valid, &config).unwrap();

    let favorable = extended
        .column_by_name(FAVORABLE_CPC_COLUMN)
        .unwrap()
        .as_any()
        .downcast_ref::<UInt8Array>()
        .unwrap();
    let cpc = string_column(&valid, "CPC");

    assert_eq!(favorable.null_count(), 0);
    for (flag, value) in favorable.values().iter().zip(cpc.iter()) {
        assert!(*flag <= 1);
        let expected = u8::from(matches!(value, Some("1" | "2")));
        assert_eq!(*flag, expected, "CPC value {value:?}");
    }
}

#[test]
fn test_age_bands_bipartition() {
    let mut rng = StdRng::seed_from_u64(23);
    let config = ReportConfig::default();
    let valid = random_valid(&mut rng, 400);
    let extended = derive_columns(&valid, &config).unwrap();

    let ages = valid
        .column_by_name("EDAD")
        .unwrap()
        .as_any()
        .downcast_ref::<Float64Array>()
        .unwrap();
    let bands = string_column(&extended, AGE_BAND_COLUMN);

    for (age, band) in ages.iter().zip(bands.iter()) {
        match age {
            None => assert!(band.is_none()),
            Some(age) if age < 65.0 => assert_eq!(band, Some("<65")),
            Some(_) => assert_eq!(band, Some("≥65")),
        }
    }

    let analysis = analyze_valid_cases(&extended, &config).unwrap();
    let strata = analysis.age_stratification.unwrap();
    assert_eq!(
        strata.distribution.total_count() + strata.missing_age,
        valid.num_rows()
    );
    assert_eq!(strata.missing_age, ages.null_count());
}

#[test]
fn test_exclusion_percentages_sum_to_hundred() {
    let mut rng = StdRng::seed_from_u64(31);

    for _ in 0..20 {
        let rows = rng.random_range(1..250);
        let reasons: StringArray = (0..rows)
            .map(|_| Some(*REASONS.choose(&mut rng).unwrap()))
            .collect();
        let schema = Schema::new(vec![Field::new("Excluido", DataType::Utf8, true)]);
        let batch = RecordBatch::try_new(Arc::new(schema), vec![Arc::new(reasons)]).unwrap();

        let summary = analyze_exclusions(&batch, &ColumnNames::default()).unwrap();
        let table = &summary.reasons;
        assert_eq!(table.total_count(), rows);

        let rounded: f64 = table
            .entries()
            .iter()
            .map(|entry| (table.percentage(entry) * 10.0).round() / 10.0)
            .sum();
        assert!((rounded - 100.0).abs() <= 0.1 * table.entries().len() as f64);
        let exact: f64 = table.entries().iter().map(|e| table.percentage(e)).sum();
        assert!((exact - 100.0).abs() < 1e-9);
    }
}
