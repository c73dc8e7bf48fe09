//! Derived per-case attributes
//!
//! The valid-cases table is extended with three columns computed once per
//! run: the resuscitation group, the favorable-CPC flag and the age band.

use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray, UInt8Array};
use arrow::record_batch::RecordBatch;
use arrow_schema::{DataType, Field, Schema};

use crate::algorithm::classification::{
    AgeBand, ResuscitationClassifier, ResuscitationGroup, ResuscitationInput, age_band,
    favorable_cpc,
};
use crate::analysis::VALID_TABLE;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::utils::arrow::{flag_values, float_values, string_values};
use crate::utils::logging::log_warning;

/// Name of the derived resuscitation-group column
pub const RESUSCITATION_GROUP_COLUMN: &str = "resuscitation_group";
/// Name of the derived favorable-CPC column (0/1)
pub const FAVORABLE_CPC_COLUMN: &str = "favorable_cpc";
/// Name of the derived age-band column (null when age is missing)
pub const AGE_BAND_COLUMN: &str = "age_band";

const DERIVED_COLUMNS: [&str; 3] = [
    RESUSCITATION_GROUP_COLUMN,
    FAVORABLE_CPC_COLUMN,
    AGE_BAND_COLUMN,
];

/// Derived attributes, one entry per valid case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedAttributes {
    /// Resuscitation group of every case
    pub groups: Vec<ResuscitationGroup>,
    /// Favorable-CPC flag of every case
    pub favorable_cpc: Vec<u8>,
    /// Age band of every case, `None` without a usable age;
    /// `None` as a whole when the table has no age column
    pub age_bands: Option<Vec<Option<AgeBand>>>,
}

impl DerivedAttributes {
    /// Number of cases that got no age band
    #[must_use]
    pub fn missing_age_count(&self) -> usize {
        self.age_bands
            .as_ref()
            .map_or(0, |bands| bands.iter().filter(|b| b.is_none()).count())
    }
}

/// Compute the derived attributes of every valid case
pub fn derive_attributes(valid: &RecordBatch, config: &ReportConfig) -> Result<DerivedAttributes> {
    let columns = &config.columns;

    let transtelephonic = flag_values(valid, &columns.transtelephonic_cpr, true, VALID_TABLE)?
        .unwrap_or_default();
    let bystander =
        string_values(valid, &columns.bystander_cpr, true, VALID_TABLE)?.unwrap_or_default();
    let cpc = string_values(valid, &columns.cpc, true, VALID_TABLE)?.unwrap_or_default();

    let classifier = ResuscitationClassifier::new(&config.vocabulary);
    let groups = transtelephonic
        .iter()
        .zip(&bystander)
        .map(|(&transtelephonic, bystander)| {
            classifier.classify(&ResuscitationInput {
                transtelephonic,
                bystander: bystander.as_deref(),
            })
        })
        .collect();

    let favorable_cpc = cpc.iter().map(|v| favorable_cpc(v.as_deref())).collect();

    let age_bands = float_values(valid, &columns.age, false, VALID_TABLE)?
        .map(|ages| ages.into_iter().map(age_band).collect::<Vec<_>>());

    let derived = DerivedAttributes {
        groups,
        favorable_cpc,
        age_bands,
    };

    let missing_age = derived.missing_age_count();
    if missing_age > 0 {
        log_warning(
            &format!(
                "{missing_age} valid records have no usable age and are left out of the age-stratified statistics"
            ),
            None,
        );
    }

    Ok(derived)
}

/// Return the valid-cases table extended with the derived columns
///
/// An input column that already carries one of the derived names is replaced.
pub fn derive_columns(valid: &RecordBatch, config: &ReportConfig) -> Result<RecordBatch> {
    let derived = derive_attributes(valid, config)?;

    let mut derived_columns: Vec<(Field, ArrayRef)> = vec![
        (
            Field::new(RESUSCITATION_GROUP_COLUMN, DataType::Utf8, false),
            Arc::new(StringArray::from_iter_values(
                derived.groups.iter().map(|g| g.label()),
            )),
        ),
        (
            Field::new(FAVORABLE_CPC_COLUMN, DataType::UInt8, false),
            Arc::new(UInt8Array::from(derived.favorable_cpc)),
        ),
    ];
    if let Some(bands) = &derived.age_bands {
        derived_columns.push((
            Field::new(AGE_BAND_COLUMN, DataType::Utf8, true),
            Arc::new(StringArray::from(
                bands
                    .iter()
                    .map(|b| b.map(AgeBand::label))
                    .collect::<Vec<_>>(),
            )),
        ));
    }

    let schema = valid.schema();
    let mut fields = Vec::with_capacity(schema.fields().len() + derived_columns.len());
    let mut arrays = Vec::with_capacity(fields.capacity());
    for (field, array) in schema.fields().iter().zip(valid.columns()) {
        if DERIVED_COLUMNS.contains(&field.name().as_str()) {
            log_warning(
                &format!("Input column '{}' is replaced by the derived column", field.name()),
                None,
            );
            continue;
        }
        fields.push(field.as_ref().clone());
        arrays.push(Arc::clone(array));
    }
    for (field, array) in derived_columns {
        fields.push(field);
        arrays.push(array);
    }

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?)
}
