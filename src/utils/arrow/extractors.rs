//! Column extraction utilities for Arrow record batches
//!
//! These functions read a whole column at once into plain Rust values with
//! missing entries as `None`. Absent optional columns yield `Ok(None)`.

use arrow::array::{Array, Float64Array, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::utils::arrow::array_utils::{downcast_array, get_column};

/// Extract a column as text values
///
/// Empty or whitespace-only strings are treated as missing.
pub fn string_values(
    batch: &RecordBatch,
    column_name: &str,
    required: bool,
    table: &'static str,
) -> Result<Option<Vec<Option<String>>>> {
    let Some(array) = get_column(batch, column_name, &DataType::Utf8, required, table)? else {
        return Ok(None);
    };
    let strings = downcast_array::<StringArray>(&array, column_name, "text")?;

    let values = (0..strings.len())
        .map(|row| {
            if strings.is_null(row) {
                return None;
            }
            let value = strings.value(row).trim();
            (!value.is_empty()).then(|| value.to_string())
        })
        .collect();

    Ok(Some(values))
}

/// Extract a column as floating point values
///
/// Non-numeric entries are returned as `None`.
pub fn float_values(
    batch: &RecordBatch,
    column_name: &str,
    required: bool,
    table: &'static str,
) -> Result<Option<Vec<Option<f64>>>> {
    let Some(array) = get_column(batch, column_name, &DataType::Float64, required, table)? else {
        return Ok(None);
    };
    let floats = downcast_array::<Float64Array>(&array, column_name, "number")?;

    let values = (0..floats.len())
        .map(|row| {
            (!floats.is_null(row))
                .then(|| floats.value(row))
                .filter(|value| value.is_finite())
        })
        .collect();

    Ok(Some(values))
}

/// Extract a 0/1 indicator column as booleans
///
/// See [`parse_flag`] for which values count as set.
pub fn flag_values(
    batch: &RecordBatch,
    column_name: &str,
    required: bool,
    table: &'static str,
) -> Result<Option<Vec<bool>>> {
    Ok(string_values(batch, column_name, required, table)?.map(|values| {
        values
            .iter()
            .map(|value| parse_flag(value.as_deref()))
            .collect()
    }))
}

/// Interpret an indicator value
///
/// A value is set when it is numerically equal to 1 or is the boolean
/// literal `true`. Everything else, missing values included, is unset.
#[must_use]
pub fn parse_flag(value: Option<&str>) -> bool {
    let Some(value) = value.map(str::trim) else {
        return false;
    };
    match value.parse::<f64>() {
        Ok(number) => (number - 1.0).abs() < f64::EPSILON,
        Err(_) => value.eq_ignore_ascii_case("true"),
    }
}
