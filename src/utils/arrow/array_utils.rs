//! Utilities for working with Arrow arrays.
//!
//! Columns of a loaded table carry whatever type schema inference picked for
//! them. These helpers fetch a column by name and cast it to the type the
//! analysis needs, turning unparsable values into nulls.

use arrow::array::{Array, ArrayRef};
use arrow::compute::kernels::cast::{CastOptions, cast_with_options};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use log::{debug, warn};

use crate::error::{ReportError, Result};

/// Get a column from a record batch cast to the expected type
///
/// # Arguments
///
/// * `batch` - The record batch containing the column
/// * `column_name` - The name of the column to extract
/// * `expected_type` - The data type the caller wants to read
/// * `required` - Whether the column is required (error if missing) or optional (None if missing)
/// * `table` - Name of the table, for error messages
///
/// # Returns
///
/// * `Ok(Some(ArrayRef))` - The column array (converted if necessary) if found
/// * `Ok(None)` - If the column is not found and `required` is false
/// * `Err` - If the column is not found and `required` is true, or the cast is unsupported
pub fn get_column(
    batch: &RecordBatch,
    column_name: &str,
    expected_type: &DataType,
    required: bool,
    table: &'static str,
) -> Result<Option<ArrayRef>> {
    let Ok(idx) = batch.schema().index_of(column_name) else {
        if required {
            return Err(ReportError::ColumnNotFound {
                column: column_name.to_string(),
                table,
            });
        }
        warn!("Column '{column_name}' not found in {table} table, skipping dependent statistics");
        return Ok(None);
    };

    let column = batch.column(idx);
    let actual_type = column.data_type();

    if actual_type == expected_type {
        return Ok(Some(column.clone()));
    }

    debug!("Casting column '{column_name}' from {actual_type:?} to {expected_type:?}");

    // Safe casting turns unparsable values into nulls instead of failing
    let options = CastOptions {
        safe: true,
        ..CastOptions::default()
    };
    let converted = cast_with_options(column, expected_type, &options).map_err(|_| {
        ReportError::ColumnType {
            column: column_name.to_string(),
            expected: type_name(expected_type),
        }
    })?;

    Ok(Some(converted))
}

/// Downcast a column to a specific array type with clear error messages
///
/// # Type Parameters
///
/// * `A` - The target array type to downcast to
pub fn downcast_array<'a, A: Array + 'static>(
    array: &'a ArrayRef,
    column_name: &str,
    expected_type_name: &'static str,
) -> Result<&'a A> {
    array
        .as_any()
        .downcast_ref::<A>()
        .ok_or_else(|| ReportError::ColumnType {
            column: column_name.to_string(),
            expected: expected_type_name,
        })
}

fn type_name(data_type: &DataType) -> &'static str {
    match data_type {
        DataType::Utf8 => "text",
        DataType::Float64 => "number",
        DataType::Boolean => "boolean",
        _ => "the requested type",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::array::{Float64Array, Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};

    use super::*;

    fn batch() -> RecordBatch {
        let schema = Schema::new(vec![
            Field::new("n", DataType::Int64, true),
            Field::new("s", DataType::Utf8, true),
        ]);
        RecordBatch::try_new(
            Arc::new(schema),
            vec![
                Arc::new(Int64Array::from(vec![Some(1), None, Some(3)])),
                Arc::new(StringArray::from(vec![Some("4"), Some("x"), None])),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_get_column_casts_numeric() {
        let batch = batch();
        let column = get_column(&batch, "n", &DataType::Float64, true, "test")
            .unwrap()
            .unwrap();
        let values = downcast_array::<Float64Array>(&column, "n", "number").unwrap();
        assert_eq!(values.value(0), 1.0);
        assert!(values.is_null(1));
    }

    #[test]
    fn test_unparsable_text_becomes_null() {
        let batch = batch();
        let column = get_column(&batch, "s", &DataType::Float64, true, "test")
            .unwrap()
            .unwrap();
        let values = downcast_array::<Float64Array>(&column, "s", "number").unwrap();
        assert_eq!(values.value(0), 4.0);
        assert!(values.is_null(1));
        assert!(values.is_null(2));
    }

    #[test]
    fn test_missing_column() {
        let batch = batch();
        assert!(
            get_column(&batch, "absent", &DataType::Utf8, false, "test")
                .unwrap()
                .is_none()
        );
        assert!(matches!(
            get_column(&batch, "absent", &DataType::Utf8, true, "test"),
            Err(ReportError::ColumnNotFound { .. })
        ));
    }
}
