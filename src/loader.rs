//! Delimited-text table loading
//!
//! Both input tables are read whole into a single Arrow [`RecordBatch`].
//! Loading is all-or-nothing: a missing or unparsable file fails the run.

use std::io::Seek;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use arrow::compute::concat_batches;
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::record_batch::RecordBatch;

use crate::config::ReportConfig;
use crate::error::util::safe_open_file;
use crate::error::{ReportError, Result};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// The two input tables of a run
#[derive(Debug, Clone)]
pub struct Datasets {
    /// Cases included in the analysis
    pub valid: RecordBatch,
    /// Cases excluded upstream, with the exclusion reason
    pub excluded: RecordBatch,
}

/// Read a delimited text file with a header row into one record batch
///
/// Column types are inferred from every row of the file, so a column mixing
/// numbers and text is read as text.
pub fn read_delimited(path: &Path, delimiter: u8) -> Result<RecordBatch> {
    let start = Instant::now();
    log_operation_start("Reading table from", path);

    let mut file = safe_open_file(path, "reading delimited table")?;
    let format = Format::default()
        .with_header(true)
        .with_delimiter(delimiter);

    let (schema, _) = format
        .infer_schema(&mut file, None)
        .map_err(|e| ReportError::malformed(path, e))?;
    file.rewind().map_err(|e| ReportError::io(path, e))?;

    let schema = Arc::new(schema);
    let reader = ReaderBuilder::new(Arc::clone(&schema))
        .with_format(format)
        .build(file)
        .map_err(|e| ReportError::malformed(path, e))?;

    let batches = reader
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| ReportError::malformed(path, e))?;
    let table = concat_batches(&schema, &batches)?;

    log_operation_complete("loaded", path, table.num_rows(), Some(start.elapsed()));
    Ok(table)
}

/// Load the valid-cases and excluded-cases tables named by the configuration
pub fn load_datasets(config: &ReportConfig) -> Result<Datasets> {
    let valid = read_delimited(&config.valid_path(), config.delimiter)?;
    let excluded = read_delimited(&config.excluded_path(), config.delimiter)?;
    Ok(Datasets { valid, excluded })
}
