//! Logging utilities
//!
//! Standardized log lines for file operations of a report run.

use std::path::Path;
use std::time::Duration;

/// Log the start of a file operation
///
/// # Arguments
/// * `operation` - Description of the operation, e.g. "Loading valid cases from"
/// * `path` - Path of the file being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log the completion of a file operation
///
/// # Arguments
/// * `operation` - Past-tense verb, e.g. "loaded" or "wrote"
/// * `path` - Path of the file that was operated on
/// * `records` - Number of records read or written
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    path: &Path,
    records: usize,
    elapsed: Option<Duration>,
) {
    match elapsed {
        Some(duration) => log::info!(
            "Successfully {} {} records ({}) in {:?}",
            operation,
            records,
            path.display(),
            duration
        ),
        None => log::info!(
            "Successfully {} {} records ({})",
            operation,
            records,
            path.display()
        ),
    }
}

/// Log a data-quality or skipped-section warning
///
/// # Arguments
/// * `message` - Warning message
/// * `path` - Optional path related to the warning
pub fn log_warning(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{}: {}", message, path.display());
    } else {
        log::warn!("{message}");
    }
}
