//! Utility functions for error handling
//!
//! These helpers attach the path and the purpose of a file operation to
//! the error they return.

use std::fs;
use std::path::Path;

use crate::error::{ReportError, Result};

/// Open an existing file for reading
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(ReportError::NotFound {
            path: path.to_path_buf(),
            purpose: purpose.to_string(),
        });
    }

    if !path.is_file() {
        return Err(ReportError::io(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("path is not a file, expected one for: {purpose}"),
            ),
        ));
    }

    fs::File::open(path).map_err(|e| ReportError::io(path, e))
}

/// Create (or truncate) a file for writing
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if path.is_dir() {
        return Err(ReportError::io(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("path is a directory, expected a file for: {purpose}"),
            ),
        ));
    }

    fs::File::create(path).map_err(|e| ReportError::io(path, e))
}

/// Check that a directory exists and is readable
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() {
        return Err(ReportError::NotFound {
            path: path.to_path_buf(),
            purpose: purpose.to_string(),
        });
    }

    if !path.is_dir() {
        return Err(ReportError::io(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("path is not a directory, expected one for: {purpose}"),
            ),
        ));
    }

    fs::read_dir(path)
        .map(|_| ())
        .map_err(|e| ReportError::io(path, e))
}
