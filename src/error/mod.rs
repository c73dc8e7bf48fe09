//! Error handling for the report generator.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;

/// Errors that can abort a report run
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// An input file or directory does not exist
    #[error("File not found: {} ({purpose})", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
        /// What the path was needed for
        purpose: String,
    },

    /// Error opening, creating or reading a file
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// Path of the file involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The file could not be parsed as delimited tabular text
    #[error("Malformed tabular data in {}: {source}", path.display())]
    Malformed {
        /// Path of the offending file
        path: PathBuf,
        /// Parser error
        #[source]
        source: ArrowError,
    },

    /// Arrow error outside of file parsing
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Conversion between serde rows and Arrow tables failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_arrow::Error),

    /// A required column is absent from a table
    #[error("Column '{column}' not found in {table} table")]
    ColumnNotFound {
        /// Expected column name
        column: String,
        /// Table the column was expected in
        table: &'static str,
    },

    /// A column exists but holds a type that cannot be read as expected
    #[error("Column '{column}' cannot be read as {expected}")]
    ColumnType {
        /// Column name
        column: String,
        /// Expected logical type
        expected: &'static str,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing the console report failed
    #[error("Failed to write report output: {0}")]
    Output(#[from] io::Error),
}

impl ReportError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a parser error with the path of the file being parsed
    pub fn malformed(path: impl Into<PathBuf>, source: ArrowError) -> Self {
        Self::Malformed {
            path: path.into(),
            source,
        }
    }
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
