//! Error types for cinematch-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the cinematch-io crate.
///
/// Covers missing files, CSV syntax problems, absent columns, unparseable
/// cells, and table validation failures raised while building the typed
/// snapshots.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV reader.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a required column is not present in a file header.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a cell cannot be parsed.
    #[error("{}:{line}: column '{column}': {reason}", path.display())]
    Parse {
        /// Path to the file.
        path: PathBuf,
        /// 1-based line number of the record.
        line: u64,
        /// Column name.
        column: String,
        /// Description of the parse failure.
        reason: String,
    },

    /// Wraps a validation error raised by cinematch-table.
    #[error("table error: {reason}")]
    Table {
        /// Description of the underlying table failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<cinematch_table::TableError> for IoError {
    fn from(e: cinematch_table::TableError) -> Self {
        IoError::Table {
            reason: e.to_string(),
        }
    }
}
