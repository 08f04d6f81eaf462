//! Error types for cinematch-table.

/// Error type for all fallible operations in the cinematch-table crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TableError {
    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a table is built with an empty identifier column name.
    #[error("identifier column name must not be empty")]
    EmptyIdentifier,

    /// Returned when a personal ratings table has an empty user name.
    #[error("user name must not be empty")]
    EmptyUser,
}
