//! Error types for the cinematch-recommend crate.

/// Error type for all fallible operations in the cinematch-recommend crate.
///
/// Skipped titles are not errors; they are counted in
/// [`Recommendations`](crate::Recommendations). An empty selection recommends
/// nothing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecommendError {
    /// Returned when a selected critic is not a rater column.
    #[error("selected critic '{name}' is not a rater in the ratings table")]
    UnknownRater {
        /// The unknown critic name.
        name: String,
    },

    /// Returned when a critic is selected more than once.
    #[error("critic '{name}' selected more than once")]
    DuplicateRater {
        /// The repeated critic name.
        name: String,
    },
}
