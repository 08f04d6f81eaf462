//! Error types for the cinematch-similarity crate.

/// Error type for all fallible operations in the cinematch-similarity crate.
///
/// Raters without shared titles and a short candidate list are not errors;
/// see [`RankedCritics::shortfall`](crate::RankedCritics::shortfall).
#[derive(Debug, Clone, thiserror::Error)]
pub enum SimilarityError {
    /// Returned when k is zero.
    #[error("k must be >= 1, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
    },

    /// Returned when the ratings table has no rater columns.
    #[error("ratings table has no rater columns")]
    NoRaters,
}
