//! Configuration for critic ranking.

use crate::error::SimilarityError;

/// Number of critics selected when no explicit k is given.
pub const DEFAULT_K: usize = 3;

/// Configuration for a critic ranking query.
///
/// # Example
///
/// ```
/// use cinematch_similarity::RankConfig;
///
/// let config = RankConfig::new(5);
/// assert_eq!(config.k(), 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RankConfig {
    /// Number of nearest critics to select.
    k: usize,
}

impl RankConfig {
    /// Creates a new configuration with the given k.
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Sets the number of critics to select.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Returns the number of nearest critics to select.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Validates this configuration.
    ///
    /// Returns an error if k < 1.
    pub fn validate(&self) -> Result<(), SimilarityError> {
        if self.k < 1 {
            return Err(SimilarityError::InvalidK { k: self.k });
        }
        Ok(())
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self::new(DEFAULT_K)
    }
}
