//! Output types for critic ranking.

/// Similarity of one critic to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct CriticScore {
    /// Rater identity.
    rater: String,
    /// Column position in the ratings table.
    column: usize,
    /// Euclidean distance over shared titles; `+inf` without overlap.
    distance: f64,
    /// Number of titles rated by both the user and this critic.
    n_shared: usize,
}

impl CriticScore {
    /// Creates a new `CriticScore`.
    pub(crate) fn new(rater: String, column: usize, distance: f64, n_shared: usize) -> Self {
        Self {
            rater,
            column,
            distance,
            n_shared,
        }
    }

    /// Returns the rater identity.
    pub fn rater(&self) -> &str {
        &self.rater
    }

    /// Returns the column position in the ratings table.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the distance (`f64::INFINITY` when nothing is shared).
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the number of shared rated titles.
    pub fn n_shared(&self) -> usize {
        self.n_shared
    }

    /// Returns `true` if the critic rated at least one title the user rated.
    pub fn has_overlap(&self) -> bool {
        self.n_shared > 0
    }
}

/// Result of a critic ranking query.
///
/// Holds every candidate score sorted nearest-first and the selected critic
/// names (at most k, all with overlap).
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCritics {
    scores: Vec<CriticScore>,
    selected: Vec<String>,
    k: usize,
}

impl RankedCritics {
    /// Creates a new `RankedCritics`.
    pub(crate) fn new(scores: Vec<CriticScore>, selected: Vec<String>, k: usize) -> Self {
        Self {
            scores,
            selected,
            k,
        }
    }

    /// Returns the selected critic names, nearest first.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Consumes the result and returns the selected critic names.
    pub fn into_selected(self) -> Vec<String> {
        self.selected
    }

    /// Returns every candidate score, nearest first.
    pub fn scores(&self) -> &[CriticScore] {
        &self.scores
    }

    /// Returns the requested number of critics.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns how many of the requested critics could not be selected.
    pub fn shortfall(&self) -> usize {
        self.k.saturating_sub(self.selected.len())
    }

    /// Returns the distance of `rater`, if it was a candidate.
    pub fn distance_of(&self, rater: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.rater == rater)
            .map(|s| s.distance)
    }
}
