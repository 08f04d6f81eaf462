//! Euclidean distance over commonly rated titles.

use cinematch_table::{PersonalRatings, RatingsTable};

use crate::result::CriticScore;

/// Squared-difference sum and number of titles rated by both parties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Overlap {
    pub(crate) sq_sum: f64,
    pub(crate) n_shared: usize,
}

impl Overlap {
    /// Euclidean distance, or `+inf` when nothing is shared.
    pub(crate) fn distance(&self) -> f64 {
        if self.n_shared == 0 {
            f64::INFINITY
        } else {
            self.sq_sum.sqrt()
        }
    }
}

/// Joins the user's ratings with rater `column` on title and accumulates
/// squared differences.
///
/// ```text
/// sq_sum = Σ_{t ∈ personal ∩ rater} (personal[t] − rater[t])²
/// ```
///
/// Titles missing a rating on either side do not participate.
pub(crate) fn shared_overlap(
    personal: &PersonalRatings,
    critics: &RatingsTable,
    column: usize,
) -> Overlap {
    let mut sq_sum = 0.0;
    let mut n_shared = 0;
    for (title, mine) in personal.rated() {
        if let Some(theirs) = critics.rating(title, column) {
            let d = mine - theirs;
            sq_sum += d * d;
            n_shared += 1;
        }
    }
    Overlap { sq_sum, n_shared }
}

/// Scores every rater column of `critics` against `personal`, in column order.
///
/// The identifier column is not a rater and never produces a score.
pub(crate) fn critic_scores(critics: &RatingsTable, personal: &PersonalRatings) -> Vec<CriticScore> {
    critics
        .raters()
        .iter()
        .enumerate()
        .map(|(column, rater)| {
            let overlap = shared_overlap(personal, critics, column);
            CriticScore::new(rater.clone(), column, overlap.distance(), overlap.n_shared)
        })
        .collect()
}
