//! Critic ranking entry points.

use cinematch_table::{PersonalRatings, RatingsTable};
use tracing::{debug, info, warn};

use crate::config::RankConfig;
use crate::distance::critic_scores;
use crate::error::SimilarityError;
use crate::result::RankedCritics;
use crate::select::select_nearest;

/// Ranks every critic by distance to the user and selects the nearest k.
///
/// # Arguments
///
/// * `critics`: critics' ratings; the identifier column is never a candidate
/// * `personal`: the user's ratings
/// * `config`: ranking configuration (k)
///
/// When fewer than k critics share a rated title with the user the result
/// holds fewer selections; check [`RankedCritics::shortfall`].
///
/// # Errors
///
/// Returns [`SimilarityError::InvalidK`] for `k == 0` and
/// [`SimilarityError::NoRaters`] when `critics` has no rater columns.
pub fn rank_critics(
    critics: &RatingsTable,
    personal: &PersonalRatings,
    config: &RankConfig,
) -> Result<RankedCritics, SimilarityError> {
    config.validate()?;
    if critics.n_raters() == 0 {
        return Err(SimilarityError::NoRaters);
    }

    // Step 1: Distance per rater column
    let mut scores = critic_scores(critics, personal);
    for s in scores.iter().filter(|s| !s.has_overlap()) {
        debug!(rater = %s.rater(), "no shared rated titles, ranking last");
    }

    // Step 2: Sort and select
    let selected = select_nearest(&mut scores, config.k());

    if selected.len() < config.k() {
        warn!(
            requested = config.k(),
            selected = selected.len(),
            "fewer critics share rated titles with the user than requested"
        );
    }
    info!(
        n_candidates = scores.len(),
        selected = ?selected,
        "ranked critics"
    );

    Ok(RankedCritics::new(scores, selected, config.k()))
}

/// Returns the names of the k critics nearest to the user, nearest first.
///
/// Shorthand for [`rank_critics`] when the scores are not needed.
///
/// # Errors
///
/// Same as [`rank_critics`].
pub fn closest_critics(
    critics: &RatingsTable,
    personal: &PersonalRatings,
    config: &RankConfig,
) -> Result<Vec<String>, SimilarityError> {
    rank_critics(critics, personal, config).map(RankedCritics::into_selected)
}
