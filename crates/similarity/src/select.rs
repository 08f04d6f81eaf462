//! Top-k nearest critic selection.

use std::cmp::Ordering;

use crate::result::CriticScore;

/// Sorts `scores` nearest-first and returns the names of the first `k`
/// critics that share at least one rated title with the user.
///
/// The sort is stable: equal distances keep column order. Critics without
/// overlap are ordered after every critic with overlap regardless of their
/// distance value, and are never selected.
pub(crate) fn select_nearest(scores: &mut [CriticScore], k: usize) -> Vec<String> {
    // NaN-safe via Ordering::Equal fallback
    scores.sort_by(|a, b| {
        b.has_overlap()
            .cmp(&a.has_overlap())
            .then_with(|| a.distance().partial_cmp(&b.distance()).unwrap_or(Ordering::Equal))
    });

    scores
        .iter()
        .take_while(|s| s.has_overlap())
        .take(k)
        .map(|s| s.rater().to_string())
        .collect()
}
