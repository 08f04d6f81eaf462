//! Per-genre best-rated selection.

use std::collections::BTreeMap;

use crate::result::Recommendation;

/// Highest average rating per genre.
pub(crate) fn genre_maxima(rows: &[Recommendation]) -> BTreeMap<&str, f64> {
    let mut maxima: BTreeMap<&str, f64> = BTreeMap::new();
    for r in rows {
        maxima
            .entry(r.genre.as_str())
            .and_modify(|m| {
                if r.avg_rating > *m {
                    *m = r.avg_rating;
                }
            })
            .or_insert(r.avg_rating);
    }
    maxima
}

/// Keeps, within each genre, every row whose average reaches the genre
/// maximum.
///
/// The comparison is `>=` against the precomputed maximum, so every row tied
/// at the top survives. Output is grouped by genre in key order; rows keep
/// their input order inside a genre.
pub(crate) fn genre_winners(rows: Vec<Recommendation>) -> Vec<Recommendation> {
    let maxima: BTreeMap<String, f64> = genre_maxima(&rows)
        .into_iter()
        .map(|(g, m)| (g.to_string(), m))
        .collect();

    let mut groups: BTreeMap<String, Vec<Recommendation>> = BTreeMap::new();
    for r in rows {
        if r.avg_rating >= maxima[&r.genre] {
            groups.entry(r.genre.clone()).or_default().push(r);
        }
    }

    groups.into_values().flatten().collect()
}
