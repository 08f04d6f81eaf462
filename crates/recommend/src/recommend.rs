//! Recommendation entry point.

use cinematch_table::{MovieCatalog, PersonalRatings, RatingsTable};
use tracing::{debug, info};

use crate::average::average_ratings;
use crate::error::RecommendError;
use crate::genre::genre_winners;
use crate::result::{Recommendation, Recommendations};
use crate::unseen::unseen_titles;

/// Maps selected critic names to their column positions.
///
/// An empty selection maps to no columns.
fn resolve_selection(
    critics: &RatingsTable,
    selected: &[String],
) -> Result<Vec<usize>, RecommendError> {
    let mut columns = Vec::with_capacity(selected.len());
    for name in selected {
        let column = critics
            .rater_index(name)
            .ok_or_else(|| RecommendError::UnknownRater { name: name.clone() })?;
        if columns.contains(&column) {
            return Err(RecommendError::DuplicateRater { name: name.clone() });
        }
        columns.push(column);
    }
    Ok(columns)
}

/// Recommends the best-rated unseen titles of every genre.
///
/// # Arguments
///
/// * `critics`: critics' ratings
/// * `personal`: the user's ratings; every listed title counts as seen
/// * `selected`: critics whose ratings are averaged (usually the output of
///   `cinematch_similarity::closest_critics`)
/// * `catalog`: genre, year and runtime per title
///
/// Unseen titles that none of the selected critics rated, and rated titles
/// missing from the catalog, are skipped and counted in the result. With an
/// empty `selected` list no title has an average, so the result is empty and
/// every unseen title counts as undefined.
///
/// # Errors
///
/// Returns [`RecommendError`] if `selected` names a column that is not a
/// rater or repeats a critic.
pub fn recommend(
    critics: &RatingsTable,
    personal: &PersonalRatings,
    selected: &[String],
    catalog: &MovieCatalog,
) -> Result<Recommendations, RecommendError> {
    let columns = resolve_selection(critics, selected)?;

    // Step 1: Unseen titles
    let unseen = unseen_titles(critics, personal);
    let n_unseen = unseen.len();

    // Step 2: Mean of the selected critics per unseen title
    let averaged = average_ratings(critics, &unseen, &columns);

    // Step 3: Join with the catalog
    let mut joined = Vec::with_capacity(averaged.rated.len());
    let mut n_catalog_miss = 0;
    for (title, avg) in averaged.rated {
        match catalog.get(title) {
            Some(movie) => joined.push(Recommendation::from_movie(movie, avg)),
            None => {
                debug!(title, "title not in movie catalog, skipping");
                n_catalog_miss += 1;
            }
        }
    }

    // Step 4: Best rated per genre
    let items = genre_winners(joined);

    info!(
        n_unseen,
        n_undefined_average = averaged.n_undefined,
        n_catalog_miss,
        n_recommended = items.len(),
        "built recommendations"
    );

    Ok(Recommendations::new(
        items,
        n_unseen,
        averaged.n_undefined,
        n_catalog_miss,
    ))
}
