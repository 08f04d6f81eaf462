//! Output types for recommendation queries.

use cinematch_table::Movie;
use serde::Serialize;

/// Decimal places used when displaying an average rating.
pub const RATING_DECIMALS: u32 = 2;

/// Rounds `value` to `decimals` places, ties to even (`4.125` -> `4.12`).
pub fn round_rating(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round_ties_even() / scale
}

/// One recommended unseen title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Title (catalog key).
    pub title: String,
    /// Primary genre the title competed in.
    pub genre: String,
    /// Mean of the selected critics' present ratings, unrounded.
    pub avg_rating: f64,
    /// Release year.
    pub year: i32,
    /// Runtime in minutes, when catalogued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<f64>,
}

impl Recommendation {
    /// Builds a recommendation from catalog metadata and an average rating.
    pub(crate) fn from_movie(movie: &Movie, avg_rating: f64) -> Self {
        Self {
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            avg_rating,
            year: movie.year,
            runtime: movie.runtime,
        }
    }

    /// Returns the average rating rounded for display.
    pub fn rounded_rating(&self) -> f64 {
        round_rating(self.avg_rating, RATING_DECIMALS)
    }
}

/// Result of a recommendation query.
///
/// Items are ordered by genre, then title. The counters report how many
/// unseen titles were considered and why some of them were dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Recommendations {
    items: Vec<Recommendation>,
    n_unseen: usize,
    n_undefined_average: usize,
    n_catalog_miss: usize,
}

impl Recommendations {
    /// Creates a new `Recommendations`.
    pub(crate) fn new(
        items: Vec<Recommendation>,
        n_unseen: usize,
        n_undefined_average: usize,
        n_catalog_miss: usize,
    ) -> Self {
        Self {
            items,
            n_unseen,
            n_undefined_average,
            n_catalog_miss,
        }
    }

    /// Returns the recommendations.
    pub fn items(&self) -> &[Recommendation] {
        &self.items
    }

    /// Returns the number of recommendations.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is recommended.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of titles the user has not seen.
    pub fn n_unseen(&self) -> usize {
        self.n_unseen
    }

    /// Returns the number of unseen titles none of the selected critics rated.
    pub fn n_undefined_average(&self) -> usize {
        self.n_undefined_average
    }

    /// Returns the number of rated unseen titles missing from the catalog.
    pub fn n_catalog_miss(&self) -> usize {
        self.n_catalog_miss
    }

    /// Iterates over the distinct genres present, in order.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        let mut last: Option<&str> = None;
        self.items.iter().filter_map(move |r| {
            let g = r.genre.as_str();
            if last == Some(g) {
                None
            } else {
                last = Some(g);
                Some(g)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn rec(title: &str, genre: &str, avg: f64) -> Recommendation {
        Recommendation::from_movie(&Movie::new(title, genre, 2000, None), avg)
    }

    #[test]
    fn test_round_rating() {
        assert_abs_diff_eq!(round_rating(3.0, 2), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(round_rating(10.0 / 3.0, 2), 3.33, epsilon = 1e-12);
        assert_abs_diff_eq!(round_rating(4.666_666, 2), 4.67, epsilon = 1e-12);
        assert_abs_diff_eq!(round_rating(4.666_666, 0), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_round_rating_ties_to_even() {
        // mean of 4 and 4.25
        assert_abs_diff_eq!(round_rating((4.0 + 4.25) / 2.0, 2), 4.12, epsilon = 1e-12);
        assert_abs_diff_eq!(round_rating(4.375, 2), 4.38, epsilon = 1e-12);
        assert_abs_diff_eq!(round_rating(2.5, 0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rounded_rating_keeps_raw_value() {
        let r = rec("Heat", "Crime", 11.0 / 3.0);
        assert_abs_diff_eq!(r.avg_rating, 11.0 / 3.0, epsilon = 1e-15);
        assert_abs_diff_eq!(r.rounded_rating(), 3.67, epsilon = 1e-12);
    }

    #[test]
    fn test_accessors() {
        let result = Recommendations::new(
            vec![rec("A", "Crime", 4.0), rec("B", "Crime", 4.0), rec("C", "Drama", 3.0)],
            5,
            1,
            1,
        );
        assert_eq!(result.len(), 3);
        assert!(!result.is_empty());
        assert_eq!(result.n_unseen(), 5);
        assert_eq!(result.n_undefined_average(), 1);
        assert_eq!(result.n_catalog_miss(), 1);
        let genres: Vec<&str> = result.genres().collect();
        assert_eq!(genres, vec!["Crime", "Drama"]);
    }

    #[test]
    fn test_runtime_omitted_from_json_when_absent() {
        let json = serde_json::to_string(&rec("A", "Crime", 4.0)).unwrap();
        assert!(!json.contains("runtime"));
        let with_runtime =
            Recommendation::from_movie(&Movie::new("B", "Crime", 1999, Some(120.0)), 4.0);
        let json = serde_json::to_string(&with_runtime).unwrap();
        assert!(json.contains("\"runtime\":120.0"));
    }
}
