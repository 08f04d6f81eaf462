//! Mean rating of the selected critics.

use cinematch_table::RatingsTable;
use tracing::debug;

/// Mean of the present ratings of `columns` for `title`.
///
/// Returns `None` when every selected cell is unrated.
pub(crate) fn mean_rating(critics: &RatingsTable, title: &str, columns: &[usize]) -> Option<f64> {
    let (sum, n) = columns
        .iter()
        .filter_map(|&c| critics.rating(title, c))
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Averages for a set of titles.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Averaged<'a> {
    /// `(title, mean)` pairs in input order.
    pub(crate) rated: Vec<(&'a str, f64)>,
    /// Titles dropped because no selected critic rated them.
    pub(crate) n_undefined: usize,
}

/// Computes [`mean_rating`] for every title, dropping undefined averages.
pub(crate) fn average_ratings<'a>(
    critics: &RatingsTable,
    titles: &[&'a str],
    columns: &[usize],
) -> Averaged<'a> {
    let mut out = Averaged::default();
    for &title in titles {
        match mean_rating(critics, title, columns) {
            Some(avg) => out.rated.push((title, avg)),
            None => {
                debug!(title, "no selected critic rated this title, skipping");
                out.n_undefined += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn critics() -> RatingsTable {
        RatingsTable::new(
            "Title",
            vec!["C1".into(), "C2".into(), "C3".into()],
            vec![
                ("A".into(), vec![Some(4.0), Some(2.0), Some(9.0)]),
                ("B".into(), vec![Some(5.0), None, None]),
                ("C".into(), vec![None, None, Some(1.0)]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_mean_over_selected_columns_only() {
        let avg = mean_rating(&critics(), "A", &[0, 1]).unwrap();
        assert_abs_diff_eq!(avg, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_cells_not_counted_as_zero() {
        let avg = mean_rating(&critics(), "B", &[0, 1]).unwrap();
        assert_abs_diff_eq!(avg, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_all_missing_is_undefined() {
        assert!(mean_rating(&critics(), "C", &[0, 1]).is_none());
    }

    #[test]
    fn test_average_ratings_counts_undefined() {
        let out = average_ratings(&critics(), &["A", "B", "C"], &[0, 1]);
        assert_eq!(out.rated.len(), 2);
        assert_eq!(out.rated[0].0, "A");
        assert_eq!(out.rated[1].0, "B");
        assert_eq!(out.n_undefined, 1);
    }
}
