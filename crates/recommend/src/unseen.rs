//! Titles the user has not seen.

use cinematch_table::{PersonalRatings, RatingsTable};

/// Returns the ratings-table titles absent from the user's list, in key order.
///
/// A title the user listed without a rating still counts as seen. Whether any
/// critic rated a title plays no part here.
pub(crate) fn unseen_titles<'a>(
    critics: &'a RatingsTable,
    personal: &PersonalRatings,
) -> Vec<&'a str> {
    critics
        .titles()
        .filter(|t| !personal.contains_title(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_difference_by_key() {
        let critics = RatingsTable::new(
            "Title",
            vec!["C1".into()],
            vec![
                ("A".into(), vec![Some(1.0)]),
                ("B".into(), vec![None]),
                ("C".into(), vec![Some(2.0)]),
                ("a".into(), vec![Some(2.0)]),
            ],
        )
        .unwrap();
        let personal =
            PersonalRatings::new("me", vec![("A".into(), Some(3.0)), ("C".into(), None)]).unwrap();

        // "B" is unseen even though nobody rated it; "a" differs from "A" by case.
        assert_eq!(unseen_titles(&critics, &personal), vec!["B", "a"]);
    }

    #[test]
    fn test_all_seen() {
        let critics = RatingsTable::new(
            "Title",
            vec!["C1".into()],
            vec![("A".into(), vec![Some(1.0)])],
        )
        .unwrap();
        let personal = PersonalRatings::new("me", vec![("A".into(), Some(3.0))]).unwrap();
        assert!(unseen_titles(&critics, &personal).is_empty());
    }
}
