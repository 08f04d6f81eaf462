//! Edge case integration tests.

use cinematch_similarity::{RankConfig, rank_critics};
use cinematch_table::{PersonalRatings, RatingsTable};

fn personal() -> PersonalRatings {
    PersonalRatings::new("me", vec![("A".into(), Some(4.0)), ("B".into(), Some(2.0))]).unwrap()
}

/// A critic with no shared titles in the first column never leads the ranking.
#[test]
fn no_overlap_critic_never_first() {
    let critics = RatingsTable::new(
        "Title",
        vec!["Ghost".into(), "Far".into()],
        vec![
            ("A".into(), vec![None, Some(0.0)]),
            ("B".into(), vec![None, Some(5.0)]),
            ("Z".into(), vec![Some(4.0), None]),
        ],
    )
    .unwrap();

    let ranked = rank_critics(&critics, &personal(), &RankConfig::new(2)).unwrap();
    assert_eq!(ranked.selected(), &["Far".to_string()]);
    assert_eq!(ranked.scores()[0].rater(), "Far");
    assert_eq!(ranked.scores()[1].rater(), "Ghost");
    assert!(ranked.scores()[1].distance().is_infinite());
    assert_eq!(ranked.shortfall(), 1);
}

/// Equal distances keep column order.
#[test]
fn ties_broken_by_column_order() {
    let critics = RatingsTable::new(
        "Title",
        vec!["Z".into(), "Y".into(), "X".into()],
        vec![
            ("A".into(), vec![Some(5.0), Some(3.0), Some(4.0)]),
            ("B".into(), vec![Some(2.0), Some(2.0), Some(2.0)]),
        ],
    )
    .unwrap();

    let ranked = rank_critics(&critics, &personal(), &RankConfig::new(3)).unwrap();
    assert_eq!(
        ranked.selected(),
        &["X".to_string(), "Z".to_string(), "Y".to_string()]
    );
}

/// The identifier column never shows up among scores or selections.
#[test]
fn identifier_never_ranked() {
    let critics = RatingsTable::new(
        "Title",
        vec!["C1".into(), "C2".into()],
        vec![("A".into(), vec![Some(4.0), Some(1.0)])],
    )
    .unwrap();

    let ranked = rank_critics(&critics, &personal(), &RankConfig::new(5)).unwrap();
    assert!(ranked.scores().iter().all(|s| s.rater() != "Title"));
    assert!(ranked.selected().iter().all(|r| r != "Title"));
    assert!(ranked.selected().len() <= 5);
}

/// k larger than the rater count is a shortfall, not an error.
#[test]
fn k_greater_than_raters() {
    let critics = RatingsTable::new(
        "Title",
        vec!["C1".into()],
        vec![("A".into(), vec![Some(1.0)])],
    )
    .unwrap();

    let ranked = rank_critics(&critics, &personal(), &RankConfig::new(3)).unwrap();
    assert_eq!(ranked.selected().len(), 1);
    assert_eq!(ranked.shortfall(), 2);
}

/// Distances are never negative.
#[test]
fn distances_non_negative() {
    let critics = RatingsTable::new(
        "Title",
        vec!["C1".into(), "C2".into(), "C3".into()],
        vec![
            ("A".into(), vec![Some(-3.0), Some(4.0), Some(10.0)]),
            ("B".into(), vec![Some(0.5), None, Some(2.0)]),
        ],
    )
    .unwrap();

    let ranked = rank_critics(&critics, &personal(), &RankConfig::new(3)).unwrap();
    for s in ranked.scores() {
        assert!(s.distance() >= 0.0, "negative distance for {}", s.rater());
    }
}
