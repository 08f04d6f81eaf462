//! Integration tests for SimilarityError variants.

use cinematch_similarity::{RankConfig, SimilarityError, rank_critics};
use cinematch_table::{PersonalRatings, RatingsTable};

fn personal() -> PersonalRatings {
    PersonalRatings::new("me", vec![("A".into(), Some(4.0))]).unwrap()
}

#[test]
fn error_invalid_k() {
    let critics = RatingsTable::new(
        "Title",
        vec!["C1".into()],
        vec![("A".into(), vec![Some(4.0)])],
    )
    .unwrap();
    let result = rank_critics(&critics, &personal(), &RankConfig::new(0));
    assert!(matches!(result, Err(SimilarityError::InvalidK { k: 0 })));
}

#[test]
fn error_no_raters() {
    let critics = RatingsTable::new("Title", vec![], vec![("A".into(), vec![])]).unwrap();
    let result = rank_critics(&critics, &personal(), &RankConfig::default());
    assert!(matches!(result, Err(SimilarityError::NoRaters)));
}
