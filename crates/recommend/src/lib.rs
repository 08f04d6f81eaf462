//! Genre-wise recommendations from the ratings of selected critics.
//!
//! Given the critics nearest to a user, [`recommend`] averages their ratings
//! over the titles the user has not seen and keeps, for each primary genre,
//! the title(s) with the highest average.
//!
//! # Quick start
//!
//! ```
//! use cinematch_recommend::recommend;
//! use cinematch_table::{Movie, MovieCatalog, PersonalRatings, RatingsTable};
//!
//! let critics = RatingsTable::new(
//!     "Title",
//!     vec!["C1".into(), "C3".into()],
//!     vec![
//!         ("A".into(), vec![Some(5.0), Some(4.0)]),
//!         ("D".into(), vec![Some(4.0), Some(2.0)]),
//!     ],
//! )
//! .unwrap();
//! let personal = PersonalRatings::new("me", vec![("A".into(), Some(5.0))]).unwrap();
//! let catalog = MovieCatalog::new(vec![Movie::new("D", "Drama", 1999, None)]).unwrap();
//!
//! let recs = recommend(&critics, &personal, &["C1".into(), "C3".into()], &catalog).unwrap();
//! assert_eq!(recs.items()[0].title, "D");
//! assert_eq!(recs.items()[0].avg_rating, 3.0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! recommend()
//!   ├─ resolve selected columns
//!   ├─ unseen_titles()     (unseen.rs)
//!   ├─ average_ratings()   (average.rs)
//!   ├─ catalog join
//!   └─ genre_winners()     (genre.rs)
//! ```

pub mod error;
pub mod recommend;
pub mod result;

pub(crate) mod average;
pub(crate) mod genre;
pub(crate) mod unseen;

pub use error::RecommendError;
pub use recommend::recommend;
pub use result::{RATING_DECIMALS, Recommendation, Recommendations, round_rating};
