//! Nearest-critic ranking by Euclidean distance over shared ratings.
//!
//! For every rater column of a [`RatingsTable`](cinematch_table::RatingsTable)
//! the distance to the user is
//!
//! ```text
//! d(user, critic) = sqrt( Σ_{t ∈ shared} (user[t] − critic[t])² )
//! ```
//!
//! where `shared` holds the titles both have rated. A critic with nothing in
//! common gets `+inf`, sorts after every critic with overlap, and is never
//! selected.
//!
//! # Quick start
//!
//! ```
//! use cinematch_similarity::{RankConfig, rank_critics};
//! use cinematch_table::{PersonalRatings, RatingsTable};
//!
//! let critics = RatingsTable::new(
//!     "Title",
//!     vec!["C1".into(), "C2".into()],
//!     vec![
//!         ("A".into(), vec![Some(5.0), Some(1.0)]),
//!         ("B".into(), vec![Some(3.0), Some(1.0)]),
//!     ],
//! )
//! .unwrap();
//! let personal =
//!     PersonalRatings::new("me", vec![("A".into(), Some(5.0)), ("B".into(), Some(3.0))]).unwrap();
//!
//! let ranked = rank_critics(&critics, &personal, &RankConfig::new(1)).unwrap();
//! assert_eq!(ranked.selected(), &["C1".to_string()]);
//! ```
//!
//! # Architecture
//!
//! ```text
//! rank_critics()
//!   ├─ validate config
//!   ├─ critic_scores()    (distance.rs)
//!   └─ select_nearest()   (select.rs)
//! ```

pub mod config;
pub mod error;
pub mod rank;
pub mod result;

pub(crate) mod distance;
pub(crate) mod select;

pub use config::{DEFAULT_K, RankConfig};
pub use error::SimilarityError;
pub use rank::{closest_critics, rank_critics};
pub use result::{CriticScore, RankedCritics};
