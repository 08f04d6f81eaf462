//! # cinematch-table
//!
//! Read-only snapshots of the three inputs the recommender works on: the
//! critics' [`RatingsTable`], the user's [`PersonalRatings`], and the
//! [`MovieCatalog`]. Every constructor validates its input and reports all
//! violations at once.

mod catalog;
mod error;
mod personal;
mod ratings;
mod validate;

pub use catalog::{Movie, MovieCatalog};
pub use error::TableError;
pub use personal::PersonalRatings;
pub use ratings::RatingsTable;
