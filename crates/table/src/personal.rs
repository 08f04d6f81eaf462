//! Personal ratings of the target user.

use std::collections::BTreeMap;

use crate::error::TableError;
use crate::validate::{self, ValidationCollector};

/// The target user's own ratings, keyed by title.
///
/// A title may be present without a rating. It still counts as seen, but it
/// contributes nothing to a distance.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalRatings {
    /// Display name of the user (the rating column header).
    user: String,
    /// Title -> optional rating.
    ratings: BTreeMap<String, Option<f64>>,
}

impl PersonalRatings {
    /// Creates a new `PersonalRatings` after validating inputs.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::EmptyUser`] if `user` is empty, and
    /// [`TableError::Validation`] for empty or duplicate titles and
    /// non-finite ratings.
    pub fn new(
        user: impl Into<String>,
        ratings: Vec<(String, Option<f64>)>,
    ) -> Result<Self, TableError> {
        let user = user.into();
        if user.is_empty() {
            return Err(TableError::EmptyUser);
        }

        let mut c = ValidationCollector::new();
        c.merge(validate::validate_unique_titles(
            ratings.iter().map(|(t, _)| t.as_str()),
        ));
        for (title, rating) in &ratings {
            c.merge(validate::validate_finite_ratings(title, [rating]));
        }
        c.finish()?;

        Ok(Self {
            user,
            ratings: ratings.into_iter().collect(),
        })
    }

    /// Returns the user's display name.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the number of titles, rated or not.
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// Returns `true` when the user listed no titles.
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Returns `true` if the user has seen `title`.
    pub fn contains_title(&self, title: &str) -> bool {
        self.ratings.contains_key(title)
    }

    /// Returns the user's rating of `title`, if any.
    pub fn rating(&self, title: &str) -> Option<f64> {
        self.ratings.get(title).copied().flatten()
    }

    /// Iterates over present ratings as `(title, rating)`.
    pub fn rated(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ratings
            .iter()
            .filter_map(|(t, r)| r.map(|v| (t.as_str(), v)))
    }
}
