//! Critic ratings table.

use std::collections::BTreeMap;

use crate::error::TableError;
use crate::validate::{self, ValidationCollector};

/// Ratings of many critics over a shared set of movie titles.
///
/// Rows are keyed by title. Columns are rater identities in the order the
/// loader saw them; that order is the tie-break order for similarity ranking.
/// The identifier (title) column is stored apart from the raters and can never
/// be one of them.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingsTable {
    /// Name of the identifier column in the source data.
    identifier: String,
    /// Rater identities in column order.
    raters: Vec<String>,
    /// Title -> one optional rating per rater, aligned with `raters`.
    rows: BTreeMap<String, Vec<Option<f64>>>,
}

impl RatingsTable {
    /// Creates a new `RatingsTable` after validating inputs.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::EmptyIdentifier`] if `identifier` is empty.
    ///
    /// Returns [`TableError::Validation`] if any of the following checks fail:
    /// - Rater names are empty, duplicated, or equal to `identifier`
    /// - Titles are empty or duplicated
    /// - A row does not hold exactly one cell per rater
    /// - A present rating is NaN or infinite
    pub fn new(
        identifier: impl Into<String>,
        raters: Vec<String>,
        rows: Vec<(String, Vec<Option<f64>>)>,
    ) -> Result<Self, TableError> {
        let identifier = identifier.into();
        if identifier.is_empty() {
            return Err(TableError::EmptyIdentifier);
        }

        let mut c = ValidationCollector::new();
        c.merge(validate::validate_rater_names(&identifier, &raters));
        c.merge(validate::validate_unique_titles(
            rows.iter().map(|(t, _)| t.as_str()),
        ));
        c.merge(validate::validate_row_widths(
            raters.len(),
            rows.iter().map(|(t, r)| (t.as_str(), r.len())),
        ));
        for (title, ratings) in &rows {
            c.merge(validate::validate_finite_ratings(title, ratings));
        }
        c.finish()?;

        Ok(Self {
            identifier,
            raters,
            rows: rows.into_iter().collect(),
        })
    }

    /// Returns the identifier column name.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the rater identities in column order.
    pub fn raters(&self) -> &[String] {
        &self.raters
    }

    /// Returns the number of raters.
    pub fn n_raters(&self) -> usize {
        self.raters.len()
    }

    /// Returns the number of titles.
    pub fn n_titles(&self) -> usize {
        self.rows.len()
    }

    /// Returns the column position of `rater`, if present.
    pub fn rater_index(&self, rater: &str) -> Option<usize> {
        self.raters.iter().position(|r| r == rater)
    }

    /// Returns `true` if `title` is a row key.
    pub fn contains_title(&self, title: &str) -> bool {
        self.rows.contains_key(title)
    }

    /// Iterates over titles in key order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Returns the rating of rater `column` for `title`.
    ///
    /// `None` when the title is unknown, the column is out of range, or the
    /// cell is unrated.
    pub fn rating(&self, title: &str, column: usize) -> Option<f64> {
        self.rows.get(title)?.get(column).copied().flatten()
    }
}
