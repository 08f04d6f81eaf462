//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering multiple validation errors
//! into a single [`TableError::Validation`], plus standalone helpers that check
//! the key and value invariants shared by every table.

use std::collections::BTreeSet;

use crate::error::TableError;

// ---------------------------------------------------------------------------
// ValidationCollector
// ---------------------------------------------------------------------------

/// Accumulates validation errors and converts them into a single
/// [`TableError::Validation`].
///
/// Push zero or more messages, then call [`finish`](Self::finish) to obtain
/// `Ok(())` or a single `Err` that summarises every violation.
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Move every message of `other` into this collector.
    pub(crate) fn merge(&mut self, other: ValidationCollector) {
        self.errors.extend(other.errors);
    }

    /// Returns `true` when no errors have been recorded.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(TableError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), TableError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(TableError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Standalone validation helpers
// ---------------------------------------------------------------------------

/// Check that every title is non-empty and appears only once.
///
/// Titles are case-sensitive keys, so `"Heat"` and `"heat"` are distinct.
pub(crate) fn validate_unique_titles<'a>(
    titles: impl IntoIterator<Item = &'a str>,
) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    let mut seen = BTreeSet::new();

    for (i, title) in titles.into_iter().enumerate() {
        if title.is_empty() {
            c.push(format!("empty title at row {i}"));
        } else if !seen.insert(title) {
            c.push(format!("duplicate title '{title}'"));
        }
    }

    c
}

/// Check rater column names: non-empty, unique, and never equal to the
/// identifier column.
pub(crate) fn validate_rater_names(identifier: &str, raters: &[String]) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    let mut seen = BTreeSet::new();

    for (i, name) in raters.iter().enumerate() {
        if name.is_empty() {
            c.push(format!("empty rater name at column {i}"));
        } else if name == identifier {
            c.push(format!("rater column '{name}' collides with the identifier column"));
        } else if !seen.insert(name.as_str()) {
            c.push(format!("duplicate rater '{name}'"));
        }
    }

    c
}

/// Check that every row carries exactly one cell per rater.
pub(crate) fn validate_row_widths<'a>(
    n_raters: usize,
    rows: impl IntoIterator<Item = (&'a str, usize)>,
) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for (title, width) in rows {
        if width != n_raters {
            c.push(format!(
                "row '{title}' has {width} rating(s), expected {n_raters}"
            ));
        }
    }

    c
}

/// Check that every present rating is finite.
///
/// Missing ratings (`None`) are valid.
pub(crate) fn validate_finite_ratings<'a>(
    title: &str,
    ratings: impl IntoIterator<Item = &'a Option<f64>>,
) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for (j, rating) in ratings.into_iter().enumerate() {
        if let Some(v) = rating
            && !v.is_finite()
        {
            c.push(format!("non-finite rating {v} for '{title}' at column {j}"));
        }
    }

    c
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
