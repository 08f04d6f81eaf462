//! Movie metadata catalog.

use std::collections::BTreeMap;

use crate::error::TableError;
use crate::validate::{self, ValidationCollector};

/// Metadata for one movie.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// Title (primary key).
    pub title: String,
    /// Primary genre used for grouping.
    pub genre: String,
    /// Release year.
    pub year: i32,
    /// Runtime in minutes, when known.
    pub runtime: Option<f64>,
}

impl Movie {
    /// Creates a movie record.
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
        runtime: Option<f64>,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            year,
            runtime,
        }
    }
}

/// Movie metadata keyed by title.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieCatalog {
    movies: BTreeMap<String, Movie>,
}

impl MovieCatalog {
    /// Creates a new `MovieCatalog` after validating inputs.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Validation`] for empty or duplicate titles, empty
    /// genres, and runtimes that are non-finite or negative.
    pub fn new(movies: Vec<Movie>) -> Result<Self, TableError> {
        let mut c = ValidationCollector::new();
        c.merge(validate::validate_unique_titles(
            movies.iter().map(|m| m.title.as_str()),
        ));
        for m in &movies {
            if m.genre.is_empty() {
                c.push(format!("empty genre for '{}'", m.title));
            }
            if let Some(rt) = m.runtime
                && !(rt.is_finite() && rt >= 0.0)
            {
                c.push(format!("invalid runtime {rt} for '{}'", m.title));
            }
        }
        c.finish()?;

        Ok(Self {
            movies: movies.into_iter().map(|m| (m.title.clone(), m)).collect(),
        })
    }

    /// Returns the metadata for `title`, if catalogued.
    pub fn get(&self, title: &str) -> Option<&Movie> {
        self.movies.get(title)
    }

    /// Returns the number of catalogued movies.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Returns `true` when the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Iterates over movies in title order.
    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }
}
