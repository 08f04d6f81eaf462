//! High-level CSV reader configuration and table loading.

use std::path::Path;

use cinematch_table::{Movie, MovieCatalog, PersonalRatings, RatingsTable};
use tracing::info;

use crate::csv_read::{self, RawRecord};
use crate::error::IoError;

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Column names used when reading the three input files.
///
/// The [`Default`] implementation matches the IMDB-style data set:
/// `Title`, `Genre1`, `Year`, `Runtime`.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Identifier column shared by all three files.
    title_column: String,
    /// Primary genre column of the movies file.
    genre_column: String,
    /// Release year column of the movies file.
    year_column: String,
    /// Runtime column of the movies file, or `None` to ignore runtimes.
    runtime_column: Option<String>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            title_column: "Title".into(),
            genre_column: "Genre1".into(),
            year_column: "Year".into(),
            runtime_column: Some("Runtime".into()),
        }
    }
}

impl ReaderConfig {
    /// Set the identifier column name.
    pub fn with_title_column(mut self, name: impl Into<String>) -> Self {
        self.title_column = name.into();
        self
    }

    /// Set the primary genre column name.
    pub fn with_genre_column(mut self, name: impl Into<String>) -> Self {
        self.genre_column = name.into();
        self
    }

    /// Set the year column name.
    pub fn with_year_column(mut self, name: impl Into<String>) -> Self {
        self.year_column = name.into();
        self
    }

    /// Set the runtime column name, or `None` to skip it.
    pub fn with_runtime_column(mut self, name: Option<impl Into<String>>) -> Self {
        self.runtime_column = name.map(Into::into);
        self
    }

    /// Returns the identifier column name.
    pub fn title_column(&self) -> &str {
        &self.title_column
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if a column name is empty or two
    /// movies-file columns share a name.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut errors = Vec::new();
        let mut named = vec![
            ("title", self.title_column.as_str()),
            ("genre", self.genre_column.as_str()),
            ("year", self.year_column.as_str()),
        ];
        if let Some(rt) = &self.runtime_column {
            named.push(("runtime", rt.as_str()));
        }

        for (i, (role, name)) in named.iter().enumerate() {
            if name.is_empty() {
                errors.push(format!("{role} column name must not be empty"));
            } else if named[..i].iter().any(|(_, other)| other == name) {
                errors.push(format!("{role} column '{name}' is used twice"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: errors.len(),
                details: errors.join("; "),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Cell helpers
// ---------------------------------------------------------------------------

/// Parses one cell of `record`, attaching location context to failures.
fn parse_cell<T>(
    record: &RawRecord,
    index: usize,
    column: &str,
    path: &Path,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T, IoError> {
    parse(&record.fields[index]).map_err(|reason| IoError::Parse {
        path: path.to_path_buf(),
        line: record.line,
        column: column.to_string(),
        reason,
    })
}

// ---------------------------------------------------------------------------
// read_critics
// ---------------------------------------------------------------------------

/// Read the critics' ratings table.
///
/// Every column other than the identifier column is a rater, in file order.
/// Empty cells are unrated.
///
/// # Errors
///
/// Returns [`IoError`] if the file is missing or malformed, the identifier
/// column is absent, a rating is not numeric, or the table fails validation.
pub fn read_critics(path: &Path, config: &ReaderConfig) -> Result<RatingsTable, IoError> {
    config.validate()?;
    let raw = csv_read::read_csv(path)?;
    let id = raw.column(&config.title_column, path)?;

    let rater_columns: Vec<(usize, &str)> = raw
        .headers
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != id)
        .map(|(i, h)| (i, h.as_str()))
        .collect();

    let mut rows = Vec::with_capacity(raw.records.len());
    for record in &raw.records {
        let ratings = rater_columns
            .iter()
            .map(|&(i, name)| parse_cell(record, i, name, path, csv_read::parse_rating))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push((record.fields[id].clone(), ratings));
    }

    let raters = rater_columns.iter().map(|&(_, h)| h.to_string()).collect();
    let table = RatingsTable::new(config.title_column.clone(), raters, rows)?;
    info!(
        path = %path.display(),
        n_raters = table.n_raters(),
        n_titles = table.n_titles(),
        "critic ratings loaded"
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// read_personal
// ---------------------------------------------------------------------------

/// Read the user's personal ratings.
///
/// The file holds the identifier column and exactly one rating column whose
/// header is the user's name.
///
/// # Errors
///
/// Returns [`IoError::Validation`] when the file does not have exactly one
/// rating column, plus the failures listed for [`read_critics`].
pub fn read_personal(path: &Path, config: &ReaderConfig) -> Result<PersonalRatings, IoError> {
    config.validate()?;
    let raw = csv_read::read_csv(path)?;
    let id = raw.column(&config.title_column, path)?;

    let others: Vec<usize> = (0..raw.headers.len()).filter(|&i| i != id).collect();
    let &[rating_col] = others.as_slice() else {
        return Err(IoError::Validation {
            count: 1,
            details: format!(
                "{} must have exactly one rating column besides '{}', got {}",
                path.display(),
                config.title_column,
                others.len()
            ),
        });
    };
    let user = raw.headers[rating_col].clone();

    let ratings = raw
        .records
        .iter()
        .map(|record| {
            let rating = parse_cell(record, rating_col, &user, path, csv_read::parse_rating)?;
            Ok::<_, IoError>((record.fields[id].clone(), rating))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let personal = PersonalRatings::new(user, ratings)?;
    info!(
        path = %path.display(),
        user = %personal.user(),
        n_titles = personal.len(),
        "personal ratings loaded"
    );
    Ok(personal)
}

// ---------------------------------------------------------------------------
// read_catalog
// ---------------------------------------------------------------------------

/// Read the movie catalog.
///
/// Columns other than title, genre, year and runtime (for example a secondary
/// genre) are ignored.
///
/// # Errors
///
/// Returns [`IoError`] if a configured column is absent, a year or runtime is
/// not numeric, or the catalog fails validation.
pub fn read_catalog(path: &Path, config: &ReaderConfig) -> Result<MovieCatalog, IoError> {
    config.validate()?;
    let raw = csv_read::read_csv(path)?;
    let title = raw.column(&config.title_column, path)?;
    let genre = raw.column(&config.genre_column, path)?;
    let year = raw.column(&config.year_column, path)?;
    let runtime = match &config.runtime_column {
        Some(name) => Some((raw.column(name, path)?, name.as_str())),
        None => None,
    };

    let mut movies = Vec::with_capacity(raw.records.len());
    for record in &raw.records {
        let y = parse_cell(record, year, &config.year_column, path, csv_read::parse_year)?;
        let rt = match runtime {
            Some((i, name)) => parse_cell(record, i, name, path, csv_read::parse_runtime)?,
            None => None,
        };
        movies.push(Movie::new(
            record.fields[title].clone(),
            record.fields[genre].clone(),
            y,
            rt,
        ));
    }

    let catalog = MovieCatalog::new(movies)?;
    info!(
        path = %path.display(),
        n_movies = catalog.len(),
        "movie catalog loaded"
    );
    Ok(catalog)
}
