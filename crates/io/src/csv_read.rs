//! Low-level CSV reading and cell parsing.

use std::path::Path;

use crate::error::IoError;

/// Cell values read as "no value".
const MISSING_MARKERS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null"];

/// One data record and the line it came from.
#[derive(Debug, Clone)]
pub(crate) struct RawRecord {
    pub(crate) line: u64,
    pub(crate) fields: Vec<String>,
}

/// Header and records of a CSV file, decoded to strings.
#[derive(Debug, Clone)]
pub(crate) struct RawTable {
    pub(crate) headers: Vec<String>,
    pub(crate) records: Vec<RawRecord>,
}

impl RawTable {
    /// Returns the position of column `name`.
    pub(crate) fn column(&self, name: &str, path: &Path) -> Result<usize, IoError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| IoError::MissingColumn {
                name: name.to_string(),
                path: path.to_path_buf(),
            })
    }
}

/// Decodes a field as UTF-8, falling back to Latin-1 for non-UTF-8 bytes.
pub(crate) fn decode_field(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

/// Reads a headed CSV file with surrounding whitespace trimmed from fields.
pub(crate) fn read_csv(path: &Path) -> Result<RawTable, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers: Vec<String> = reader.byte_headers()?.iter().map(decode_field).collect();

    let mut records = Vec::new();
    for result in reader.byte_records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        records.push(RawRecord {
            line,
            fields: record.iter().map(decode_field).collect(),
        });
    }

    Ok(RawTable { headers, records })
}

/// Parses a rating cell; missing markers yield `None`.
pub(crate) fn parse_rating(cell: &str) -> Result<Option<f64>, String> {
    if MISSING_MARKERS.contains(&cell) {
        return Ok(None);
    }
    cell.parse::<f64>()
        .map(Some)
        .map_err(|_| format!("invalid rating '{cell}'"))
}

/// Parses a year cell. Accepts integral floats such as `1994.0`.
pub(crate) fn parse_year(cell: &str) -> Result<i32, String> {
    if let Ok(y) = cell.parse::<i32>() {
        return Ok(y);
    }
    match cell.parse::<f64>() {
        Ok(y) if y.fract() == 0.0 && y >= i32::MIN as f64 && y <= i32::MAX as f64 => Ok(y as i32),
        _ => Err(format!("invalid year '{cell}'")),
    }
}

/// Parses an optional runtime cell; missing markers yield `None`.
pub(crate) fn parse_runtime(cell: &str) -> Result<Option<f64>, String> {
    if MISSING_MARKERS.contains(&cell) {
        return Ok(None);
    }
    cell.parse::<f64>()
        .map(Some)
        .map_err(|_| format!("invalid runtime '{cell}'"))
}
