//! # cinematch-io
//!
//! Read critic ratings, personal ratings and movie metadata from CSV files
//! into the typed snapshots of `cinematch-table`.

mod csv_read;
mod error;
mod reader;

pub use error::IoError;
pub use reader::{ReaderConfig, read_catalog, read_critics, read_personal};
