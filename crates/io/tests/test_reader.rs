//! Integration tests: CSV loaders against files on disk.

use std::io::Write;
use std::path::Path;

use cinematch_io::{IoError, ReaderConfig, read_catalog, read_critics, read_personal};
use tempfile::NamedTempFile;

fn csv_file(contents: &[u8]) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn read_critics_file_not_found() {
    let path = Path::new("/tmp/cinematch_test_nonexistent_critics.csv");
    let result = read_critics(path, &ReaderConfig::default());
    let err = result.unwrap_err();
    assert!(
        matches!(err, IoError::FileNotFound { .. }),
        "expected FileNotFound, got {err:?}",
    );
}

#[test]
fn invalid_config_rejects_early() {
    let path = Path::new("/tmp/cinematch_test_nonexistent_critics.csv");
    let config = ReaderConfig::default().with_title_column("");

    // Should fail on config validation before even trying to open the file.
    let err = read_critics(path, &config).unwrap_err();
    assert!(
        matches!(err, IoError::Validation { .. }),
        "expected Validation error, got {err:?}",
    );
}

#[test]
fn read_critics_excludes_identifier_column() {
    let f = csv_file(b"Ebert,Title,Kael\n4,Heat,\n2.5,Alien,3\n");
    let table = read_critics(f.path(), &ReaderConfig::default()).unwrap();

    assert_eq!(table.identifier(), "Title");
    assert_eq!(table.raters(), &["Ebert".to_string(), "Kael".to_string()]);
    assert_eq!(table.n_titles(), 2);
    assert_eq!(table.rating("Heat", 0), Some(4.0));
    assert_eq!(table.rating("Heat", 1), None);
    assert_eq!(table.rating("Alien", 1), Some(3.0));
}

#[test]
fn read_critics_reports_bad_cell_location() {
    let f = csv_file(b"Title,Ebert\nHeat,4\nAlien,great\n");
    let err = read_critics(f.path(), &ReaderConfig::default()).unwrap_err();
    match err {
        IoError::Parse { line, column, .. } => {
            assert_eq!(line, 3);
            assert_eq!(column, "Ebert");
        }
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn read_critics_duplicate_title_is_table_error() {
    let f = csv_file(b"Title,Ebert\nHeat,4\nHeat,3\n");
    let err = read_critics(f.path(), &ReaderConfig::default()).unwrap_err();
    assert!(matches!(err, IoError::Table { .. }), "got {err:?}");
}

#[test]
fn read_critics_ragged_row_is_csv_error() {
    let f = csv_file(b"Title,Ebert\nHeat,4,5\n");
    let err = read_critics(f.path(), &ReaderConfig::default()).unwrap_err();
    assert!(matches!(err, IoError::Csv { .. }), "got {err:?}");
}

#[test]
fn read_personal_takes_user_from_header() {
    let f = csv_file(b"Title,Dana\nHeat,5\nAlien,\n");
    let personal = read_personal(f.path(), &ReaderConfig::default()).unwrap();
    assert_eq!(personal.user(), "Dana");
    assert_eq!(personal.len(), 2);
    assert!(personal.contains_title("Alien"));
    assert_eq!(personal.rating("Alien"), None);
    assert_eq!(personal.rating("Heat"), Some(5.0));
}

#[test]
fn read_personal_requires_one_rating_column() {
    let f = csv_file(b"Title,Dana,Sam\nHeat,5,4\n");
    let err = read_personal(f.path(), &ReaderConfig::default()).unwrap_err();
    assert!(matches!(err, IoError::Validation { count: 1, .. }), "got {err:?}");
}

#[test]
fn read_catalog_ignores_extra_columns() {
    let f = csv_file(b"Title,Genre1,Genre2,Year,Runtime\nHeat,Crime,Drama,1995,170\nAlien,Horror,,1979,\n");
    let catalog = read_catalog(f.path(), &ReaderConfig::default()).unwrap();
    assert_eq!(catalog.len(), 2);
    let heat = catalog.get("Heat").unwrap();
    assert_eq!(heat.genre, "Crime");
    assert_eq!(heat.year, 1995);
    assert_eq!(heat.runtime, Some(170.0));
    assert_eq!(catalog.get("Alien").unwrap().runtime, None);
}

#[test]
fn read_catalog_missing_genre_column() {
    let f = csv_file(b"Title,Year\nHeat,1995\n");
    let err = read_catalog(f.path(), &ReaderConfig::default()).unwrap_err();
    assert!(
        matches!(&err, IoError::MissingColumn { name, .. } if name == "Genre1"),
        "got {err:?}"
    );
}

#[test]
fn read_catalog_decodes_latin1() {
    let mut contents = b"Title,Genre1,Year,Runtime\nAm".to_vec();
    contents.push(0xe9);
    contents.extend_from_slice(b"lie,Comedy,2001,122\n");
    let f = csv_file(&contents);
    let catalog = read_catalog(f.path(), &ReaderConfig::default()).unwrap();
    assert!(catalog.get("Amélie").is_some());
}

#[test]
fn custom_column_names() {
    let f = csv_file(b"Name,Kind,Released\nHeat,Crime,1995\n");
    let config = ReaderConfig::default()
        .with_title_column("Name")
        .with_genre_column("Kind")
        .with_year_column("Released")
        .with_runtime_column(None::<String>);
    let catalog = read_catalog(f.path(), &config).unwrap();
    assert_eq!(catalog.get("Heat").unwrap().genre, "Crime");
}
