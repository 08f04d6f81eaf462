//! Pure conversion functions: TOML config + CLI overrides -> crate API config types.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use cinematch_io::ReaderConfig;
use cinematch_similarity::RankConfig;

use crate::cli::InputArgs;
use crate::config::{IoConfig, RankToml};

/// Resolved input file paths.
#[derive(Debug, PartialEq)]
pub struct InputPaths {
    pub critics: PathBuf,
    pub personal: PathBuf,
    movies: Option<PathBuf>,
}

impl InputPaths {
    /// Returns the movies file path, required by the `recommend` pipeline.
    pub fn movies(&self) -> Result<&Path> {
        self.movies
            .as_deref()
            .ok_or_else(|| anyhow!("no movies file: set [io].movies in config or use --movies"))
    }
}

/// Joins `file` onto `folder` when a folder is configured.
fn in_folder(folder: Option<&Path>, file: PathBuf) -> PathBuf {
    match folder {
        Some(dir) => dir.join(file),
        None => file,
    }
}

/// Resolves input paths; CLI flags win over the config file.
pub fn resolve_inputs(io: &IoConfig, args: &InputArgs) -> Result<InputPaths> {
    let folder = args.folder.as_deref().or(io.folder.as_deref());

    let critics = args
        .critics
        .clone()
        .or_else(|| io.critics.clone())
        .ok_or_else(|| anyhow!("no critics file: set [io].critics in config or use --critics"))?;
    let personal = args
        .personal
        .clone()
        .or_else(|| io.personal.clone())
        .ok_or_else(|| anyhow!("no personal file: set [io].personal in config or use --personal"))?;
    let movies = args.movies.clone().or_else(|| io.movies.clone());

    Ok(InputPaths {
        critics: in_folder(folder, critics),
        personal: in_folder(folder, personal),
        movies: movies.map(|m| in_folder(folder, m)),
    })
}

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoConfig) -> Result<ReaderConfig> {
    let runtime = (!io.runtime_column.is_empty()).then(|| io.runtime_column.clone());
    let cfg = ReaderConfig::default()
        .with_title_column(&io.title_column)
        .with_genre_column(&io.genre_column)
        .with_year_column(&io.year_column)
        .with_runtime_column(runtime);
    cfg.validate().context("invalid [io] column configuration")?;
    Ok(cfg)
}

/// Builds a [`RankConfig`] from the TOML rank section and an optional CLI k.
pub fn build_rank_config(rank: &RankToml, k: Option<usize>) -> Result<RankConfig> {
    let cfg = RankConfig::new(k.unwrap_or(rank.k));
    cfg.validate().context("invalid ranking configuration")?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> InputArgs {
        InputArgs {
            config: None,
            folder: None,
            movies: None,
            critics: None,
            personal: None,
        }
    }

    fn io() -> IoConfig {
        IoConfig {
            folder: Some(PathBuf::from("data")),
            movies: Some(PathBuf::from("IMDB.csv")),
            critics: Some(PathBuf::from("critics.csv")),
            personal: Some(PathBuf::from("personal.csv")),
            ..IoConfig::default()
        }
    }

    #[test]
    fn paths_from_config_joined_with_folder() {
        let paths = resolve_inputs(&io(), &args()).unwrap();
        assert_eq!(paths.critics, PathBuf::from("data/critics.csv"));
        assert_eq!(paths.personal, PathBuf::from("data/personal.csv"));
        assert_eq!(paths.movies().unwrap(), Path::new("data/IMDB.csv"));
    }

    #[test]
    fn cli_overrides_config() {
        let mut a = args();
        a.folder = Some(PathBuf::from("other"));
        a.personal = Some(PathBuf::from("me.csv"));
        let paths = resolve_inputs(&io(), &a).unwrap();
        assert_eq!(paths.personal, PathBuf::from("other/me.csv"));
        assert_eq!(paths.critics, PathBuf::from("other/critics.csv"));
    }

    #[test]
    fn missing_critics_is_error() {
        let err = resolve_inputs(&IoConfig::default(), &args()).unwrap_err();
        assert!(err.to_string().contains("no critics file"));
    }

    #[test]
    fn movies_only_required_on_demand() {
        let mut a = args();
        a.critics = Some(PathBuf::from("c.csv"));
        a.personal = Some(PathBuf::from("p.csv"));
        let paths = resolve_inputs(&IoConfig::default(), &a).unwrap();
        assert_eq!(paths.critics, PathBuf::from("c.csv"));
        assert!(paths.movies().is_err());
    }

    #[test]
    fn reader_config_runtime_disabled_by_empty_name() {
        let io = IoConfig {
            runtime_column: String::new(),
            ..IoConfig::default()
        };
        assert!(build_reader_config(&io).is_ok());
    }

    #[test]
    fn reader_config_rejects_clashing_columns() {
        let io = IoConfig {
            genre_column: "Title".to_string(),
            ..IoConfig::default()
        };
        assert!(build_reader_config(&io).is_err());
    }

    #[test]
    fn rank_config_cli_override() {
        let rank = RankToml { k: 3 };
        assert_eq!(build_rank_config(&rank, None).unwrap().k(), 3);
        assert_eq!(build_rank_config(&rank, Some(5)).unwrap().k(), 5);
        assert!(build_rank_config(&rank, Some(0)).is_err());
    }
}
