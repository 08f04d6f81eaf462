use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG: &str = "cinematch.toml";

/// Top-level Cinematch configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CinematchConfig {
    /// Input files and column names.
    #[serde(default)]
    pub io: IoConfig,

    /// Critic ranking settings.
    #[serde(default)]
    pub rank: RankToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

impl CinematchConfig {
    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG`] is read if
    /// present and built-in defaults apply otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None => {
                let default = Path::new(DEFAULT_CONFIG);
                if !default.exists() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::parse(&toml_str)
    }

    /// Parses a TOML document.
    pub fn parse(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub folder: Option<PathBuf>,
    pub movies: Option<PathBuf>,
    pub critics: Option<PathBuf>,
    pub personal: Option<PathBuf>,
    #[serde(default = "default_title_column")]
    pub title_column: String,
    #[serde(default = "default_genre_column")]
    pub genre_column: String,
    #[serde(default = "default_year_column")]
    pub year_column: String,
    /// Set to `""` to ignore runtimes.
    #[serde(default = "default_runtime_column")]
    pub runtime_column: String,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            folder: None,
            movies: None,
            critics: None,
            personal: None,
            title_column: default_title_column(),
            genre_column: default_genre_column(),
            year_column: default_year_column(),
            runtime_column: default_runtime_column(),
        }
    }
}

fn default_title_column() -> String {
    "Title".to_string()
}
fn default_genre_column() -> String {
    "Genre1".to_string()
}
fn default_year_column() -> String {
    "Year".to_string()
}
fn default_runtime_column() -> String {
    "Runtime".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankToml {
    #[serde(default = "default_k")]
    pub k: usize,
}

impl Default for RankToml {
    fn default() -> Self {
        Self { k: default_k() }
    }
}

fn default_k() -> usize {
    cinematch_similarity::DEFAULT_K
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    pub json: Option<PathBuf>,
}
