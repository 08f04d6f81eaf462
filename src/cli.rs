use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Cinematch critic-similarity movie recommender.
#[derive(Parser)]
#[command(
    name = "cinematch",
    version,
    about = "Recommend unseen movies from the critics whose taste matches yours"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Rank critics and print the best unseen movie of every genre.
    Recommend(RecommendArgs),
    /// Rank every critic by distance to the user.
    Critics(CriticsArgs),
}

/// Input file selection shared by all subcommands.
#[derive(clap::Args)]
pub struct InputArgs {
    /// Path to TOML configuration file (default: cinematch.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the folder holding the input files.
    #[arg(short, long)]
    pub folder: Option<PathBuf>,

    /// Override the movies (catalog) file name.
    #[arg(long)]
    pub movies: Option<PathBuf>,

    /// Override the critics' ratings file name.
    #[arg(long)]
    pub critics: Option<PathBuf>,

    /// Override the personal ratings file name.
    #[arg(long)]
    pub personal: Option<PathBuf>,
}

/// Arguments for the `recommend` subcommand.
#[derive(clap::Args)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Override the number of closest critics from config.
    #[arg(short)]
    pub k: Option<usize>,

    /// Also write a JSON report to this path.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

/// Arguments for the `critics` subcommand.
#[derive(clap::Args)]
pub struct CriticsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Override the number of closest critics from config.
    #[arg(short)]
    pub k: Option<usize>,
}
