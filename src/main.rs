mod cli;
mod config;
mod convert;
mod critics_cmd;
mod logging;
mod present;
mod recommend_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Recommend(args) => recommend_cmd::run(args),
        Command::Critics(args) => critics_cmd::run(args),
    }
}
