//! Critics command: list every critic by distance to the user.

use anyhow::{Context, Result};
use tracing::info_span;

use cinematch_io::{read_critics, read_personal};
use cinematch_similarity::rank_critics;

use crate::cli::CriticsArgs;
use crate::config::CinematchConfig;
use crate::convert;
use crate::present;

/// Rank the critics and print the full table.
pub fn run(args: CriticsArgs) -> Result<()> {
    let _cmd = info_span!("critics").entered();

    let config = CinematchConfig::load(args.input.config.as_deref())?;
    let paths = convert::resolve_inputs(&config.io, &args.input)?;
    let reader_cfg = convert::build_reader_config(&config.io)?;
    let rank_cfg = convert::build_rank_config(&config.rank, args.k)?;

    let critics = read_critics(&paths.critics, &reader_cfg)
        .with_context(|| format!("failed to read critics: {}", paths.critics.display()))?;
    let personal = read_personal(&paths.personal, &reader_cfg)
        .with_context(|| format!("failed to read personal ratings: {}", paths.personal.display()))?;

    let ranked = rank_critics(&critics, &personal, &rank_cfg).context("critic ranking failed")?;

    println!("Critics ranked by distance to {}:", personal.user());
    print!("{}", present::critic_scores_text(&ranked));
    Ok(())
}
