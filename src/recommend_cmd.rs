//! Recommend command: rank critics and print the best unseen movie per genre.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use cinematch_io::{read_catalog, read_critics, read_personal};
use cinematch_recommend::recommend;
use cinematch_similarity::rank_critics;

use crate::cli::RecommendArgs;
use crate::config::CinematchConfig;
use crate::convert;
use crate::present::{self, Report};

/// Run the full recommendation pipeline.
pub fn run(args: RecommendArgs) -> Result<()> {
    let _cmd = info_span!("recommend").entered();

    // 1. Configuration
    let config = CinematchConfig::load(args.input.config.as_deref())?;
    let paths = convert::resolve_inputs(&config.io, &args.input)?;
    let movies_path = paths.movies()?;
    let reader_cfg = convert::build_reader_config(&config.io)?;
    let rank_cfg = convert::build_rank_config(&config.rank, args.k)?;

    // 2. Load tables
    let critics = read_critics(&paths.critics, &reader_cfg)
        .with_context(|| format!("failed to read critics: {}", paths.critics.display()))?;
    let personal = read_personal(&paths.personal, &reader_cfg)
        .with_context(|| format!("failed to read personal ratings: {}", paths.personal.display()))?;
    let catalog = read_catalog(movies_path, &reader_cfg)
        .with_context(|| format!("failed to read movies: {}", movies_path.display()))?;

    // 3. Rank critics
    let ranked = rank_critics(&critics, &personal, &rank_cfg).context("critic ranking failed")?;
    if ranked.selected().is_empty() {
        bail!(
            "no critic shares a rated title with {}; nothing to recommend",
            personal.user()
        );
    }

    // 4. Aggregate
    let recs = recommend(&critics, &personal, ranked.selected(), &catalog)
        .context("recommendation failed")?;
    info!(
        n_recommendations = recs.len(),
        n_unseen = recs.n_unseen(),
        "recommendations ready"
    );

    // 5. Present
    print!("{}", present::critics_text(ranked.selected()));
    println!();
    print!("{}", present::recommendations_text(personal.user(), recs.items()));

    if let Some(json_path) = args.json.or(config.output.json) {
        let json = Report::new(personal.user(), &ranked, &recs).to_json()?;
        std::fs::write(&json_path, json)
            .with_context(|| format!("failed to write report: {}", json_path.display()))?;
        info!(path = %json_path.display(), "report written");
    }

    Ok(())
}
