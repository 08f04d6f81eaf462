//! Text and JSON rendering of ranking and recommendation results.

use anyhow::{Context, Result};
use serde::Serialize;

use cinematch_recommend::{Recommendation, Recommendations};
use cinematch_similarity::{CriticScore, RankedCritics};

/// Formats a number the way a plain float print does: integral values keep
/// one decimal (`3.0`), others print their shortest form (`3.33`).
pub fn format_number(v: f64) -> String {
    let s = v.to_string();
    if v.is_finite() && !s.contains('.') {
        format!("{s}.0")
    } else {
        s
    }
}

/// The selected-critics line.
pub fn critics_text(selected: &[String]) -> String {
    format!(
        "The following critics had reviews closest to the person's:\n{}\n",
        selected.join(", ")
    )
}

/// One line per recommendation, ordered by genre then title, with the
/// quoted titles left-justified to a common width.
pub fn recommendations_text(user: &str, items: &[Recommendation]) -> String {
    let mut rows: Vec<&Recommendation> = items.iter().collect();
    rows.sort_by(|a, b| a.genre.cmp(&b.genre).then_with(|| a.title.cmp(&b.title)));

    let width = rows
        .iter()
        .map(|r| r.title.chars().count())
        .max()
        .unwrap_or(0)
        + 3;

    let mut out = format!("Recommendations for {user}:\n");
    for r in rows {
        let quoted = format!("\"{}\"", r.title);
        let mut line = format!(
            "{quoted:<width$} ({}), rating: {}, {}",
            r.genre,
            format_number(r.rounded_rating()),
            r.year
        );
        if let Some(runtime) = r.runtime {
            line.push_str(&format!(", runs {}", format_number(runtime)));
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// A table of every candidate critic, nearest first.
pub fn critic_scores_text(ranked: &RankedCritics) -> String {
    let width = ranked
        .scores()
        .iter()
        .map(|s| s.rater().chars().count())
        .max()
        .unwrap_or(0)
        .max("critic".len());

    let mut out = format!("{:>4}  {:<width$}  {:>10}  {:>6}\n", "rank", "critic", "distance", "shared");
    for (i, s) in ranked.scores().iter().enumerate() {
        let distance = if s.has_overlap() {
            format!("{:.4}", s.distance())
        } else {
            "-".to_string()
        };
        let marker = if ranked.selected().iter().any(|r| r == s.rater()) {
            " *"
        } else {
            ""
        };
        out.push_str(&format!(
            "{:>4}  {:<width$}  {:>10}  {:>6}{marker}\n",
            i + 1,
            s.rater(),
            distance,
            s.n_shared()
        ));
    }
    out
}

/// JSON report of one recommendation run.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub user: &'a str,
    pub critics: Vec<CriticEntry<'a>>,
    pub recommendations: &'a Recommendations,
}

/// A selected critic in the JSON report.
#[derive(Debug, Serialize)]
pub struct CriticEntry<'a> {
    pub name: &'a str,
    pub distance: f64,
    pub shared_titles: usize,
}

impl<'a> CriticEntry<'a> {
    fn from_score(score: &'a CriticScore) -> Self {
        Self {
            name: score.rater(),
            distance: score.distance(),
            shared_titles: score.n_shared(),
        }
    }
}

impl<'a> Report<'a> {
    /// Builds a report from the ranking and recommendation results.
    pub fn new(user: &'a str, ranked: &'a RankedCritics, recommendations: &'a Recommendations) -> Self {
        let critics = ranked
            .scores()
            .iter()
            .filter(|s| ranked.selected().iter().any(|r| r == s.rater()))
            .map(CriticEntry::from_score)
            .collect();
        Self {
            user,
            critics,
            recommendations,
        }
    }

    /// Serializes the report as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize report")
    }
}
