use anyhow::Context;
use serde::Serialize;
use std::io::Write;
use threatcore::{Contact, RankedEntry, ScoreBreakdown, Suggestion};

#[derive(Serialize)]
struct JsonRow<'a> {
    rank: usize,
    #[serde(flatten)]
    contact: &'a Contact,
    score: f64,
    breakdown: &'a ScoreBreakdown,
    suggestion: Suggestion,
}

/// Ranked contacts as a pretty-printed JSON array, including per-term scores.
pub fn write_json<W: Write>(out: &mut W, ranked: &[RankedEntry]) -> anyhow::Result<()> {
    let rows: Vec<JsonRow<'_>> = ranked
        .iter()
        .enumerate()
        .map(|(index, entry)| JsonRow {
            rank: index + 1,
            contact: &entry.contact,
            score: entry.score,
            breakdown: &entry.breakdown,
            suggestion: entry.suggestion(),
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &rows).context("serializing ranked contacts")?;
    writeln!(out).context("finishing JSON output")?;
    Ok(())
}
