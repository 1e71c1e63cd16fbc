use anyhow::Context;
use std::io::Write;
use threatcore::RankedEntry;

const RULE_WIDTH: usize = 10 + 12 + 10 + 12 + 14 + 12 + 10 + 12 + 11;

/// Fixed-width priority table, one row per ranked contact.
pub fn write_table<W: Write>(out: &mut W, ranked: &[RankedEntry]) -> anyhow::Result<()> {
    writeln!(
        out,
        "{:<10}{:<12}{:<10}{:<12}{:<14}{:<12}{:<10}{:<12}SUGGESTION",
        "RANK", "ID", "IFF", "RANGE(km)", "CLOSING(m/s)", "ALT(m)", "RCS(m^2)", "SCORE"
    )
    .context("writing table header")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH)).context("writing table rule")?;

    for (index, entry) in ranked.iter().enumerate() {
        let contact = &entry.contact;
        writeln!(
            out,
            "{:<10}{:<12}{:<10}{:<12.1}{:<14.0}{:<12.0}{:<10.2}{:<12.1}{}",
            index + 1,
            contact.id,
            contact.iff.label(),
            contact.range_km,
            contact.closing_mps,
            contact.altitude_m,
            contact.rcs_m2,
            entry.score,
            entry.suggestion()
        )
        .with_context(|| format!("writing table row {}", index + 1))?;
    }
    Ok(())
}
