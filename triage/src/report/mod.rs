pub mod json;
pub mod table;

use crate::workflow::config::OutputFormat;
use std::io::Write;
use threatcore::RankedEntry;

pub fn render<W: Write>(
    out: &mut W,
    ranked: &[RankedEntry],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => table::write_table(out, ranked),
        OutputFormat::Json => json::write_json(out, ranked),
    }
}
