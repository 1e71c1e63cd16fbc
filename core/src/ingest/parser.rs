use crate::ingest::contact::{
    Contact, Iff, DEFAULT_ALTITUDE_M, DEFAULT_CLOSING_MPS, DEFAULT_RANGE_KM, DEFAULT_RCS_M2,
};
use crate::prelude::{TriageError, TriageResult};
use crate::telemetry::{IngestCounters, LogManager};
use std::fmt;
use std::fs;
use std::path::Path;

/// Column count of a complete contact row:
/// `id, iff, range_km, closing_mps, altitude_m, rcs_m2`.
pub const CONTACT_COLUMNS: usize = 6;

/// Why a row was dropped from the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    TooFewColumns(usize),
    InvalidIff(String),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewColumns(found) => write!(
                f,
                "malformed row ({} of {} columns)",
                found, CONTACT_COLUMNS
            ),
            Self::InvalidIff(token) => write!(f, "invalid IFF '{}'", token),
        }
    }
}

/// A discarded input row together with its raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based physical line number.
    pub line_number: usize,
    pub line: String,
    pub reason: RejectReason,
}

/// Outcome of parsing one contact feed.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    pub contacts: Vec<Contact>,
    pub rejected: Vec<RejectedRow>,
    pub counters: IngestCounters,
}

impl ParseReport {
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

/// Tolerant line-oriented parser for comma-separated contact rows.
pub struct ContactParser {
    logger: LogManager,
}

impl ContactParser {
    pub fn new() -> Self {
        Self {
            logger: LogManager::with_target("threatcore::ingest"),
        }
    }

    pub fn parse(&self, text: &str) -> ParseReport {
        let mut report = ParseReport::default();
        let mut maybe_header = true;

        for (index, raw) in text.lines().enumerate() {
            report.counters.record_line();
            let line = raw.trim();
            if line.is_empty() {
                report.counters.record_blank();
                continue;
            }
            if line.starts_with('#') {
                report.counters.record_comment();
                continue;
            }

            let cols = split_columns(line);

            if maybe_header {
                maybe_header = false;
                if looks_like_header(&cols) {
                    report.counters.record_header();
                    self.logger
                        .trace(&format!("skipping header line {}: {}", index + 1, line));
                    continue;
                }
            }

            match contact_from_columns(&cols) {
                Ok(contact) => {
                    report.counters.record_accepted();
                    report.contacts.push(contact);
                }
                Err(reason) => {
                    self.logger
                        .diagnostic(&format!("Skipping {}: {}", reason, line));
                    report.counters.record_rejected();
                    report.rejected.push(RejectedRow {
                        line_number: index + 1,
                        line: line.to_string(),
                        reason,
                    });
                }
            }
        }

        self.logger.record(&format!("contact feed parsed: {}", report.counters));
        report
    }
}

impl Default for ContactParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads a whole contact source and parses it. Failing to read the source is
/// the only batch-level error; invalid UTF-8 is replaced, not rejected.
pub fn load_contacts<P: AsRef<Path>>(path: P) -> TriageResult<ParseReport> {
    let path_ref = path.as_ref();
    let bytes = fs::read(path_ref).map_err(|source| TriageError::SourceRead {
        path: path_ref.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(ContactParser::new().parse(&text))
}

fn split_columns(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

fn looks_like_header(cols: &[&str]) -> bool {
    cols.len() < CONTACT_COLUMNS
        || Iff::parse_token(cols[1]).is_none()
        || cols[2] == "range_km"
        || cols[3] == "closing_mps"
}

fn contact_from_columns(cols: &[&str]) -> Result<Contact, RejectReason> {
    if cols.len() < CONTACT_COLUMNS {
        return Err(RejectReason::TooFewColumns(cols.len()));
    }
    let iff = Iff::parse_token(cols[1]).ok_or_else(|| RejectReason::InvalidIff(cols[1].into()))?;

    Ok(Contact {
        id: cols[0].to_string(),
        iff,
        range_km: parse_range(cols[2]),
        closing_mps: parse_closing(cols[3]),
        altitude_m: parse_altitude(cols[4]),
        rcs_m2: parse_rcs(cols[5]),
    })
}

fn count_while(bytes: &[u8], from: usize, pred: impl Fn(u8) -> bool) -> usize {
    bytes
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|&&b| pred(b)).count())
}

/// Longest leading number in `text`, ignoring any trailing unit or junk
/// (`10km` is 10, `0x10` is 16). `None` when the text does not start with one.
fn leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let negative = bytes.first() == Some(&b'-');
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if bytes.get(end) == Some(&b'0') && matches!(bytes.get(end + 1), Some(b'x' | b'X')) {
        let digits = count_while(bytes, end + 2, |b| b.is_ascii_hexdigit());
        if digits > 0 {
            let hex = &text[end + 2..end + 2 + digits];
            let magnitude = hex.chars().fold(0.0_f64, |acc, c| {
                acc * 16.0 + f64::from(c.to_digit(16).unwrap_or(0))
            });
            return Some(if negative { -magnitude } else { magnitude });
        }
    }

    let int_digits = count_while(bytes, end, |b| b.is_ascii_digit());
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_while(bytes, end + 1, |b| b.is_ascii_digit());
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = count_while(bytes, end + 1 + sign, |b| b.is_ascii_digit());
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

fn parse_finite(text: &str) -> Option<f64> {
    leading_number(text).filter(|value| value.is_finite())
}

fn parse_range(text: &str) -> f64 {
    parse_finite(text).unwrap_or(DEFAULT_RANGE_KM)
}

fn parse_closing(text: &str) -> f64 {
    parse_finite(text).unwrap_or(DEFAULT_CLOSING_MPS)
}

fn parse_altitude(text: &str) -> f64 {
    parse_finite(text).unwrap_or(DEFAULT_ALTITUDE_M)
}

fn parse_rcs(text: &str) -> f64 {
    parse_finite(text).unwrap_or(DEFAULT_RCS_M2)
}
