//! Threat triage core for sensor contact feeds.
//!
//! Raw contact rows are parsed into immutable records, scored with a fixed
//! five-term weighting, ranked by descending score and tagged with an
//! engagement suggestion.

pub mod ingest;
pub mod prelude;
pub mod scoring;
pub mod telemetry;

pub use ingest::{load_contacts, Contact, ContactParser, Iff, ParseReport};
pub use prelude::{TriageError, TriageResult};
pub use scoring::{classify, rank, score, RankedEntry, ScoreBreakdown, ScoreWeights, Suggestion};
