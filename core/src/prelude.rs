use std::path::PathBuf;

pub use crate::ingest::{Contact, Iff};
pub use crate::scoring::{RankedEntry, ScoreWeights, Suggestion};

/// Batch-level failures. Row-level problems never surface here.
#[derive(thiserror::Error, Debug)]
pub enum TriageError {
    #[error("failed to open contact source {path}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no contacts loaded from {path}")]
    NoContacts { path: PathBuf },
}

pub type TriageResult<T> = Result<T, TriageError>;
