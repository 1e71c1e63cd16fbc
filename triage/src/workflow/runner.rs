use crate::workflow::config::TriageConfig;
use log::info;
use threatcore::ingest::{load_contacts, ParseReport, RejectedRow};
use threatcore::prelude::{RankedEntry, ScoreWeights, TriageError, TriageResult};
use threatcore::rank;
use threatcore::telemetry::IngestCounters;

pub struct TriageOutcome {
    pub ranked: Vec<RankedEntry>,
    pub rejected: Vec<RejectedRow>,
    pub counters: IngestCounters,
}

/// Drives one read → parse → score → rank pass over a contact source.
#[derive(Clone)]
pub struct Runner {
    config: TriageConfig,
    weights: ScoreWeights,
}

impl Runner {
    pub fn new(config: TriageConfig) -> Self {
        Self {
            config,
            weights: ScoreWeights::default(),
        }
    }

    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    pub fn execute(&self) -> TriageResult<TriageOutcome> {
        let report = load_contacts(&self.config.input)?;
        self.rank_report(report)
    }

    pub fn rank_report(&self, report: ParseReport) -> TriageResult<TriageOutcome> {
        if report.is_empty() {
            return Err(TriageError::NoContacts {
                path: self.config.input.clone(),
            });
        }

        let ranked = rank(report.contacts, &self.weights);
        info!(
            "ranked {} contacts from {} ({} rejected)",
            ranked.len(),
            self.config.input.display(),
            report.rejected.len()
        );

        Ok(TriageOutcome {
            ranked,
            rejected: report.rejected,
            counters: report.counters,
        })
    }
}
