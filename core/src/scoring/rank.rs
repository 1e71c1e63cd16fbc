use crate::ingest::Contact;
use crate::scoring::score::{breakdown, ScoreBreakdown};
use crate::scoring::suggestion::{classify, Suggestion};
use crate::scoring::weights::ScoreWeights;
use serde::Serialize;

/// A scored contact in priority order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub contact: Contact,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

impl RankedEntry {
    pub fn new(contact: Contact, weights: &ScoreWeights) -> Self {
        let breakdown = breakdown(&contact, weights);
        Self {
            contact,
            score: breakdown.total(),
            breakdown,
        }
    }

    pub fn suggestion(&self) -> Suggestion {
        classify(&self.contact, self.score)
    }
}

/// Scores every contact and orders the result by descending score.
///
/// Relative order of equal scores is not part of the contract.
pub fn rank(contacts: Vec<Contact>, weights: &ScoreWeights) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = contacts
        .into_iter()
        .map(|contact| RankedEntry::new(contact, weights))
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}
