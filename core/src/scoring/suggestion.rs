use crate::ingest::{Contact, Iff};
use serde::Serialize;
use std::fmt;

pub const INTERCEPT_SCORE: f64 = 120.0;
pub const INTERCEPT_RANGE_KM: f64 = 25.0;
pub const INTERCEPT_CLOSING_MPS: f64 = 100.0;
pub const ELEVATED_SCORE: f64 = 80.0;
pub const ELEVATED_RANGE_KM: f64 = 50.0;

/// Engagement suggestion attached to each ranked contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suggestion {
    IgnoreFriend,
    Intercept,
    ElevatedMonitor,
    Monitor,
}

impl Suggestion {
    pub fn label(&self) -> &'static str {
        match self {
            Self::IgnoreFriend => "IGNORE (FRIEND)",
            Self::Intercept => "INTERCEPT",
            Self::ElevatedMonitor => "ELEVATED MONITOR",
            Self::Monitor => "MONITOR",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered threshold rules; the friend check must short-circuit first.
pub fn classify(contact: &Contact, score: f64) -> Suggestion {
    if contact.iff == Iff::Friend {
        return Suggestion::IgnoreFriend;
    }
    if score > INTERCEPT_SCORE
        && contact.range_km < INTERCEPT_RANGE_KM
        && contact.closing_mps > INTERCEPT_CLOSING_MPS
    {
        return Suggestion::Intercept;
    }
    if score > ELEVATED_SCORE && contact.range_km < ELEVATED_RANGE_KM {
        return Suggestion::ElevatedMonitor;
    }
    Suggestion::Monitor
}
