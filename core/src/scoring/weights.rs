use crate::ingest::Iff;

/// Coefficients for each scoring term. Fixed per run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Closer contacts score higher.
    pub range_inv: f64,
    /// Faster approach scores higher.
    pub closing: f64,
    /// Larger radar cross-section scores higher.
    pub rcs: f64,
    /// Lower altitude scores slightly higher.
    pub altitude_low: f64,
    pub iff_friend: f64,
    pub iff_foe: f64,
    pub iff_unknown: f64,
}

impl ScoreWeights {
    pub const STANDARD: Self = Self {
        range_inv: 60.0,
        closing: 0.25,
        rcs: 0.4,
        altitude_low: 0.004,
        iff_friend: -40.0,
        iff_foe: 30.0,
        iff_unknown: 15.0,
    };

    pub fn iff_bonus(&self, iff: Iff) -> f64 {
        match iff {
            Iff::Friend => self.iff_friend,
            Iff::Foe => self.iff_foe,
            Iff::Unknown => self.iff_unknown,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}
