//! Five-term additive threat score.
//!
//! Each term is normalised into a roughly `0..100` band before weighting so a
//! score can always be explained by its components.

use crate::ingest::Contact;
use crate::scoring::weights::ScoreWeights;
use serde::Serialize;

/// Ranges at or below this are treated as "on top of us".
pub const MIN_RANGE_KM: f64 = 0.05;
/// Inverse-range value used inside `MIN_RANGE_KM`.
pub const INV_RANGE_CAP: f64 = 20.0;
/// Closing speed that saturates the closing term.
pub const CLOSING_SATURATION_MPS: f64 = 400.0;
pub const MIN_RCS_M2: f64 = 0.01;
pub const MAX_ALTITUDE_M: f64 = 20_000.0;

/// Weighted contribution of each term to a contact's score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreBreakdown {
    pub range: f64,
    pub closing: f64,
    pub rcs: f64,
    pub altitude: f64,
    pub iff: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.range + self.closing + self.rcs + self.altitude + self.iff
    }
}

fn inverse_range(range_km: f64) -> f64 {
    if range_km > MIN_RANGE_KM {
        1.0 / range_km
    } else {
        INV_RANGE_CAP
    }
}

/// Receding and stationary contacts map to 0, saturation speed and above to 100.
fn closing_band(closing_mps: f64) -> f64 {
    (closing_mps / CLOSING_SATURATION_MPS).clamp(0.0, 1.0) * 100.0
}

/// `0.01..100 m^2` maps to `0..100`; outside that band extrapolates linearly.
fn rcs_band(rcs_m2: f64) -> f64 {
    (rcs_m2.max(MIN_RCS_M2).log10() + 2.0) * 25.0
}

fn altitude_band(altitude_m: f64) -> f64 {
    (MAX_ALTITUDE_M - altitude_m.clamp(0.0, MAX_ALTITUDE_M)) / 200.0
}

pub fn breakdown(contact: &Contact, weights: &ScoreWeights) -> ScoreBreakdown {
    ScoreBreakdown {
        range: weights.range_inv * inverse_range(contact.range_km),
        closing: weights.closing * closing_band(contact.closing_mps),
        rcs: weights.rcs * rcs_band(contact.rcs_m2),
        altitude: weights.altitude_low * altitude_band(contact.altitude_m),
        iff: weights.iff_bonus(contact.iff),
    }
}

/// Threat score of one contact; larger means higher priority. Not clamped.
pub fn score(contact: &Contact, weights: &ScoreWeights) -> f64 {
    breakdown(contact, weights).total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::Iff;

    fn contact(range_km: f64, closing_mps: f64, altitude_m: f64, rcs_m2: f64) -> Contact {
        Contact::new("T1", Iff::Unknown, range_km, closing_mps, altitude_m, rcs_m2)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn foe_example_scores_below_elevated_threshold() {
        let foe = Contact::new("B2", Iff::Foe, 10.0, 150.0, 500.0, 20.0);
        let parts = breakdown(&foe, &ScoreWeights::default());
        assert!(approx(parts.range, 6.0));
        assert!(approx(parts.closing, 9.375));
        assert!(approx(parts.rcs, 0.4 * ((20f64.log10() + 2.0) * 25.0)));
        assert!(approx(parts.altitude, 0.39));
        assert_eq!(parts.iff, 30.0);
        let total = score(&foe, &ScoreWeights::default());
        assert!((total - 78.775).abs() < 1e-3);
        assert_eq!(total, parts.total());
    }

    #[test]
    fn score_is_deterministic() {
        let c = contact(3.2, 240.0, 120.0, 7.5);
        let weights = ScoreWeights::default();
        assert_eq!(score(&c, &weights).to_bits(), score(&c, &weights).to_bits());
    }

    #[test]
    fn near_zero_range_is_capped() {
        let weights = ScoreWeights::default();
        let at_floor = breakdown(&contact(0.05, 0.0, 0.0, 1.0), &weights);
        let zero = breakdown(&contact(0.0, 0.0, 0.0, 1.0), &weights);
        let negative = breakdown(&contact(-3.0, 0.0, 0.0, 1.0), &weights);
        assert_eq!(at_floor.range, 60.0 * INV_RANGE_CAP);
        assert_eq!(zero.range, at_floor.range);
        assert_eq!(negative.range, at_floor.range);
    }

    #[test]
    fn closer_range_increases_range_term() {
        let weights = ScoreWeights::default();
        let mut previous = f64::NEG_INFINITY;
        for range in [500.0, 100.0, 25.0, 1.0, 0.06] {
            let term = breakdown(&contact(range, 0.0, 0.0, 1.0), &weights).range;
            assert!(term > previous);
            previous = term;
        }
    }

    #[test]
    fn closing_term_increases_then_saturates() {
        let weights = ScoreWeights::default();
        let term = |speed| breakdown(&contact(10.0, speed, 0.0, 1.0), &weights).closing;
        assert_eq!(term(-200.0), 0.0);
        assert_eq!(term(0.0), 0.0);
        assert!(term(100.0) < term(200.0));
        assert!(term(200.0) < term(399.0));
        assert_eq!(term(400.0), 25.0);
        assert_eq!(term(900.0), 25.0);
    }

    #[test]
    fn larger_rcs_increases_rcs_term() {
        let weights = ScoreWeights::default();
        let term = |rcs| breakdown(&contact(10.0, 0.0, 0.0, rcs), &weights).rcs;
        assert!(approx(term(0.01), 0.0));
        assert!(term(0.01) < term(0.5));
        assert!(term(0.5) < term(10.0));
        assert!(term(10.0) < term(100.0));
        assert!(approx(term(100.0), 40.0));
    }

    #[test]
    fn rcs_outside_band_extrapolates_and_floors_at_minimum() {
        let weights = ScoreWeights::default();
        let term = |rcs| breakdown(&contact(10.0, 0.0, 0.0, rcs), &weights).rcs;
        assert!(approx(term(1000.0), 50.0));
        assert_eq!(term(0.0), term(MIN_RCS_M2));
        assert_eq!(term(-5.0), term(MIN_RCS_M2));
    }

    #[test]
    fn lower_altitude_increases_altitude_term() {
        let weights = ScoreWeights::default();
        let term = |alt| breakdown(&contact(10.0, 0.0, alt, 1.0), &weights).altitude;
        assert!(term(15_000.0) < term(5_000.0));
        assert!(term(5_000.0) < term(0.0));
        assert!(approx(term(0.0), 0.4));
        assert_eq!(term(-100.0), term(0.0));
        assert_eq!(term(30_000.0), 0.0);
    }

    #[test]
    fn alternate_weight_profiles_apply_without_shared_state() {
        let c = contact(10.0, 200.0, 1000.0, 5.0);
        let flat = ScoreWeights {
            range_inv: 0.0,
            closing: 0.0,
            rcs: 0.0,
            altitude_low: 0.0,
            ..ScoreWeights::default()
        };
        assert_eq!(score(&c, &flat), 15.0);
        assert!(score(&c, &ScoreWeights::default()) > 15.0);
    }
}
