use anyhow::ensure;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub const CSV_HEADER: &str = "id,iff,range_km,closing_mps,altitude_m,rcs_m2";

/// Closest range a synthetic track is placed at.
const MIN_RANGE_KM: f64 = 0.1;

/// Configuration for generating a synthetic contact feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub count: usize,
    pub seed: u64,
    pub max_range_km: f64,
    pub max_closing_mps: f64,
    pub max_altitude_m: f64,
    /// Probability weights for friend / foe / unknown tracks.
    pub iff_mix: [u32; 3],
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 12,
            seed: 0,
            max_range_km: 150.0,
            max_closing_mps: 450.0,
            max_altitude_m: 15_000.0,
            iff_mix: [3, 2, 4],
        }
    }
}

fn pick_iff(rng: &mut StdRng, mix: [u32; 3]) -> &'static str {
    let total: u32 = mix.iter().sum();
    let roll = rng.gen_range(0..total);
    if roll < mix[0] {
        "Friend"
    } else if roll < mix[0] + mix[1] {
        "Foe"
    } else {
        "Unknown"
    }
}

/// Builds a header plus `count` rows in the triage input format.
pub fn build_contact_feed(config: &GeneratorConfig) -> anyhow::Result<String> {
    ensure!(
        config.iff_mix.iter().sum::<u32>() > 0,
        "iff_mix must contain at least one non-zero weight"
    );
    ensure!(
        config.max_range_km > MIN_RANGE_KM,
        "max_range_km must exceed {} km",
        MIN_RANGE_KM
    );
    ensure!(
        config.max_closing_mps > 0.0 && config.max_altitude_m > 0.0,
        "generator limits must be positive"
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut feed = String::with_capacity((config.count + 1) * 48);
    writeln!(feed, "{}", CSV_HEADER)?;

    for index in 0..config.count {
        let iff = pick_iff(&mut rng, config.iff_mix);
        let range_km = rng.gen_range(MIN_RANGE_KM..config.max_range_km);
        let closing_mps = rng.gen_range(-0.25 * config.max_closing_mps..config.max_closing_mps);
        let altitude_m = rng.gen_range(0.0..config.max_altitude_m);
        // Log-uniform so both small drones and large aircraft show up.
        let rcs_m2 = 10f64.powf(rng.gen_range(-2.0..2.0));
        writeln!(
            feed,
            "TRK{:03},{},{:.1},{:.0},{:.0},{:.2}",
            index + 1,
            iff,
            range_km,
            closing_mps,
            altitude_m,
            rcs_m2
        )?;
    }

    Ok(feed)
}
