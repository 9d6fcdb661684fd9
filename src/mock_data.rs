use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::info;

use crate::telemetry::Sample;

// ─── Pools ───────────────────────────────────────────────────────

static REGIONS: &[&str] = &[
    "apac",
    "emea",
    "amer",
    "us-east",
    "us-west",
    "eu-central",
];

/// Latency range in milliseconds, half-open.
const LATENCY_MS: (f64, f64) = (100.0, 250.0);
/// Uptime range in percent, half-open.
const UPTIME_PCT: (f64, f64) = (97.0, 100.0);

// ─── Public entry point ──────────────────────────────────────────

/// Generate `count` samples spread over the region pool.
/// Deterministic: the same `seed` always yields the same dataset.
pub fn generate(count: usize, seed: u64) -> Vec<Sample> {
    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(seed);

    let samples: Vec<Sample> = (0..count)
        .map(|_| {
            let region = REGIONS[rng.gen_range(0..REGIONS.len())];
            let latency = hundredths(rng.gen_range(LATENCY_MS.0..LATENCY_MS.1));
            let uptime = hundredths(rng.gen_range(UPTIME_PCT.0..UPTIME_PCT.1));
            Sample::new(region, latency, uptime)
        })
        .collect();

    info!(
        samples = count,
        seed,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "generated synthetic telemetry"
    );
    samples
}

/// Keep two decimals, like the telemetry files in the field.
fn hundredths(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}
