pub mod index;
pub mod loader;
pub mod numeric;
pub mod query;
pub mod reducer;

use serde::{Deserialize, Serialize};

pub use index::RegionIndex;
pub use loader::TelemetrySource;
pub use query::{summarize, LatencyQuery, RegionReport};
pub use reducer::{reduce, MetricResult};

/// One telemetry observation as it appears in the source document.
/// Unknown fields (`service`, `timestamp`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Matched case- and whitespace-insensitively, see [`normalize_region`].
    pub region: String,
    pub latency_ms: f64,
    /// Conventionally within 0–100, not enforced.
    pub uptime_pct: f64,
}

impl Sample {
    pub fn new(region: impl Into<String>, latency_ms: f64, uptime_pct: f64) -> Self {
        Self {
            region: region.into(),
            latency_ms,
            uptime_pct,
        }
    }
}

/// Canonical region key: trimmed and lower-cased.
pub fn normalize_region(region: &str) -> String {
    region.trim().to_lowercase()
}
