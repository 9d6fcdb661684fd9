//! Per-region latency and uptime summaries over a static telemetry dataset.
//!
//! The dataset is loaded once, grouped into a [`RegionIndex`], and then
//! served read-only: every `POST /api/latency` reduces the requested
//! regions against a breach threshold using exact decimal arithmetic.

use chrono::{DateTime, Utc};
use std::sync::Arc;

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod mock_data;
pub mod server;
pub mod telemetry;

pub use error::{Result, TelemetryError};
pub use telemetry::{RegionIndex, Sample, TelemetrySource};

/// Shared application state available to every handler via `State<Arc<AppState>>`.
pub struct AppState {
    /// Built before the listener binds; never mutated afterwards.
    pub index: Arc<RegionIndex>,

    /// Human-readable origin of the dataset, e.g. `file:data/telemetry.json`.
    pub source: String,

    pub loaded_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(index: RegionIndex, source: impl Into<String>) -> Self {
        Self {
            index: Arc::new(index),
            source: source.into(),
            loaded_at: Utc::now(),
        }
    }
}
