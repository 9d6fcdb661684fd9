use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::telemetry::TelemetrySource;

/// Default telemetry document, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/telemetry.json";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Seed used for `--synthetic` unless overridden.
pub const DEFAULT_SEED: u64 = 42;

#[derive(Parser, Debug, Clone)]
#[command(name = "region-latency", about = "Per-region latency and uptime summaries over static telemetry")]
pub struct Config {
    /// JSON array of `{region, latency_ms, uptime_pct}` records.
    #[arg(long, env = "TELEMETRY_PATH", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Address the HTTP server binds to.
    #[arg(long, env = "BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind: SocketAddr,

    /// Serve N generated samples instead of reading `--data`.
    #[arg(long, value_name = "N")]
    pub synthetic: Option<usize>,

    /// RNG seed for `--synthetic`.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// error | warn | info | debug | trace. `RUST_LOG` wins when set.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn source(&self) -> TelemetrySource {
        match self.synthetic {
            Some(samples) => TelemetrySource::Synthetic {
                samples,
                seed: self.seed,
            },
            None => TelemetrySource::File(self.data.clone()),
        }
    }
}
