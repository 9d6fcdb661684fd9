use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use region_latency::config::Config;
use region_latency::telemetry::loader;
use region_latency::{server, AppState, RegionIndex};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    init_tracing(&config.log_level);

    // ── 1. Load telemetry ────────────────────────────────────────
    let source = config.source();
    info!(%source, "loading telemetry");
    let samples = loader::load(&source)?;

    // ── 2. Build the region index (must finish before serving) ──
    let index = RegionIndex::build(samples)?;
    info!(
        samples = index.len(),
        regions = index.region_count(),
        "region index ready"
    );

    // ── 3. Build shared state & router ───────────────────────────
    let state = Arc::new(AppState::new(index, source.to_string()));
    let app = server::create_router(state);

    // ── 4. Bind & serve ──────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %listener.local_addr()?, "listening");
    info!("query endpoint → POST /api/latency");

    axum::serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

fn init_tracing(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => tracing::Level::ERROR,
        "warn" => tracing::Level::WARN,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::INFO,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("region_latency={level},tower_http=warn").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
