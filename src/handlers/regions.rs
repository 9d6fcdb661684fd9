use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::telemetry::index::RegionSummary;
use crate::AppState;

// ─── Response types ──────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Catalogue {
    pub source: String,
    pub loaded_at: DateTime<Utc>,
    pub total_samples: usize,
    pub regions: Vec<RegionSummary>,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub regions: usize,
    pub samples: usize,
}

// ─── GET /api/regions ────────────────────────────────────────────

pub async fn list_regions(State(state): State<Arc<AppState>>) -> Json<Catalogue> {
    Json(Catalogue {
        source: state.source.clone(),
        loaded_at: state.loaded_at,
        total_samples: state.index.len(),
        regions: state.index.regions(),
    })
}

// ─── GET /api/health ─────────────────────────────────────────────

pub async fn health(State(state): State<Arc<AppState>>) -> Json<Health> {
    Json(Health {
        status: "ok",
        regions: state.index.region_count(),
        samples: state.index.len(),
    })
}
