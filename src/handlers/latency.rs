use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;
use tracing::warn;

use crate::telemetry::{summarize, LatencyQuery, RegionReport};
use crate::AppState;

use super::AppError;

// ─── POST /api/latency ───────────────────────────────────────────

/// Summarize the requested regions against `threshold_ms`.
///
/// Reduction sorts every region's latencies, so it runs on the blocking
/// pool; the index itself is shared by `Arc` and never locked.
pub async fn query_latency(
    State(state): State<Arc<AppState>>,
    body: Result<Json<LatencyQuery>, JsonRejection>,
) -> Result<Json<RegionReport>, AppError> {
    let Json(query) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let index = state.index.clone();
    let report = tokio::task::spawn_blocking(move || summarize(&index, &query))
        .await
        .map_err(|e| AppError::Internal(format!("reduction task failed: {e}")))?
        .map_err(|e| {
            warn!(error = %e, "latency query failed");
            AppError::from(e)
        })?;

    Ok(Json(report))
}
