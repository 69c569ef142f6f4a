use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::oneshot;

use crate::error::ApiError;
use crate::metrics::{REQUEST_LATENCY, REQUEST_TOTAL};
use crate::models::QueuedRequest;
use crate::rate_limit::AdmitDecision;
use crate::shaper::{SummaryResult, shape};
use crate::spam::is_spam;
use crate::state::AppState;

// Client identity comes from the proxy header; absent means every
// unidentified caller shares one quota bucket
fn resolve_client_id(headers: &HeaderMap) -> &str {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
}

pub async fn summarize_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<SummaryResult>, ApiError> {
    REQUEST_TOTAL.inc();

    let client_id = resolve_client_id(&headers);
    let notes = payload.get("notes").and_then(|value| value.as_str());

    // Admission gate first - quota is consumed even when notes are missing
    if let AdmitDecision::Rejected { reason, status } = state.rate_limiter.admit(client_id, notes) {
        return Err(ApiError::Rejected { reason, status });
    }

    let notes = notes.filter(|n| !n.is_empty()).ok_or(ApiError::InvalidNotes)?;

    // Spam classification runs only on admitted content
    if is_spam(notes) {
        return Err(ApiError::SpamContent);
    }

    let start_time = Instant::now();

    let (response_tx, response_rx) = oneshot::channel();

    let queued = QueuedRequest {
        notes: notes.to_string(),
        response_tx,
    };

    state
        .queue_tx
        .send(queued)
        .await
        .map_err(|_| ApiError::Summarization)?;

    // wait for the worker's response
    let raw_summary = response_rx
        .await
        .map_err(|_| ApiError::Summarization)?
        .map_err(|detail| {
            println!("[Handler] Summarization failed: {}", detail);
            ApiError::Summarization
        })?;

    // Pad fast responses up to the floor; per-request, never a shared lock
    let elapsed = start_time.elapsed();
    if elapsed < state.min_response_time {
        tokio::time::sleep(state.min_response_time - elapsed).await;
    }

    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    Ok(Json(shape(&raw_summary, notes)))
}
