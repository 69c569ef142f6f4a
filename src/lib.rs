use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod rate_limit;
pub mod shaper;
pub mod spam;
pub mod state;
pub mod worker;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/api/summarize", post(handlers::summarize_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state)
}
