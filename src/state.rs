use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::models::QueuedRequest;
use crate::rate_limit::RateLimiter;

// App's shared state
pub struct AppState {
    pub rate_limiter: Arc<RateLimiter>,
    pub queue_tx: mpsc::Sender<QueuedRequest>,
    pub min_response_time: Duration, // fast responses are padded up to this
}
