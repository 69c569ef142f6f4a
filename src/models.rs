use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

// Summarization backend request format (hosted inference API)
#[derive(Serialize, Deserialize, Clone)]
pub struct BackendRequest {
    pub inputs: String,
    pub parameters: BackendParameters,
}

#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct BackendParameters {
    pub max_length: u32,
    pub min_length: u32,
    pub temperature: f32,
}

// Summarization backend response format
#[derive(Serialize, Deserialize, Clone)]
pub struct BackendResponse {
    pub summary_text: String,
}

// Queued request - holds the notes + response channel
pub struct QueuedRequest {
    pub notes: String,
    pub response_tx: oneshot::Sender<Result<String, String>>, // raw summary text or error detail
}
