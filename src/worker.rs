use tokio::sync::mpsc;

use crate::models::{BackendParameters, BackendRequest, BackendResponse, QueuedRequest};

// Fixed generation parameters for the hosted model
const SUMMARY_PARAMETERS: BackendParameters = BackendParameters {
    max_length: 250,
    min_length: 100,
    temperature: 0.7,
};

// Background worker - drains the queue and calls the summarization backend
pub async fn summarize_worker(
    mut rx: mpsc::Receiver<QueuedRequest>,
    client: reqwest::Client,
    backend_url: String,
    model: String,
    api_key: Option<String>,
) {
    println!("Summarize worker started - processing requests sequentially");

    let endpoint = format!("{}/models/{}", backend_url, model);

    // keep receiving requests from the queue
    while let Some(queued) = rx.recv().await {
        let request = BackendRequest {
            inputs: queued.notes,
            parameters: SUMMARY_PARAMETERS,
        };

        let mut builder = client.post(&endpoint).json(&request);
        if let Some(key) = &api_key {
            builder = builder.bearer_auth(key);
        }

        let result = builder.send().await;

        let response = match result {
            Ok(res) => match res.json::<BackendResponse>().await {
                Ok(body) => Ok(body.summary_text),
                Err(e) => Err(format!("Parse error: {}", e)),
            },
            Err(e) => Err(format!("Request failed: {}", e)),
        };

        // Send the raw summary back to the handler
        let _ = queued.response_tx.send(response);
    }
}
