use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use summarizer_gateway::rate_limit::RateLimiter;
use summarizer_gateway::router;
use summarizer_gateway::state::AppState;
use summarizer_gateway::worker::summarize_worker;

const NOTES: &str = "Date: March 15, 2024\nAttendees:\nAlice\nBob\n\nWe reviewed the launch plan and agreed on next steps for the team.";

// Stub summarization backend answering every model call with a fixed summary
async fn stub_backend(summary: &'static str) -> String {
    let app = Router::new().route(
        "/models/{model}",
        post(move || async move { Json(json!({ "summary_text": summary })) }),
    );

    serve_stub(app).await
}

// Stub backend that always fails
async fn broken_backend() -> String {
    let app = Router::new().route(
        "/models/{model}",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model exploded") }),
    );

    serve_stub(app).await
}

async fn serve_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn gateway(backend_url: String, min_response_time: Duration) -> TestServer {
    let (queue_tx, queue_rx) = mpsc::channel(100);
    let rate_limiter = Arc::new(RateLimiter::new(10, 50, 50, 2000));

    let state = Arc::new(AppState {
        rate_limiter,
        queue_tx,
        min_response_time,
    });

    tokio::spawn(summarize_worker(
        queue_rx,
        reqwest::Client::new(),
        backend_url,
        "test-model".to_string(),
        None,
    ));

    TestServer::new(router(state)).unwrap()
}

#[tokio::test]
async fn returns_shaped_summary() {
    let backend = stub_backend("The team reviewed the launch plan.\n\n\nShipping is on track.").await;
    let server = gateway(backend, Duration::ZERO);

    let response = server
        .post("/api/summarize")
        .add_header("x-forwarded-for", "10.0.0.1")
        .json(&json!({ "notes": NOTES }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(
        body["summary"],
        "The team reviewed the launch plan.\nShipping is on track."
    );
    assert_eq!(body["meetingDate"], "March 15, 2024");
    assert_eq!(body["keyParticipants"], json!(["Alice", "Bob"]));
}

#[tokio::test]
async fn rejects_short_and_long_notes() {
    let backend = stub_backend("unused").await;
    let server = gateway(backend, Duration::ZERO);

    let response = server
        .post("/api/summarize")
        .add_header("x-forwarded-for", "10.0.0.2")
        .json(&json!({ "notes": "too short" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("too short"));

    let response = server
        .post("/api/summarize")
        .add_header("x-forwarded-for", "10.0.0.2")
        .json(&json!({ "notes": "a".repeat(2001) }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("too long"));
}

#[tokio::test]
async fn rejects_missing_notes() {
    let backend = stub_backend("unused").await;
    let server = gateway(backend, Duration::ZERO);

    let response = server
        .post("/api/summarize")
        .add_header("x-forwarded-for", "10.0.0.3")
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid input. Notes must be a string.");
}

#[tokio::test]
async fn rejects_spam_content() {
    let backend = stub_backend("unused").await;
    let server = gateway(backend, Duration::ZERO);

    let response = server
        .post("/api/summarize")
        .add_header("x-forwarded-for", "10.0.0.4")
        .json(&json!({
            "notes": "Visit http://example.com now for the meeting recording and the slides"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Invalid content detected. Please ensure your input contains only meeting notes."
    );
}

#[tokio::test]
async fn enforces_hourly_quota_per_client() {
    let backend = stub_backend("A short summary of the meeting notes.").await;
    let server = gateway(backend, Duration::ZERO);

    for _ in 0..10 {
        let response = server
            .post("/api/summarize")
            .add_header("x-forwarded-for", "10.0.0.5")
            .json(&json!({ "notes": NOTES }))
            .await;
        response.assert_status(StatusCode::OK);
    }

    let response = server
        .post("/api/summarize")
        .add_header("x-forwarded-for", "10.0.0.5")
        .json(&json!({ "notes": NOTES }))
        .await;
    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Hourly"));

    // another client is unaffected
    let response = server
        .post("/api/summarize")
        .add_header("x-forwarded-for", "10.0.0.6")
        .json(&json!({ "notes": NOTES }))
        .await;
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn backend_failure_maps_to_generic_500() {
    let backend = broken_backend().await;
    let server = gateway(backend, Duration::ZERO);

    let response = server
        .post("/api/summarize")
        .add_header("x-forwarded-for", "10.0.0.7")
        .json(&json!({ "notes": NOTES }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Failed to summarize text");
}

#[tokio::test]
async fn fast_responses_are_padded_to_the_floor() {
    let backend = stub_backend("A short summary of the meeting notes.").await;
    let server = gateway(backend, Duration::from_millis(300));

    let start = Instant::now();
    let response = server
        .post("/api/summarize")
        .add_header("x-forwarded-for", "10.0.0.8")
        .json(&json!({ "notes": NOTES }))
        .await;
    response.assert_status(StatusCode::OK);
    assert!(start.elapsed() >= Duration::from_millis(300));
}

#[tokio::test]
async fn health_reports_status() {
    let backend = stub_backend("unused").await;
    let server = gateway(backend, Duration::ZERO);

    let response = server.get("/health").await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}
