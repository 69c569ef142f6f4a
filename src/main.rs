use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use summarizer_gateway::config::Args;
use summarizer_gateway::models::QueuedRequest;
use summarizer_gateway::rate_limit::{RateLimiter, quota_sweeper};
use summarizer_gateway::router;
use summarizer_gateway::state::AppState;
use summarizer_gateway::worker::summarize_worker;

#[tokio::main]
async fn main() {
    // parse cli arguments
    let args = Args::parse();
    let api_key = std::env::var("HF_API_KEY").ok();

    let (queue_tx, queue_rx) = mpsc::channel::<QueuedRequest>(100);

    let rate_limiter = Arc::new(RateLimiter::new(
        args.hourly_limit,
        args.daily_limit,
        args.min_content_length,
        args.max_content_length,
    ));

    // creating shared state
    let state = Arc::new(AppState {
        rate_limiter: Arc::clone(&rate_limiter),
        queue_tx,
        min_response_time: Duration::from_millis(args.min_response_ms),
    });

    // spawn the background worker
    let worker_client = reqwest::Client::new();
    tokio::spawn(summarize_worker(
        queue_rx,
        worker_client,
        args.backend_url.clone(),
        args.model.clone(),
        api_key,
    ));

    // spawn the stale-record sweeper
    tokio::spawn(quota_sweeper(
        rate_limiter,
        Duration::from_secs(args.sweep_interval),
    ));

    let app = router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    println!("Gateway running on http://localhost:{}", args.port);
    println!("Summarizing with {} at {}", args.model, args.backend_url);
    println!(
        "Rate limit: {} requests per hour, {} per day",
        args.hourly_limit, args.daily_limit
    );
    println!(
        "Content length: {}..{} characters",
        args.min_content_length, args.max_content_length
    );

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
