use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("summarizer_requests_total", "Total number of requests").unwrap();
    pub static ref REQUEST_REJECTED: Counter = register_counter!(
        "summarizer_requests_rejected_total",
        "Requests rejected by validation, spam filtering or quota"
    )
    .unwrap();
    pub static ref REQUEST_FAILURES: Counter = register_counter!(
        "summarizer_requests_failed_total",
        "Requests failed by the summarization backend"
    )
    .unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "summarizer_request_latency_seconds",
        "Request latency in seconds"
    )
    .unwrap();
    pub static ref CLIENT_RECORDS: Gauge = register_gauge!(
        "summarizer_client_records",
        "Current number of tracked client quota records"
    )
    .unwrap();
}
