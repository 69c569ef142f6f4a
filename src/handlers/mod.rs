mod health;
mod metrics;
mod summarize;

pub use health::health_handler;
pub use metrics::metrics_handler;
pub use summarize::summarize_handler;
