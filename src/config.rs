use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "summarizer-gateway")]
#[command(about = "Rate-limited gateway for meeting-notes summarization")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // Summarization backend base URL
    #[arg(short, long, default_value = "https://api-inference.huggingface.co")]
    pub backend_url: String,

    // Hosted model id the backend should run
    #[arg(short, long, default_value = "philschmid/bart-large-cnn-samsum")]
    pub model: String,

    // Max requests per client per hour
    #[arg(long, default_value_t = 10)]
    pub hourly_limit: u32,

    // Max requests per client per day
    #[arg(long, default_value_t = 50)]
    pub daily_limit: u32,

    // Minimum notes length in characters
    #[arg(long, default_value_t = 50)]
    pub min_content_length: usize,

    // Maximum notes length in characters
    #[arg(long, default_value_t = 2000)]
    pub max_content_length: usize,

    // Responses faster than this are padded up to it (UX smoothing)
    #[arg(long, default_value_t = 5000)]
    pub min_response_ms: u64,

    // How often stale client quota records are swept, in seconds
    #[arg(long, default_value_t = 600)]
    pub sweep_interval: u64,
}
