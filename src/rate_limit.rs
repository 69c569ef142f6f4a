use axum::http::StatusCode;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::interval;

use crate::metrics::CLIENT_RECORDS;

const HOUR: Duration = Duration::from_secs(60 * 60);
const DAY: Duration = Duration::from_secs(24 * 60 * 60);

// Per-client quota record - hourly and daily windows reset independently
struct ClientQuota {
    hourly_count: u32,
    hour_window_start: Instant,
    daily_count: u32,
    day_window_start: Instant,
}

impl ClientQuota {
    fn new(now: Instant) -> Self {
        Self {
            hourly_count: 0,
            hour_window_start: now,
            daily_count: 0,
            day_window_start: now,
        }
    }
}

// Outcome of the admission gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmitDecision {
    Allowed,
    Rejected {
        reason: &'static str,
        status: StatusCode,
    },
}

pub struct RateLimiter {
    clients: DashMap<String, ClientQuota>,
    hourly_limit: u32,
    daily_limit: u32,
    min_content_length: usize,
    max_content_length: usize,
}

impl RateLimiter {
    pub fn new(
        hourly_limit: u32,
        daily_limit: u32,
        min_content_length: usize,
        max_content_length: usize,
    ) -> Self {
        Self {
            clients: DashMap::new(),
            hourly_limit,
            daily_limit,
            min_content_length,
            max_content_length,
        }
    }

    // Admission gate - window resets, content validation, quota accounting.
    // The whole read-modify-write runs under the entry guard, so two
    // concurrent requests for the same client cannot both slip past a limit.
    pub fn admit(&self, client_id: &str, content: Option<&str>) -> AdmitDecision {
        self.admit_at(client_id, content, Instant::now())
    }

    fn admit_at(&self, client_id: &str, content: Option<&str>, now: Instant) -> AdmitDecision {
        let mut entry = self
            .clients
            .entry(client_id.to_string())
            .or_insert_with(|| ClientQuota::new(now));

        // Hourly window expired..? Reset only the hourly pair
        if now.duration_since(entry.hour_window_start) > HOUR {
            entry.hourly_count = 0;
            entry.hour_window_start = now;
        }

        // Same for the daily window
        if now.duration_since(entry.day_window_start) > DAY {
            entry.daily_count = 0;
            entry.day_window_start = now;
        }

        // Length checks run before the increment and consume no quota
        if let Some(text) = content {
            let chars = text.chars().count();
            if chars < self.min_content_length {
                return AdmitDecision::Rejected {
                    reason: "Content too short. Please provide more detailed notes.",
                    status: StatusCode::BAD_REQUEST,
                };
            }
            if chars > self.max_content_length {
                return AdmitDecision::Rejected {
                    reason: "Content too long. Please shorten your notes.",
                    status: StatusCode::BAD_REQUEST,
                };
            }
        }

        // Increment first, then check - the request crossing the threshold
        // is rejected but still counted
        entry.hourly_count += 1;
        entry.daily_count += 1;

        if entry.hourly_count > self.hourly_limit {
            return AdmitDecision::Rejected {
                reason: "Hourly request limit reached. Please try again later.",
                status: StatusCode::TOO_MANY_REQUESTS,
            };
        }

        if entry.daily_count > self.daily_limit {
            return AdmitDecision::Rejected {
                reason: "Daily request limit reached. Please try again tomorrow.",
                status: StatusCode::TOO_MANY_REQUESTS,
            };
        }

        AdmitDecision::Allowed
    }

    // Drop records whose daily window expired over a day ago
    pub fn sweep_stale(&self) {
        self.sweep_stale_at(Instant::now());
    }

    fn sweep_stale_at(&self, now: Instant) {
        self.clients
            .retain(|_, quota| now.duration_since(quota.day_window_start) < DAY * 2);
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }
}

// Background sweeper - keeps the quota store bounded under many distinct clients
pub async fn quota_sweeper(limiter: Arc<RateLimiter>, sweep_interval: Duration) {
    let mut ticker = interval(sweep_interval);

    println!("Quota sweeper started (interval: {:?})", sweep_interval);

    loop {
        ticker.tick().await;

        let before = limiter.client_count();
        limiter.sweep_stale();
        let after = limiter.client_count();

        CLIENT_RECORDS.set(after as f64);

        if before != after {
            println!("[Sweeper] Evicted {} stale client records", before - after);
        }
    }
}
