//! Rate Limiting Infrastructure
//!
//! In-process fixed-window rate limiter keyed by client address.
//!
//! State lives in a single process. Running several instances behind a
//! load balancer multiplies the effective limit by the instance count.

use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Rate limit configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 120,
            window: Duration::from_millis(60_000),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_ms: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_millis(window_ms),
        }
    }

    pub fn window_ms(&self) -> i64 {
        self.window.as_millis() as i64
    }
}

/// Rate limit check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitResult {
    pub allowed: bool,
    /// Time until the current window closes
    pub retry_after: Duration,
}

#[derive(Debug, Clone, Copy)]
struct Bucket {
    count: u32,
    window_start: Instant,
}

struct LimiterState {
    config: RateLimitConfig,
    buckets: HashMap<String, Bucket>,
    last_prune: Instant,
}

impl LimiterState {
    /// Drop buckets whose window has fully elapsed
    fn prune(&mut self, now: Instant) {
        let window = self.config.window;
        let before = self.buckets.len();
        self.buckets
            .retain(|_, bucket| now.saturating_duration_since(bucket.window_start) < window);
        self.last_prune = now;

        let evicted = before - self.buckets.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = self.buckets.len(), "Pruned rate limit buckets");
        }
    }
}

/// Fixed-window rate limiter
///
/// Each key gets `max_requests` per window. The window for a key starts at
/// its first request and restarts on the first request after it elapses.
pub struct FixedWindowRateLimiter {
    state: Mutex<LimiterState>,
}

impl FixedWindowRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            state: Mutex::new(LimiterState {
                config,
                buckets: HashMap::new(),
                last_prune: Instant::now(),
            }),
        }
    }

    /// Count a request for `key` and decide whether it may proceed
    pub async fn check(&self, key: &str) -> RateLimitResult {
        self.check_at(key, Instant::now()).await
    }

    /// Same as [`check`](Self::check) with an explicit clock reading
    pub async fn check_at(&self, key: &str, now: Instant) -> RateLimitResult {
        let mut state = self.state.lock().await;
        let window = state.config.window;
        let max_requests = state.config.max_requests;

        if now.saturating_duration_since(state.last_prune) > window {
            state.prune(now);
        }

        let bucket = state.buckets.entry(key.to_owned()).or_insert(Bucket {
            count: 0,
            window_start: now,
        });

        if now.saturating_duration_since(bucket.window_start) >= window {
            bucket.count = 0;
            bucket.window_start = now;
        }

        bucket.count = bucket.count.saturating_add(1);

        let retry_after = (bucket.window_start + window).saturating_duration_since(now);
        let allowed = bucket.count <= max_requests;

        if !allowed {
            tracing::warn!(
                key = %key,
                count = bucket.count,
                max = max_requests,
                retry_after_ms = retry_after.as_millis() as u64,
                "Rate limit exceeded"
            );
        }

        RateLimitResult {
            allowed,
            retry_after,
        }
    }

    /// Current configuration
    pub async fn config(&self) -> RateLimitConfig {
        self.state.lock().await.config.clone()
    }

    /// Number of tracked keys
    pub async fn tracked_keys(&self) -> usize {
        self.state.lock().await.buckets.len()
    }

    /// Replace the configuration and forget every bucket.
    ///
    /// Intended for test harnesses only.
    #[doc(hidden)]
    pub async fn reconfigure(&self, config: RateLimitConfig) {
        let mut state = self.state.lock().await;
        state.config = config;
        state.buckets.clear();
        state.last_prune = Instant::now();
    }
}

impl Default for FixedWindowRateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
