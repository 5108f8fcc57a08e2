//! Application Configuration
//!
//! Configuration for the blep application layer.

use crate::domain::repository::DEFAULT_TOP_N;
use platform::rate_limit::RateLimitConfig;

/// Blep application configuration
#[derive(Debug, Clone)]
pub struct BlepConfig {
    /// Rows returned by the leaderboard
    pub leaderboard_limit: u32,
    /// Limits applied to POST /blep
    pub rate_limit: RateLimitConfig,
    /// Key the rate limiter on X-Forwarded-For instead of the peer address
    pub trust_proxy: bool,
}

impl Default for BlepConfig {
    fn default() -> Self {
        Self {
            leaderboard_limit: DEFAULT_TOP_N,
            rate_limit: RateLimitConfig::default(),
            trust_proxy: false,
        }
    }
}

impl BlepConfig {
    pub fn with_rate_limit(max_requests: u32, window_ms: u64) -> Self {
        Self {
            rate_limit: RateLimitConfig::new(max_requests, window_ms),
            ..Default::default()
        }
    }
}
