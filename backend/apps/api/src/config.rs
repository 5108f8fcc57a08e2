//! Server Configuration
//!
//! Read from the environment (after `.env` is loaded).

use blep::BlepConfig;
use platform::config::{flag, list, non_empty, parse_or};
use platform::rate_limit::RateLimitConfig;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Unset means the in-memory store
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub port: u16,
    /// Empty means any origin
    pub cors_origins: Vec<String>,
    pub rate_limit: RateLimitConfig,
    pub trust_proxy: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = RateLimitConfig::default();

        Self {
            database_url: non_empty(&lookup, "DATABASE_URL"),
            database_max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            ),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT),
            cors_origins: list(&lookup, "CORS_ORIGINS"),
            rate_limit: RateLimitConfig::new(
                parse_or(&lookup, "RATE_LIMIT_MAX", defaults.max_requests),
                parse_or(&lookup, "RATE_LIMIT_WINDOW_MS", defaults.window_ms() as u64),
            ),
            trust_proxy: flag(&lookup, "TRUST_PROXY"),
        }
    }

    pub fn blep_config(&self) -> BlepConfig {
        BlepConfig {
            rate_limit: self.rate_limit.clone(),
            trust_proxy: self.trust_proxy,
            ..BlepConfig::default()
        }
    }
}
