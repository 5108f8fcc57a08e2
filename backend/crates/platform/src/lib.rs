//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Client address extraction
//! - Rate limiting infrastructure
//! - Environment configuration helpers

pub mod client;
pub mod config;
pub mod rate_limit;

pub use rate_limit::{FixedWindowRateLimiter, RateLimitConfig, RateLimitResult};
