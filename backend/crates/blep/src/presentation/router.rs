//! Blep Router

use crate::application::config::BlepConfig;
use crate::domain::repository::CounterRepository;
use crate::infra::CounterStore;
use crate::presentation::handlers::{self, BlepAppState};
use crate::presentation::middleware::{RateLimitState, enforce_rate_limit};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use platform::rate_limit::FixedWindowRateLimiter;
use std::sync::Arc;

/// Create the blep router over the store chosen at startup
pub fn blep_router(store: CounterStore, config: BlepConfig) -> Router {
    blep_router_generic(store, config)
}

/// Create a blep router for any repository implementation
pub fn blep_router_generic<R>(repo: R, config: BlepConfig) -> Router
where
    R: CounterRepository + Clone + Send + Sync + 'static,
{
    let limiter = Arc::new(FixedWindowRateLimiter::new(config.rate_limit.clone()));
    blep_router_with_limiter(repo, config, limiter)
}

/// Create a blep router sharing an externally owned rate limiter
pub fn blep_router_with_limiter<R>(
    repo: R,
    config: BlepConfig,
    limiter: Arc<FixedWindowRateLimiter>,
) -> Router
where
    R: CounterRepository + Clone + Send + Sync + 'static,
{
    let rate_limit = RateLimitState {
        limiter,
        trust_proxy: config.trust_proxy,
    };

    let state = BlepAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    // Only the increment endpoint is rate limited
    let limited = Router::new()
        .route("/blep", post(handlers::record_blep::<R>))
        .route_layer(middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/leaderboard", get(handlers::leaderboard::<R>))
        .merge(limited)
        .with_state(state)
}
