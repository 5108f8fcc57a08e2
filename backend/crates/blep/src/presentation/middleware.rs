//! Rate Limiting Middleware

use crate::error::BlepError;
use axum::body::Body;
use axum::extract::{ConnectInfo, State};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::client::{client_key, extract_client_ip};
use platform::rate_limit::FixedWindowRateLimiter;
use std::net::SocketAddr;
use std::sync::Arc;

/// Middleware state
#[derive(Clone)]
pub struct RateLimitState {
    pub limiter: Arc<FixedWindowRateLimiter>,
    pub trust_proxy: bool,
}

/// Middleware that rejects clients over their fixed-window budget
pub async fn enforce_rate_limit(
    State(state): State<RateLimitState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, BlepError> {
    let direct_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip());

    let client_ip = extract_client_ip(req.headers(), direct_ip, state.trust_proxy);
    let key = client_key(client_ip);

    let result = state.limiter.check(&key).await;

    if !result.allowed {
        return Err(BlepError::RateLimited {
            retry_after: result.retry_after,
        });
    }

    Ok(next.run(req).await)
}
