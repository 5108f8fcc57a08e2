//! API Server Support
//!
//! Startup helpers and demo data shared by the `api` and `seed` binaries.
//! Uses `anyhow` for startup errors; request-level errors use
//! `blep::BlepError` and `kernel::AppError`.

pub mod config;
pub mod database;
pub mod seed;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,seed=info,blep=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
