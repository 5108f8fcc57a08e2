//! Store Selection
//!
//! Picks the counter store once at startup.

use blep::{CounterStore, InMemoryCounterRepository, PgCounterRepository};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::AppConfig;

/// Connect to PostgreSQL and apply pending migrations
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    tracing::info!("Connected to database");

    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    Ok(pool)
}

/// PostgreSQL when a database URL is configured, in-memory otherwise
pub async fn build_store(config: &AppConfig) -> anyhow::Result<CounterStore> {
    match &config.database_url {
        Some(url) => {
            let pool = connect(url, config.database_max_connections).await?;
            Ok(CounterStore::Postgres(PgCounterRepository::new(pool)))
        }
        None => {
            tracing::warn!(
                "DATABASE_URL not set; using in-memory store for country_bleps (non-persistent)"
            );
            Ok(CounterStore::Memory(InMemoryCounterRepository::new()))
        }
    }
}
