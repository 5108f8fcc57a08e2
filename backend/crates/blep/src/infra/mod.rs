//! Infrastructure Layer - Store implementations
//!
//! [`CounterStore`] is chosen once at startup: PostgreSQL when a database
//! URL is configured, the in-memory fallback otherwise.

pub mod memory;
pub mod postgres;

use crate::domain::entities::CountryCounter;
use crate::domain::repository::CounterRepository;
use crate::domain::value_objects::{BlepCount, CountryCode};
use crate::error::BlepResult;
use memory::InMemoryCounterRepository;
use postgres::PgCounterRepository;

/// The configured counter store
#[derive(Clone)]
pub enum CounterStore {
    Postgres(PgCounterRepository),
    Memory(InMemoryCounterRepository),
}

impl CounterStore {
    pub fn backend_name(&self) -> &'static str {
        match self {
            CounterStore::Postgres(_) => "postgres",
            CounterStore::Memory(_) => "memory",
        }
    }
}

impl CounterRepository for CounterStore {
    async fn upsert_increment(
        &self,
        country_code: &CountryCode,
        country_name: &str,
        amount: BlepCount,
    ) -> BlepResult<CountryCounter> {
        match self {
            CounterStore::Postgres(repo) => {
                repo.upsert_increment(country_code, country_name, amount)
                    .await
            }
            CounterStore::Memory(repo) => {
                repo.upsert_increment(country_code, country_name, amount)
                    .await
            }
        }
    }

    async fn top_n(&self, limit: u32) -> BlepResult<Vec<CountryCounter>> {
        match self {
            CounterStore::Postgres(repo) => repo.top_n(limit).await,
            CounterStore::Memory(repo) => repo.top_n(limit).await,
        }
    }

    async fn clear_all(&self) -> BlepResult<()> {
        match self {
            CounterStore::Postgres(repo) => repo.clear_all().await,
            CounterStore::Memory(repo) => repo.clear_all().await,
        }
    }

    async fn seed(
        &self,
        country_code: &CountryCode,
        country_name: &str,
        bleps: i32,
    ) -> BlepResult<CountryCounter> {
        match self {
            CounterStore::Postgres(repo) => repo.seed(country_code, country_name, bleps).await,
            CounterStore::Memory(repo) => repo.seed(country_code, country_name, bleps).await,
        }
    }
}
