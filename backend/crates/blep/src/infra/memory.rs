//! In-memory Repository Implementation
//!
//! Non-persistent stand-in used when no database is configured.
//! All state is lost when the process exits.

use crate::domain::entities::CountryCounter;
use crate::domain::repository::CounterRepository;
use crate::domain::value_objects::{BlepCount, CountryCode};
use crate::error::{BlepError, BlepResult};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct InMemoryCounterRepository {
    table: Arc<Mutex<HashMap<CountryCode, CountryCounter>>>,
}

impl InMemoryCounterRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CounterRepository for InMemoryCounterRepository {
    async fn upsert_increment(
        &self,
        country_code: &CountryCode,
        country_name: &str,
        amount: BlepCount,
    ) -> BlepResult<CountryCounter> {
        let mut table = self.table.lock().await;

        let counter = table
            .entry(country_code.clone())
            .and_modify(|counter| counter.increment(country_name, amount.into()))
            .or_insert_with(|| {
                CountryCounter::new(country_code.clone(), country_name, amount.into())
            });

        Ok(counter.clone())
    }

    async fn top_n(&self, limit: u32) -> BlepResult<Vec<CountryCounter>> {
        let table = self.table.lock().await;

        let mut rows: Vec<CountryCounter> = table.values().cloned().collect();
        rows.sort_by(|a, b| {
            b.bleps
                .cmp(&a.bleps)
                .then_with(|| a.country_code.cmp(&b.country_code))
        });
        rows.truncate(limit as usize);

        Ok(rows)
    }

    async fn clear_all(&self) -> BlepResult<()> {
        self.table.lock().await.clear();
        Ok(())
    }

    async fn seed(
        &self,
        country_code: &CountryCode,
        _country_name: &str,
        _bleps: i32,
    ) -> BlepResult<CountryCounter> {
        tracing::warn!(country_code = %country_code, "Seeding is not available in memory");
        Err(BlepError::UnsupportedOperation("seed"))
    }
}
