//! Demo Data
//!
//! Absolute upserts of a small fixed leaderboard. Countries outside the
//! demo set keep their totals.

use blep::models::{CountryCode, CountryCounter};
use blep::store::CounterRepository;

pub const DEMO_ROWS: [(&str, &str, i32); 4] = [
    ("US", "United States", 5),
    ("CA", "Canada", 3),
    ("GB", "United Kingdom", 2),
    ("DE", "Germany", 1),
];

/// Set every demo country to its demo total
pub async fn seed_demo_data<R>(repo: &R) -> anyhow::Result<Vec<CountryCounter>>
where
    R: CounterRepository,
{
    let mut seeded = Vec::with_capacity(DEMO_ROWS.len());

    for (raw_code, name, bleps) in DEMO_ROWS {
        let code = CountryCode::parse(raw_code)
            .ok_or_else(|| anyhow::anyhow!("invalid country code: {raw_code}"))?;
        let row = repo.seed(&code, name, bleps).await?;
        tracing::info!(country_code = %row.country_code, bleps = row.bleps, "Seeded");
        seeded.push(row);
    }

    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blep::BlepResult;
    use blep::models::BlepCount;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Records seeds in a map and counts destructive calls
    #[derive(Clone, Default)]
    struct RecordingStore {
        rows: Arc<Mutex<BTreeMap<String, CountryCounter>>>,
        clears: Arc<Mutex<u32>>,
    }

    impl CounterRepository for RecordingStore {
        async fn upsert_increment(
            &self,
            country_code: &CountryCode,
            country_name: &str,
            amount: BlepCount,
        ) -> BlepResult<CountryCounter> {
            let mut rows = self.rows.lock().await;
            let row = rows
                .entry(country_code.to_string())
                .and_modify(|row| row.increment(country_name, amount.into()))
                .or_insert_with(|| {
                    CountryCounter::new(country_code.clone(), country_name, amount.into())
                });
            Ok(row.clone())
        }

        async fn top_n(&self, limit: u32) -> BlepResult<Vec<CountryCounter>> {
            let rows = self.rows.lock().await;
            Ok(rows.values().take(limit as usize).cloned().collect())
        }

        async fn clear_all(&self) -> BlepResult<()> {
            *self.clears.lock().await += 1;
            self.rows.lock().await.clear();
            Ok(())
        }

        async fn seed(
            &self,
            country_code: &CountryCode,
            country_name: &str,
            bleps: i32,
        ) -> BlepResult<CountryCounter> {
            let row = CountryCounter::new(country_code.clone(), country_name, bleps.into());
            self.rows
                .lock()
                .await
                .insert(country_code.to_string(), row.clone());
            Ok(row)
        }
    }

    fn code(raw: &str) -> CountryCode {
        CountryCode::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn test_seed_keeps_other_countries() {
        let store = RecordingStore::default();
        store
            .upsert_increment(&code("JP"), "Japan", BlepCount::from_requested(Some(40)))
            .await
            .unwrap();

        let seeded = seed_demo_data(&store).await.unwrap();
        assert_eq!(seeded.len(), DEMO_ROWS.len());
        assert_eq!(*store.clears.lock().await, 0);

        let rows = store.rows.lock().await;
        assert_eq!(rows["JP"].bleps, 40);
        assert_eq!(rows["US"].bleps, 5);
        assert_eq!(rows["CA"].bleps, 3);
        assert_eq!(rows["GB"].bleps, 2);
        assert_eq!(rows["DE"].bleps, 1);
    }

    #[tokio::test]
    async fn test_seed_overwrites_demo_totals() {
        let store = RecordingStore::default();
        store
            .upsert_increment(&code("US"), "United States", BlepCount::from_requested(Some(30)))
            .await
            .unwrap();

        seed_demo_data(&store).await.unwrap();
        seed_demo_data(&store).await.unwrap();

        assert_eq!(store.rows.lock().await["US"].bleps, 5);
    }

    #[tokio::test]
    async fn test_seed_fails_on_memory_store() {
        let store = blep::InMemoryCounterRepository::new();
        assert!(seed_demo_data(&store).await.is_err());
    }
}
