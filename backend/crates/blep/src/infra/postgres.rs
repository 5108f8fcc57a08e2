//! PostgreSQL Repository Implementation

use crate::domain::entities::CountryCounter;
use crate::domain::repository::CounterRepository;
use crate::domain::value_objects::{BlepCount, CountryCode};
use crate::error::BlepResult;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::time::Instant;

/// PostgreSQL-backed repository over the `country_bleps` table
#[derive(Clone)]
pub struct PgCounterRepository {
    pool: PgPool,
}

impl PgCounterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CounterRepository for PgCounterRepository {
    async fn upsert_increment(
        &self,
        country_code: &CountryCode,
        country_name: &str,
        amount: BlepCount,
    ) -> BlepResult<CountryCounter> {
        let started = Instant::now();

        // The increment references the stored value, so concurrent upserts
        // for one country serialize on the row lock and none are lost.
        let row = sqlx::query_as::<_, CountryBlepsRow>(
            r#"
            INSERT INTO country_bleps (country_code, country_name, bleps)
            VALUES ($1, $2, $3)
            ON CONFLICT (country_code)
            DO UPDATE SET
                bleps = country_bleps.bleps + EXCLUDED.bleps,
                country_name = EXCLUDED.country_name
            RETURNING country_code, country_name, bleps, updated_at
            "#,
        )
        .bind(country_code.as_str())
        .bind(country_name)
        .bind(amount.get() as i32)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(
            query = "upsert_increment",
            country_code = %country_code,
            amount = amount.get(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Executed query"
        );

        Ok(row.into_counter())
    }

    async fn top_n(&self, limit: u32) -> BlepResult<Vec<CountryCounter>> {
        let started = Instant::now();

        let rows = sqlx::query_as::<_, CountryBlepsRow>(
            r#"
            SELECT country_code, country_name, bleps, updated_at
            FROM country_bleps
            ORDER BY bleps DESC, country_code ASC
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(
            query = "top_n",
            rows = rows.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Executed query"
        );

        Ok(rows.into_iter().map(CountryBlepsRow::into_counter).collect())
    }

    async fn clear_all(&self) -> BlepResult<()> {
        let deleted = sqlx::query("DELETE FROM country_bleps")
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(rows_deleted = deleted, "Cleared country_bleps");
        Ok(())
    }

    async fn seed(
        &self,
        country_code: &CountryCode,
        country_name: &str,
        bleps: i32,
    ) -> BlepResult<CountryCounter> {
        let row = sqlx::query_as::<_, CountryBlepsRow>(
            r#"
            INSERT INTO country_bleps (country_code, country_name, bleps)
            VALUES ($1, $2, $3)
            ON CONFLICT (country_code)
            DO UPDATE SET bleps = EXCLUDED.bleps, country_name = EXCLUDED.country_name
            RETURNING country_code, country_name, bleps, updated_at
            "#,
        )
        .bind(country_code.as_str())
        .bind(country_name)
        .bind(bleps)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(country_code = %country_code, bleps, "Seeded country total");
        Ok(row.into_counter())
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct CountryBlepsRow {
    country_code: String,
    country_name: String,
    bleps: i32,
    updated_at: DateTime<Utc>,
}

impl CountryBlepsRow {
    fn into_counter(self) -> CountryCounter {
        CountryCounter {
            country_code: CountryCode::from_stored(self.country_code),
            country_name: self.country_name,
            bleps: i64::from(self.bleps),
            updated_at: self.updated_at,
        }
    }
}
