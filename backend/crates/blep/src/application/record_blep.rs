//! Record Blep Use Case

use crate::domain::entities::CountryCounter;
use crate::domain::repository::CounterRepository;
use crate::domain::value_objects::{BlepCount, CountryCode};
use crate::error::{BlepError, BlepResult};
use serde_json::Value;
use std::sync::Arc;

/// Input DTO for record blep
#[derive(Debug, Clone, Default)]
pub struct RecordBlepInput {
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    /// Client-batched amount, untrusted
    pub count: Option<Value>,
}

/// Record Blep Use Case
pub struct RecordBlepUseCase<R>
where
    R: CounterRepository,
{
    repo: Arc<R>,
}

impl<R> RecordBlepUseCase<R>
where
    R: CounterRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RecordBlepInput) -> BlepResult<CountryCounter> {
        let country_code = input
            .country_code
            .as_deref()
            .and_then(CountryCode::parse)
            .ok_or(BlepError::MissingCountry)?;

        let country_name = input
            .country_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(BlepError::MissingCountry)?;

        let amount = BlepCount::from_json(input.count.as_ref());

        let counter = self
            .repo
            .upsert_increment(&country_code, country_name, amount)
            .await?;

        tracing::info!(
            country_code = %counter.country_code,
            amount = amount.get(),
            total = counter.bleps,
            "Blep recorded"
        );

        Ok(counter)
    }
}
