//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entities::CountryCounter;
use crate::domain::value_objects::{BlepCount, CountryCode};
use crate::error::BlepResult;

/// Default number of leaderboard rows
pub const DEFAULT_TOP_N: u32 = 50;

/// Country counter repository trait
#[trait_variant::make(CounterRepository: Send)]
pub trait LocalCounterRepository {
    /// Atomically create the row (total = amount) or add amount to it.
    /// The display name is replaced with `country_name`.
    async fn upsert_increment(
        &self,
        country_code: &CountryCode,
        country_name: &str,
        amount: BlepCount,
    ) -> BlepResult<CountryCounter>;

    /// Highest totals first, ties ordered by country code
    async fn top_n(&self, limit: u32) -> BlepResult<Vec<CountryCounter>>;

    /// Delete every row
    async fn clear_all(&self) -> BlepResult<()>;

    /// Set an absolute total, creating the row if needed (administrative)
    async fn seed(
        &self,
        country_code: &CountryCode,
        country_name: &str,
        bleps: i32,
    ) -> BlepResult<CountryCounter>;
}
