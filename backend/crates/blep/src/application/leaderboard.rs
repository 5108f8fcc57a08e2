//! Leaderboard Use Case

use crate::domain::entities::CountryCounter;
use crate::domain::repository::CounterRepository;
use crate::error::BlepResult;
use std::sync::Arc;

/// Get Leaderboard Use Case
pub struct GetLeaderboardUseCase<R>
where
    R: CounterRepository,
{
    repo: Arc<R>,
    limit: u32,
}

impl<R> GetLeaderboardUseCase<R>
where
    R: CounterRepository,
{
    pub fn new(repo: Arc<R>, limit: u32) -> Self {
        Self { repo, limit }
    }

    pub async fn execute(&self) -> BlepResult<Vec<CountryCounter>> {
        let rows = self.repo.top_n(self.limit).await?;
        tracing::debug!(rows = rows.len(), "Leaderboard fetched");
        Ok(rows)
    }
}
