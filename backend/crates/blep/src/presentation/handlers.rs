//! HTTP Handlers

use crate::application::config::BlepConfig;
use crate::application::leaderboard::GetLeaderboardUseCase;
use crate::application::record_blep::{RecordBlepInput, RecordBlepUseCase};
use crate::domain::repository::CounterRepository;
use crate::error::BlepResult;
use crate::presentation::dto::{BlepRequest, CountryEntry, HealthResponse};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use std::sync::Arc;

/// Shared state for blep handlers
#[derive(Clone)]
pub struct BlepAppState<R>
where
    R: CounterRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<BlepConfig>,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// GET /leaderboard
pub async fn leaderboard<R>(
    State(state): State<BlepAppState<R>>,
) -> BlepResult<Json<Vec<CountryEntry>>>
where
    R: CounterRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetLeaderboardUseCase::new(state.repo.clone(), state.config.leaderboard_limit);

    let rows = use_case.execute().await?;

    Ok(Json(rows.into_iter().map(CountryEntry::from).collect()))
}

/// POST /blep
pub async fn record_blep<R>(
    State(state): State<BlepAppState<R>>,
    payload: Result<Json<BlepRequest>, JsonRejection>,
) -> BlepResult<Json<CountryEntry>>
where
    R: CounterRepository + Clone + Send + Sync + 'static,
{
    // An unreadable body is treated like an empty one
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable blep body");
            BlepRequest::default()
        }
    };

    let use_case = RecordBlepUseCase::new(state.repo.clone());

    let input = RecordBlepInput {
        country_code: req.country_code,
        country_name: req.country_name,
        count: req.count,
    };

    let counter = use_case.execute(input).await?;

    Ok(Json(CountryEntry::from(counter)))
}
