//! API DTOs (Data Transfer Objects)

use crate::domain::entities::CountryCounter;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request for POST /blep
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlepRequest {
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    /// Kept raw so malformed values degrade to a single blep
    #[serde(default)]
    pub count: Option<Value>,
}

/// One leaderboard row, also the response for POST /blep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub country_code: String,
    pub country_name: String,
    pub bleps: i64,
}

impl From<CountryCounter> for CountryEntry {
    fn from(counter: CountryCounter) -> Self {
        Self {
            country_code: counter.country_code.into_inner(),
            country_name: counter.country_name,
            bleps: counter.bleps,
        }
    }
}

/// Response for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}
