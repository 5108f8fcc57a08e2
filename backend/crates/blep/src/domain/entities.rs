//! Domain Entities

use crate::domain::value_objects::CountryCode;
use chrono::{DateTime, Utc};

/// Running blep total for one country
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCounter {
    pub country_code: CountryCode,
    /// Display name, last writer wins
    pub country_name: String,
    pub bleps: i64,
    /// Time of the last insert or update
    pub updated_at: DateTime<Utc>,
}

impl CountryCounter {
    /// First increment for a previously unseen country
    pub fn new(country_code: CountryCode, country_name: impl Into<String>, bleps: i64) -> Self {
        Self {
            country_code,
            country_name: country_name.into(),
            bleps,
            updated_at: Utc::now(),
        }
    }

    /// Add `amount` bleps and adopt the latest display name
    pub fn increment(&mut self, country_name: &str, amount: i64) {
        self.bleps += amount;
        if self.country_name != country_name {
            self.country_name = country_name.to_string();
        }
        self.updated_at = Utc::now();
    }
}
