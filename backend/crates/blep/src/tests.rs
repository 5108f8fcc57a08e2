//! Unit tests for blep crate

#[cfg(test)]
mod value_object_tests {
    use crate::domain::value_objects::*;
    use serde_json::json;

    #[test]
    fn test_country_code_normalizes_case() {
        let code = CountryCode::parse("us").unwrap();
        assert_eq!(code.as_str(), "US");
        assert_eq!(CountryCode::parse("US"), Some(code));
    }

    #[test]
    fn test_country_code_trims_and_rejects_blank() {
        assert_eq!(CountryCode::parse("  gb ").unwrap().as_str(), "GB");
        assert!(CountryCode::parse("").is_none());
        assert!(CountryCode::parse("   ").is_none());
    }

    #[test]
    fn test_blep_count_in_range_is_exact() {
        for n in 1..=50 {
            assert_eq!(BlepCount::from_json(Some(&json!(n))).get(), n as u32);
        }
    }

    #[test]
    fn test_blep_count_defaults_to_one() {
        assert_eq!(BlepCount::from_json(None), BlepCount::DEFAULT);
        assert_eq!(BlepCount::from_json(Some(&json!(0))).get(), 1);
        assert_eq!(BlepCount::from_json(Some(&json!(-7))).get(), 1);
        assert_eq!(BlepCount::from_json(Some(&json!("lots"))).get(), 1);
        assert_eq!(BlepCount::from_json(Some(&json!(null))).get(), 1);
        assert_eq!(BlepCount::from_json(Some(&json!(true))).get(), 1);
        assert_eq!(BlepCount::from_json(Some(&json!([3]))).get(), 1);
        assert_eq!(BlepCount::from_json(Some(&json!(0.5))).get(), 1);
    }

    #[test]
    fn test_blep_count_caps_at_max() {
        assert_eq!(BlepCount::from_json(Some(&json!(51))).get(), BlepCount::MAX);
        assert_eq!(BlepCount::from_json(Some(&json!(500))).get(), 50);
        assert_eq!(BlepCount::from_json(Some(&json!(u64::MAX))).get(), 50);
        assert_eq!(BlepCount::from_json(Some(&json!(1e300))).get(), 50);
    }

    #[test]
    fn test_blep_count_accepts_numeric_strings_and_fractions() {
        assert_eq!(BlepCount::from_json(Some(&json!("5"))).get(), 5);
        assert_eq!(BlepCount::from_json(Some(&json!(" 12 "))).get(), 12);
        assert_eq!(BlepCount::from_json(Some(&json!(7.9))).get(), 7);
        assert_eq!(BlepCount::from_json(Some(&json!("3.2"))).get(), 3);
    }
}

#[cfg(test)]
mod domain_tests {
    use crate::domain::entities::*;
    use crate::domain::value_objects::*;

    #[test]
    fn test_counter_increment_updates_name_and_timestamp() {
        let code = CountryCode::parse("DE").unwrap();
        let mut counter = CountryCounter::new(code, "Deutschland", 3);
        let created_at = counter.updated_at;

        counter.increment("Germany", 2);

        assert_eq!(counter.bleps, 5);
        assert_eq!(counter.country_name, "Germany");
        assert!(counter.updated_at >= created_at);
    }
}

#[cfg(test)]
mod memory_store_tests {
    use crate::domain::repository::{CounterRepository, DEFAULT_TOP_N};
    use crate::domain::value_objects::*;
    use crate::error::BlepError;
    use crate::infra::memory::InMemoryCounterRepository;
    use std::sync::Arc;

    fn code(raw: &str) -> CountryCode {
        CountryCode::parse(raw).unwrap()
    }

    fn count(n: i64) -> BlepCount {
        BlepCount::from_requested(Some(n))
    }

    #[tokio::test]
    async fn test_upsert_creates_then_increments() {
        let repo = InMemoryCounterRepository::new();

        let first = repo
            .upsert_increment(&code("ca"), "Canada", count(3))
            .await
            .unwrap();
        assert_eq!(first.bleps, 3);
        assert_eq!(first.country_code.as_str(), "CA");

        let second = repo
            .upsert_increment(&code("CA"), "Canada", count(4))
            .await
            .unwrap();
        assert_eq!(second.bleps, 7);
        assert!(second.updated_at >= first.updated_at);
    }

    #[tokio::test]
    async fn test_upsert_last_name_wins() {
        let repo = InMemoryCounterRepository::new();
        repo.upsert_increment(&code("GB"), "Britain", count(1))
            .await
            .unwrap();
        let row = repo
            .upsert_increment(&code("GB"), "United Kingdom", count(1))
            .await
            .unwrap();
        assert_eq!(row.country_name, "United Kingdom");
    }

    #[tokio::test]
    async fn test_top_n_sorted_and_limited() {
        let repo = InMemoryCounterRepository::new();
        for i in 0..60 {
            let raw = format!("C{i}");
            repo.upsert_increment(&code(&raw), "Somewhere", count(i % 50 + 1))
                .await
                .unwrap();
        }

        let rows = repo.top_n(DEFAULT_TOP_N).await.unwrap();
        assert_eq!(rows.len(), 50);
        assert!(rows.windows(2).all(|w| w[0].bleps >= w[1].bleps));
    }

    #[tokio::test]
    async fn test_top_n_ties_are_stable() {
        let repo = InMemoryCounterRepository::new();
        for raw in ["FR", "BE", "NL"] {
            repo.upsert_increment(&code(raw), raw, count(2)).await.unwrap();
        }

        let first: Vec<_> = repo.top_n(10).await.unwrap();
        let second: Vec<_> = repo.top_n(10).await.unwrap();
        let order: Vec<_> = first.iter().map(|r| r.country_code.as_str()).collect();
        assert_eq!(order, vec!["BE", "FR", "NL"]);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_clear_all() {
        let repo = InMemoryCounterRepository::new();
        repo.upsert_increment(&code("US"), "United States", count(1))
            .await
            .unwrap();
        repo.clear_all().await.unwrap();
        assert!(repo.top_n(DEFAULT_TOP_N).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seed_is_unsupported() {
        let repo = InMemoryCounterRepository::new();
        let err = repo
            .seed(&code("US"), "United States", 5)
            .await
            .unwrap_err();
        assert!(matches!(err, BlepError::UnsupportedOperation("seed")));
        assert!(repo.top_n(DEFAULT_TOP_N).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_increments_are_not_lost() {
        let repo = Arc::new(InMemoryCounterRepository::new());

        let tasks: Vec<_> = (0..64)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.upsert_increment(&code("JP"), "Japan", count(1))
                        .await
                        .unwrap();
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        let rows = repo.top_n(1).await.unwrap();
        assert_eq!(rows[0].bleps, 64);
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::*;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = BlepConfig::default();

        assert_eq!(config.leaderboard_limit, 50);
        assert_eq!(config.rate_limit.max_requests, 120);
        assert_eq!(config.rate_limit.window, Duration::from_millis(60_000));
        assert!(!config.trust_proxy);
    }

    #[test]
    fn test_with_rate_limit() {
        let config = BlepConfig::with_rate_limit(2, 150);
        assert_eq!(config.rate_limit.max_requests, 2);
        assert_eq!(config.rate_limit.window, Duration::from_millis(150));
        assert_eq!(config.leaderboard_limit, 50);
    }
}

#[cfg(test)]
mod models_tests {
    use crate::presentation::dto::*;

    #[test]
    fn test_blep_request_deserialization() {
        let json = r#"{"country_code":"us","country_name":"United States","count":5}"#;
        let request: BlepRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.country_code.as_deref(), Some("us"));
        assert_eq!(request.country_name.as_deref(), Some("United States"));
        assert_eq!(request.count, Some(serde_json::json!(5)));
    }

    #[test]
    fn test_blep_request_fields_optional() {
        let request: BlepRequest = serde_json::from_str("{}").unwrap();
        assert!(request.country_code.is_none());
        assert!(request.country_name.is_none());
        assert!(request.count.is_none());
    }

    #[test]
    fn test_country_entry_serialization() {
        let entry = CountryEntry {
            country_code: "US".to_string(),
            country_name: "United States".to_string(),
            bleps: 6,
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"country_code":"US","country_name":"United States","bleps":6})
        );
    }

    #[test]
    fn test_health_response_serialization() {
        let json = serde_json::to_string(&HealthResponse { ok: true }).unwrap();
        assert_eq!(json, r#"{"ok":true}"#);
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::AppError;
    use std::time::Duration;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(BlepError, StatusCode)> = vec![
            (BlepError::MissingCountry, StatusCode::BAD_REQUEST),
            (
                BlepError::RateLimited {
                    retry_after: Duration::from_millis(500),
                },
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (
                BlepError::Database(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                BlepError::UnsupportedOperation("seed"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status);
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::from(BlepError::MissingCountry).code(), "missing_country");
        assert_eq!(
            AppError::from(BlepError::RateLimited {
                retry_after: Duration::from_millis(10)
            })
            .code(),
            "rate_limited"
        );
        assert_eq!(
            AppError::from(BlepError::Database(sqlx::Error::PoolClosed)).code(),
            "internal_error"
        );
    }

    #[test]
    fn test_rate_limited_response_has_retry_after_header() {
        let response = BlepError::RateLimited {
            retry_after: Duration::from_millis(2_500),
        }
        .into_response();
        assert_eq!(response.headers()["retry-after"], "3");
    }
}
