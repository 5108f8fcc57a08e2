//! Blep Counter Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory store implementations
//! - `presentation/` - HTTP handlers, DTOs, rate limiting middleware
//!
//! ## Consistency Model
//! - Every increment is a single atomic upsert; concurrent bleps for the
//!   same country are never lost
//! - Country codes are upper-cased before any read or write
//! - A single request adds at most [`BlepCount::MAX`] bleps
//! - Rate limiting is per client address and per process

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::BlepConfig;
pub use domain::value_objects::{BlepCount, CountryCode};
pub use error::{BlepError, BlepResult};
pub use infra::CounterStore;
pub use infra::memory::InMemoryCounterRepository;
pub use infra::postgres::PgCounterRepository;
pub use presentation::router::{blep_router, blep_router_generic, blep_router_with_limiter};

// Re-export kernel error types for unified error handling
pub use kernel::{AppError, AppResult, ErrorKind};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::domain::repository::{CounterRepository, LocalCounterRepository};
    pub use crate::infra::CounterStore;
}

#[cfg(test)]
mod tests;
