//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (CountryCounter)
//! - Domain value objects (CountryCode, BlepCount)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
