//! # API Shared
//!
//! Shared definitions for the diagnoses APIs.
//!
//! Contains:
//! - Wire types (`types` module) with `serde` and OpenAPI schema derives
//! - Shared services like `HealthService`
//!
//! Transport crates map core entities into these types; the core never depends on them.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
