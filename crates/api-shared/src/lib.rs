//! # API Shared
//!
//! Shared wire types and services for the DME catalog APIs.
//!
//! Contains:
//! - Response bodies (`HealthRes`, `ErrorRes`, `ProductRecord`) with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the `dme` CLI.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
