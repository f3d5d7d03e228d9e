//! Shared infrastructure for location-demo HTTP services.
//!
//! - [`AppState`]: the place index client and its settings, shared by all handlers
//! - [`health`]: liveness/readiness probe handlers
//! - [`ProblemDetails`]: RFC 9457 Problem Details for error responses
//! - [`metrics`]: Prometheus metrics infrastructure
//! - [`logging`]: Structured JSON logging setup
//! - [`middleware`]: Request ID propagation and HTTP metrics
//! - Query parameter types for each endpoint
//!
//! # Architecture
//!
//! Handlers are thin: every answer comes from the place index in
//! `location-demo-lib`. This crate provides only HTTP glue:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Read one query parameter                                 │
//! │  - Call one PlaceIndex operation                            │
//! │  - Return the result as JSON                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides a mock place index and fixtures.
//! Enable the `test-utils` feature to access it from dependent crates.

#![deny(warnings)]

mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod problem;
mod request;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_index_call, record_suggestions_returned, MetricsConfig,
    MetricsError,
};
pub use middleware::{extract_or_generate_request_id, MetricsLayer, RequestId};
pub use problem::{from_lib_error, ProblemDetails, PROBLEM_INTERNAL_ERROR};
pub use request::{PlaceQuery, SuggestionsQuery};
pub use state::AppState;
