//! Health check handlers for Kubernetes probes.
//!
//! Provides `/health/live` and `/health/ready`. Readiness only checks local
//! configuration; the place index itself is never called.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: "ok" or "not_ready: <reason>".
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Place index every request is sent to (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,

    /// Country filter applied to suggestions (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_countries: Option<Vec<String>>,

    /// When the service state was created (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            index_name: None,
            filter_countries: None,
            started_at: None,
        }
    }

    /// Create a ready status describing the configured index.
    pub fn ready(service: &str, version: &str, state: &AppState) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            index_name: Some(state.index_name().to_string()),
            filter_countries: Some(state.filter_countries().to_vec()),
            started_at: Some(state.started_at()),
        }
    }

    /// Create a not-ready status.
    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            service: service.to_string(),
            version: version.to_string(),
            index_name: None,
            filter_countries: None,
            started_at: None,
        }
    }
}

/// Liveness probe handler.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"location-demo-service-shared","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// Returns 503 when the index name is blank. Settings read from the
/// environment always fall back to a default, so only a state built with
/// [`AppState::new`] and hand-written settings can take that branch.
///
/// ```text
/// GET /health/ready
/// {"status":"ok",...,"index_name":"my-place-index","filter_countries":["ISR"],"started_at":"..."}
/// ```
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    if state.index_name().trim().is_empty() {
        let status = HealthStatus::not_ready(service, version, "no place index configured");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    let status = HealthStatus::ready(service, version, &state);
    (StatusCode::OK, Json(status)).into_response()
}
