//! Place lookup and autocomplete HTTP service.
//!
//! A thin front-end over Amazon Location Service: each handler reads one query
//! parameter, makes one place index call and returns the result as JSON.
//!
//! # Endpoints
//!
//! - `GET /place?id=<PlaceId>` - the `Place` record, verbatim
//! - `GET /suggestions?q=<text>` - the `Results` array, verbatim
//! - `GET /hello` - `"Hello world"`
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live` - Kubernetes liveness probe
//! - `GET /health/ready` - Kubernetes readiness probe

use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use location_demo_lib::{
    Place, SuggestionResult, OPERATION_GET_PLACE, OPERATION_SEARCH_SUGGESTIONS,
};
use location_demo_service_shared::{
    from_lib_error, health_live, health_ready, metrics_handler, record_index_call,
    record_suggestions_returned, AppState, MetricsLayer, PlaceQuery, ProblemDetails, RequestId,
    SuggestionsQuery,
};

/// Body returned by `GET /hello`.
pub const HELLO_MESSAGE: &str = "Hello world";

/// HTTP response - either the pass-through payload or an RFC 9457 error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response<T> {
    Success(T),
    Error(ProblemDetails),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::Success(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::Error(problem) => problem.into_response(),
        }
    }
}

/// Build the service router.
///
/// `metrics_path` is where the Prometheus exposition is mounted.
pub fn router(state: AppState, metrics_path: &str) -> Router {
    Router::new()
        .route("/place", get(place_handler))
        .route("/suggestions", get(suggestions_handler))
        .route("/hello", get(hello_handler))
        .route(metrics_path, get(metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .layer(MetricsLayer)
        .with_state(state)
}

/// Handle GET /place requests.
async fn place_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    query: PlaceQuery,
) -> Response<Place> {
    info!(
        request_id = %request_id,
        id = query.id.as_deref().unwrap_or("<missing>"),
        index_name = %state.index_name(),
        "handling place request"
    );

    let start = Instant::now();
    let result = state
        .place_index()
        .get_place(query.id.as_deref(), state.index_name())
        .await;
    record_index_call(OPERATION_GET_PLACE, result.is_ok(), start.elapsed());

    match result {
        Ok(place) => {
            info!(
                request_id = %request_id,
                label = place.label.as_deref().unwrap_or(""),
                "place found"
            );
            Response::Success(place)
        }
        Err(e) => {
            error!(
                request_id = %request_id,
                operation = e.operation(),
                error = %e,
                "place lookup failed"
            );
            Response::Error(from_lib_error(&e, request_id.as_str()))
        }
    }
}

/// Handle GET /suggestions requests.
async fn suggestions_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    query: SuggestionsQuery,
) -> Response<Vec<SuggestionResult>> {
    info!(
        request_id = %request_id,
        q = query.q.as_deref().unwrap_or("<missing>"),
        filter_countries = ?state.filter_countries(),
        "handling suggestions request"
    );

    let start = Instant::now();
    let result = state
        .place_index()
        .search_suggestions(
            query.q.as_deref(),
            state.index_name(),
            state.filter_countries(),
        )
        .await;
    record_index_call(OPERATION_SEARCH_SUGGESTIONS, result.is_ok(), start.elapsed());

    match result {
        Ok(results) => {
            record_suggestions_returned(results.len());
            info!(
                request_id = %request_id,
                count = results.len(),
                "suggestions returned"
            );
            Response::Success(results)
        }
        Err(e) => {
            error!(
                request_id = %request_id,
                operation = e.operation(),
                error = %e,
                "suggestion search failed"
            );
            Response::Error(from_lib_error(&e, request_id.as_str()))
        }
    }
}

/// Handle GET /hello requests. Query parameters are ignored.
async fn hello_handler() -> Json<&'static str> {
    Json(HELLO_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use location_demo_service_shared::test_utils::{sample_place, test_request_id};

    #[test]
    fn test_success_serializes_payload_without_envelope() {
        let response = Response::Success(sample_place());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["Label"], "Dizengoff St 50, Tel Aviv-Yafo, ISR");
        assert!(json.get("content_type").is_none());
        assert!(json.get("Success").is_none());
    }

    #[test]
    fn test_error_serializes_problem() {
        let problem = ProblemDetails::internal_error("GetPlace failed", test_request_id());
        let response: Response<Place> = Response::Error(problem);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], 500);
        assert_eq!(json["type"], "/problems/internal-error");
    }

    #[test]
    fn test_error_into_response_status() {
        let problem = ProblemDetails::internal_error("boom", "req-1");
        let response = Response::<Vec<SuggestionResult>>::Error(problem).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_hello_handler_literal() {
        let Json(body) = hello_handler().await;
        assert_eq!(body, "Hello world");
    }
}
