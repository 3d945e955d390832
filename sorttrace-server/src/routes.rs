//! HTTP route handlers for the sort API.

use axum::Router;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use sorttrace::{Algorithm, Trace, TraceError};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::element::Element;
use crate::error::ApiError;
use crate::state::AppState;

/// Build the application router with permissive CORS.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/sort", post(sort))
        .route("/algorithms", get(list_algorithms))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Deserialize)]
struct SortRequest {
    #[serde(default)]
    array: Vec<Element>,
    #[serde(default = "default_algorithm")]
    algorithm: String,
}

fn default_algorithm() -> String {
    Algorithm::BubbleSort.id().to_string()
}

#[derive(Debug, Serialize)]
struct SortResponse {
    steps: Trace<Element>,
    /// Milliseconds spent sorting, rounded to two decimals.
    #[serde(rename = "simulatedDuration")]
    simulated_duration: f64,
}

/// POST /sort - run the named algorithm and return its step trace.
async fn sort(
    State(state): State<AppState>,
    payload: Result<Json<SortRequest>, JsonRejection>,
) -> Result<Json<SortResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected sort request body");
        TraceError::InvalidInput(rejection.body_text())
    })?;

    let algorithm: Algorithm = request.algorithm.parse().inspect_err(|_| {
        warn!(algorithm = %request.algorithm, "unsupported algorithm requested");
    })?;

    let len = request.array.len();
    let max = state.config.max_array_len;
    if len > max {
        return Err(ApiError::TooLarge { len, max });
    }
    let predicted = algorithm.max_steps(len);
    if predicted > state.config.max_steps {
        return Err(ApiError::TooManySteps {
            predicted,
            max: state.config.max_steps,
        });
    }

    let array = request.array;
    let limit = state.config.sort_timeout();
    let task = tokio::task::spawn_blocking(move || algorithm.run(&array));
    let result = tokio::time::timeout(limit, task)
        .await
        .map_err(|_| ApiError::Timeout(limit))?
        .map_err(|e| ApiError::Internal(format!("sort task failed: {}", e)))?;

    let simulated_duration = result.elapsed_ms_rounded();
    info!(
        algorithm = %algorithm,
        len,
        steps = result.trace.len(),
        elapsed_ms = simulated_duration,
        "sorted"
    );
    Ok(Json(SortResponse {
        steps: result.trace,
        simulated_duration,
    }))
}

#[derive(Serialize)]
struct AlgorithmsResponse {
    algorithms: Vec<AlgorithmEntry>,
}

#[derive(Serialize)]
struct AlgorithmEntry {
    id: &'static str,
    name: &'static str,
    time: &'static str,
    space: &'static str,
}

/// GET /algorithms - registry contents with complexity labels.
async fn list_algorithms() -> Json<AlgorithmsResponse> {
    let algorithms = Algorithm::ALL
        .into_iter()
        .map(|algorithm| AlgorithmEntry {
            id: algorithm.id(),
            name: algorithm.display_name(),
            time: algorithm.time_complexity(),
            space: algorithm.space_complexity(),
        })
        .collect();
    Json(AlgorithmsResponse { algorithms })
}
