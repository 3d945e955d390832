//! Mapping of sort failures to HTTP responses.

use std::time::Duration;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use sorttrace::TraceError;

/// Failure of a `/sort` request. Every variant renders as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    Trace(TraceError),
    TooLarge { len: usize, max: usize },
    TooManySteps { predicted: usize, max: usize },
    Timeout(Duration),
    Internal(String),
}

impl From<TraceError> for ApiError {
    fn from(err: TraceError) -> Self {
        ApiError::Trace(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Trace(_) => StatusCode::BAD_REQUEST,
            ApiError::TooLarge { .. } | ApiError::TooManySteps { .. } => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            ApiError::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            // The visualizer matches on this exact text.
            ApiError::Trace(TraceError::UnsupportedAlgorithm(_)) => {
                "Algorithm not supported".to_string()
            }
            ApiError::Trace(err) => err.to_string(),
            ApiError::TooLarge { len, max } => {
                format!("array has {} elements, limit is {}", len, max)
            }
            ApiError::TooManySteps { predicted, max } => {
                format!("trace could reach {} steps, limit is {}", predicted, max)
            }
            ApiError::Timeout(limit) => {
                format!("sort exceeded {} ms", limit.as_millis())
            }
            ApiError::Internal(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_algorithm_is_bad_request_with_fixed_text() {
        let err = ApiError::from(TraceError::UnsupportedAlgorithm("HeapSort".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Algorithm not supported");
    }

    #[test]
    fn invalid_input_is_bad_request() {
        let err = ApiError::from(TraceError::InvalidInput("not an array".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "invalid input: not an array");
    }

    #[test]
    fn limits_map_to_distinct_statuses() {
        let too_large = ApiError::TooLarge { len: 5, max: 4 };
        assert_eq!(too_large.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let too_many = ApiError::TooManySteps {
            predicted: 10,
            max: 5,
        };
        assert_eq!(too_many.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(too_many.message(), "trace could reach 10 steps, limit is 5");
        let timeout = ApiError::Timeout(Duration::from_millis(10));
        assert_eq!(timeout.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(timeout.message(), "sort exceeded 10 ms");
    }
}
