use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use sage_tts::EngineError;

/// Request-handling failures, mapped onto the platform's response
/// contract. Validation errors carry their fixed client-facing messages;
/// everything internal collapses to a generic 500 and is logged
/// server-side instead of being forwarded.
#[derive(Debug)]
pub enum ApiError {
    /// Body was not parseable as JSON.
    NotJson,
    /// Body had no usable `text` field.
    MissingText,
    /// The engine or the audio encoder failed.
    Engine(EngineError),
    /// The synthesis task was lost before completing.
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        Self::Engine(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotJson => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Request must be JSON"})),
            )
                .into_response(),
            Self::MissingText => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "JSON payload must contain 'text' field"})),
            )
                .into_response(),
            Self::Engine(err) => {
                error!(error = %err, "synthesis request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "synthesis failed"})),
                )
                    .into_response()
            }
            Self::Internal(detail) => {
                error!(detail = %detail, "synthesis task failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "synthesis failed"})),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::NotJson.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MissingText.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Engine(EngineError::synthesis("boom"))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal("join error".to_string())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
