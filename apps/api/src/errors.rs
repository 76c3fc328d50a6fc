use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only caller mistakes surface here. Generation-path failures (backend
/// call, malformed response) never become an `AppError` — the engine absorbs
/// them into fallback results.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid rewrite mode: {0}")]
    InvalidMode(String),

    #[error("Invalid input for rewrite mode: {0}")]
    InvalidModeInput(String),

    #[error("Document extraction failed: {0}")]
    Extraction(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidMode(msg) => (StatusCode::BAD_REQUEST, "INVALID_MODE", msg.clone()),
            AppError::InvalidModeInput(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_MODE_INPUT", msg.clone())
            }
            AppError::Extraction(msg) => (StatusCode::BAD_REQUEST, "EXTRACTION_ERROR", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_errors_map_to_bad_request() {
        for err in [
            AppError::Validation("too short".into()),
            AppError::InvalidMode("bogus".into()),
            AppError::InvalidModeInput("missing job description".into()),
            AppError::Extraction("unsupported content type".into()),
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_internal_error_maps_to_500() {
        let response = AppError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
