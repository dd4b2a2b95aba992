// crates/server/src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use studiobridge_core::GeneratorError;
use thiserror::Error;

/// Structured JSON error response for API errors.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// API error types that map to HTTP status codes.
///
/// Every relay error is terminal at the handler boundary: no internal
/// retries, no recovery. An authentication failure means the caller
/// must re-issue a token and retry the whole operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was absent from the request. Distinct from an
    /// invalid token: the caller sent a malformed request, not a stale
    /// credential.
    #[error("{0} required")]
    MissingField(&'static str),

    /// A token was present but does not resolve to any identity.
    #[error("invalid token")]
    InvalidToken,

    /// The asset-generation collaborator failed.
    #[error("generation failed: {0}")]
    Generator(#[from] GeneratorError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            ApiError::MissingField(field) => {
                tracing::warn!(field = %field, "missing required field");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(format!("{field} required")),
                )
            }
            ApiError::InvalidToken => {
                tracing::warn!("request with unresolvable token");
                (StatusCode::UNAUTHORIZED, ErrorResponse::new("invalid token"))
            }
            ApiError::Generator(err) => {
                tracing::error!(error = %err, "asset generation failed");
                let status = match err {
                    GeneratorError::NotConfigured | GeneratorError::NotAvailable(_) => {
                        StatusCode::SERVICE_UNAVAILABLE
                    }
                    GeneratorError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                    GeneratorError::Upstream(_) | GeneratorError::MalformedOutput(_) => {
                        StatusCode::BAD_GATEWAY
                    }
                };
                (status, ErrorResponse::new(err.to_string()))
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn extract_response(response: Response) -> (StatusCode, ErrorResponse) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        (status, error_response)
    }

    #[tokio::test]
    async fn missing_field_returns_400_with_field_name() {
        let response = ApiError::MissingField("token").into_response();
        let (status, body) = extract_response(response).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "token required");
    }

    #[tokio::test]
    async fn invalid_token_returns_401() {
        let response = ApiError::InvalidToken.into_response();
        let (status, body) = extract_response(response).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "invalid token");
    }

    #[tokio::test]
    async fn generator_upstream_error_returns_502() {
        let response =
            ApiError::Generator(GeneratorError::Upstream("boom".to_string())).into_response();
        let (status, body) = extract_response(response).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.error.contains("boom"));
    }

    #[tokio::test]
    async fn generator_timeout_returns_504() {
        let response = ApiError::Generator(GeneratorError::Timeout(60)).into_response();
        let (status, _) = extract_response(response).await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    }

    #[tokio::test]
    async fn generator_not_configured_returns_503() {
        let response = ApiError::Generator(GeneratorError::NotConfigured).into_response();
        let (status, _) = extract_response(response).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
