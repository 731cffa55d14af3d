//! HTTP error mapping

use adcopy_core::AdcopyError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Handler error; renders as `{ "error": ..., "code": ... }`
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] AdcopyError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Core(err) => {
                let status = match err {
                    AdcopyError::InvalidBrief(_) | AdcopyError::Campaign(_) => {
                        StatusCode::BAD_REQUEST
                    }
                    AdcopyError::Provider(_) => StatusCode::BAD_GATEWAY,
                    AdcopyError::Template(_) | AdcopyError::Config(_) => {
                        tracing::error!(error = %err, "internal core error");
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, err.code(), err.to_string())
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message, "code": code }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::from(AdcopyError::InvalidBrief("x".into())), StatusCode::BAD_REQUEST),
            (ApiError::from(AdcopyError::Campaign("x".into())), StatusCode::BAD_REQUEST),
            (ApiError::from(AdcopyError::Provider("x".into())), StatusCode::BAD_GATEWAY),
            (ApiError::from(AdcopyError::Template("x".into())), StatusCode::INTERNAL_SERVER_ERROR),
            (ApiError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
