use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("route not found")]
    NotFound,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(error: &'static str) -> Self {
        Self { error, message: None }
    }

    pub fn with_message(error: &'static str, message: impl Into<String>) -> Self {
        Self { error, message: Some(message.into()) }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(error) => (StatusCode::BAD_REQUEST, ErrorBody::new(error)),
            AppError::InvalidBody(rejection) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::with_message("Invalid JSON body", rejection.body_text()),
            ),
            AppError::Store(StoreError::Unavailable) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorBody::with_message(
                    "Database not available",
                    "Database is not connected. Please check your database connection.",
                ),
            ),
            AppError::NotFound => (StatusCode::NOT_FOUND, ErrorBody::new("Route not found")),
            AppError::Store(ref e) => {
                tracing::error!("store error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new("Internal server error"))
            }
            AppError::Internal(ref e) => {
                tracing::error!("internal error: {e:?}\n{}", e.backtrace());
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new("Internal server error"))
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_is_bad_request() {
        let (status, body) = render(AppError::Validation("client_name is required")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "client_name is required" }));
    }

    #[tokio::test]
    async fn unavailable_store_is_503_with_hint() {
        let (status, body) = render(StoreError::Unavailable.into()).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "Database not available");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn persistence_detail_is_not_leaked() {
        let err = StoreError::Persistence(sqlx::Error::PoolTimedOut);
        let (status, body) = render(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
    }

    #[tokio::test]
    async fn internal_detail_is_not_leaked() {
        let (status, body) = render(anyhow::anyhow!("secret detail").into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
    }
}
