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
/// Only two failures are ever user-visible. Everything the generation path
/// can throw is absorbed into the fallback response before it gets here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Missing API key configuration")]
    MissingApiKey,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The body strings are part of the HTTP contract; clients match on
        // them literally.
        let (status, message) = match self {
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed"),
            AppError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Missing API Key configuration on server.",
            ),
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
