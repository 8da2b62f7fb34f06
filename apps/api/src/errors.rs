#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::extract::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Extraction succeeded but no page had selectable text.
    /// Typical cause: a scanned, image-only PDF with no text layer.
    #[error("No selectable text found in the uploaded document")]
    EmptyExtraction,

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Extract(e) => (
                StatusCode::BAD_REQUEST,
                "DOCUMENT_OPEN_ERROR",
                e.to_string(),
            ),
            AppError::EmptyExtraction => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EMPTY_EXTRACTION",
                "The document contains no selectable text. If the resume is a \
                 scanned image, re-export it with a text layer before analyzing."
                    .to_string(),
            ),
            AppError::Agent(msg) => {
                tracing::error!("Agent error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "AGENT_ERROR",
                    "The analysis agent failed to produce a response".to_string(),
                )
            }
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
