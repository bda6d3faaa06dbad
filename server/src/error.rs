//! Request-level errors and their HTTP mapping.
//!
//! # Design
//! `NotFound` covers every missing list or todo, and path ids that do not
//! parse as integers. `Validation` carries the user-facing messages for a
//! rejected form. Anything that means the stored session is unreadable is a
//! server fault and is logged here, once, on its way out.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use todos_core::CoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found.")]
    NotFound,

    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("session data is unreadable: {0}")]
    Session(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Session(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found." }))).into_response()
            }
            AppError::Validation(messages) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": messages })),
            )
                .into_response(),
            AppError::Core(CoreError::InvalidArgument(msg)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": [msg] })),
            )
                .into_response(),
            other => {
                tracing::error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error." })),
                )
                    .into_response()
            }
        }
    }
}
