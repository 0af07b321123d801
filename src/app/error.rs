//! A centralized and idiomatic error handling module for the Axum web application.
//!
//! This module defines a single `AppError` enum that consolidates all possible
//! errors within the application, from malformed requests to identity-provider
//! rejections and document-store failures. By implementing
//! `axum::response::IntoResponse`, this error type can be returned directly
//! from any handler, simplifying error logic throughout the codebase.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::account::outbound::provider::ProviderError;
use crate::account::outbound::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid request format: {0}")]
    RequestFormat(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Authentication failed")]
    Authentication(#[from] ProviderError),

    #[error("Failed to update profile")]
    ProfileSave(#[from] StoreError),

    #[error("An internal server error occurred")]
    Internal,
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::RequestFormat(msg) => (StatusCode::BAD_REQUEST, msg, None),

            AppError::Validation(err) => {
                let details = json!(err.field_errors());
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Validation failed".to_string(),
                    Some(details),
                )
            },

            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),

            AppError::Authentication(err) => {
                // The provider's reason stays in the logs, never in the response.
                tracing::error!("Identity provider error: {:?}", err);
                (StatusCode::UNAUTHORIZED, "Authentication failed".to_string(), None)
            },

            AppError::ProfileSave(err) => {
                tracing::error!("Profile store error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to update profile".to_string(),
                    None,
                )
            },

            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred".to_string(),
                None,
            ),
        };

        (status, Json(ErrorResponse { message, details })).into_response()
    }
}
