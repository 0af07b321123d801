//! A utility module for handling Axum's extractor rejections.

use crate::app::error::AppError;
use axum::extract::rejection::JsonRejection;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::RequestFormat(rejection.to_string())
    }
}
