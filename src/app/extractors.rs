//! Defines custom Axum extractors for the application.
//!
//! This module provides a wrapper around Axum's built-in JSON extractor to
//! ensure that any rejection is automatically converted into the application's
//! standard `AppError` JSON response, keeping handler signatures clean.

use crate::app::error::AppError;
use axum::{
    body::Body,
    extract::{FromRequest, Json},
    http::Request,
};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
