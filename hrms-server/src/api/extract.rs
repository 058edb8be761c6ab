//! Request extractors
//!
//! Wrap [`axum::Json`] and [`axum::extract::Path`] so their rejections
//! surface as [`AppError`] JSON bodies instead of axum's plain-text ones:
//! any body rejection (bad JSON, wrong shape, missing content type) is a 400
//! [`AppError::MalformedBody`], and an undecodable path segment is a 400
//! [`AppError::InvalidIdentifier`].

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::utils::AppError;

/// JSON request body
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;
        Ok(JsonBody(value))
    }
}

/// Raw `{id}` path segment, not yet parsed as an identifier
#[derive(Debug, Clone)]
pub struct PathId(pub String);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::InvalidIdentifier(rejection.body_text()))?;
        Ok(PathId(id))
    }
}
