// src/utils/extract.rs

//! Extractors whose rejections are reported as JSON `AppError`s instead of
//! axum's plain-text bodies.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `Query<T>` that rejects with `AppError::BadRequest`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ValidQuery<T>(pub T);

/// `Json<T>` that rejects with `AppError::BadRequest`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);
