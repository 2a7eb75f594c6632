//! # Centralized Error Handling
//!
//! This module provides a unified error handling system for the application.
//! It centralizes error logging and HTTP response generation.
//!
//! Database outages are *not* errors at this level: the guard recovers them
//! into the outage page. What reaches [`AppError`] is everything the guard
//! does not know how to recover from.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::services::probe::ProbeError;

/// Central application error type that encompasses all possible error conditions.
///
/// Internal errors are logged automatically when converted into a response.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("database probe failed")]
    Probe(#[from] ProbeError),

    #[error("not found: {0}")]
    NotFound(&'static str),
}

#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Probe(e) = &self {
            error!(?e, "Unrecoverable database probe error");
        }

        let (status, message) = match self {
            AppError::Probe(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(ErrorBody { message });
        (status, body).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
