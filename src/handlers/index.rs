use axum::http::StatusCode;
use tracing::{debug, instrument};

use crate::error::AppError;

/// Landing endpoint. Only reachable while the database probe passes.
#[instrument]
pub async fn index() -> (StatusCode, &'static str) {
    debug!("Index endpoint accessed");
    (StatusCode::OK, "Service is up")
}

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("route not found")
}
