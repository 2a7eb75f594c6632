//! # Health Check Handler
//!
//! Simple health check endpoint for monitoring application availability.
//! The outage guard runs in front of it like any other route, so it
//! reports `503` through the outage page when the database is down.

use axum::http::StatusCode;
use tracing::{debug, instrument};

/// Health check endpoint that returns 200 OK.
///
/// # Returns
///
/// Always returns `200 OK` status code once routed.
#[instrument]
pub async fn health_check() -> StatusCode {
    debug!("Health check endpoint accessed");
    StatusCode::OK
}
