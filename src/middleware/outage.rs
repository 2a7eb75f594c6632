//! # Database Outage Middleware
//!
//! Runs the [`RequestGuard`](crate::services::guard::RequestGuard) in front of
//! every route and short-circuits to the outage page when the database is down.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::{instrument, trace, warn};

use crate::error::AppResult;
use crate::models::AppState;

/// Database outage middleware
///
/// # Returns
///
/// - **Database reachable / bypassed**: Continues to the next handler
/// - **Database unavailable**: The outage view response, routing is skipped
/// - **Unrecognized probe failure**: `500 Internal Server Error`
#[instrument(
    skip_all,
    fields(
        method = %req.method(),
        uri = %req.uri(),
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn db_outage_middleware(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> AppResult<Response> {
    trace!("Processing database outage middleware");

    if let Some(outage) = state.guard.check(req.uri()).await? {
        warn!("Database unavailable, request short-circuited");
        return Ok(outage);
    }

    Ok(next.run(req).await)
}
