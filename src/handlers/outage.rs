//! # Outage View
//!
//! The static page served in place of every guarded route while the
//! database cannot be reached. Also routed directly at `/outage` so the
//! page can be previewed without taking the database down.

use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, instrument, warn};

use crate::utils::constant::OUTAGE_RETRY_AFTER_SECS;
use crate::utils::html::generate_outage_page_html;

/// Outage page handler.
///
/// # Returns
///
/// `503 Service Unavailable` with a `Retry-After` header and the static HTML page.
#[instrument]
pub async fn outage_page() -> Response {
    debug!("Outage page requested directly");
    outage_response()
}

/// Builds the outage page response. Synchronous so the guard can render it
/// without going through the router.
pub fn outage_response() -> Response {
    let retry_after = [(header::RETRY_AFTER, OUTAGE_RETRY_AFTER_SECS.to_string())];

    match generate_outage_page_html() {
        Ok(page) => (StatusCode::SERVICE_UNAVAILABLE, retry_after, Html(page)).into_response(),
        Err(e) => {
            warn!(error = %e, "Failed to render outage page, serving plain text");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                retry_after,
                "Service temporarily unavailable",
            )
                .into_response()
        }
    }
}
