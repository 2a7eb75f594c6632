//! # Request Guard
//!
//! Decides, before routing, whether a request may proceed or must be served
//! the outage page because the database is unreachable.
//!
//! ## Flow
//!
//! 1. Static assets and unrelated test runs are let through untouched
//! 2. The configured connection is pinged with a trivial query
//! 3. On an *unavailable* failure the administrators are notified, the
//!    report is logged and the outage view replaces the routed response
//! 4. Any other failure is returned to the caller as an [`AppError`]
//!
//! Every request probes independently; there is no retry, backoff or
//! cached health state.

use std::sync::Arc;

use axum::{http::Uri, response::Response};
use tracing::{debug, error, instrument, trace, warn};

use crate::error::{AppError, AppResult};
use crate::models::{Settings, TestInvocation};
use crate::services::notifier::AdminNotifier;
use crate::services::probe::{DatabaseFault, DatabaseProbe};
use crate::utils::constant::OUTAGE_SUBJECT;
use crate::utils::trace::outage_report;

/// Renders the response served while the database is down.
pub type OutageView = fn() -> Response;

/// Why a request skipped the database probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BypassReason {
    /// The path is under the static asset prefix.
    StaticAsset,
    /// The process is a test run that does not target the guard.
    UnrelatedTestRun,
}

/// Intercepts requests and substitutes the outage view when the database is down.
#[derive(Clone)]
pub struct RequestGuard {
    static_url: String,
    connection: String,
    test_invocation: TestInvocation,
    probe: Arc<dyn DatabaseProbe>,
    notifier: AdminNotifier,
    outage_view: OutageView,
}

impl RequestGuard {
    /// Creates a guard serving [`crate::handlers::outage_response`] on outages.
    ///
    /// A static prefix of `/` would match every path and is treated as empty.
    pub fn new(
        settings: &Settings,
        probe: Arc<dyn DatabaseProbe>,
        notifier: AdminNotifier,
    ) -> Self {
        let static_url = if settings.static_url == "/" {
            warn!("Static prefix `/` covers every path, static asset exemption disabled");
            String::new()
        } else {
            settings.static_url.clone()
        };

        Self {
            static_url,
            connection: settings.connection.clone(),
            test_invocation: settings.test_invocation.clone(),
            probe,
            notifier,
            outage_view: crate::handlers::outage_response,
        }
    }

    /// Replaces the view rendered on outages.
    pub fn with_outage_view(mut self, outage_view: OutageView) -> Self {
        self.outage_view = outage_view;
        self
    }

    /// Returns why `path` skips the probe, or `None` if it must be probed.
    pub fn bypass_reason(&self, path: &str) -> Option<BypassReason> {
        if !self.static_url.is_empty() && path.starts_with(&self.static_url) {
            return Some(BypassReason::StaticAsset);
        }

        if self.test_invocation.bypasses_guard() {
            return Some(BypassReason::UnrelatedTestRun);
        }

        None
    }

    /// Checks the request against the database.
    ///
    /// # Returns
    ///
    /// - `Ok(None)` - Continue with normal routing
    /// - `Ok(Some(response))` - The database is unavailable, serve `response` instead
    ///
    /// # Errors
    ///
    /// Probe failures that do not mean "database unavailable" (unknown
    /// connection name, configuration or decoding errors) are returned as
    /// [`AppError::Probe`].
    #[instrument(skip_all, fields(path = %uri.path(), connection = %self.connection))]
    pub async fn check(&self, uri: &Uri) -> AppResult<Option<Response>> {
        if let Some(reason) = self.bypass_reason(uri.path()) {
            trace!(?reason, "Skipping database probe");
            return Ok(None);
        }

        let err = match self.probe.ping(&self.connection).await {
            Ok(()) => {
                trace!("Database is reachable");
                return Ok(None);
            }
            Err(e) if e.is_unavailable() => e,
            Err(e) => return Err(AppError::from(e)),
        };

        let report = outage_report(&err);
        self.notifier.notify(OUTAGE_SUBJECT, &report).await;
        error!("{report}");

        debug!("Serving outage view");
        Ok(Some((self.outage_view)()))
    }
}
