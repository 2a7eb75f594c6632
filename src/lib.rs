//! # db-outage - Database Outage Guard
//!
//! An Axum middleware that pings the database before every request and, when
//! it is unreachable, serves a static outage page and alerts the administrators.
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers, including the outage page
//! - [`middleware`] - The outage middleware wrapping every route
//! - [`models`] - Settings, test-run detection and shared state
//! - [`services`] - Guard, probe, notifier and email services
//! - [`utils`] - Constants, templates, logging setup and helpers

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

use std::env;
use std::sync::Arc;

use axum::{Router, middleware::from_fn_with_state, routing::get};
use sqlx::PgPool;
use tower_http::services::ServeDir;
use tracing::{debug, info};

use crate::handlers::{health_check, index, not_found, outage_page};
use crate::middleware::db_outage_middleware;
use crate::models::{AppState, Settings};
use crate::services::email::{EmailService, ExternalEmailer, LogEmailer};
use crate::services::guard::RequestGuard;
use crate::services::notifier::AdminNotifier;
use crate::services::probe::ConnectionRegistry;
use crate::utils::constant::DEFAULT_CONNECTION;
use crate::utils::secret::get_secret;

/// Creates an Axum router guarded by the outage middleware.
///
/// # Arguments
///
/// * `db_pool` - Pool registered as the `"default"` connection
/// * `settings` - Guard configuration
/// * `email_service` - Optional custom email service. If None, will auto-detect based on APP_ENV
///
/// # Environment Variables
///
/// - `APP_ENV` - "production" uses ExternalEmailer, otherwise (or unset) uses LogEmailer (mock)
/// - `MAIL_API_URL` - Required in production for external email service
/// - `MAIL_API_KEY` / `MAIL_API_KEY_FILE` - Required in production for external email service
/// - `SENDER_EMAIL` - Required in production for external email service
pub fn app_with_email_service(
    db_pool: PgPool,
    settings: Settings,
    email_service: Option<Arc<dyn EmailService>>,
) -> Router {
    let email_service = email_service.unwrap_or_else(email_service_from_env);

    let registry = ConnectionRegistry::new().with_connection(DEFAULT_CONNECTION, db_pool);
    let notifier = AdminNotifier::new(
        email_service,
        settings.admins.clone(),
        settings.email_subject_prefix.clone(),
    );
    let guard = RequestGuard::new(&settings, Arc::new(registry), notifier);

    router(Arc::new(AppState::new(guard)), &settings)
}

/// Wires routes, static files and the outage middleware around `state`.
pub fn router(state: Arc<AppState>, settings: &Settings) -> Router {
    let mut router = Router::new()
        .route("/", get(index))
        .route("/health-check", get(health_check))
        .route("/outage", get(outage_page))
        .fallback(not_found);

    let static_mount = settings.static_url.trim_end_matches('/');
    if static_mount.starts_with('/') {
        debug!(
            mount = %static_mount,
            dir = %settings.static_dir,
            "Serving static assets"
        );
        router = router.nest_service(static_mount, ServeDir::new(&settings.static_dir));
    }

    router
        .layer(from_fn_with_state(Arc::clone(&state), db_outage_middleware))
        .with_state(state)
}

/// Picks the email service from `APP_ENV`. Anything but `production`,
/// including an unset variable, gets [`LogEmailer`].
fn email_service_from_env() -> Arc<dyn EmailService> {
    let app_env = env::var("APP_ENV").unwrap_or_default().to_ascii_lowercase();

    if app_env == "production" {
        info!("Running in production mode with [ExternalEmailer]");
        let api_url = env::var("MAIL_API_URL").expect("Env variable `MAIL_API_URL` should be set");
        let api_key = get_secret("MAIL_API_KEY_FILE", "MAIL_API_KEY")
            .expect("Env variable `MAIL_API_KEY` or `MAIL_API_KEY_FILE` should be set");
        let sender = env::var("SENDER_EMAIL").expect("Env variable `SENDER_EMAIL` should be set");
        Arc::new(ExternalEmailer::new(api_url, api_key, sender))
    } else {
        info!("Running in development mode with [LogEmailer (Mock)]");
        Arc::new(LogEmailer)
    }
}
