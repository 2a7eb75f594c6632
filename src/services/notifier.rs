//! # Administrator Notifications
//!
//! Best-effort alerts to the site administrators. Delivery problems are
//! logged and dropped: an alert must never turn into a failed request.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::services::email::EmailService;
use crate::utils::html::generate_admin_alert_html;

/// Sends alerts to the configured administrator addresses.
#[derive(Clone)]
pub struct AdminNotifier {
    email_service: Arc<dyn EmailService>,
    admins: Vec<String>,
    subject_prefix: String,
}

impl AdminNotifier {
    pub fn new(
        email_service: Arc<dyn EmailService>,
        admins: Vec<String>,
        subject_prefix: String,
    ) -> Self {
        Self {
            email_service,
            admins,
            subject_prefix,
        }
    }

    /// Mails `body` to every administrator in a single message.
    ///
    /// Does nothing when no administrators are configured. Never fails;
    /// delivery errors are logged at warn level and discarded.
    #[instrument(skip_all, fields(subject = %subject, admins = self.admins.len()))]
    pub async fn notify(&self, subject: &str, body: &str) {
        if self.admins.is_empty() {
            debug!("No administrators configured, skipping notification");
            return;
        }

        let subject = format!("{}{subject}", self.subject_prefix);
        let body_html = match generate_admin_alert_html(body) {
            Ok(html) => html,
            Err(e) => {
                warn!(error = %e, "Failed to render administrator alert");
                return;
            }
        };

        match self
            .email_service
            .send_email(&self.admins, &subject, &body_html)
            .await
        {
            Ok(()) => debug!("Administrators notified"),
            Err(e) => warn!(error = %e, "Failed to notify administrators"),
        }
    }
}
