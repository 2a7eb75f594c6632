use std::env;
use std::time::Duration;

use tracing::{info, warn};

use super::TestInvocation;
use crate::utils::constant::*;
use crate::utils::validator::parse_admin_list;

/// Configuration of the outage guard and its surroundings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// URL prefix of static assets. Requests under it are never probed.
    /// Empty disables the exemption.
    pub static_url: String,
    /// Directory served under [`Settings::static_url`].
    pub static_dir: String,
    /// Logical name of the connection to probe.
    pub connection: String,
    /// Addresses that receive outage alerts.
    pub admins: Vec<String>,
    /// Prepended to every alert subject.
    pub email_subject_prefix: String,
    /// Test runner detection result, see [`TestInvocation`].
    pub test_invocation: TestInvocation,
    /// How long the probe may wait for a pooled connection.
    pub acquire_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            static_url: DEFAULT_STATIC_URL.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            connection: DEFAULT_CONNECTION.to_string(),
            admins: Vec::new(),
            email_subject_prefix: DEFAULT_EMAIL_SUBJECT_PREFIX.to_string(),
            test_invocation: TestInvocation::none(),
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

impl Settings {
    /// Loads settings from the environment, falling back to defaults.
    ///
    /// # Environment Variables
    ///
    /// - `STATIC_URL` - Static asset prefix (default `/static/`)
    /// - `STATIC_DIR` - Static asset directory (default `./static`)
    /// - `ADMINS` - Colon-separated administrator addresses
    /// - `EMAIL_SUBJECT_PREFIX` - Alert subject prefix (default `[db-outage] `)
    /// - `DATABASE_ACQUIRE_TIMEOUT_SECS` - Probe acquire timeout (default 3)
    ///
    /// The test invocation is left as [`TestInvocation::none`]; the caller
    /// injects the real one.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let admins = env::var("ADMINS")
            .map(|raw| parse_admin_list(&raw))
            .unwrap_or_default();
        if admins.is_empty() {
            warn!("No administrators configured, outage alerts will not be sent");
        }

        let acquire_timeout = match env::var("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map(Duration::from_secs).unwrap_or_else(|_| {
                warn!(value = %raw, "Invalid DATABASE_ACQUIRE_TIMEOUT_SECS, using fallback");
                defaults.acquire_timeout
            }),
            Err(_) => defaults.acquire_timeout,
        };

        let settings = Self {
            static_url: env::var("STATIC_URL").unwrap_or(defaults.static_url),
            static_dir: env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
            connection: defaults.connection,
            admins,
            email_subject_prefix: env::var("EMAIL_SUBJECT_PREFIX")
                .unwrap_or(defaults.email_subject_prefix),
            test_invocation: defaults.test_invocation,
            acquire_timeout,
        };

        if settings.static_url == "/" {
            warn!("STATIC_URL is `/`, static assets will not be exempt from the database check");
        }

        info!(
            static_url = %settings.static_url,
            connection = %settings.connection,
            admins = settings.admins.len(),
            "Loaded guard settings"
        );
        settings
    }

    pub fn with_test_invocation(mut self, test_invocation: TestInvocation) -> Self {
        self.test_invocation = test_invocation;
        self
    }
}
