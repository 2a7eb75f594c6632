//! # Application Constants
//!
//! This module defines configuration constants used throughout the outage guard.
//! These constants control the probe, the administrator alert and the outage page.

use std::time::Duration;

/// Logical name of the connection probed on every request
pub const DEFAULT_CONNECTION: &str = "default";

/// Statement used to test database liveness
///
/// Read-only and touches no table, so it only fails when the database
/// itself cannot be reached.
pub const PROBE_SQL: &str = "SELECT 1";

/// How long the pool may wait for a free connection before the probe fails
///
/// Overridable with `DATABASE_ACQUIRE_TIMEOUT_SECS`.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

/// First line of every administrator alert and outage log entry
pub const OUTAGE_PREAMBLE: &str =
    "Your application is having trouble connecting to the database. Please investigate.";

/// Subject of the administrator alert, before the configured prefix is applied
pub const OUTAGE_SUBJECT: &str = "DatabaseError";

/// Test targets that exercise the guard itself
///
/// A test run that names none of these skips the guard entirely.
pub const GUARD_TEST_TARGETS: [&str; 2] = ["db_outage", "test_db_outage"];

/// Value of the `Retry-After` header on the outage page, in seconds
pub const OUTAGE_RETRY_AFTER_SECS: u64 = 60;

/// Default URL prefix under which static assets are served
pub const DEFAULT_STATIC_URL: &str = "/static/";

/// Default directory static assets are served from
pub const DEFAULT_STATIC_DIR: &str = "./static";

/// Default prefix prepended to administrator alert subjects
pub const DEFAULT_EMAIL_SUBJECT_PREFIX: &str = "[db-outage] ";

/// Default address the binary listens on
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8090";
