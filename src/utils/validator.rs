//! # Text Input Validation Utilities
//!
//! Validation for configuration values read from the environment, currently
//! the administrator email addresses alerts are sent to.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

/// Loose email address pattern
///
/// Only rejects obvious typos in the `ADMINS` list (missing `@`, spaces,
/// missing domain). Delivery problems are the mail provider's business.
///
/// # Examples
///
/// - `ops@example.com` ✓ Valid
/// - `ops at example.com` ✗ Invalid
/// - `ops@localhost` ✗ Invalid
pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)+$")
        .expect("Failed to compile email regex")
});

/// Splits a colon separated address list, dropping blank and invalid entries.
///
/// # Examples
///
/// `"ops@example.com: dba@example.com:nobody"` yields
/// `["ops@example.com", "dba@example.com"]`.
pub fn parse_admin_list(raw: &str) -> Vec<String> {
    raw.split(':')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter(|entry| {
            let valid = EMAIL_REGEX.is_match(entry);
            if !valid {
                warn!(entry = %entry, "Ignoring invalid administrator address");
            }
            valid
        })
        .map(str::to_string)
        .collect()
}
