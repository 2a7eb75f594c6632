//! # HTML Templates
//!
//! Askama templates for the outage page and the administrator alert email.
//! Both live under `templates/` and are escaped automatically, so driver
//! output can be embedded as-is.

use askama::Template;

use super::constant::OUTAGE_RETRY_AFTER_SECS;

/// Administrator alert email body.
#[derive(Template, Debug)]
#[template(path = "admin_alert.html")]
pub struct AdminAlertTemplate<'a> {
    /// Plain text outage report, shown in a preformatted block
    pub report: &'a str,
}

/// Static page served in place of every guarded route.
#[derive(Template, Debug)]
#[template(path = "outage.html")]
pub struct OutagePageTemplate {
    pub retry_minutes: u64,
    pub current_year: i32,
}

/// Generates the HTML email sent to administrators when the database probe fails.
///
/// # Arguments
///
/// * `report` - Plain text outage report, see [`crate::utils::trace::outage_report`].
pub fn generate_admin_alert_html(report: &str) -> askama::Result<String> {
    AdminAlertTemplate { report }.render()
}

/// Generates the static page served while the database is unreachable.
pub fn generate_outage_page_html() -> askama::Result<String> {
    OutagePageTemplate {
        retry_minutes: OUTAGE_RETRY_AFTER_SECS.div_ceil(60),
        current_year: time::OffsetDateTime::now_utc().year(),
    }
    .render()
}
