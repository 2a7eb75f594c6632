use std::io;

use db_outage::services::probe::ProbeError;
use db_outage::utils::constant::OUTAGE_PREAMBLE;
use db_outage::utils::html::{generate_admin_alert_html, generate_outage_page_html};
use db_outage::utils::trace::{outage_report, printable_trace};

#[test]
fn error_without_cause_has_no_trace() {
    let err = sqlx::Error::Protocol("ORA-03113: end-of-file on communication channel".to_string());

    assert_eq!(printable_trace(&err), None);

    let report = outage_report(&err);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], OUTAGE_PREAMBLE);
    assert!(lines[1].contains("ORA-03113"));
}

#[test]
fn report_lists_cause_chain_before_message() {
    let err = ProbeError::Database(sqlx::Error::Io(io::Error::new(
        io::ErrorKind::ConnectionReset,
        "ORA-03113",
    )));

    let trace = printable_trace(&err).expect("Io error has a cause");
    assert_eq!(trace, "  0: caused by: ORA-03113");

    let report = outage_report(&err);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], OUTAGE_PREAMBLE);
    assert_eq!(lines[1], "  0: caused by: ORA-03113");
    assert_eq!(lines[2], err.to_string());
}

#[test]
fn alert_html_escapes_report() {
    let html = generate_admin_alert_html(r#"relation "orders" <missing> & gone"#)
        .expect("Alert template should render");

    assert!(html.contains("relation &quot;orders&quot; &lt;missing&gt; &amp; gone"));
    assert!(!html.contains("<missing>"));
}

#[test]
fn outage_page_renders() {
    let html = generate_outage_page_html().expect("Outage page should render");

    assert!(html.contains("temporarily unavailable"));
    assert!(html.contains("about 1 minute(s)"));
}
