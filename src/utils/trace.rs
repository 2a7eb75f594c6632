//! # Error Trace Rendering
//!
//! Turns an error object into the human readable report that is mailed to
//! administrators and written to the error log when the database is down.

use std::error::Error;
use std::fmt::Write;

use super::constant::OUTAGE_PREAMBLE;

/// Renders the cause chain of `err` as one indented line per cause.
///
/// The error itself is not included, only what it wraps. Returns `None`
/// when `err` has no source.
pub fn printable_trace(err: &(dyn Error + 'static)) -> Option<String> {
    let mut source = err.source()?;
    let mut trace = String::new();
    let mut depth = 0usize;

    loop {
        // Writing into a String cannot fail
        let _ = writeln!(trace, "  {depth}: caused by: {source}");
        depth += 1;
        match source.source() {
            Some(next) => source = next,
            None => break,
        }
    }

    Some(trace.trim_end().to_string())
}

/// Builds the full outage report: preamble, cause chain (if any), then the
/// error's own message, one per line.
pub fn outage_report(err: &(dyn Error + 'static)) -> String {
    let mut lines = vec![OUTAGE_PREAMBLE.to_string()];
    if let Some(trace) = printable_trace(err) {
        lines.push(trace);
    }
    lines.push(err.to_string());
    lines.join("\n")
}
