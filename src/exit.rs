//! Final status reporting for plugins.
//!
//! A plugin reports its verdict exactly once: one line on stdout, then the
//! process exits with the severity's code.

use crate::status::Severity;
use std::io::Write;
use tracing::debug;

/// Formats the plugin status line: `"<SEVERITY>: <message>"`.
pub fn format_status_line(status: Severity, message: &str) -> String {
    format!("{}: {}", status.name(), message)
}

/// Prints the status line and exits with the severity's exit code.
///
/// This never returns. Failures writing to stdout (e.g. a closed pipe) are
/// ignored; the exit code still carries the verdict.
pub fn nagios_exit(status: Severity, message: &str) -> ! {
    let line = format_status_line(status, message);
    debug!(code = status.code(), "Reporting plugin status: {}", line);

    let mut stdout = std::io::stdout().lock();
    let _ = writeln!(stdout, "{line}");
    let _ = stdout.flush();

    std::process::exit(status.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_status_line() {
        let cases = [
            (Severity::Ok, "Service up", "OK: Service up"),
            (Severity::Warning, "Service problem", "WARNING: Service problem"),
            (Severity::Critical, "Service down", "CRITICAL: Service down"),
            (Severity::Unknown, "Service undefined", "UNKNOWN: Service undefined"),
        ];
        for (status, msg, expected) in cases {
            assert_eq!(format_status_line(status, msg), expected);
        }
    }

    #[test]
    fn test_format_status_line_empty_message() {
        assert_eq!(format_status_line(Severity::Ok, ""), "OK: ");
    }
}
