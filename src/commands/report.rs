//! Report command implementation.
//!
//! Turns the status, problems and perf data given on the command line into a
//! plugin status line and exits with the matching code.

use nagutils::{CheckResult, Severity};
use tracing::debug;

/// Builds the check result from command-line parts.
pub fn build_result(
    status: Severity,
    problems: Vec<String>,
    perf_data: Vec<String>,
) -> CheckResult {
    CheckResult {
        status,
        problems,
        perf_data,
    }
}

/// Reports the result and exits. Never returns.
pub fn command_report(
    status: Severity,
    problems: Vec<String>,
    perf_data: Vec<String>,
    ok_message: &str,
) -> ! {
    let result = build_result(status, problems, perf_data);
    debug!(
        "Reporting {} with {} problems and {} perf-data tokens",
        result.status,
        result.problems.len(),
        result.perf_data.len()
    );
    result.exit(ok_message)
}
