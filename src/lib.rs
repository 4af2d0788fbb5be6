//! nagutils - helpers for writing Nagios-style monitoring plugins
//!
//! A plugin reports its verdict as a single line on stdout and an exit code
//! the monitoring supervisor understands:
//!
//! ```text
//! CRITICAL: [Volume 1] above threshold, [Volume 2] above threshold|'vol1'=99%;80;95 'vol2'=97%;80;95
//! ```
//!
//! # Features
//!
//! - **Severity Registry**: OK/WARNING/CRITICAL/UNKNOWN with fixed exit codes 0-3
//! - **Exit Reporting**: Format the status line and terminate with the right code
//! - **Result Aggregation**: Collect problems and perf data, render them in order
//! - **Formatting Helpers**: Basename of a command path, half-up rounding
//! - **Thresholds**: Evaluate a value against warning/critical limits
//!
//! # Usage
//!
//! ```rust,no_run
//! use nagutils::{round_to_places, CheckResult, Severity, Thresholds};
//!
//! let used_percent = 97.1234;
//! let thresholds = Thresholds {
//!     warn: Some(80.0),
//!     critical: Some(95.0),
//!     larger_is_better: false,
//! };
//!
//! let mut result = CheckResult::default();
//! let status = thresholds.evaluate(used_percent);
//! result.escalate(status);
//! if status != Severity::Ok {
//!     let shown = round_to_places(used_percent, 2).unwrap_or(used_percent);
//!     result.add_problem(format!("/var is {}% full", shown));
//! }
//! result.add_perf_data(format!("'var'={}%;80;95;0;100", used_percent));
//!
//! // Prints "CRITICAL: /var is 97.12% full|'var'=97.1234%;80;95;0;100" and exits with 2
//! result.exit("all filesystems ok");
//! ```

pub mod check_result;
pub mod error;
pub mod exit;
pub mod format;
pub mod status;
pub mod thresholds;

// Re-export main types for convenience
pub use check_result::{join_with_separator, CheckResult};
pub use error::{NagError, Result};
pub use exit::{format_status_line, nagios_exit};
pub use format::{basename, round, round_to_places, MAX_PLACES};
pub use status::Severity;
pub use thresholds::Thresholds;
