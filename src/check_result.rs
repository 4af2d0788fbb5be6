//! Aggregated result of a single plugin run.
//!
//! A plugin collects its problems and performance data into a
//! [`CheckResult`], then renders and reports it once at the end.
//!
//! # Usage
//!
//! ```rust
//! use nagutils::{CheckResult, Severity};
//!
//! let mut result = CheckResult::default();
//! result.escalate(Severity::Warning);
//! result.add_problem("[Volume 1] above threshold");
//! result.add_perf_data("'vol1'=81%;80;95;0;100");
//!
//! assert_eq!(
//!     result.status_line("all volumes ok").unwrap(),
//!     "WARNING: [Volume 1] above threshold|'vol1'=81%;80;95;0;100"
//! );
//! ```

use crate::error::{NagError, Result};
use crate::exit::{format_status_line, nagios_exit};
use crate::status::Severity;
use tracing::debug;

/// Separator between problem descriptions.
pub const PROBLEM_SEPARATOR: &str = ", ";
/// Separator between perf-data tokens.
pub const PERF_DATA_SEPARATOR: &str = " ";
/// Delimiter between the human-readable text and the perf data.
pub const PERF_DATA_DELIMITER: &str = "|";

/// Status, problems and performance data gathered by one plugin run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckResult {
    /// Severity reported on exit.
    pub status: Severity,
    /// Human-readable problem descriptions, in display order.
    pub problems: Vec<String>,
    /// Pre-formatted perf-data tokens (`'label'=value[UOM];warn;crit;min;max`).
    /// Joined verbatim, never parsed.
    pub perf_data: Vec<String>,
}

impl CheckResult {
    /// Creates an empty result with the given status.
    pub fn new(status: Severity) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Appends a problem description.
    pub fn add_problem(&mut self, problem: impl Into<String>) {
        self.problems.push(problem.into());
    }

    /// Appends a perf-data token.
    pub fn add_perf_data(&mut self, token: impl Into<String>) {
        self.perf_data.push(token.into());
    }

    pub fn has_problems(&self) -> bool {
        !self.problems.is_empty()
    }

    pub fn has_perf_data(&self) -> bool {
        !self.perf_data.is_empty()
    }

    /// Raises the status to `severity` if that is worse than the current one.
    pub fn escalate(&mut self, severity: Severity) {
        self.status = self.status.worst(severity);
    }

    /// Joins the problems with `", "`.
    pub fn problems_as_string(&self) -> Result<String> {
        if self.problems.is_empty() {
            return Err(NagError::EmptyList { list: "problems" });
        }
        Ok(join_with_separator(&self.problems, PROBLEM_SEPARATOR))
    }

    /// Joins the perf data with `" "`, prefixed by `"|"`.
    pub fn perf_data_as_string(&self) -> Result<String> {
        if self.perf_data.is_empty() {
            return Err(NagError::EmptyList { list: "perf data" });
        }
        Ok(format!(
            "{}{}",
            PERF_DATA_DELIMITER,
            join_with_separator(&self.perf_data, PERF_DATA_SEPARATOR)
        ))
    }

    /// Builds the message part of the status line.
    ///
    /// The text is the joined problem list, or `ok_summary` when the status
    /// is OK and nothing was reported. A non-OK result without problems is
    /// rejected. Perf data, when present, is appended after the text.
    pub fn message(&self, ok_summary: &str) -> Result<String> {
        let mut message = if self.has_problems() {
            self.problems_as_string()?
        } else if self.status == Severity::Ok {
            ok_summary.to_string()
        } else {
            return Err(NagError::EmptyList { list: "problems" });
        };

        if self.has_perf_data() {
            message.push_str(&self.perf_data_as_string()?);
        }
        Ok(message)
    }

    /// Renders the complete status line, e.g. `"CRITICAL: disk full|'used'=99%"`.
    pub fn status_line(&self, ok_summary: &str) -> Result<String> {
        Ok(format_status_line(self.status, &self.message(ok_summary)?))
    }

    /// Reports this result and exits.
    ///
    /// A malformed result is reported as UNKNOWN with the error text.
    pub fn exit(&self, ok_summary: &str) -> ! {
        match self.message(ok_summary) {
            Ok(message) => nagios_exit(self.status, &message),
            Err(e) => {
                debug!("Rejecting malformed check result: {:?}", self);
                nagios_exit(Severity::Unknown, &e.to_string())
            }
        }
    }
}

/// Joins `items` with `sep` between each pair, without a trailing separator.
///
/// An empty slice yields an empty string and a single item is returned
/// unchanged.
pub fn join_with_separator<S: AsRef<str>>(items: &[S], sep: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, rest @ ..] => {
            let mut out = String::from(first.as_ref());
            for item in rest {
                out.push_str(sep);
                out.push_str(item.as_ref());
            }
            out
        }
    }
}
