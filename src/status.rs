//! Severity levels of the plugin output convention.
//!
//! The four levels and their exit codes are a fixed contract with the
//! monitoring supervisor and must never be renumbered:
//!
//! | Severity | Code |
//! |----------|------|
//! | OK       | 0    |
//! | WARNING  | 1    |
//! | CRITICAL | 2    |
//! | UNKNOWN  | 3    |
//!
//! # Usage
//!
//! ```rust
//! use nagutils::Severity;
//!
//! assert_eq!(Severity::Critical.code(), 2);
//! assert_eq!(Severity::from_code(1).unwrap(), Severity::Warning);
//! assert_eq!("unknown".parse::<Severity>().unwrap().name(), "UNKNOWN");
//! ```

use crate::error::{NagError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Plugin severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum Severity {
    #[default]
    Ok = 0,
    Warning = 1,
    Critical = 2,
    Unknown = 3,
}

/// Code/name table, indexed by exit code.
const SEVERITY_TABLE: [(Severity, &str); 4] = [
    (Severity::Ok, "OK"),
    (Severity::Warning, "WARNING"),
    (Severity::Critical, "CRITICAL"),
    (Severity::Unknown, "UNKNOWN"),
];

impl Severity {
    /// All severities in exit code order.
    pub const ALL: [Severity; 4] = [
        Severity::Ok,
        Severity::Warning,
        Severity::Critical,
        Severity::Unknown,
    ];

    /// Returns the process exit code for this severity.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Returns the canonical display name ("OK", "WARNING", ...).
    pub const fn name(self) -> &'static str {
        SEVERITY_TABLE[self as usize].1
    }

    /// Looks up a severity by exit code.
    ///
    /// Codes outside 0..=3 are rejected rather than mapped to a blank label.
    pub fn from_code(code: i32) -> Result<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| SEVERITY_TABLE.get(idx))
            .map(|(severity, _)| *severity)
            .ok_or_else(|| NagError::InvalidSeverity(code.to_string()))
    }

    /// Looks up a severity by display name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Self> {
        SEVERITY_TABLE
            .iter()
            .find(|(_, label)| label.eq_ignore_ascii_case(name))
            .map(|(severity, _)| *severity)
            .ok_or_else(|| NagError::InvalidSeverity(name.to_string()))
    }

    /// Priority used when combining severities (higher = worse).
    ///
    /// CRITICAL > WARNING > UNKNOWN > OK. This differs from the exit code
    /// order, where UNKNOWN has the highest number.
    fn priority(self) -> u8 {
        match self {
            Severity::Ok => 0,
            Severity::Unknown => 1,
            Severity::Warning => 2,
            Severity::Critical => 3,
        }
    }

    /// Returns the worse of two severities.
    pub fn worst(self, other: Severity) -> Severity {
        if other.priority() > self.priority() {
            other
        } else {
            self
        }
    }

    /// Returns the worst severity of an iterator, or OK if it is empty.
    pub fn worst_of<I>(severities: I) -> Severity
    where
        I: IntoIterator<Item = Severity>,
    {
        severities
            .into_iter()
            .fold(Severity::Ok, |acc, s| acc.worst(s))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for Severity {
    type Error = NagError;

    fn try_from(code: i32) -> Result<Self> {
        Severity::from_code(code)
    }
}

impl From<Severity> for i32 {
    fn from(severity: Severity) -> i32 {
        severity.code()
    }
}

/// Accepts either a display name (any case) or a numeric exit code.
impl FromStr for Severity {
    type Err = NagError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.parse::<i32>() {
            Ok(code) => Severity::from_code(code),
            Err(_) => Severity::from_name(s),
        }
    }
}
