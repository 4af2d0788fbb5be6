//! Warning/critical threshold evaluation.
//!
//! Each threshold pair can be configured so that either higher or lower
//! values are considered healthy.
//!
//! # Usage
//!
//! ```rust
//! use nagutils::{Severity, Thresholds};
//!
//! let disk = Thresholds {
//!     warn: Some(80.0),
//!     critical: Some(95.0),
//!     larger_is_better: false,
//! };
//! assert_eq!(disk.evaluate(85.0), Severity::Warning);
//!
//! let free_pages = Thresholds {
//!     warn: Some(30.0),
//!     critical: Some(10.0),
//!     larger_is_better: true,
//! };
//! assert_eq!(free_pages.evaluate(5.0), Severity::Critical);
//! ```

use crate::error::{NagError, Result};
use crate::format::round_to_places;
use crate::status::Severity;
use serde::{Deserialize, Serialize};

/// Warning and critical limits for a single measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Optional warning limit.
    /// For `larger_is_better=false`: warn when value > warn
    /// For `larger_is_better=true`: warn when value < warn
    #[serde(default)]
    pub warn: Option<f64>,
    /// Optional critical limit, compared the same way as `warn`.
    #[serde(default)]
    pub critical: Option<f64>,
    /// If true, lower values are the unhealthy ones (e.g. free space).
    #[serde(default)]
    pub larger_is_better: bool,
}

impl Thresholds {
    /// Evaluates `value` against the thresholds.
    ///
    /// Critical is checked before warning. NaN evaluates to UNKNOWN and a
    /// missing limit never triggers.
    pub fn evaluate(&self, value: f64) -> Severity {
        if value.is_nan() {
            return Severity::Unknown;
        }

        if self.larger_is_better {
            // Lower value is worse
            if let Some(critical) = self.critical {
                if value < critical {
                    return Severity::Critical;
                }
            }
            if let Some(warn) = self.warn {
                if value < warn {
                    return Severity::Warning;
                }
            }
        } else {
            // Higher value is worse
            if let Some(critical) = self.critical {
                if value > critical {
                    return Severity::Critical;
                }
            }
            if let Some(warn) = self.warn {
                if value > warn {
                    return Severity::Warning;
                }
            }
        }
        Severity::Ok
    }

    /// Describes `value` and the configured limits for a problem message,
    /// e.g. `"85.35 (warn 80, crit 95)"`.
    ///
    /// Values that cannot be rounded to `places` are shown unrounded.
    pub fn describe(&self, value: f64, places: i32) -> String {
        let show = |v: f64| round_to_places(v, places).unwrap_or(v).to_string();

        let limits: Vec<String> = [("warn", self.warn), ("crit", self.critical)]
            .into_iter()
            .filter_map(|(name, limit)| limit.map(|l| format!("{} {}", name, show(l))))
            .collect();

        if limits.is_empty() {
            show(value)
        } else {
            format!("{} ({})", show(value), limits.join(", "))
        }
    }

    /// Checks that both limits are finite and correctly ordered.
    pub fn validate(&self) -> Result<()> {
        for (name, limit) in [("warn", self.warn), ("critical", self.critical)] {
            if let Some(value) = limit {
                if !value.is_finite() {
                    return Err(NagError::InvalidThreshold(format!(
                        "{} must be a finite number, got {}",
                        name, value
                    )));
                }
            }
        }

        if !self.is_ordered() {
            return Err(NagError::InvalidThreshold(format!(
                "critical must not be less severe than warn (larger_is_better = {})",
                self.larger_is_better
            )));
        }
        Ok(())
    }

    /// Returns true when `critical` is not less severe than `warn`.
    ///
    /// Only checked when both limits are set.
    pub fn is_ordered(&self) -> bool {
        match (self.warn, self.critical) {
            (Some(warn), Some(critical)) if self.larger_is_better => critical <= warn,
            (Some(warn), Some(critical)) => critical >= warn,
            _ => true,
        }
    }
}
