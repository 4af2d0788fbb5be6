//! Evaluate command implementation.
//!
//! Compares one measured value against warning/critical thresholds.

use nagutils::{CheckResult, Severity, Thresholds};
use tracing::{debug, info};

/// Evaluates `value` and describes any breach as a problem.
pub fn evaluate_value(
    value: f64,
    thresholds: &Thresholds,
    label: &str,
    perf_data: Vec<String>,
    places: i32,
) -> CheckResult {
    let status = thresholds.evaluate(value);
    debug!(?thresholds, value, "Evaluated {} as {}", label, status);

    let mut result = CheckResult::new(status);
    if status != Severity::Ok {
        result.add_problem(format!("{} is {}", label, thresholds.describe(value, places)));
    }
    for token in perf_data {
        result.add_perf_data(token);
    }
    result
}

/// Evaluates, reports and exits. Never returns.
pub fn command_evaluate(
    value: f64,
    thresholds: &Thresholds,
    label: &str,
    perf_data: Vec<String>,
    places: i32,
    ok_message: &str,
) -> ! {
    let result = evaluate_value(value, thresholds, label, perf_data, places);
    if result.status == Severity::Ok {
        info!("{} within thresholds", label);
    }
    result.exit(ok_message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disk() -> Thresholds {
        Thresholds {
            warn: Some(80.0),
            critical: Some(95.0),
            larger_is_better: false,
        }
    }

    #[test]
    fn test_evaluate_ok() {
        let result = evaluate_value(42.0, &disk(), "disk", vec!["'disk'=42%".into()], 2);
        assert_eq!(result.status, Severity::Ok);
        assert!(!result.has_problems());
        assert_eq!(result.status_line("disk fine").unwrap(), "OK: disk fine|'disk'=42%");
    }

    #[test]
    fn test_evaluate_warning() {
        let result = evaluate_value(85.348, &disk(), "disk", Vec::new(), 1);
        assert_eq!(result.status, Severity::Warning);
        assert_eq!(
            result.status_line("unused").unwrap(),
            "WARNING: disk is 85.3 (warn 80, crit 95)"
        );
    }

    #[test]
    fn test_evaluate_nan_unknown() {
        let result = evaluate_value(f64::NAN, &disk(), "disk", Vec::new(), 2);
        assert_eq!(result.status, Severity::Unknown);
        assert_eq!(
            result.status_line("unused").unwrap(),
            "UNKNOWN: disk is NaN (warn 80, crit 95)"
        );
    }
}
