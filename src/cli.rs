//! CLI arguments and subcommands for nagutils.
//!
//! This module defines the command-line interface structure using the clap library,
//! including all flags, options, and subcommands.

use clap::{Parser, Subcommand, ValueEnum};
use nagutils::Severity;
use std::path::PathBuf;
use tracing::Level;

/// Log level options for CLI parsing
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Maps to a tracing level; `Off` disables the subscriber entirely.
    pub fn as_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

/// Configuration format options for output
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

/// Main CLI arguments structure
#[derive(Parser, Debug)]
#[command(
    name = "nagutils",
    about = "Report monitoring probe results in the Nagios plugin format",
    long_about = "Report monitoring probe results in the Nagios plugin format.\n\n\
                  Prints a single 'SEVERITY: message|perfdata' line and exits with the \
                  matching plugin exit code (0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN). \
                  Intended for shell-script probes run by a monitoring supervisor.",
    version,
    propagate_version = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (logs go to stderr)
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Config file (YAML/JSON/TOML)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable all config file loading
    #[arg(long, global = true)]
    pub no_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a status line built from problems and perf data, then exit with its code
    Report {
        /// Plugin status (ok, warning, critical, unknown or 0-3)
        #[arg(short = 's', long)]
        status: Severity,

        /// Problem description (repeatable, kept in order)
        #[arg(short = 'p', long = "problem")]
        problems: Vec<String>,

        /// Pre-formatted perf-data token, e.g. 'load1'=0.5;1;2 (repeatable)
        #[arg(long = "perf")]
        perf_data: Vec<String>,

        /// Message used when the status is OK and no problems were given
        #[arg(short = 'm', long)]
        message: Option<String>,
    },

    /// Compare a measured value against warning/critical thresholds and report
    Evaluate {
        /// Measured value
        #[arg(long, allow_negative_numbers = true)]
        value: f64,

        /// Warning threshold (overrides config)
        #[arg(short = 'w', long, allow_negative_numbers = true)]
        warn: Option<f64>,

        /// Critical threshold (overrides config)
        #[arg(short = 'C', long, allow_negative_numbers = true)]
        critical: Option<f64>,

        /// Lower values are unhealthy (e.g. free space); `=false` overrides config
        #[arg(
            long,
            value_name = "BOOL",
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true"
        )]
        larger_is_better: Option<bool>,

        /// Name of the measurement used in the problem text
        #[arg(short = 'l', long, default_value = "value")]
        label: String,

        /// Pre-formatted perf-data token (repeatable)
        #[arg(long = "perf")]
        perf_data: Vec<String>,
    },

    /// Print the part of a path after the last '/'
    Basename {
        /// Path to shorten
        path: String,
    },

    /// Round a value half up to a number of decimal places
    Round {
        /// Value to round
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Decimal places (may be negative; defaults to config round_places)
        #[arg(long, allow_negative_numbers = true)]
        places: Option<i32>,
    },

    /// Generate a configuration file with the default values
    Config {
        /// Output file path ('-' for stdout)
        #[arg(short = 'o', long, default_value = "-")]
        output: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "yaml")]
        format: ConfigFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report() {
        let args = Args::try_parse_from([
            "nagutils", "report", "--status", "warning", "-p", "a", "-p", "b", "--perf", "x=1",
        ])
        .unwrap();
        match args.command {
            Commands::Report {
                status,
                problems,
                perf_data,
                message,
            } => {
                assert_eq!(status, Severity::Warning);
                assert_eq!(problems, vec!["a", "b"]);
                assert_eq!(perf_data, vec!["x=1"]);
                assert!(message.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_report_rejects_bad_status() {
        assert!(Args::try_parse_from(["nagutils", "report", "--status", "5"]).is_err());
    }

    #[test]
    fn test_parse_round_negative() {
        let args =
            Args::try_parse_from(["nagutils", "round", "-12.5", "--places", "-1"]).unwrap();
        match args.command {
            Commands::Round { value, places } => {
                assert_eq!(value, -12.5);
                assert_eq!(places, Some(-1));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    fn parse_larger_is_better(extra: &[&str]) -> Option<bool> {
        let mut argv = vec!["nagutils", "evaluate", "--value", "1"];
        argv.extend_from_slice(extra);
        match Args::try_parse_from(argv).unwrap().command {
            Commands::Evaluate {
                larger_is_better, ..
            } => larger_is_better,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_larger_is_better_forms() {
        assert_eq!(parse_larger_is_better(&[]), None);
        assert_eq!(parse_larger_is_better(&["--larger-is-better"]), Some(true));
        assert_eq!(
            parse_larger_is_better(&["--larger-is-better=false"]),
            Some(false)
        );
        assert_eq!(
            parse_larger_is_better(&["--larger-is-better", "--label", "x"]),
            Some(true)
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "nagutils", "basename", "/a/b", "--no-config", "--log-level", "debug",
        ])
        .unwrap();
        assert!(args.no_config);
        assert!(matches!(args.log_level, Some(LogLevel::Debug)));
    }
}
