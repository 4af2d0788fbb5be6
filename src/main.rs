//! nagutils - command-line front end for the plugin helpers.
//!
//! Lets shell-script probes emit a conventional status line and exit code.
//! Logs go to stderr so stdout only ever carries the plugin line.

mod cli;
mod commands;
mod config;

use clap::Parser;
use nagutils::{basename, nagios_exit, Severity, Thresholds};
use tracing::{debug, error, info};

use cli::{Args, Commands, LogLevel};
use commands::{
    command_basename, command_config, command_evaluate, command_report, command_round,
};
use config::{resolve_config, ProbeConfig};

/// Initializes tracing logging subsystem with configured log level.
///
/// CLI level wins over the config file; the default is `warn`.
fn setup_logging(config: &ProbeConfig, args: &Args) {
    let log_level = args
        .log_level
        .or_else(|| {
            config
                .log_level
                .as_deref()
                .and_then(|l| <LogLevel as clap::ValueEnum>::from_str(l, true).ok())
        })
        .unwrap_or(LogLevel::Warn);

    let Some(level) = log_level.as_level() else {
        return;
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }

    debug!("Logging initialized with level: {:?}", log_level);
}

/// Program name used in UNKNOWN error lines.
fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg0| basename(&arg0.to_string_lossy()).to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "nagutils".to_string())
}

/// Applies CLI threshold overrides on top of the config defaults.
fn merge_thresholds(
    defaults: &Thresholds,
    warn: Option<f64>,
    critical: Option<f64>,
    larger_is_better: Option<bool>,
) -> Thresholds {
    Thresholds {
        warn: warn.or(defaults.warn),
        critical: critical.or(defaults.critical),
        larger_is_better: larger_is_better.unwrap_or(defaults.larger_is_better),
    }
}

/// Dispatches a subcommand. Reporting commands exit from inside.
fn run(args: Args, config: ProbeConfig) -> anyhow::Result<()> {
    match args.command {
        Commands::Report {
            status,
            problems,
            perf_data,
            message,
        } => {
            let ok_message = message.as_deref().unwrap_or_else(|| config.ok_message());
            command_report(status, problems, perf_data, ok_message)
        }
        Commands::Evaluate {
            value,
            warn,
            critical,
            larger_is_better,
            label,
            perf_data,
        } => {
            let thresholds =
                merge_thresholds(&config.thresholds, warn, critical, larger_is_better);
            thresholds.validate()?;
            command_evaluate(
                value,
                &thresholds,
                &label,
                perf_data,
                config.round_places(),
                config.ok_message(),
            )
        }
        Commands::Basename { path } => command_basename(&path),
        Commands::Round { value, places } => {
            command_round(value, places.unwrap_or_else(|| config.round_places()))
        }
        Commands::Config { output, format } => command_config(&output, format),
    }
}

/// Main application entry point.
fn main() {
    // Usage errors exit UNKNOWN (3); clap's own code 2 reads as CRITICAL.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            nagios_exit(
                Severity::Unknown,
                &format!("{}: invalid arguments", program_name()),
            )
        }
    };

    let loaded = match resolve_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => nagios_exit(
            Severity::Unknown,
            &format!("{}: configuration invalid: {:#}", program_name(), e),
        ),
    };

    setup_logging(&loaded.config, &args);
    match &loaded.source {
        Some(path) => info!("Loaded configuration from: {}", path.display()),
        None => debug!("No config file loaded, using defaults"),
    }
    let config = loaded.config;

    if let Err(e) = run(args, config) {
        error!("Command failed: {:#}", e);
        nagios_exit(Severity::Unknown, &format!("{}: {:#}", program_name(), e));
    }
}
