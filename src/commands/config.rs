//! Config command implementation.
//!
//! Generates configuration files in various formats.

use anyhow::Context;
use std::fs;
use std::path::Path;

use crate::cli::ConfigFormat;
use crate::config::{render_config, ProbeConfig};

/// Generates a configuration file with the default values.
pub fn command_config(output: &Path, format: ConfigFormat) -> anyhow::Result<()> {
    let config = ProbeConfig::default();
    let mut content = render_config(&config, format)?;
    if matches!(format, ConfigFormat::Yaml) {
        content = add_config_comments(content);
    }

    if output.to_string_lossy() == "-" {
        print!("{}", content);
    } else {
        fs::write(output, content)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        eprintln!("Configuration written to: {}", output.display());
    }

    Ok(())
}

/// Adds comments to YAML configuration.
fn add_config_comments(yaml: String) -> String {
    let comments = r#"# nagutils Probe Configuration
# ============================
#
# ok_message: "All checks passed"  # Text reported for OK results without problems
# round_places: 2                  # Decimal places for displayed values (-307..=307)
# log_level: "warn"                # off, error, warn, info, debug, trace (stderr)
#
# Thresholds (defaults for `nagutils evaluate`)
# ---------------------------------------------
# thresholds:
#   warn: 80                       # Warn when value > 80 (or < 80 if larger_is_better)
#   critical: 95                   # Critical when value > 95 (or < 95 if larger_is_better)
#   larger_is_better: false        # true for "free space" style measurements
"#;

    format!("{comments}\n{yaml}")
}
