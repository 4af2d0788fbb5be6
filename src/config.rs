//! Configuration management for the nagutils probe helper.
//!
//! This module handles loading, merging, and validating probe defaults from
//! files and CLI arguments. It supports YAML, JSON, and TOML formats.

use crate::cli::{Args, ConfigFormat};
use anyhow::{bail, Context, Result};
use nagutils::{Thresholds, MAX_PLACES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Default configuration constants
pub const DEFAULT_OK_MESSAGE: &str = "All checks passed";
pub const DEFAULT_ROUND_PLACES: i32 = 2;

/// Default config file locations, searched in order.
const DEFAULT_LOCATIONS: [&str; 6] = [
    "/etc/nagutils/nagutils.yaml",
    "/etc/nagutils/nagutils.yml",
    "/etc/nagutils/nagutils.json",
    "/etc/nagutils/nagutils.toml",
    "./nagutils.yaml",
    "./nagutils.json",
];

/// Probe defaults shared by all subcommands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Message reported when the status is OK and no problems were found
    #[serde(alias = "ok-message")]
    pub ok_message: Option<String>,

    /// Decimal places used when displaying measured values
    #[serde(alias = "round-places")]
    pub round_places: Option<i32>,

    // Logging
    #[serde(alias = "log-level")]
    pub log_level: Option<String>,

    /// Default thresholds for `evaluate`
    #[serde(default)]
    pub thresholds: Thresholds,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            ok_message: Some(DEFAULT_OK_MESSAGE.into()),
            round_places: Some(DEFAULT_ROUND_PLACES),
            log_level: Some("warn".into()),
            thresholds: Thresholds::default(),
        }
    }
}

impl ProbeConfig {
    /// Effective OK summary.
    pub fn ok_message(&self) -> &str {
        self.ok_message.as_deref().unwrap_or(DEFAULT_OK_MESSAGE)
    }

    /// Effective display precision.
    pub fn round_places(&self) -> i32 {
        self.round_places.unwrap_or(DEFAULT_ROUND_PLACES)
    }
}

/// Validate effective config (used at startup)
pub fn validate_config(cfg: &ProbeConfig) -> Result<()> {
    let places = cfg.round_places();
    if places.unsigned_abs() > MAX_PLACES.unsigned_abs() {
        bail!(
            "round_places {} is outside the supported range -{}..={}",
            places,
            MAX_PLACES,
            MAX_PLACES
        );
    }

    if let Some(level) = cfg.log_level.as_deref() {
        if !matches!(
            level,
            "off" | "error" | "warn" | "info" | "debug" | "trace"
        ) {
            bail!(
                "Invalid log_level '{}', expected off, error, warn, info, debug or trace",
                level
            );
        }
    }

    cfg.thresholds
        .validate()
        .context("Invalid thresholds section")?;

    Ok(())
}

/// Effective configuration and the file it was loaded from, if any.
///
/// Loading happens before logging is set up, so callers log `source` once
/// the subscriber is installed.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ProbeConfig,
    pub source: Option<PathBuf>,
}

/// Resolves configuration from CLI args, config file, and defaults.
/// This enforces precedence: CLI (if provided) > config file > default.
pub fn resolve_config(args: &Args) -> Result<LoadedConfig> {
    let loaded = if args.no_config {
        LoadedConfig {
            config: ProbeConfig::default(),
            source: None,
        }
    } else {
        load_config(args.config.as_deref())?
    };
    validate_config(&loaded.config)?;
    Ok(loaded)
}

/// Loads a config file, falling back to the default locations and then to
/// built-in defaults. Format is picked by file extension (YAML otherwise).
pub fn load_config(path: Option<&Path>) -> Result<LoadedConfig> {
    let path = match path {
        Some(p) => {
            if !p.exists() {
                bail!("Config file not found: {}", p.display());
            }
            p.to_path_buf()
        }
        None => match DEFAULT_LOCATIONS.iter().find(|p| Path::new(p).exists()) {
            Some(p) => PathBuf::from(p),
            None => {
                return Ok(LoadedConfig {
                    config: ProbeConfig::default(),
                    source: None,
                })
            }
        },
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: ProbeConfig = match path.extension().and_then(|s| s.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?,
        Some("toml") => toml::from_str(&content)
            .with_context(|| format!("Invalid TOML in {}", path.display()))?,
        _ => serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML in {}", path.display()))?,
    };

    Ok(LoadedConfig {
        config,
        source: Some(path),
    })
}

/// Serializes a configuration in the requested format.
pub fn render_config(config: &ProbeConfig, format: ConfigFormat) -> Result<String> {
    let output = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("create temp config");
        file.write_all(content.as_bytes()).expect("write temp config");
        file
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ProbeConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.ok_message(), DEFAULT_OK_MESSAGE);
        assert_eq!(config.round_places(), 2);
    }

    #[test]
    fn test_load_yaml() {
        let file = write_config(
            ".yaml",
            "ok_message: disks fine\nround_places: 1\nthresholds:\n  warn: 80\n  critical: 95\n",
        );
        let config = load_config(Some(file.path())).unwrap().config;
        assert_eq!(config.ok_message(), "disks fine");
        assert_eq!(config.round_places(), 1);
        assert_eq!(config.thresholds.warn, Some(80.0));
        assert_eq!(config.thresholds.critical, Some(95.0));
        assert!(!config.thresholds.larger_is_better);
    }

    #[test]
    fn test_load_json_partial() {
        let file = write_config(".json", r#"{"round-places": 0}"#);
        let config = load_config(Some(file.path())).unwrap().config;
        assert_eq!(config.round_places(), 0);
        assert_eq!(config.ok_message, None);
        assert_eq!(config.ok_message(), DEFAULT_OK_MESSAGE);
        assert_eq!(config.thresholds, Thresholds::default());
    }

    #[test]
    fn test_load_toml() {
        let file = write_config(
            ".toml",
            "log_level = \"debug\"\n\n[thresholds]\nwarn = 30.0\ncritical = 10.0\nlarger_is_better = true\n",
        );
        let config = load_config(Some(file.path())).unwrap().config;
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(config.thresholds.larger_is_better);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_reports_source_path() {
        let file = write_config(".yaml", "round_places: 3\n");
        let loaded = load_config(Some(file.path())).unwrap();
        assert_eq!(loaded.source.as_deref(), Some(file.path()));
        assert_eq!(loaded.config.round_places(), 3);
    }

    #[test]
    fn test_validate_rejects_non_finite_threshold() {
        let config = ProbeConfig {
            thresholds: Thresholds {
                warn: Some(f64::INFINITY),
                ..Thresholds::default()
            },
            ..ProbeConfig::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("warn must be a finite number"));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = load_config(Some(Path::new("/nonexistent/nagutils.yaml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_invalid_yaml() {
        let file = write_config(".yaml", "round_places: [not a number\n");
        assert!(load_config(Some(file.path())).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ProbeConfig {
            round_places: Some(400),
            ..ProbeConfig::default()
        };
        assert!(validate_config(&config).is_err());

        config.round_places = Some(2);
        config.log_level = Some("verbose".into());
        assert!(validate_config(&config).is_err());

        config.log_level = None;
        config.thresholds = Thresholds {
            warn: Some(95.0),
            critical: Some(80.0),
            larger_is_better: false,
        };
        let err = validate_config(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("less severe"));
    }

    #[test]
    fn test_render_config_formats() {
        let config = ProbeConfig::default();
        let yaml = render_config(&config, ConfigFormat::Yaml).unwrap();
        assert!(yaml.contains("ok_message: All checks passed"));
        let json = render_config(&config, ConfigFormat::Json).unwrap();
        assert!(json.contains("\"round_places\": 2"));
        let toml = render_config(&config, ConfigFormat::Toml).unwrap();
        assert!(toml.contains("[thresholds]"));

        let back: ProbeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
