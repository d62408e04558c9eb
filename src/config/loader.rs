//! Configuration file loading with precedence handling.

use super::options::{TogglerOptions, DEFAULT_DURATION_SECS, DEFAULT_OFFSET};
use crate::model::Px;
use crate::reactivity::ReactivityStrategy;
use crate::toggler::presentation::ClipMode;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ROWFOLD_CONFIG";
/// Environment variable overriding the transition duration (seconds).
pub const DURATION_ENV: &str = "ROWFOLD_DURATION";
/// Environment variable overriding the expanded-height offset (pixels).
pub const OFFSET_ENV: &str = "ROWFOLD_OFFSET";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, defaults are used.
/// Corresponds to `~/.config/rowfold/config.toml`:
///
/// ```toml
/// offset = 12.0
/// duration = 0.45
/// expanded = false
/// clip = "inset"
/// reactivity = "size-observed"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Extra pixels added to the expanded max-height.
    #[serde(default)]
    pub offset: Option<Px>,

    /// Transition duration in seconds.
    #[serde(default)]
    pub duration: Option<f64>,

    /// Start expanded.
    #[serde(default)]
    pub expanded: Option<bool>,

    /// Clip variant (`"inset"` or `"none"`).
    #[serde(default)]
    pub clip: Option<ClipMode>,

    /// Reactivity strategy (`"size-observed"` or `"viewport-resize"`).
    #[serde(default)]
    pub reactivity: Option<ReactivityStrategy>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Expanded-height offset.
    pub offset: Px,
    /// Transition duration in seconds.
    pub duration: f64,
    /// Initial expansion.
    pub expanded: bool,
    /// Clip variant.
    pub clip: ClipMode,
    /// Reactivity strategy.
    pub reactivity: ReactivityStrategy,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            duration: DEFAULT_DURATION_SECS,
            expanded: false,
            clip: ClipMode::default(),
            reactivity: ReactivityStrategy::default(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Panel options for this configuration, without an update callback.
    pub fn toggler_options(&self) -> TogglerOptions {
        TogglerOptions {
            offset: self.offset,
            duration: self.duration,
            expanded: self.expanded,
            clip: self.clip,
            reactivity: self.reactivity,
            on_update: None,
        }
    }
}

/// CLI flags that override configuration. `None` leaves the value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    /// `--offset`
    pub offset: Option<Px>,
    /// `--duration`
    pub duration: Option<f64>,
    /// `--expanded`
    pub expanded: Option<bool>,
    /// `--no-clip`
    pub clip: Option<ClipMode>,
    /// `--viewport-resize`
    pub reactivity: Option<ReactivityStrategy>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/rowfold/rowfold.log` on Unix-like systems,
/// or the platform state directory elsewhere. Falls back to the current
/// directory when no state directory is known.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("rowfold").join("rowfold.log")
    } else {
        PathBuf::from("rowfold.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/rowfold/config.toml` on Unix, the platform config
/// directory elsewhere, or `None` if it cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rowfold").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `ROWFOLD_CONFIG` environment variable
/// 3. Default path `~/.config/rowfold/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{CONFIG_ENV} is empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        offset: config.offset.unwrap_or(defaults.offset),
        duration: config.duration.unwrap_or(defaults.duration),
        expanded: config.expanded.unwrap_or(defaults.expanded),
        clip: config.clip.unwrap_or(defaults.clip),
        reactivity: config.reactivity.unwrap_or(defaults.reactivity),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `ROWFOLD_DURATION`: transition duration in seconds
/// - `ROWFOLD_OFFSET`: expanded-height offset in pixels
///
/// Unparsable values are ignored with a warning.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(duration) = read_env_number(DURATION_ENV) {
        config.duration = duration;
    }
    if let Some(offset) = read_env_number(OFFSET_ENV) {
        config.offset = offset;
    }
    config
}

fn read_env_number(name: &str) -> Option<f64> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<f64>() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(variable = name, value = %raw, error = %e, "Ignoring unparsable override");
            None
        }
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only flags that were explicitly set are applied.
///
/// Precedence chain: Defaults -> Config File -> Env Vars -> CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(offset) = overrides.offset {
        config.offset = offset;
    }
    if let Some(duration) = overrides.duration {
        config.duration = duration;
    }
    if let Some(expanded) = overrides.expanded {
        config.expanded = expanded;
    }
    if let Some(clip) = overrides.clip {
        config.clip = clip;
    }
    if let Some(reactivity) = overrides.reactivity {
        config.reactivity = reactivity;
    }
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
