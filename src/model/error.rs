//! Error types for rowfold.
//!
//! Errors are split by where they can occur:
//!
//! - [`ConstructionError`] - validation failures when a panel is created.
//!   These are the only errors the engine itself produces; once a
//!   [`HeightToggler`](crate::toggler::HeightToggler) exists, every
//!   operation succeeds unconditionally.
//! - [`FixtureError`] - failures loading a simulated panel description.
//! - [`AppError`] - top-level error for the `rowfold` binary, wrapping the
//!   above plus configuration and logging failures via `From`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Construction-time validation failure.
///
/// Each variant names the precondition that was not met. Construction fails
/// fast on the first violation, checked in the order the variants are
/// declared.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConstructionError {
    /// No wrapper element was supplied at all.
    #[error("No wrapper provided")]
    NoWrapper,

    /// The wrapper has no element marked `data-expand-container`.
    #[error("No [data-expand-container] provided")]
    NoItemContainer,

    /// The item container holds no element marked `data-row-item`.
    #[error("No [data-row-item] provided")]
    NoItems,

    /// The wrapper's `data-expand-height` attribute is missing, zero,
    /// negative or not a number.
    #[error(
        "No [data-expand-height] provided (got {})",
        .raw.as_deref().map_or_else(|| "nothing".to_string(), |raw| format!("{raw:?}"))
    )]
    InvalidLimit {
        /// Attribute value as found on the wrapper, if any.
        raw: Option<String>,
    },

    /// A numeric option is out of range.
    #[error("Invalid option {name}: {value} (must be finite and >= 0)")]
    InvalidOption {
        /// Option name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
}

/// Failure loading a panel fixture for the simulated host.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("Failed to read fixture at {path}: {source}")]
    Read {
        /// Fixture path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The fixture is not valid JSON.
    #[error("Invalid JSON fixture: {0}")]
    Json(#[from] serde_json::Error),

    /// The fixture is not valid TOML.
    #[error("Invalid TOML fixture: {0}")]
    Toml(#[from] toml::de::Error),

    /// The fixture extension is neither `.json` nor `.toml`.
    #[error("Unsupported fixture format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Top-level error for the `rowfold` binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Fixture could not be loaded.
    #[error("Fixture error: {0}")]
    Fixture(#[from] FixtureError),

    /// The panel described by the fixture is invalid.
    #[error("Panel construction failed: {0}")]
    Construction(#[from] ConstructionError),

    /// Writing the report failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn construction_errors_name_the_missing_precondition() {
        assert_eq!(ConstructionError::NoWrapper.to_string(), "No wrapper provided");
        assert!(ConstructionError::NoItemContainer
            .to_string()
            .contains("[data-expand-container]"));
        assert!(ConstructionError::NoItems
            .to_string()
            .contains("[data-row-item]"));
        let err = ConstructionError::InvalidLimit {
            raw: Some("0".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("[data-expand-height]"));
        assert!(msg.contains("\"0\""));
    }

    #[test]
    fn invalid_limit_display_renders_raw_value_plainly() {
        let missing = ConstructionError::InvalidLimit { raw: None }.to_string();
        assert_eq!(missing, "No [data-expand-height] provided (got nothing)");

        let garbage = ConstructionError::InvalidLimit {
            raw: Some("many".to_string()),
        }
        .to_string();
        assert_eq!(garbage, "No [data-expand-height] provided (got \"many\")");
        assert!(!garbage.contains("Some("));
    }

    #[test]
    fn invalid_option_display_includes_name_and_value() {
        let err = ConstructionError::InvalidOption {
            name: "duration",
            value: -1.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("duration"));
        assert!(msg.contains("-1.5"));
    }

    #[test]
    fn fixture_read_error_includes_path() {
        let err = FixtureError::Read {
            path: PathBuf::from("/tmp/panel.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/panel.json"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn app_error_from_construction_error() {
        let app_err: AppError = ConstructionError::NoItems.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Panel construction failed"));
        assert!(msg.contains("[data-row-item]"));
    }

    #[test]
    fn app_error_from_config_error() {
        let app_err: AppError = ConfigError::InvalidPath("bad".to_string()).into();
        assert!(app_err.to_string().contains("Configuration error"));
    }

    #[test]
    fn app_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken");
        let app_err: AppError = io_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Output error"));
        assert!(msg.contains("pipe broken"));
    }
}
