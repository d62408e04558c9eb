//! Configuration module.
//!
//! [`TogglerOptions`] is what a panel is built from. The [`loader`] layer
//! resolves those options (plus binary-only settings such as the log path)
//! from defaults, a TOML file, environment variables and CLI flags.

pub mod loader;
pub mod options;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, CliOverrides, ConfigError,
    ConfigFile, ResolvedConfig,
};
pub use options::{TogglerOptions, DEFAULT_DURATION_SECS, DEFAULT_OFFSET};
