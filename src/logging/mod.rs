//! Tracing subscriber initialization.
//!
//! The `rowfold` binary writes its logs to a file so that report output on
//! stdout stays clean. Library users install their own subscriber; the
//! engine only emits `tracing` events.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why the log file sink could not be set up.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The directory meant to hold `rowfold.log` could not be created.
    #[error("cannot create log directory {}: {source}", .dir.display())]
    CreateDir {
        /// Directory rowfold tried to create.
        dir: PathBuf,
        /// I/O failure from the filesystem.
        #[source]
        source: std::io::Error,
    },

    /// The log path ends in `..` or is not valid UTF-8, so there is no file to open.
    #[error("log path {} does not name a file", .0.display())]
    NotAFile(PathBuf),

    /// The log path is a filesystem root.
    #[error("log path {} has no parent directory", .0.display())]
    RootPath(PathBuf),

    /// A global subscriber is already installed (by an earlier `init` or by the embedding program).
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled,
}

/// Install a global subscriber that appends to `log_path`.
///
/// The filter comes from `RUST_LOG` and falls back to `info`. Missing
/// parent directories are created; a bare file name logs into the current
/// directory.
///
/// # Errors
///
/// See [`LoggingError`].
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let directory = match log_path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => return Err(LoggingError::RootPath(log_path.to_path_buf())),
    };

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::CreateDir {
        dir: directory.to_path_buf(),
        source,
    })?;

    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::NotAFile(log_path.to_path_buf()))?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    #[serial(tracing_init)]
    fn init_creates_log_directory_if_missing() {
        let test_dir = std::env::temp_dir().join("rowfold_test_logs_create");
        let log_file = test_dir.join("test.log");
        let _ = fs::remove_dir_all(&test_dir);

        // May fail if the subscriber is already set; the directory is created first.
        let _ = init(&log_file);

        assert!(
            test_dir.exists(),
            "Log directory should be created: {:?}",
            test_dir
        );
        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn second_init_reports_already_installed() {
        let test_dir = std::env::temp_dir().join("rowfold_test_logs_twice");
        let log_file = test_dir.join("twice.log");

        let _ = init(&log_file);
        let second = init(&log_file);
        assert!(matches!(second, Err(LoggingError::AlreadyInstalled)));

        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    fn root_path_has_no_parent() {
        let result = init(Path::new("/"));
        assert!(matches!(result, Err(LoggingError::RootPath(_))));
    }

    #[test]
    fn parent_dir_suffix_is_not_a_file() {
        let dir = std::env::temp_dir().join("rowfold_test_logs_dotdot");
        let result = init(&dir.join(".."));
        assert!(matches!(result, Err(LoggingError::NotAFile(_))));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn error_messages_include_path() {
        let err = LoggingError::RootPath(PathBuf::from("/"));
        assert_eq!(err.to_string(), "log path / has no parent directory");

        let err = LoggingError::CreateDir {
            dir: PathBuf::from("/tmp/rowfold-logs"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/rowfold-logs"));
        assert!(msg.contains("denied"));
    }
}
