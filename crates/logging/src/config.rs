//! crates/logging/src/config.rs
//! Logger configuration supplied by the host process.

use std::path::PathBuf;

use super::levels::LogLevel;

/// Default cap on the log file size before rotation, in bytes (8 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 8 * 1024 * 1024;

/// Whether the service runs attached to a console.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunMode {
    /// Foreground process; the console sink is active.
    #[default]
    Interactive,
    /// Daemonized process; only the file sink (if configured) is active.
    Background,
}

/// Process-wide logger configuration, initialized once at service start.
///
/// The original daemon kept this state in globals; here it is an explicit
/// value the host process owns and shares into the [`Logger`] it builds.
///
/// [`Logger`]: crate::Logger
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggerConfig {
    /// Configured verbosity threshold.
    pub level: LogLevel,
    /// Path of the log file; `None` disables the file sink.
    pub log_file: Option<PathBuf>,
    /// Size in bytes at which the log file is deleted and recreated.
    pub max_file_size: u64,
    /// Foreground or daemonized operation.
    pub run_mode: RunMode,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Level3,
            log_file: None,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            run_mode: RunMode::Interactive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_startup() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, LogLevel::Level3);
        assert_eq!(config.log_file, None);
        assert_eq!(config.max_file_size, DEFAULT_MAX_FILE_SIZE);
        assert_eq!(config.run_mode, RunMode::Interactive);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_round_trips_through_json() {
        let config = LoggerConfig {
            level: LogLevel::Level2,
            log_file: Some(PathBuf::from("/var/log/oc-dnsproxy/error.log")),
            max_file_size: 1024,
            run_mode: RunMode::Background,
        };

        let json = serde_json::to_string(&config).expect("serializable");
        let back: LoggerConfig = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back.level, LogLevel::Level2);
        assert_eq!(back.max_file_size, 1024);
        assert_eq!(back.run_mode, RunMode::Background);
    }
}
