//! Integration tests for verbosity filtering.
//!
//! These tests verify that the configured threshold, the Off level, and
//! the transient network-error damping decide both the return value and
//! whether anything reaches a sink.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use logging::{
    Category, HOST_UNREACHABLE, LogLevel, Logger, LoggerConfig, NET_UNREACHABLE, RunMode,
};

#[derive(Clone, Default)]
struct CapturedScreen(Arc<Mutex<Vec<u8>>>);

impl CapturedScreen {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("screen buffer").clone()).expect("utf-8")
    }
}

impl Write for CapturedScreen {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("screen buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn interactive_logger(level: LogLevel) -> (Logger, CapturedScreen) {
    let screen = CapturedScreen::default();
    let logger = Logger::with_parts(
        LoggerConfig {
            level,
            run_mode: RunMode::Interactive,
            ..LoggerConfig::default()
        },
        Box::new(screen.clone()),
        Arc::new(logging::SystemIo),
    );
    (logger, screen)
}

// ============================================================================
// Threshold Tests
// ============================================================================

/// Verifies an Off threshold silences every level and reports failure.
#[test]
fn off_threshold_suppresses_everything() {
    let (logger, screen) = interactive_logger(LogLevel::Off);

    assert!(!logger.log_error(LogLevel::Level1, Category::Notice, "quiet", 0, None));
    assert!(!logger.log_error(LogLevel::Level2, Category::System, "quiet", 2, None));
    assert!(!logger.log_error(LogLevel::Level3, Category::Network, "quiet", 0, None));
    assert_eq!(screen.contents(), "");
}

/// Verifies a requested level above the threshold is rejected.
#[test]
fn requested_level_above_threshold_is_rejected() {
    let (logger, screen) = interactive_logger(LogLevel::Level1);

    assert!(!logger.log_error(LogLevel::Level2, Category::Notice, "detail", 0, None));
    assert!(!logger.log_error(LogLevel::Level3, Category::Notice, "more detail", 0, None));
    assert_eq!(screen.contents(), "");
}

/// Verifies a requested level at or below the threshold is written.
#[test]
fn requested_level_within_threshold_is_written() {
    let (logger, screen) = interactive_logger(LogLevel::Level2);

    assert!(logger.log_error(LogLevel::Level2, Category::Notice, "within", 0, None));
    assert!(screen.contents().contains("[Notice] within.\n"));
}

/// Verifies an empty message is a malformed call.
#[test]
fn empty_message_is_rejected() {
    let (logger, screen) = interactive_logger(LogLevel::Level3);

    assert!(!logger.log_error(LogLevel::Level1, Category::Notice, "", 0, None));
    assert_eq!(screen.contents(), "");
}

// ============================================================================
// Network Damping Tests
// ============================================================================

/// Verifies unreachable-network errors below full verbosity are dropped
/// while still reporting success to the caller.
#[test]
fn unreachable_errors_are_damped_below_full_verbosity() {
    for code in [NET_UNREACHABLE, HOST_UNREACHABLE] {
        let (logger, screen) = interactive_logger(LogLevel::Level2);

        assert!(logger.log_error(LogLevel::Level1, Category::Network, "send failed", code, None));
        assert_eq!(screen.contents(), "");
    }
}

/// Verifies unreachable-network errors are written at full verbosity.
#[test]
fn unreachable_errors_are_reported_at_full_verbosity() {
    let (logger, screen) = interactive_logger(LogLevel::Level3);

    assert!(logger.log_error(
        LogLevel::Level1,
        Category::Network,
        "send failed",
        NET_UNREACHABLE,
        None
    ));
    let contents = screen.contents();
    assert!(contents.contains("[Network Error] send failed"));
    assert!(contents.contains(&format!("[{NET_UNREACHABLE}]")));
}

/// Verifies other network codes are not damped.
#[test]
fn other_network_codes_are_not_damped() {
    let (logger, screen) = interactive_logger(LogLevel::Level1);

    assert!(logger.log_error(LogLevel::Level1, Category::Network, "bind failed", 1, None));
    assert!(screen.contents().contains("[Network Error] bind failed"));
}

/// Verifies damping only applies to the Network category.
#[test]
fn damping_is_scoped_to_the_network_category() {
    let (logger, screen) = interactive_logger(LogLevel::Level2);

    assert!(logger.log_error(
        LogLevel::Level1,
        Category::System,
        "probe failed",
        NET_UNREACHABLE,
        None
    ));
    assert!(screen.contents().contains("[System Error] probe failed"));
}
