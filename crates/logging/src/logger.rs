//! crates/logging/src/logger.rs
//! Level filtering and the dual-sink write path.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Local;

use super::config::{LoggerConfig, RunMode};
use super::levels::{Category, LogLevel};
use super::message::{LogMessage, SourceLocation};
use super::platform_io::{PlatformIo, SystemIo};
use super::registry::{ReadSource, SourceFileRegistry};
use super::translate::code_suffix;

/// One-time notice emitted ahead of the first real log line.
const STARTUP_BANNER: &str = "[Notice] oc-dnsproxy started.\n";

/// Notice emitted after rotation deleted the previous log file.
const ROTATION_NOTICE: &str = "[Notice] Old log file was deleted.\n";

/// Canned diagnostic for truncated lines in loaded text files.
const LINE_TOO_SHORT: &str = "Data of a line is too short";

/// File-sink failure in the rotate-then-append path.
#[derive(Debug, thiserror::Error)]
enum SinkError {
    #[error("failed to probe log file size: {0}")]
    Probe(#[source] io::Error),
    #[error("failed to delete oversized log file: {0}")]
    Rotate(#[source] io::Error),
    #[error("failed to open log file for append: {0}")]
    Open(#[source] io::Error),
    #[error("failed to append to log file: {0}")]
    Append(#[source] io::Error),
}

/// Thread-safe diagnostic logger writing to a console sink and/or a
/// size-bounded log file.
///
/// Every failure path is collapsed to a boolean at this boundary: the
/// instrumented service must never be destabilized by a logging fault.
///
/// # Examples
///
/// Suppression by configured verbosity:
///
/// ```
/// use logging::{Category, LogLevel, Logger, LoggerConfig, RunMode};
///
/// let logger = Logger::new(LoggerConfig {
///     level: LogLevel::Level1,
///     run_mode: RunMode::Background,
///     ..LoggerConfig::default()
/// });
///
/// // Level2 exceeds the configured threshold: nothing is written.
/// assert!(!logger.log_error(LogLevel::Level2, Category::Notice, "too verbose", 0, None));
/// ```
pub struct Logger {
    config: LoggerConfig,
    /// Console sink; guards all screen output (`screenLock` domain).
    screen: Mutex<Box<dyn Write + Send>>,
    /// Guards rotation, open, and append on the log file (`fileLock`
    /// domain). Never held together with the screen lock.
    file_lock: Mutex<()>,
    /// Startup banner pending flag; cleared exactly once globally by a
    /// single atomic test-and-clear shared across both sink paths.
    banner_pending: AtomicBool,
    platform: Arc<dyn PlatformIo>,
}

impl Logger {
    /// Creates a logger writing console output to standard error, backed by
    /// the host system's platform facilities.
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_parts(config, Box::new(io::stderr()), Arc::new(SystemIo))
    }

    /// Creates a logger from an explicit console writer and platform
    /// capability.
    ///
    /// Embedders and tests use this to capture console output or to
    /// simulate platform failures; [`Logger::new`] is the production
    /// constructor.
    pub fn with_parts(
        config: LoggerConfig,
        screen: Box<dyn Write + Send>,
        platform: Arc<dyn PlatformIo>,
    ) -> Self {
        Self {
            config,
            screen: Mutex::new(screen),
            file_lock: Mutex::new(()),
            banner_pending: AtomicBool::new(true),
            platform,
        }
    }

    /// Returns the configuration the logger was built with.
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Filters, formats, and writes one diagnostic.
    ///
    /// Returns `false` for malformed calls (empty message) and for sink
    /// I/O failures; returns `true` both for written lines and for
    /// intentional suppression, so suppressed transient network errors are
    /// never mistaken for logging faults by retrying callers.
    pub fn log_error(
        &self,
        level: LogLevel,
        category: Category,
        text: &str,
        code: i32,
        location: Option<SourceLocation>,
    ) -> bool {
        if self.config.level == LogLevel::Off || level > self.config.level || text.is_empty() {
            return false;
        }

        // Transient unreachable-network errors are noise below full
        // verbosity; report success so callers do not retry-amplify.
        if category == Category::Network
            && self.config.level < LogLevel::Level3
            && (code == platform::NET_UNREACHABLE || code == platform::HOST_UNREACHABLE)
        {
            return true;
        }

        // Translation and composition happen before any lock is acquired.
        let suffix = code_suffix(self.platform.as_ref(), code);
        let line = LogMessage::compose(category, text, suffix, location).render();

        #[cfg(feature = "tracing")]
        super::tracing_bridge::mirror(category, level, &line);

        self.write_line(&line)
    }

    /// [`Logger::log_error`] for hosts carrying numeric category codes.
    ///
    /// An unrecognized code produces no output on any sink.
    pub fn log_error_raw(
        &self,
        level: LogLevel,
        raw_category: u8,
        text: &str,
        code: i32,
        location: Option<SourceLocation>,
    ) -> bool {
        match Category::from_raw(raw_category) {
            Some(category) => self.log_error(level, category, text, code, location),
            None => false,
        }
    }

    /// Reports a truncated line in a loaded hosts, filter, or
    /// configuration file.
    ///
    /// The display name comes from the registry; an out-of-range index is
    /// a host-process wiring bug and fails hard.
    pub fn log_read_error(
        &self,
        registry: &SourceFileRegistry,
        source: ReadSource,
        file_index: usize,
        line: u32,
    ) {
        let name = registry.display_name(source, file_index);
        self.log_error(
            LogLevel::Level2,
            source.category(),
            LINE_TOO_SHORT,
            0,
            Some(SourceLocation::new(name, line)),
        );
    }

    /// Writes raw text to the console sink only, serialized under the
    /// screen lock.
    ///
    /// Used by the host for console-only output such as usage text; a
    /// no-op in background mode. Returns `false` when the write failed.
    pub fn print_to_screen(&self, text: &str) -> bool {
        if self.config.run_mode != RunMode::Interactive {
            return false;
        }

        let mut screen = lock(&self.screen);
        screen.write_all(text.as_bytes()).and_then(|()| screen.flush()).is_ok()
    }

    /// Writes a finished line to every active sink.
    fn write_line(&self, line: &str) -> bool {
        // Single test-and-clear shared by both sinks: exactly one call
        // claims the banner, and that call emits it on each sink it
        // reaches.
        let banner = self.banner_pending.swap(false, Ordering::AcqRel);
        let stamp = timestamp();

        if self.config.run_mode == RunMode::Interactive {
            let mut screen = lock(&self.screen);
            if banner {
                let _ = screen.write_all(stamp.as_bytes());
                let _ = screen.write_all(STARTUP_BANNER.as_bytes());
            }
            let _ = screen.write_all(stamp.as_bytes());
            let _ = screen.write_all(line.as_bytes());
            let _ = screen.flush();
        }

        match &self.config.log_file {
            Some(path) => self.write_file(path, banner, &stamp, line).is_ok(),
            None => true,
        }
    }

    /// Rotate-then-append under the file lock.
    fn write_file(
        &self,
        path: &Path,
        banner: bool,
        stamp: &str,
        line: &str,
    ) -> Result<(), SinkError> {
        let _guard = lock(&self.file_lock);

        // Checked-then-act: the append below never runs while the file is
        // at or above the configured cap.
        let rotated = match self.platform.file_size(path).map_err(SinkError::Probe)? {
            Some(size) if size >= self.config.max_file_size => {
                self.platform.remove_file(path).map_err(SinkError::Rotate)?;
                true
            }
            _ => false,
        };

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(SinkError::Open)?;

        if banner {
            file.write_all(stamp.as_bytes()).map_err(SinkError::Append)?;
            file.write_all(STARTUP_BANNER.as_bytes()).map_err(SinkError::Append)?;
        }
        if rotated {
            file.write_all(stamp.as_bytes()).map_err(SinkError::Append)?;
            file.write_all(ROTATION_NOTICE.as_bytes()).map_err(SinkError::Append)?;
        }
        file.write_all(stamp.as_bytes()).map_err(SinkError::Append)?;
        file.write_all(line.as_bytes()).map_err(SinkError::Append)?;

        Ok(())
    }
}

/// Locks a mutex, continuing through poisoning: a panicking writer must
/// not take the whole diagnostics subsystem down with it.
fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Timestamp prefix for every emitted line.
fn timestamp() -> String {
    Local::now().format("[%Y-%m-%d %H:%M:%S] -> ").to_string()
}
