//! crates/logging/src/platform_io.rs
//! Swappable platform I/O capability behind the logger.

use std::fs;
use std::io;
use std::path::Path;

/// Platform facilities the logger depends on: the system error-message
/// lookup and the file operations behind size-bounded rotation.
///
/// The default implementation is [`SystemIo`]; tests and embedders can
/// substitute their own to simulate lookup failures or undeletable files.
pub trait PlatformIo: Send + Sync {
    /// Returns the system's human-readable text for a status code, if the
    /// platform knows one.
    fn error_text(&self, code: i32) -> Option<String>;

    /// Returns the current size of the file, or `None` when it does not
    /// exist.
    fn file_size(&self, path: &Path) -> io::Result<Option<u64>>;

    /// Removes the file.
    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// [`PlatformIo`] backed by the host system.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemIo;

impl PlatformIo for SystemIo {
    fn error_text(&self, code: i32) -> Option<String> {
        platform::error_text(code)
    }

    fn file_size(&self, path: &Path) -> io::Result<Option<u64>> {
        match fs::metadata(path) {
            Ok(metadata) => Ok(Some(metadata.len())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}
