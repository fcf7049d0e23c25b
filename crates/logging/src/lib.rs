#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is the thread-safe diagnostic subsystem of the oc-dnsproxy
//! service. It filters messages by configured verbosity, formats leveled
//! and categorized error and notice text (optionally with a translated
//! platform status code and a source-location suffix), and writes the
//! result to a console sink and/or a size-bounded, rotate-by-delete log
//! file.
//!
//! # Design
//!
//! The write path is: level filter, message composition (which invokes the
//! status-code translator), then the dual-sink writer. Composition and
//! translation finish before any lock is taken; the console and file sinks
//! each serialize under their own lock and those locks never nest. File
//! writes run a synchronous size check first and rotate by deleting the
//! oversized file.
//!
//! Process-wide logger state is an explicit [`Logger`] value owned by the
//! host process and shared via `Arc`, not a hidden global. Platform
//! specifics (system error-message lookup, file probe and delete) sit
//! behind the [`PlatformIo`] capability with [`SystemIo`] as the
//! production implementation.
//!
//! # Invariants
//!
//! - The startup banner is claimed at most once per process by a single
//!   atomic test-and-clear shared across both sink paths.
//! - A file append never executes while the file is at or above the
//!   configured size cap; rotation precedes the write that would exceed
//!   it, and a failed delete fails the whole write.
//! - An unrecognized numeric category yields no output on any sink.
//!
//! # Errors
//!
//! Every public operation collapses failure to a boolean: intentional
//! suppression reports success, malformed calls and sink I/O failures
//! report `false`, and a failed status-code lookup degrades to a raw
//! numeric suffix instead of failing. The subsystem never panics out of
//! the host process, with one documented exception: an out-of-range file
//! index in [`Logger::log_read_error`] is a host wiring bug and fails
//! hard.
//!
//! # Examples
//!
//! ```
//! use logging::{Category, LogLevel, Logger, LoggerConfig, RunMode};
//!
//! let logger = Logger::new(LoggerConfig {
//!     level: LogLevel::Level2,
//!     run_mode: RunMode::Background,
//!     ..LoggerConfig::default()
//! });
//!
//! // Over the configured threshold: suppressed, reported as a failure.
//! assert!(!logger.log_error(LogLevel::Level3, Category::Notice, "verbose detail", 0, None));
//!
//! // Within the threshold and no sinks configured: accepted.
//! assert!(logger.log_error(LogLevel::Level1, Category::Notice, "service reloaded", 0, None));
//! ```

mod config;
mod levels;
mod logger;
mod message;
mod platform_io;
mod registry;
mod role;
#[cfg(feature = "tracing")]
mod tracing_bridge;
mod translate;

pub use config::{DEFAULT_MAX_FILE_SIZE, LoggerConfig, RunMode};
pub use levels::{Category, LogLevel};
pub use logger::Logger;
pub use message::SourceLocation;
pub use platform_io::{PlatformIo, SystemIo};
pub use registry::{ReadSource, SourceFileRegistry};
pub use role::ServerRole;

pub use platform::{HOST_UNREACHABLE, NET_UNREACHABLE};
