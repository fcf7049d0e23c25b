//! crates/logging/src/tracing_bridge.rs
//! Optional mirror of emitted lines into the tracing ecosystem.
//!
//! The console and file sinks stay authoritative; this bridge lets hosts
//! that already run a tracing subscriber observe the same diagnostics
//! without a second instrumentation pass.

use super::levels::{Category, LogLevel};

/// Mirrors one finished line as a tracing event.
///
/// Notices map to `info`; every error category maps to `error`. The
/// category tag and requested verbosity travel as fields.
pub(crate) fn mirror(category: Category, level: LogLevel, line: &str) {
    let text = line.trim_end();
    match category {
        Category::Notice => {
            tracing::info!(
                target: "oc_dnsproxy::log",
                category = category.tag(),
                verbosity = level.as_u8(),
                "{text}"
            );
        }
        _ => {
            tracing::error!(
                target: "oc_dnsproxy::log",
                category = category.tag(),
                verbosity = level.as_u8(),
                "{text}"
            );
        }
    }
}
