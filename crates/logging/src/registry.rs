//! crates/logging/src/registry.rs
//! Registry of loaded configuration files for read-error reporting.

use super::levels::Category;

/// Origin of a failed text-file read.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReadSource {
    /// Reading a hosts file.
    Hosts,
    /// Reading an address filter file.
    Filter,
    /// Reading the main configuration.
    Parameter,
    /// Re-reading the configuration in monitor mode.
    ParameterMonitor,
}

impl ReadSource {
    /// Maps the read origin to the category its diagnostics carry.
    pub(crate) const fn category(self) -> Category {
        match self {
            Self::Hosts => Category::Hosts,
            Self::Filter => Category::Filter,
            Self::Parameter | Self::ParameterMonitor => Category::Parameter,
        }
    }
}

/// Index-addressed display names for the hosts, filter, and configuration
/// files the service has loaded.
///
/// The host process fills this once during startup file discovery; read
/// errors then reference files by index.
#[derive(Clone, Debug, Default)]
pub struct SourceFileRegistry {
    hosts: Vec<String>,
    filters: Vec<String>,
    configs: Vec<String>,
}

impl SourceFileRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a hosts file display name, returning its index.
    pub fn push_hosts(&mut self, name: impl Into<String>) -> usize {
        self.hosts.push(name.into());
        self.hosts.len() - 1
    }

    /// Registers a filter file display name, returning its index.
    pub fn push_filter(&mut self, name: impl Into<String>) -> usize {
        self.filters.push(name.into());
        self.filters.len() - 1
    }

    /// Registers a configuration file display name, returning its index.
    pub fn push_config(&mut self, name: impl Into<String>) -> usize {
        self.configs.push(name.into());
        self.configs.len() - 1
    }

    /// Looks up the display name for a read origin and file index.
    ///
    /// An out-of-range index is a wiring bug in the host process, not a
    /// runtime condition; it fails hard.
    pub(crate) fn display_name(&self, source: ReadSource, index: usize) -> &str {
        match source {
            ReadSource::Hosts => &self.hosts[index],
            ReadSource::Filter => &self.filters[index],
            ReadSource::Parameter | ReadSource::ParameterMonitor => &self.configs[index],
        }
    }
}
