//! crates/logging/src/levels.rs
//! Verbosity levels and diagnostic categories.

/// Ordinal verbosity level; higher values are more verbose.
///
/// The configured threshold and the level requested by a call site share
/// this type. `Off` is only meaningful as a configured threshold: it
/// silences the subsystem entirely.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum LogLevel {
    /// No diagnostics at all.
    Off = 0,
    /// Serious errors only.
    Level1 = 1,
    /// Errors plus configuration diagnostics.
    Level2 = 2,
    /// Everything, including transient network errors.
    Level3 = 3,
}

impl LogLevel {
    /// Decodes a verbosity value from the 0-3 range used in the service
    /// configuration file.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Off),
            1 => Some(Self::Level1),
            2 => Some(Self::Level2),
            3 => Some(Self::Level3),
            _ => None,
        }
    }

    /// Returns the ordinal value of the level.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Diagnostic category identifying the domain a log entry originates from.
///
/// The set is closed; hosts that carry numeric category codes in their
/// configuration decode them through [`Category::from_raw`], and an
/// unrecognized code produces no output at all.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Operational notices.
    Notice,
    /// Operating-system level failures.
    System,
    /// Configuration parameter problems.
    Parameter,
    /// Address filter file problems.
    Filter,
    /// Hosts file problems.
    Hosts,
    /// Socket and transport failures.
    Network,
    /// Packet capture failures; capture messages pass through verbatim.
    Capture,
    /// Encrypted resolver (DNSCurve) failures.
    Crypto,
    /// SOCKS proxy failures.
    ProxySocks,
    /// HTTP CONNECT proxy failures.
    ProxyHttp,
}

impl Category {
    /// Returns the bracketed display tag for the category.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Notice => "Notice",
            Self::System => "System Error",
            Self::Parameter => "Parameter Error",
            Self::Filter => "Filter Error",
            Self::Hosts => "Hosts Error",
            Self::Network => "Network Error",
            Self::Capture => "Capture Error",
            Self::Crypto => "Crypto Error",
            Self::ProxySocks => "Proxy-SOCKS Error",
            Self::ProxyHttp => "Proxy-HTTP Error",
        }
    }

    /// Decodes a numeric category code as carried in host configuration.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Notice),
            1 => Some(Self::System),
            2 => Some(Self::Parameter),
            3 => Some(Self::Filter),
            4 => Some(Self::Hosts),
            5 => Some(Self::Network),
            6 => Some(Self::Capture),
            7 => Some(Self::Crypto),
            8 => Some(Self::ProxySocks),
            9 => Some(Self::ProxyHttp),
            _ => None,
        }
    }

    /// Returns the numeric code for the category.
    pub const fn as_raw(self) -> u8 {
        match self {
            Self::Notice => 0,
            Self::System => 1,
            Self::Parameter => 2,
            Self::Filter => 3,
            Self::Hosts => 4,
            Self::Network => 5,
            Self::Capture => 6,
            Self::Crypto => 7,
            Self::ProxySocks => 8,
            Self::ProxyHttp => 9,
        }
    }
}
