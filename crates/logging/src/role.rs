//! crates/logging/src/role.rs
//! Display labels for the four encrypted-resolver upstream roles.

use std::fmt;

/// Upstream server role referenced in encrypted-resolver diagnostics.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ServerRole {
    /// Main IPv6 upstream.
    Ipv6Main,
    /// Main IPv4 upstream.
    Ipv4Main,
    /// Alternate IPv6 upstream.
    Ipv6Alternate,
    /// Alternate IPv4 upstream.
    Ipv4Alternate,
}

impl ServerRole {
    /// Returns the display label used in diagnostic text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ipv6Main => "IPv6 Main Server",
            Self::Ipv4Main => "IPv4 Main Server",
            Self::Ipv6Alternate => "IPv6 Alternate Server",
            Self::Ipv4Alternate => "IPv4 Alternate Server",
        }
    }
}

impl fmt::Display for ServerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_cover_all_four_roles() {
        assert_eq!(ServerRole::Ipv6Main.label(), "IPv6 Main Server");
        assert_eq!(ServerRole::Ipv4Main.label(), "IPv4 Main Server");
        assert_eq!(ServerRole::Ipv6Alternate.label(), "IPv6 Alternate Server");
        assert_eq!(ServerRole::Ipv4Alternate.label(), "IPv4 Alternate Server");
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(ServerRole::Ipv4Alternate.to_string(), "IPv4 Alternate Server");
    }
}
