//! Protocol version identifiers.

/// A protocol version drawn from the closed set this codec supports.
///
/// Pinned per cursor at construction and per connection for its lifetime;
/// nothing inside the codec mutates a version after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolVersion {
    /// Modern wire format, protocol number 765.
    V765,
    /// Legacy wire format, protocol number 47.
    V47,
}

impl ProtocolVersion {
    /// Numeric protocol id as it appears in the handshake packet.
    #[must_use]
    pub fn number(self) -> i32 {
        match self {
            Self::V765 => 765,
            Self::V47 => 47,
        }
    }

    /// Resolves a numeric protocol id to a known version.
    #[must_use]
    pub fn from_number(number: i32) -> Option<Self> {
        match number {
            765 => Some(Self::V765),
            47 => Some(Self::V47),
            _ => None,
        }
    }

    /// Whether the `config` phase is reachable on this version.
    #[must_use]
    pub fn has_config_phase(self) -> bool {
        matches!(self, Self::V765)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_known_numbers() {
        assert_eq!(ProtocolVersion::from_number(765), Some(ProtocolVersion::V765));
        assert_eq!(ProtocolVersion::from_number(47), Some(ProtocolVersion::V47));
        assert_eq!(ProtocolVersion::from_number(99), None);
    }

    #[test]
    fn only_modern_has_config_phase() {
        assert!(ProtocolVersion::V765.has_config_phase());
        assert!(!ProtocolVersion::V47.has_config_phase());
    }
}
