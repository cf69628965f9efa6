//! Opcode dispatch table: `(opcode, phase, direction, version) -> LogicalId`.
//!
//! Grounded directly in the source catalog's `COMBINE_VALUES` switch. That
//! catalog defines the `play` phase almost entirely for v47; v765's `play`
//! dispatch in the source is limited to `keep_alive`, so this table follows
//! suit rather than inventing undocumented v765 play opcodes.

use crate::{messages::LogicalId, phase::Direction, phase::Phase, version::ProtocolVersion};

/// Resolves an opcode to a logical message identity.
///
/// Returns [`LogicalId::Unknown`] when no catalog entry matches; callers
/// turn that into `ProtocolError::UnknownPacket` at the point they need a
/// concrete decoder.
#[must_use]
pub fn resolve(
    opcode: i32,
    phase: Phase,
    direction: Direction,
    version: ProtocolVersion,
) -> LogicalId {
    use Direction::{ClientToServer, ServerToClient};
    use LogicalId as L;
    use Phase::{Config, Handshake, Login, Play, Status};
    use ProtocolVersion::{V47, V765};

    match (opcode, phase, direction, version) {
        (0x00, Handshake, ClientToServer, V765 | V47) => L::Handshake,

        (0x00, Status, ServerToClient, V765 | V47) => L::StatusResponse,
        (0x01, Status, ServerToClient, V765 | V47) => L::StatusPong,
        (0x00, Status, ClientToServer, V765 | V47) => L::StatusRequest,
        (0x01, Status, ClientToServer, V765 | V47) => L::StatusPing,

        (0x00, Login, ServerToClient, V765 | V47) => L::LoginDisconnect,
        (0x01, Login, ServerToClient, V765 | V47) => L::LoginEncryptionRequest,
        (0x02, Login, ServerToClient, V765 | V47) => L::LoginSuccess,
        (0x03, Login, ServerToClient, V765 | V47) => L::LoginSetCompression,
        (0x00, Login, ClientToServer, V765 | V47) => L::LoginStart,
        (0x01, Login, ClientToServer, V765 | V47) => L::LoginEncryptionResponse,
        (0x03, Login, ClientToServer, V765) => L::LoginAcknowledged,

        (0x00, Config, ServerToClient, V765) => L::ConfigPluginMessage,
        (0x01, Config, ServerToClient, V765) => L::ConfigDisconnect,
        (0x02, Config, ServerToClient, V765) => L::ConfigFinish,
        (0x03, Config, ServerToClient, V765) => L::ConfigKeepAlive,
        (0x04, Config, ServerToClient, V765) => L::ConfigPing,
        (0x05, Config, ServerToClient, V765) => L::ConfigRegistryData,

        (0x15, Play, ClientToServer, V765) => L::PlayKeepAlive,
        (0x00, Play, ClientToServer, V47) => L::PlayKeepAlive,
        (0x24, Play, ServerToClient, V765) => L::PlayKeepAlive,
        (0x00, Play, ServerToClient, V47) => L::PlayKeepAlive,

        (0x01, Play, ServerToClient, V47) => L::PlayJoinGame,
        (0x02, Play, ServerToClient, V47) => L::PlayChatMessage,
        (0x03, Play, ServerToClient, V47) => L::PlayTimeUpdate,
        (0x05, Play, ServerToClient, V47) => L::PlaySpawnPosition,
        (0x0A, Play, ServerToClient, V47) => L::PlayUseBed,
        (0x0C, Play, ServerToClient, V47) => L::PlaySpawnPlayer,
        (0x0F, Play, ServerToClient, V47) => L::PlaySpawnMob,
        (0x1C, Play, ServerToClient, V47) => L::PlayEntityMetadata,
        (0x20, Play, ServerToClient, V47) => L::PlayEntityProperties,
        (0x21, Play, ServerToClient, V47) => L::PlayChunkData,
        (0x22, Play, ServerToClient, V47) => L::PlayMultiBlockChange,
        (0x23, Play, ServerToClient, V47) => L::PlayBlockChange,
        (0x24, Play, ServerToClient, V47) => L::PlayBlockAction,
        (0x26, Play, ServerToClient, V47) => L::PlayMapChunkBulk,
        (0x27, Play, ServerToClient, V47) => L::PlayExplosion,
        (0x3F, Play, ServerToClient, V47) => L::PlayPluginMessage,
        (0x40, Play, ServerToClient, V47) => L::PlayDisconnect,

        _ => L::Unknown,
    }
}

const ALL_OPCODES: &[i32] = &[
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E,
    0x0F, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1A, 0x1B, 0x1C, 0x1D,
    0x1E, 0x1F, 0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2A, 0x2B, 0x3F,
    0x40, 0x41,
];

/// Resolves the opcode a logical message is written under for
/// `(phase, direction, version)`, the inverse of [`resolve`].
///
/// `None` if `id` has no catalog entry for that triple, matching
/// `codec::encode`'s own `UnsupportedProtocolVersion` rejection.
#[must_use]
pub fn opcode_for(id: LogicalId, phase: Phase, direction: Direction, version: ProtocolVersion) -> Option<i32> {
    ALL_OPCODES.iter().copied().find(|&opcode| resolve(opcode, phase, direction, version) == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keep_alive_resolves_on_both_versions_and_directions() {
        assert_eq!(
            resolve(0x15, Phase::Play, Direction::ClientToServer, ProtocolVersion::V765),
            LogicalId::PlayKeepAlive
        );
        assert_eq!(
            resolve(0x00, Phase::Play, Direction::ClientToServer, ProtocolVersion::V47),
            LogicalId::PlayKeepAlive
        );
        assert_eq!(
            resolve(0x24, Phase::Play, Direction::ServerToClient, ProtocolVersion::V765),
            LogicalId::PlayKeepAlive
        );
    }

    #[test]
    fn config_is_unknown_on_legacy_version() {
        assert_eq!(
            resolve(0x00, Phase::Config, Direction::ServerToClient, ProtocolVersion::V47),
            LogicalId::Unknown
        );
    }

    #[test]
    fn unmapped_opcode_is_unknown() {
        assert_eq!(
            resolve(0x7E, Phase::Play, Direction::ServerToClient, ProtocolVersion::V47),
            LogicalId::Unknown
        );
    }

    #[test]
    fn opcode_for_is_the_inverse_of_resolve() {
        assert_eq!(
            opcode_for(LogicalId::PlayKeepAlive, Phase::Play, Direction::ClientToServer, ProtocolVersion::V765),
            Some(0x15)
        );
        assert_eq!(
            opcode_for(LogicalId::PlayKeepAlive, Phase::Play, Direction::ServerToClient, ProtocolVersion::V47),
            Some(0x00)
        );
        assert_eq!(
            opcode_for(LogicalId::ConfigFinish, Phase::Config, Direction::ServerToClient, ProtocolVersion::V47),
            None
        );
    }

    #[test]
    fn login_acknowledged_is_modern_only() {
        assert_eq!(
            resolve(0x03, Phase::Login, Direction::ClientToServer, ProtocolVersion::V765),
            LogicalId::LoginAcknowledged
        );
        assert_eq!(
            resolve(0x03, Phase::Login, Direction::ClientToServer, ProtocolVersion::V47),
            LogicalId::Unknown
        );
    }
}
