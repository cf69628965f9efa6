//! Config-phase message records. Defined only on v765; `config` is not
//! reachable on v47.

use crate::tag::TagTree;

/// Server-to-client channel message during configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPluginMessage {
    /// Channel identifier.
    pub channel: String,
    /// Channel-specific payload, opaque to this codec.
    pub data: Vec<u8>,
}

/// Server rejects the connection during configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDisconnect {
    /// Reason shown to the player.
    pub reason: String,
}

/// Server signals that configuration is complete; transitions to `play`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigFinish;

/// Configuration-phase keep-alive, mirroring the play-phase one but scoped
/// to `config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigKeepAlive {
    /// Opaque token the client must echo back.
    pub keep_alive_id: i64,
}

/// Configuration-phase ping, distinct from [`ConfigKeepAlive`] in that its
/// id is a plain int rather than a liveness token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigPing {
    /// Ping identifier to echo back.
    pub id: i32,
}

/// Server pushes the dimension/biome/chat-type registry codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRegistryData {
    /// Registry payload. This codec does not parse the tag grammar; see
    /// [`TagTree`].
    pub registry_codec: TagTree,
}
