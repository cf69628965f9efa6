//! Message records, grouped by the phase that carries them.
//!
//! Each submodule holds plain data structs with no encoding logic of their
//! own; [`crate::codec`] maps between these and wire bytes.

pub mod config;
pub mod handshake;
pub mod login;
pub mod play;
pub mod status;

use config::{
    ConfigDisconnect, ConfigFinish, ConfigKeepAlive, ConfigPing, ConfigPluginMessage,
    ConfigRegistryData,
};
use handshake::Handshake;
use login::{
    LoginAcknowledged, LoginDisconnect, LoginEncryptionRequest, LoginEncryptionResponse,
    LoginSetCompression, LoginStart, LoginSuccess,
};
use play::{
    PlayBlockAction, PlayBlockChange, PlayChatMessage, PlayChunkData, PlayDisconnect,
    PlayEntityMetadata, PlayEntityProperties, PlayExplosion, PlayJoinGame, PlayKeepAlive,
    PlayMapChunkBulk, PlayMultiBlockChange, PlayPluginMessage, PlaySpawnMob, PlaySpawnPlayer,
    PlaySpawnPosition, PlayTimeUpdate, PlayUseBed,
};
use status::{StatusPing, StatusPong, StatusRequest, StatusResponse};

/// A logical message identity, independent of its per-version opcode.
///
/// [`crate::opcode`] maps `(opcode, phase, direction, version)` tuples to
/// these, and [`crate::codec`] maps these to/from wire bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum LogicalId {
    /// Client's initial handshake, selecting version and next phase.
    Handshake,
    /// Client asks for the status response.
    StatusRequest,
    /// Server's status response.
    StatusResponse,
    /// Client-sent timestamp to be echoed back.
    StatusPing,
    /// Server's echo of a status ping.
    StatusPong,
    /// Server rejects the login attempt.
    LoginDisconnect,
    /// Server requests encryption negotiation.
    LoginEncryptionRequest,
    /// Server confirms successful login.
    LoginSuccess,
    /// Server enables payload compression.
    LoginSetCompression,
    /// Client announces its chosen name.
    LoginStart,
    /// Client's encrypted response to an encryption request.
    LoginEncryptionResponse,
    /// Client confirms the `config` -> `play` transition.
    LoginAcknowledged,
    /// Server-to-client channel message during configuration.
    ConfigPluginMessage,
    /// Server rejects the connection during configuration.
    ConfigDisconnect,
    /// Server signals that configuration is complete.
    ConfigFinish,
    /// Configuration-phase keep-alive.
    ConfigKeepAlive,
    /// Configuration-phase ping.
    ConfigPing,
    /// Server pushes the dimension/biome/chat-type registry codec.
    ConfigRegistryData,
    /// Dual-version, dual-direction liveness check.
    PlayKeepAlive,
    /// Server confirms the player has joined the world.
    PlayJoinGame,
    /// A chat message delivered during gameplay.
    PlayChatMessage,
    /// World and day-night cycle clocks.
    PlayTimeUpdate,
    /// The player's compass/bed spawn point.
    PlaySpawnPosition,
    /// Server closes the play-phase connection.
    PlayDisconnect,
    /// A single block changed at a known absolute position.
    PlayBlockChange,
    /// A block-entity action.
    PlayBlockAction,
    /// A player enters or exits a bed.
    PlayUseBed,
    /// An entity's attribute set.
    PlayEntityProperties,
    /// Opaque compressed chunk section data.
    PlayChunkData,
    /// Several blocks changed within one chunk.
    PlayMultiBlockChange,
    /// Several chunk columns sent as one opaque payload.
    PlayMapChunkBulk,
    /// An explosion and the blocks it destroyed.
    PlayExplosion,
    /// Spawns another player's avatar into the world.
    PlaySpawnPlayer,
    /// Spawns a non-player entity.
    PlaySpawnMob,
    /// Updates an already-spawned entity's metadata stream.
    PlayEntityMetadata,
    /// Server-to-client channel message during gameplay.
    PlayPluginMessage,
    /// Opcode recognized by no logical message in this version/phase.
    Unknown,
}

/// Any decodable message record, tagged by its logical identity.
///
/// The `Unknown` case carries no payload: an unrecognized opcode is a
/// [`crate::errors::ProtocolError::UnknownPacket`] at decode time, never a
/// constructible record.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Message {
    /// Client's initial handshake, selecting version and next phase.
    Handshake(Handshake),
    /// Client asks for the status response.
    StatusRequest(StatusRequest),
    /// Server's status response.
    StatusResponse(StatusResponse),
    /// Client-sent timestamp to be echoed back.
    StatusPing(StatusPing),
    /// Server's echo of a status ping.
    StatusPong(StatusPong),
    /// Server rejects the login attempt.
    LoginDisconnect(LoginDisconnect),
    /// Server requests encryption negotiation.
    LoginEncryptionRequest(LoginEncryptionRequest),
    /// Server confirms successful login.
    LoginSuccess(LoginSuccess),
    /// Server enables payload compression.
    LoginSetCompression(LoginSetCompression),
    /// Client announces its chosen name.
    LoginStart(LoginStart),
    /// Client's encrypted response to an encryption request.
    LoginEncryptionResponse(LoginEncryptionResponse),
    /// Client confirms the `config` -> `play` transition.
    LoginAcknowledged(LoginAcknowledged),
    /// Server-to-client channel message during configuration.
    ConfigPluginMessage(ConfigPluginMessage),
    /// Server rejects the connection during configuration.
    ConfigDisconnect(ConfigDisconnect),
    /// Server signals that configuration is complete.
    ConfigFinish(ConfigFinish),
    /// Configuration-phase keep-alive.
    ConfigKeepAlive(ConfigKeepAlive),
    /// Configuration-phase ping.
    ConfigPing(ConfigPing),
    /// Server pushes the dimension/biome/chat-type registry codec.
    ConfigRegistryData(ConfigRegistryData),
    /// Dual-version, dual-direction liveness check.
    PlayKeepAlive(PlayKeepAlive),
    /// Server confirms the player has joined the world.
    PlayJoinGame(PlayJoinGame),
    /// A chat message delivered during gameplay.
    PlayChatMessage(PlayChatMessage),
    /// World and day-night cycle clocks.
    PlayTimeUpdate(PlayTimeUpdate),
    /// The player's compass/bed spawn point.
    PlaySpawnPosition(PlaySpawnPosition),
    /// Server closes the play-phase connection.
    PlayDisconnect(PlayDisconnect),
    /// A single block changed at a known absolute position.
    PlayBlockChange(PlayBlockChange),
    /// A block-entity action.
    PlayBlockAction(PlayBlockAction),
    /// A player enters or exits a bed.
    PlayUseBed(PlayUseBed),
    /// An entity's attribute set.
    PlayEntityProperties(PlayEntityProperties),
    /// Opaque compressed chunk section data.
    PlayChunkData(PlayChunkData),
    /// Several blocks changed within one chunk.
    PlayMultiBlockChange(PlayMultiBlockChange),
    /// Several chunk columns sent as one opaque payload.
    PlayMapChunkBulk(PlayMapChunkBulk),
    /// An explosion and the blocks it destroyed.
    PlayExplosion(PlayExplosion),
    /// Spawns another player's avatar into the world.
    PlaySpawnPlayer(PlaySpawnPlayer),
    /// Spawns a non-player entity.
    PlaySpawnMob(PlaySpawnMob),
    /// Updates an already-spawned entity's metadata stream.
    PlayEntityMetadata(PlayEntityMetadata),
    /// Server-to-client channel message during gameplay.
    PlayPluginMessage(PlayPluginMessage),
}

impl Message {
    /// The logical identity of this message, independent of version.
    #[must_use]
    pub fn logical_id(&self) -> LogicalId {
        match self {
            Self::Handshake(_) => LogicalId::Handshake,
            Self::StatusRequest(_) => LogicalId::StatusRequest,
            Self::StatusResponse(_) => LogicalId::StatusResponse,
            Self::StatusPing(_) => LogicalId::StatusPing,
            Self::StatusPong(_) => LogicalId::StatusPong,
            Self::LoginDisconnect(_) => LogicalId::LoginDisconnect,
            Self::LoginEncryptionRequest(_) => LogicalId::LoginEncryptionRequest,
            Self::LoginSuccess(_) => LogicalId::LoginSuccess,
            Self::LoginSetCompression(_) => LogicalId::LoginSetCompression,
            Self::LoginStart(_) => LogicalId::LoginStart,
            Self::LoginEncryptionResponse(_) => LogicalId::LoginEncryptionResponse,
            Self::LoginAcknowledged(_) => LogicalId::LoginAcknowledged,
            Self::ConfigPluginMessage(_) => LogicalId::ConfigPluginMessage,
            Self::ConfigDisconnect(_) => LogicalId::ConfigDisconnect,
            Self::ConfigFinish(_) => LogicalId::ConfigFinish,
            Self::ConfigKeepAlive(_) => LogicalId::ConfigKeepAlive,
            Self::ConfigPing(_) => LogicalId::ConfigPing,
            Self::ConfigRegistryData(_) => LogicalId::ConfigRegistryData,
            Self::PlayKeepAlive(_) => LogicalId::PlayKeepAlive,
            Self::PlayJoinGame(_) => LogicalId::PlayJoinGame,
            Self::PlayChatMessage(_) => LogicalId::PlayChatMessage,
            Self::PlayTimeUpdate(_) => LogicalId::PlayTimeUpdate,
            Self::PlaySpawnPosition(_) => LogicalId::PlaySpawnPosition,
            Self::PlayDisconnect(_) => LogicalId::PlayDisconnect,
            Self::PlayBlockChange(_) => LogicalId::PlayBlockChange,
            Self::PlayBlockAction(_) => LogicalId::PlayBlockAction,
            Self::PlayUseBed(_) => LogicalId::PlayUseBed,
            Self::PlayEntityProperties(_) => LogicalId::PlayEntityProperties,
            Self::PlayChunkData(_) => LogicalId::PlayChunkData,
            Self::PlayMultiBlockChange(_) => LogicalId::PlayMultiBlockChange,
            Self::PlayMapChunkBulk(_) => LogicalId::PlayMapChunkBulk,
            Self::PlayExplosion(_) => LogicalId::PlayExplosion,
            Self::PlaySpawnPlayer(_) => LogicalId::PlaySpawnPlayer,
            Self::PlaySpawnMob(_) => LogicalId::PlaySpawnMob,
            Self::PlayEntityMetadata(_) => LogicalId::PlayEntityMetadata,
            Self::PlayPluginMessage(_) => LogicalId::PlayPluginMessage,
        }
    }
}
