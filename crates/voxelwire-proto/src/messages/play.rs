//! Play-phase message records.
//!
//! Several of the source packets carried both a `*_count` field and an
//! array; canonical encoding derives the count from the array's length, so
//! these records expose only the array (see `DESIGN.md`).

use crate::{metadata::MetadataEntry, position::BlockPos};

/// Dual-version, dual-direction liveness check.
///
/// v765 carries a 64-bit token; v47 carries a variable-length-int token.
/// Both fields are present so a single record type serves either version;
/// only the version-relevant one is populated by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayKeepAlive {
    /// v47 wire form.
    pub keep_alive_id: i32,
    /// v765 wire form.
    pub keep_alive_id_long: i64,
}

/// Present only on v47 within this catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayJoinGame {
    /// The joining player's entity id.
    pub entity_id: i32,
    /// Game mode: 0 survival, 1 creative, 2 adventure, 3 spectator.
    pub gamemode: u8,
    /// World dimension: -1 nether, 0 overworld, 1 the end.
    pub dimension: i8,
    /// World difficulty.
    pub difficulty: u8,
    /// Maximum player count, used only to size the player list UI.
    pub max_players: u8,
    /// World generator name (e.g. `"default"`, `"flat"`).
    pub level_type: String,
    /// Whether the client should hide the F3 debug screen's coordinates.
    pub reduced_debug_info: bool,
}

/// A chat message delivered during gameplay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayChatMessage {
    /// Where the message is rendered: 0 chat, 1 system, 2 action bar.
    pub position: i8,
    /// Message body.
    pub message: String,
}

/// World and day-night cycle clocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayTimeUpdate {
    /// Total ticks since the world was created, unaffected by `/time set`.
    pub world_age: i64,
    /// Ticks into the current day, driving the sun/moon position.
    pub time_of_day: i64,
}

/// The player's compass/bed spawn point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySpawnPosition {
    /// World-space block coordinate the compass points to.
    pub location: BlockPos,
}

/// Server closes the play-phase connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayDisconnect {
    /// Reason shown to the player.
    pub reason: String,
}

/// A single block changed at a known absolute position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayBlockChange {
    /// World-space coordinate of the changed block.
    pub location: BlockPos,
    /// New block state id.
    pub block_id: i32,
}

/// A block-entity action (e.g. a chest's lid animation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayBlockAction {
    /// World-space coordinate of the acting block.
    pub location: BlockPos,
    /// Block type id, needed because the location alone may outlive the
    /// action if the block is removed before the client processes it.
    pub block_type: i32,
    /// First block-specific action byte (e.g. note block pitch).
    pub block_data_1: u8,
    /// Second block-specific action byte (e.g. note block instrument).
    pub block_data_2: u8,
}

/// A player enters or exits a bed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayUseBed {
    /// Entity id of the player using the bed.
    pub entity_id: i32,
    /// World-space coordinate of the bed block.
    pub location: BlockPos,
}

/// One attribute modifier inside an [`EntityPropertiesEntry`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityPropertiesModifier {
    /// Magnitude applied by this modifier.
    pub amount: f64,
    /// How `amount` combines with the base value: 0 add, 1 add-percent, 2
    /// multiply-percent.
    pub operation: i8,
}

/// One named attribute inside [`PlayEntityProperties`], with its own
/// variable-length modifier sub-array.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityPropertiesEntry {
    /// Attribute identifier (e.g. `"generic.maxHealth"`).
    pub key: String,
    /// Base value before modifiers are applied.
    pub value: f64,
    /// Modifiers layered on top of `value`.
    pub modifiers: Vec<EntityPropertiesModifier>,
}

/// An entity's attribute set (health regen rate, movement speed, etc.),
/// each entry carrying its own nested modifier array.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayEntityProperties {
    /// Entity the attributes belong to.
    pub entity_id: i32,
    /// The entity's named attributes.
    pub properties: Vec<EntityPropertiesEntry>,
}

/// Opaque compressed chunk section data plus the bitmask of which sections
/// are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayChunkData {
    /// Chunk column x coordinate, in chunks.
    pub chunk_x: i32,
    /// Chunk column z coordinate, in chunks.
    pub chunk_z: i32,
    /// Whether this is a full column (unloads all prior sections) rather
    /// than a partial update of the sections named by `primary_bitmask`.
    pub ground_up_continuous: bool,
    /// Bit `n` set means vertical section `n` is present in `chunk`.
    pub primary_bitmask: u16,
    /// Opaque, already-compressed section payload.
    pub chunk: Vec<u8>,
}

/// One changed block inside [`PlayMultiBlockChange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiBlockChangeRecord {
    /// Packed (x << 4 | z) position within the chunk column.
    pub horizontal_position: u8,
    /// Height within the chunk column.
    pub vertical_position: u8,
    /// New block state id.
    pub block_id: i32,
}

/// Several blocks changed within one chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayMultiBlockChange {
    /// Chunk column x coordinate, in chunks.
    pub chunk_x: i32,
    /// Chunk column z coordinate, in chunks.
    pub chunk_z: i32,
    /// The changed blocks.
    pub records: Vec<MultiBlockChangeRecord>,
}

/// One chunk column inside a [`PlayMapChunkBulk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapChunkBulkColumn {
    /// Chunk column x coordinate, in chunks.
    pub chunk_x: i32,
    /// Chunk column z coordinate, in chunks.
    pub chunk_z: i32,
    /// Bit `n` set means vertical section `n` is present for this column.
    pub bit_mask: u16,
}

/// Several chunk columns sent as one opaque payload plus per-column
/// metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayMapChunkBulk {
    /// Whether sky light data is included in `chunk`.
    pub sky_light_sent: bool,
    /// Opaque, already-compressed payload for every column's sections.
    pub chunk: Vec<u8>,
    /// Per-column coordinates and section bitmasks, in `chunk`'s order.
    pub chunk_columns: Vec<MapChunkBulkColumn>,
}

/// One affected block inside a [`PlayExplosion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplosionRecord {
    /// Block-relative x offset from the explosion's center.
    pub x_offset: i8,
    /// Block-relative y offset from the explosion's center.
    pub y_offset: i8,
    /// Block-relative z offset from the explosion's center.
    pub z_offset: i8,
}

/// An explosion at a point, with the set of blocks it destroyed and the
/// resulting player knockback.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayExplosion {
    /// Explosion center x.
    pub x: f32,
    /// Explosion center y.
    pub y: f32,
    /// Explosion center z.
    pub z: f32,
    /// Blast radius, used client-side for the particle/shake effect.
    pub radius: f32,
    /// Blocks destroyed by the explosion, relative to the center.
    pub records: Vec<ExplosionRecord>,
    /// Knockback applied to the viewing player's x velocity.
    pub x_player_vel: f32,
    /// Knockback applied to the viewing player's y velocity.
    pub y_player_vel: f32,
    /// Knockback applied to the viewing player's z velocity.
    pub z_player_vel: f32,
}

/// Spawns another player's avatar into the world.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaySpawnPlayer {
    /// Entity id assigned to this player for the rest of the session.
    pub entity_id: i32,
    /// Player id.
    pub uuid: u128,
    /// Fixed-point world x coordinate.
    pub x: i32,
    /// Fixed-point world y coordinate.
    pub y: i32,
    /// Fixed-point world z coordinate.
    pub z: i32,
    /// Yaw, packed as a fraction of a full turn into a byte.
    pub yaw: u8,
    /// Pitch, packed as a fraction of a full turn into a byte.
    pub pitch: u8,
    /// Item id held in the player's main hand, or `0` for empty.
    pub current_item: i16,
    /// Initial entity-metadata stream.
    pub metadata: Vec<MetadataEntry>,
}

/// Spawns a non-player entity (mob).
#[derive(Debug, Clone, PartialEq)]
pub struct PlaySpawnMob {
    /// Entity id assigned to this mob for the rest of its lifetime.
    pub entity_id: i32,
    /// Mob type id.
    pub kind: u8,
    /// Fixed-point world x coordinate.
    pub x: i32,
    /// Fixed-point world y coordinate.
    pub y: i32,
    /// Fixed-point world z coordinate.
    pub z: i32,
    /// Yaw, packed as a fraction of a full turn into a byte.
    pub yaw: u8,
    /// Pitch, packed as a fraction of a full turn into a byte.
    pub pitch: u8,
    /// Head yaw, separate from body `pitch`/`yaw` for mobs that can look
    /// independently of their facing.
    pub head_pitch: u8,
    /// Initial x velocity, in the same fixed-point units as movement
    /// packets.
    pub x_vel: i16,
    /// Initial y velocity, in the same fixed-point units as movement
    /// packets.
    pub y_vel: i16,
    /// Initial z velocity, in the same fixed-point units as movement
    /// packets.
    pub z_vel: i16,
    /// Initial entity-metadata stream.
    pub metadata: Vec<MetadataEntry>,
}

/// Updates an already-spawned entity's metadata stream in place.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayEntityMetadata {
    /// Entity being updated.
    pub entity_id: i32,
    /// Replacement entity-metadata stream.
    pub metadata: Vec<MetadataEntry>,
}

/// Server-to-client channel message during gameplay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayPluginMessage {
    /// Channel identifier.
    pub channel: String,
    /// Channel-specific payload, opaque to this codec.
    pub data: Vec<u8>,
}
