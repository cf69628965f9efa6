//! Per-message encode/decode: maps [`Message`] values to and from wire
//! bytes on a pinned [`ProtocolVersion`].
//!
//! Field order and presence diverge by version exactly where §4.4 of the
//! governing catalog says they do (`LoginSuccess`, `LoginStart`,
//! `PlayKeepAlive`); every other message is identical across versions.
//! A message with no defined encoding on the cursor's pinned version fails
//! with [`ProtocolError::UnsupportedProtocolVersion`] rather than guessing.

use crate::{
    cursor::ByteCursor,
    errors::{ProtocolError, Result},
    messages::{
        config::{
            ConfigDisconnect, ConfigFinish, ConfigKeepAlive, ConfigPing, ConfigPluginMessage,
            ConfigRegistryData,
        },
        handshake::Handshake,
        login::{
            LoginAcknowledged, LoginDisconnect, LoginEncryptionRequest, LoginEncryptionResponse,
            LoginSetCompression, LoginStart, LoginSuccess,
        },
        play::{
            EntityPropertiesEntry, EntityPropertiesModifier, ExplosionRecord,
            MapChunkBulkColumn, MultiBlockChangeRecord, PlayBlockAction, PlayBlockChange,
            PlayChatMessage, PlayChunkData, PlayDisconnect, PlayEntityMetadata,
            PlayEntityProperties, PlayExplosion, PlayJoinGame, PlayKeepAlive,
            PlayMapChunkBulk, PlayMultiBlockChange, PlayPluginMessage, PlaySpawnMob,
            PlaySpawnPlayer, PlaySpawnPosition, PlayTimeUpdate, PlayUseBed,
        },
        status::{StatusPing, StatusPong, StatusRequest, StatusResponse},
        LogicalId, Message,
    },
    version::ProtocolVersion,
};
use uuid::Uuid;

fn unsupported(cursor: &ByteCursor) -> ProtocolError {
    ProtocolError::UnsupportedProtocolVersion(cursor.version().number() as u32)
}

/// Encodes `message`'s body into `cursor` (the opcode itself is a transport
/// concern, not written here).
///
/// # Errors
///
/// [`ProtocolError::UnsupportedProtocolVersion`] if `message`'s logical id
/// has no defined wire form on `cursor`'s pinned version. Any
/// [`ProtocolError`] the cursor's own pack operations raise (e.g.
/// `StringLength`).
pub fn encode(cursor: &mut ByteCursor, message: &Message) -> Result<()> {
    match message {
        Message::Handshake(m) => {
            cursor.pack_varint(m.protocol_version)?;
            cursor.pack_string(&m.server_addr)?;
            cursor.pack_u16(m.server_port)?;
            cursor.pack_varint(m.next_state)
        },

        Message::StatusRequest(StatusRequest) => Ok(()),
        Message::StatusResponse(m) => cursor.pack_string(&m.response),
        Message::StatusPing(m) => cursor.pack_i64(m.payload),
        Message::StatusPong(m) => cursor.pack_i64(m.payload),

        Message::LoginDisconnect(m) => cursor.pack_string(&m.reason),
        Message::LoginEncryptionRequest(m) => {
            cursor.pack_string(&m.server_id)?;
            cursor.pack_byte_array(&m.public_key)?;
            cursor.pack_byte_array(&m.verify_token)
        },
        Message::LoginSuccess(m) => match cursor.version() {
            ProtocolVersion::V765 => {
                cursor.pack_uuid(m.uuid)?;
                cursor.pack_string(&m.name)?;
                cursor.pack_varint(m.properties_count)
            },
            ProtocolVersion::V47 => {
                cursor.pack_string(&Uuid::from_u128(m.uuid).hyphenated().to_string())?;
                cursor.pack_string(&m.name)
            },
        },
        Message::LoginSetCompression(m) => cursor.pack_varint(m.threshold),
        Message::LoginStart(m) => match cursor.version() {
            ProtocolVersion::V765 => {
                cursor.pack_string(&m.name)?;
                cursor.pack_uuid(m.uuid)
            },
            ProtocolVersion::V47 => cursor.pack_string(&m.name),
        },
        Message::LoginEncryptionResponse(m) => {
            cursor.pack_byte_array(&m.shared_secret)?;
            cursor.pack_byte_array(&m.verify_token)
        },
        Message::LoginAcknowledged(LoginAcknowledged) => require_v765(cursor),

        Message::ConfigPluginMessage(m) => {
            require_v765(cursor)?;
            cursor.pack_string(&m.channel)?;
            cursor.append_bytes(&m.data)
        },
        Message::ConfigDisconnect(m) => {
            require_v765(cursor)?;
            cursor.pack_string(&m.reason)
        },
        Message::ConfigFinish(ConfigFinish) => {
            require_v765(cursor)
        },
        Message::ConfigKeepAlive(m) => {
            require_v765(cursor)?;
            cursor.pack_i64(m.keep_alive_id)
        },
        Message::ConfigPing(m) => {
            require_v765(cursor)?;
            cursor.pack_i32(m.id)
        },
        Message::ConfigRegistryData(m) => {
            require_v765(cursor)?;
            cursor.pack_tag_tree(&m.registry_codec)
        },

        Message::PlayKeepAlive(m) => match cursor.version() {
            ProtocolVersion::V765 => cursor.pack_i64(m.keep_alive_id_long),
            ProtocolVersion::V47 => cursor.pack_varint(m.keep_alive_id),
        },
        Message::PlayJoinGame(m) => {
            require_v47(cursor)?;
            cursor.pack_i32(m.entity_id)?;
            cursor.pack_u8(m.gamemode)?;
            cursor.pack_i8(m.dimension)?;
            cursor.pack_u8(m.difficulty)?;
            cursor.pack_u8(m.max_players)?;
            cursor.pack_string(&m.level_type)?;
            cursor.pack_bool(m.reduced_debug_info)
        },
        Message::PlayChatMessage(m) => {
            cursor.pack_string(&m.message)?;
            cursor.pack_i8(m.position)
        },
        Message::PlayTimeUpdate(m) => {
            cursor.pack_i64(m.world_age)?;
            cursor.pack_i64(m.time_of_day)
        },
        Message::PlaySpawnPosition(m) => cursor.pack_position(m.location),
        Message::PlayDisconnect(m) => cursor.pack_string(&m.reason),
        Message::PlayBlockChange(m) => {
            cursor.pack_position(m.location)?;
            cursor.pack_varint(m.block_id)
        },
        Message::PlayBlockAction(m) => {
            cursor.pack_position(m.location)?;
            cursor.pack_u8(m.block_data_1)?;
            cursor.pack_u8(m.block_data_2)?;
            cursor.pack_varint(m.block_type)
        },
        Message::PlayUseBed(m) => {
            cursor.pack_i32(m.entity_id)?;
            cursor.pack_position(m.location)
        },
        Message::PlayEntityProperties(m) => {
            cursor.pack_i32(m.entity_id)?;
            cursor.pack_i32(m.properties.len() as i32)?;
            for entry in &m.properties {
                cursor.pack_string(&entry.key)?;
                cursor.pack_f64(entry.value)?;
                cursor.pack_i16(entry.modifiers.len() as i16)?;
                for modifier in &entry.modifiers {
                    cursor.pack_f64(modifier.amount)?;
                    cursor.pack_i8(modifier.operation)?;
                }
            }
            Ok(())
        },
        Message::PlayChunkData(m) => {
            cursor.pack_i32(m.chunk_x)?;
            cursor.pack_i32(m.chunk_z)?;
            cursor.pack_bool(m.ground_up_continuous)?;
            cursor.pack_u16(m.primary_bitmask)?;
            cursor.pack_byte_array(&m.chunk)
        },
        Message::PlayMultiBlockChange(m) => {
            cursor.pack_i32(m.chunk_x)?;
            cursor.pack_i32(m.chunk_z)?;
            cursor.pack_i16(m.records.len() as i16)?;
            for record in &m.records {
                cursor.pack_u8(record.horizontal_position)?;
                cursor.pack_u8(record.vertical_position)?;
                cursor.pack_varint(record.block_id)?;
            }
            Ok(())
        },
        Message::PlayMapChunkBulk(m) => {
            cursor.pack_i16(m.chunk_columns.len() as i16)?;
            cursor.pack_bool(m.sky_light_sent)?;
            cursor.pack_byte_array(&m.chunk)?;
            for column in &m.chunk_columns {
                cursor.pack_i32(column.chunk_x)?;
                cursor.pack_i32(column.chunk_z)?;
                cursor.pack_u16(column.bit_mask)?;
            }
            Ok(())
        },
        Message::PlayExplosion(m) => {
            cursor.pack_f32(m.x)?;
            cursor.pack_f32(m.y)?;
            cursor.pack_f32(m.z)?;
            cursor.pack_f32(m.radius)?;
            cursor.pack_i32(m.records.len() as i32)?;
            for record in &m.records {
                cursor.pack_i8(record.x_offset)?;
                cursor.pack_i8(record.y_offset)?;
                cursor.pack_i8(record.z_offset)?;
            }
            cursor.pack_f32(m.x_player_vel)?;
            cursor.pack_f32(m.y_player_vel)?;
            cursor.pack_f32(m.z_player_vel)
        },
        Message::PlaySpawnPlayer(m) => {
            cursor.pack_varint(m.entity_id)?;
            cursor.pack_uuid(m.uuid)?;
            cursor.pack_i32(m.x)?;
            cursor.pack_i32(m.y)?;
            cursor.pack_i32(m.z)?;
            cursor.pack_u8(m.yaw)?;
            cursor.pack_u8(m.pitch)?;
            cursor.pack_i16(m.current_item)?;
            cursor.pack_entity_metadata(&m.metadata)
        },
        Message::PlaySpawnMob(m) => {
            cursor.pack_varint(m.entity_id)?;
            cursor.pack_u8(m.kind)?;
            cursor.pack_i32(m.x)?;
            cursor.pack_i32(m.y)?;
            cursor.pack_i32(m.z)?;
            cursor.pack_u8(m.yaw)?;
            cursor.pack_u8(m.pitch)?;
            cursor.pack_u8(m.head_pitch)?;
            cursor.pack_i16(m.x_vel)?;
            cursor.pack_i16(m.y_vel)?;
            cursor.pack_i16(m.z_vel)?;
            cursor.pack_entity_metadata(&m.metadata)
        },
        Message::PlayEntityMetadata(m) => {
            cursor.pack_varint(m.entity_id)?;
            cursor.pack_entity_metadata(&m.metadata)
        },
        Message::PlayPluginMessage(m) => {
            cursor.pack_string(&m.channel)?;
            cursor.pack_byte_array(&m.data)
        },
    }
}

fn require_v765(cursor: &ByteCursor) -> Result<()> {
    if cursor.version() == ProtocolVersion::V765 {
        Ok(())
    } else {
        Err(unsupported(cursor))
    }
}

fn require_v47(cursor: &ByteCursor) -> Result<()> {
    if cursor.version() == ProtocolVersion::V47 {
        Ok(())
    } else {
        Err(unsupported(cursor))
    }
}

/// Decodes a message body of logical identity `id` from `cursor`.
///
/// Callers are responsible for verifying, after this returns, that the
/// cursor's position matches the frame's declared length; this function
/// only guarantees it consumed a well-formed instance of `id`.
///
/// # Errors
///
/// [`ProtocolError::UnsupportedProtocolVersion`] if `id` has no defined
/// wire form on `cursor`'s pinned version. Any [`ProtocolError`] the
/// cursor's own unpack operations raise.
pub fn decode(cursor: &mut ByteCursor, id: LogicalId) -> Result<Message> {
    Ok(match id {
        LogicalId::Handshake => Message::Handshake(Handshake {
            protocol_version: cursor.unpack_varint()?,
            server_addr: cursor.unpack_string()?,
            server_port: cursor.unpack_u16()?,
            next_state: cursor.unpack_varint()?,
        }),

        LogicalId::StatusRequest => Message::StatusRequest(StatusRequest),
        LogicalId::StatusResponse => {
            Message::StatusResponse(StatusResponse { response: cursor.unpack_string()? })
        },
        LogicalId::StatusPing => Message::StatusPing(StatusPing { payload: cursor.unpack_i64()? }),
        LogicalId::StatusPong => Message::StatusPong(StatusPong { payload: cursor.unpack_i64()? }),

        LogicalId::LoginDisconnect => {
            Message::LoginDisconnect(LoginDisconnect { reason: cursor.unpack_string()? })
        },
        LogicalId::LoginEncryptionRequest => {
            let server_id = cursor.unpack_string()?;
            let public_key = cursor.unpack_byte_array()?;
            let verify_token = cursor.unpack_byte_array()?;
            Message::LoginEncryptionRequest(LoginEncryptionRequest {
                public_key,
                server_id,
                verify_token,
            })
        },
        LogicalId::LoginSuccess => Message::LoginSuccess(match cursor.version() {
            ProtocolVersion::V765 => {
                let uuid = cursor.unpack_uuid()?;
                let name = cursor.unpack_string()?;
                let properties_count = cursor.unpack_varint()?;
                LoginSuccess { uuid, name, properties_count }
            },
            ProtocolVersion::V47 => {
                let uuid_text = cursor.unpack_string()?;
                let name = cursor.unpack_string()?;
                let uuid = Uuid::parse_str(&uuid_text)
                    .map_err(|_| ProtocolError::InvalidString)?
                    .as_u128();
                LoginSuccess { uuid, name, properties_count: 0 }
            },
            // v47's LoginSuccess carries the id as dashed text, never as raw
            // bytes.
        }),
        LogicalId::LoginSetCompression => Message::LoginSetCompression(LoginSetCompression {
            threshold: cursor.unpack_varint()?,
        }),
        LogicalId::LoginStart => Message::LoginStart(match cursor.version() {
            ProtocolVersion::V765 => {
                let name = cursor.unpack_string()?;
                let uuid = cursor.unpack_uuid()?;
                LoginStart { name, uuid }
            },
            ProtocolVersion::V47 => LoginStart { name: cursor.unpack_string()?, uuid: 0 },
        }),
        LogicalId::LoginEncryptionResponse => {
            let shared_secret = cursor.unpack_byte_array()?;
            let verify_token = cursor.unpack_byte_array()?;
            Message::LoginEncryptionResponse(LoginEncryptionResponse {
                shared_secret,
                verify_token,
            })
        },
        LogicalId::LoginAcknowledged => {
            require_v765(cursor)?;
            Message::LoginAcknowledged(LoginAcknowledged)
        },

        LogicalId::ConfigPluginMessage => {
            require_v765(cursor)?;
            let channel = cursor.unpack_string()?;
            let remaining = cursor.length() - cursor.position();
            let data = cursor.read_bytes(remaining)?;
            Message::ConfigPluginMessage(ConfigPluginMessage { channel, data })
        },
        LogicalId::ConfigDisconnect => {
            require_v765(cursor)?;
            Message::ConfigDisconnect(ConfigDisconnect { reason: cursor.unpack_string()? })
        },
        LogicalId::ConfigFinish => {
            require_v765(cursor)?;
            Message::ConfigFinish(ConfigFinish)
        },
        LogicalId::ConfigKeepAlive => {
            require_v765(cursor)?;
            Message::ConfigKeepAlive(ConfigKeepAlive { keep_alive_id: cursor.unpack_i64()? })
        },
        LogicalId::ConfigPing => {
            require_v765(cursor)?;
            Message::ConfigPing(ConfigPing { id: cursor.unpack_i32()? })
        },
        LogicalId::ConfigRegistryData => {
            require_v765(cursor)?;
            Message::ConfigRegistryData(ConfigRegistryData {
                registry_codec: cursor.unpack_tag_tree()?,
            })
        },

        LogicalId::PlayKeepAlive => Message::PlayKeepAlive(match cursor.version() {
            ProtocolVersion::V765 => {
                PlayKeepAlive { keep_alive_id: 0, keep_alive_id_long: cursor.unpack_i64()? }
            },
            ProtocolVersion::V47 => {
                PlayKeepAlive { keep_alive_id: cursor.unpack_varint()?, keep_alive_id_long: 0 }
            },
        }),
        LogicalId::PlayJoinGame => {
            require_v47(cursor)?;
            Message::PlayJoinGame(PlayJoinGame {
                entity_id: cursor.unpack_i32()?,
                gamemode: cursor.unpack_u8()?,
                dimension: cursor.unpack_i8()?,
                difficulty: cursor.unpack_u8()?,
                max_players: cursor.unpack_u8()?,
                level_type: cursor.unpack_string()?,
                reduced_debug_info: cursor.unpack_bool()?,
            })
        },
        LogicalId::PlayChatMessage => {
            let message = cursor.unpack_string()?;
            let position = cursor.unpack_i8()?;
            Message::PlayChatMessage(PlayChatMessage { position, message })
        },
        LogicalId::PlayTimeUpdate => Message::PlayTimeUpdate(PlayTimeUpdate {
            world_age: cursor.unpack_i64()?,
            time_of_day: cursor.unpack_i64()?,
        }),
        LogicalId::PlaySpawnPosition => {
            Message::PlaySpawnPosition(PlaySpawnPosition { location: cursor.unpack_position()? })
        },
        LogicalId::PlayDisconnect => {
            Message::PlayDisconnect(PlayDisconnect { reason: cursor.unpack_string()? })
        },
        LogicalId::PlayBlockChange => {
            let location = cursor.unpack_position()?;
            let block_id = cursor.unpack_varint()?;
            Message::PlayBlockChange(PlayBlockChange { location, block_id })
        },
        LogicalId::PlayBlockAction => {
            let location = cursor.unpack_position()?;
            let block_data_1 = cursor.unpack_u8()?;
            let block_data_2 = cursor.unpack_u8()?;
            let block_type = cursor.unpack_varint()?;
            Message::PlayBlockAction(PlayBlockAction {
                location,
                block_type,
                block_data_1,
                block_data_2,
            })
        },
        LogicalId::PlayUseBed => {
            let entity_id = cursor.unpack_i32()?;
            let location = cursor.unpack_position()?;
            Message::PlayUseBed(PlayUseBed { entity_id, location })
        },
        LogicalId::PlayEntityProperties => {
            let entity_id = cursor.unpack_i32()?;
            let count = cursor.unpack_i32()?;
            if count < 0 {
                return Err(ProtocolError::InvalidLength);
            }
            let mut properties = Vec::with_capacity(count as usize);
            for _ in 0..count {
                let key = cursor.unpack_string()?;
                let value = cursor.unpack_f64()?;
                let modifier_count = cursor.unpack_i16()?;
                if modifier_count < 0 {
                    return Err(ProtocolError::InvalidLength);
                }
                let mut modifiers = Vec::with_capacity(modifier_count as usize);
                for _ in 0..modifier_count {
                    let amount = cursor.unpack_f64()?;
                    let operation = cursor.unpack_i8()?;
                    modifiers.push(EntityPropertiesModifier { amount, operation });
                }
                properties.push(EntityPropertiesEntry { key, value, modifiers });
            }
            Message::PlayEntityProperties(PlayEntityProperties { entity_id, properties })
        },
        LogicalId::PlayChunkData => {
            let chunk_x = cursor.unpack_i32()?;
            let chunk_z = cursor.unpack_i32()?;
            let ground_up_continuous = cursor.unpack_bool()?;
            let primary_bitmask = cursor.unpack_u16()?;
            let chunk = cursor.unpack_byte_array()?;
            Message::PlayChunkData(PlayChunkData {
                chunk_x,
                chunk_z,
                ground_up_continuous,
                primary_bitmask,
                chunk,
            })
        },
        LogicalId::PlayMultiBlockChange => {
            let chunk_x = cursor.unpack_i32()?;
            let chunk_z = cursor.unpack_i32()?;
            let count = cursor.unpack_i16()?;
            if count < 0 {
                return Err(ProtocolError::InvalidLength);
            }
            let mut records = Vec::with_capacity(count as usize);
            for _ in 0..count {
                let horizontal_position = cursor.unpack_u8()?;
                let vertical_position = cursor.unpack_u8()?;
                let block_id = cursor.unpack_varint()?;
                records.push(MultiBlockChangeRecord {
                    horizontal_position,
                    vertical_position,
                    block_id,
                });
            }
            Message::PlayMultiBlockChange(PlayMultiBlockChange { chunk_x, chunk_z, records })
        },
        LogicalId::PlayMapChunkBulk => {
            let count = cursor.unpack_i16()?;
            if count < 0 {
                return Err(ProtocolError::InvalidLength);
            }
            let sky_light_sent = cursor.unpack_bool()?;
            let chunk = cursor.unpack_byte_array()?;
            let mut chunk_columns = Vec::with_capacity(count as usize);
            for _ in 0..count {
                let chunk_x = cursor.unpack_i32()?;
                let chunk_z = cursor.unpack_i32()?;
                let bit_mask = cursor.unpack_u16()?;
                chunk_columns.push(MapChunkBulkColumn { chunk_x, chunk_z, bit_mask });
            }
            Message::PlayMapChunkBulk(PlayMapChunkBulk { sky_light_sent, chunk, chunk_columns })
        },
        LogicalId::PlayExplosion => {
            let x = cursor.unpack_f32()?;
            let y = cursor.unpack_f32()?;
            let z = cursor.unpack_f32()?;
            let radius = cursor.unpack_f32()?;
            let count = cursor.unpack_i32()?;
            if count < 0 {
                return Err(ProtocolError::InvalidLength);
            }
            let mut records = Vec::with_capacity(count as usize);
            for _ in 0..count {
                let x_offset = cursor.unpack_i8()?;
                let y_offset = cursor.unpack_i8()?;
                let z_offset = cursor.unpack_i8()?;
                records.push(ExplosionRecord { x_offset, y_offset, z_offset });
            }
            let x_player_vel = cursor.unpack_f32()?;
            let y_player_vel = cursor.unpack_f32()?;
            let z_player_vel = cursor.unpack_f32()?;
            Message::PlayExplosion(PlayExplosion {
                x,
                y,
                z,
                radius,
                records,
                x_player_vel,
                y_player_vel,
                z_player_vel,
            })
        },
        LogicalId::PlaySpawnPlayer => {
            let entity_id = cursor.unpack_varint()?;
            let uuid = cursor.unpack_uuid()?;
            let x = cursor.unpack_i32()?;
            let y = cursor.unpack_i32()?;
            let z = cursor.unpack_i32()?;
            let yaw = cursor.unpack_u8()?;
            let pitch = cursor.unpack_u8()?;
            let current_item = cursor.unpack_i16()?;
            let metadata = cursor.unpack_entity_metadata()?;
            Message::PlaySpawnPlayer(PlaySpawnPlayer {
                entity_id,
                uuid,
                x,
                y,
                z,
                yaw,
                pitch,
                current_item,
                metadata,
            })
        },
        LogicalId::PlaySpawnMob => {
            let entity_id = cursor.unpack_varint()?;
            let kind = cursor.unpack_u8()?;
            let x = cursor.unpack_i32()?;
            let y = cursor.unpack_i32()?;
            let z = cursor.unpack_i32()?;
            let yaw = cursor.unpack_u8()?;
            let pitch = cursor.unpack_u8()?;
            let head_pitch = cursor.unpack_u8()?;
            let x_vel = cursor.unpack_i16()?;
            let y_vel = cursor.unpack_i16()?;
            let z_vel = cursor.unpack_i16()?;
            let metadata = cursor.unpack_entity_metadata()?;
            Message::PlaySpawnMob(PlaySpawnMob {
                entity_id,
                kind,
                x,
                y,
                z,
                yaw,
                pitch,
                head_pitch,
                x_vel,
                y_vel,
                z_vel,
                metadata,
            })
        },
        LogicalId::PlayEntityMetadata => {
            let entity_id = cursor.unpack_varint()?;
            let metadata = cursor.unpack_entity_metadata()?;
            Message::PlayEntityMetadata(PlayEntityMetadata { entity_id, metadata })
        },
        LogicalId::PlayPluginMessage => {
            let channel = cursor.unpack_string()?;
            let data = cursor.unpack_byte_array()?;
            Message::PlayPluginMessage(PlayPluginMessage { channel, data })
        },

        LogicalId::Unknown => return Err(ProtocolError::UnknownPacket { opcode: -1 }),
    })
}
