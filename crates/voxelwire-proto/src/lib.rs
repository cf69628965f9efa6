//! Wire-level codec for a two-version (v765 "modern", v47 "legacy") game
//! network protocol: byte cursor, varint, packed position, item slot,
//! entity metadata, and the per-phase message catalog built on top of them.
//!
//! This crate owns only encoding/decoding. Connection lifecycle and phase
//! transitions live in `voxelwire-core`.

pub mod codec;
pub mod cursor;
pub mod errors;
pub mod messages;
pub mod metadata;
pub mod opcode;
pub mod phase;
pub mod position;
pub mod slot;
pub mod tag;
pub mod version;

pub use cursor::ByteCursor;
pub use errors::{ProtocolError, Result};
pub use messages::{LogicalId, Message};
pub use phase::{Direction, Phase};
pub use position::BlockPos;
pub use version::ProtocolVersion;
