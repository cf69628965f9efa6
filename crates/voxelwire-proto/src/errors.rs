//! Closed error enumeration for the wire codec.
//!
//! Every cursor, compound-encoder, and per-message operation fails with
//! exactly one of these kinds. The set is closed: adding a new fault kind
//! is a breaking change to the enum, not an open-ended error type.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Fault kinds a codec operation can fail with.
///
/// A handful of variants (`Socket`, `Connecting`, `Closing`, `Recv`, `Sending`,
/// `ZlibInit`, `ZlibInflate`, `ZlibCompress`) describe faults that originate in
/// the transport/compression collaborator rather than in this crate; they are
/// kept in the enum so the facade can surface a transport-reported fault
/// through the same closed type it uses for its own faults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Allocation could not be satisfied while growing a cursor.
    #[error("allocation failure")]
    Mem,

    /// Transport is in the process of connecting.
    #[error("connection in progress")]
    Connecting,

    /// Transport-level socket fault, reported by the collaborator.
    #[error("socket error: {0}")]
    Socket(String),

    /// Transport is closing.
    #[error("connection closing")]
    Closing,

    /// Transport receive fault, reported by the collaborator.
    #[error("receive error: {0}")]
    Recv(String),

    /// A framed payload declared an invalid length.
    #[error("invalid packet length: {0}")]
    InvalidPacketLen(usize),

    /// Compression collaborator failed to initialize.
    #[error("zlib init failure")]
    ZlibInit,

    /// Compression collaborator failed to inflate.
    #[error("zlib inflate failure")]
    ZlibInflate,

    /// Compression collaborator failed to compress.
    #[error("zlib compress failure")]
    ZlibCompress,

    /// Transport send fault, reported by the collaborator.
    #[error("send error: {0}")]
    Sending(String),

    /// Peer was kicked while still in the login phase.
    #[error("kicked while logging in: {0}")]
    KickedWhileLogin(String),

    /// Server requires online-mode authentication the collaborator can't
    /// satisfy.
    #[error("server is in online mode")]
    ServerOnlineMode,

    /// Peer claimed a fact about itself that the decoded bytes contradict.
    #[error("sender is lying: {0}")]
    SenderLying(String),

    /// Opcode has no entry in the dispatch table for the current
    /// (phase, direction, version).
    #[error("unknown packet opcode {opcode:#04x}")]
    UnknownPacket {
        /// The opcode byte that had no dispatch entry.
        opcode: i32,
    },

    /// A zero-sized allocation was requested.
    #[error("malloc of zero bytes requested")]
    MallocZero,

    /// An argument violated a precondition of the operation it was passed
    /// to.
    #[error("invalid arguments")]
    InvalidArguments,

    /// A read ran past the end of the valid bytes in the cursor.
    #[error("buffer under-run")]
    BufferUnderrun,

    /// A read consumed fewer bytes than the record's frame declared, or a
    /// write exceeded a declared bound.
    #[error("buffer overflow")]
    BufferOverflow,

    /// An encoded string exceeded its declared maximum byte length.
    #[error("string exceeds maximum length")]
    StringLength,

    /// A decoded string was not valid UTF-8.
    #[error("invalid string bytes")]
    InvalidString,

    /// A decoded length-prefixed value had length that cannot be
    /// reconciled with the bytes available.
    #[error("invalid length")]
    InvalidLength,

    /// An entity-metadata type tag was outside the closed tag enum.
    #[error("invalid entity-metadata tag {tag}")]
    InvalidTagType {
        /// The unrecognized tag value.
        tag: u8,
    },

    /// Reached a code path that is defined but not yet implemented.
    #[error("not implemented yet: {0}")]
    NotImplementedYet(&'static str),

    /// An internal invariant was violated.
    #[error("assertion failed: {0}")]
    Assert(&'static str),

    /// The connection's pinned protocol version has no defined encoding or
    /// decoding for the requested logical id.
    #[error("unsupported protocol version {0}")]
    UnsupportedProtocolVersion(u32),

    /// A message was received that is not legal in the current phase.
    #[error("unexpected packet for current phase")]
    UnexpectedPacket,

    /// A zero-sized reallocation was requested.
    #[error("realloc of zero bytes requested")]
    ReallocZero,

    /// A decoded length-prefixed value had a negative declared length.
    #[error("negative string length")]
    NegativeStringLength,
}

impl ProtocolError {
    /// Categorizes this error per the propagation policy: a bad peer sent
    /// malformed bytes and the connection should close.
    #[must_use]
    pub fn is_bad_peer(&self) -> bool {
        matches!(
            self,
            Self::BufferOverflow
                | Self::StringLength
                | Self::InvalidTagType { .. }
                | Self::SenderLying(_)
        )
    }

    /// Categorizes this error per the propagation policy: a version or
    /// phase mismatch, fatal unless the caller opts to skip.
    #[must_use]
    pub fn is_version_mismatch(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedProtocolVersion(_) | Self::UnexpectedPacket | Self::UnknownPacket { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_peer_categorization() {
        assert!(ProtocolError::BufferOverflow.is_bad_peer());
        assert!(ProtocolError::StringLength.is_bad_peer());
        assert!(ProtocolError::InvalidTagType { tag: 9 }.is_bad_peer());
        assert!(!ProtocolError::Mem.is_bad_peer());
    }

    #[test]
    fn version_mismatch_categorization() {
        assert!(ProtocolError::UnsupportedProtocolVersion(12).is_version_mismatch());
        assert!(ProtocolError::UnexpectedPacket.is_version_mismatch());
        assert!(ProtocolError::UnknownPacket { opcode: 0x7F }.is_version_mismatch());
        assert!(!ProtocolError::BufferOverflow.is_version_mismatch());
    }
}
