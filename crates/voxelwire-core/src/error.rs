//! Errors raised by the connection facade, distinct from
//! [`voxelwire_proto::ProtocolError`]: these describe faults in *when* a
//! message arrived, not in *how* its bytes were shaped.

use thiserror::Error;
use voxelwire_proto::phase::Phase;

/// Errors the connection facade can raise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// The opcode had no entry in the dispatch table for the current
    /// `(phase, direction, version)`. This also covers a message that is
    /// well-formed for some phase but arrives in the wrong one: the
    /// dispatch table is keyed by phase, so an out-of-phase opcode simply
    /// fails to resolve.
    #[error("unknown opcode {opcode:#04x} in phase {phase:?}")]
    UnknownOpcode {
        /// Phase the connection was in when the opcode arrived.
        phase: Phase,
        /// The unrecognized opcode.
        opcode: i32,
    },

    /// A message was submitted to `send` after the connection reached
    /// [`crate::connection::ConnectionState::Closed`].
    #[error("connection is closed")]
    Closed,

    /// The wire codec failed to decode or encode a message body.
    #[error("protocol error: {0}")]
    Protocol(String),
}

impl ConnectionError {
    /// Categorizes this error: a bad peer, per the propagation policy —
    /// always fatal, never retried.
    #[must_use]
    pub fn is_bad_peer(&self) -> bool {
        matches!(self, Self::UnknownOpcode { .. })
    }
}

impl From<voxelwire_proto::ProtocolError> for ConnectionError {
    fn from(err: voxelwire_proto::ProtocolError) -> Self {
        Self::Protocol(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_opcode_is_bad_peer() {
        assert!(ConnectionError::UnknownOpcode { phase: Phase::Play, opcode: 0x7F }.is_bad_peer());
        assert!(!ConnectionError::Closed.is_bad_peer());
    }

    #[test]
    fn protocol_errors_carry_the_cursor_faults_message() {
        let wrapped: ConnectionError = voxelwire_proto::ProtocolError::BufferOverflow.into();
        assert!(matches!(wrapped, ConnectionError::Protocol(_)));
    }
}
