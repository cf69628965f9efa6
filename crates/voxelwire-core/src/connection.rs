//! Phase machine and connection facade.
//!
//! No I/O happens here: [`Connection::receive`] takes an already-framed
//! payload (the transport collaborator strips the length prefix) and
//! returns the decoded record; [`Connection::send`] takes a record and
//! returns the opcode and encoded bytes for the transport to frame and
//! write. This keeps the state machine pure, mirroring how a cooperative,
//! single-threaded codec is meant to be driven and tested.
//!
//! This facade carries no clock and no randomness: phase transitions are
//! driven entirely by message content, never by time, so — unlike a
//! heartbeat-bearing session layer — it needs neither an `Instant` type
//! parameter nor an environment abstraction for `now()`/`random_u64()`.

use voxelwire_proto::{
    codec, cursor::ByteCursor, messages::Message, opcode, phase::Direction, phase::Phase,
    version::ProtocolVersion, LogicalId,
};

use crate::error::ConnectionError;

/// Which side of the connection this facade plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Speaks `ClientToServer` and expects `ServerToClient` in reply.
    Client,
    /// Speaks `ServerToClient` and expects `ClientToServer` in reply.
    Server,
}

impl Role {
    fn send_direction(self) -> Direction {
        match self {
            Self::Client => Direction::ClientToServer,
            Self::Server => Direction::ServerToClient,
        }
    }

    fn receive_direction(self) -> Direction {
        match self {
            Self::Client => Direction::ServerToClient,
            Self::Server => Direction::ClientToServer,
        }
    }
}

/// Connection lifecycle stage, including the terminal closed state that
/// [`Phase`] itself does not model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Still within the open phase sequence.
    Open(Phase),
    /// `disconnect` was sent or received; no further messages are valid.
    Closed,
}

/// The phase machine and codec facade for one connection.
///
/// A client pins its target version at construction, since it chooses what
/// to speak; a server learns the version from the handshake it receives.
#[derive(Debug, Clone)]
pub struct Connection {
    role: Role,
    version: Option<ProtocolVersion>,
    state: ConnectionState,
}

impl Connection {
    /// A client-side connection, which already knows the version it will
    /// announce in its handshake.
    #[must_use]
    pub fn client(version: ProtocolVersion) -> Self {
        Self { role: Role::Client, version: Some(version), state: ConnectionState::Open(Phase::Handshake) }
    }

    /// A server-side connection, which learns its peer's version from the
    /// first handshake it receives.
    #[must_use]
    pub fn server() -> Self {
        Self { role: Role::Server, version: None, state: ConnectionState::Open(Phase::Handshake) }
    }

    /// Current lifecycle stage.
    #[must_use]
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// The pinned protocol version, once known. `None` only on a
    /// server-side connection that has not yet received a handshake.
    #[must_use]
    pub fn version(&self) -> Option<ProtocolVersion> {
        self.version
    }

    fn open_phase(&self) -> Result<Phase, ConnectionError> {
        match self.state {
            ConnectionState::Open(phase) => Ok(phase),
            ConnectionState::Closed => Err(ConnectionError::Closed),
        }
    }

    /// Decodes an already-framed payload received at `opcode`, advances the
    /// phase machine if the message triggers a transition, and returns the
    /// decoded record.
    ///
    /// # Errors
    ///
    /// [`ConnectionError::Closed`] if the connection already closed.
    /// [`ConnectionError::UnknownOpcode`] if `opcode` has no dispatch entry
    /// for the current phase, direction, and version.
    /// [`ConnectionError::Protocol`] if the codec fails to decode the body,
    /// if trailing bytes remain after decoding, or if a handshake names an
    /// unsupported protocol number or target phase.
    pub fn receive(&mut self, opcode: i32, payload: Vec<u8>) -> Result<(LogicalId, Message), ConnectionError> {
        let phase = self.open_phase()?;
        let decode_version = self.version.unwrap_or(ProtocolVersion::V765);
        let direction = self.role.receive_direction();

        let logical_id = opcode::resolve(opcode, phase, direction, decode_version);
        if logical_id == LogicalId::Unknown {
            return Err(ConnectionError::UnknownOpcode { phase, opcode });
        }

        let mut cursor = ByteCursor::from_bytes(decode_version, payload);
        let message = codec::decode(&mut cursor, logical_id)?;
        if !cursor.is_exhausted() {
            return Err(ConnectionError::Protocol(format!(
                "{} bytes left over after decoding {logical_id:?}",
                cursor.length() - cursor.position()
            )));
        }

        self.apply_transition(&message)?;
        Ok((logical_id, message))
    }

    /// Encodes `message`'s body, advances the phase machine if it triggers
    /// a transition, and returns `(opcode, body_bytes)` for the transport
    /// to frame and write.
    ///
    /// # Errors
    ///
    /// [`ConnectionError::Closed`] if the connection already closed.
    /// [`ConnectionError::Protocol`] if `message` has no defined opcode or
    /// encoding for the current phase, direction, and version, or if it
    /// names an unsupported protocol number or target phase.
    pub fn send(&mut self, message: Message) -> Result<(i32, Vec<u8>), ConnectionError> {
        let phase = self.open_phase()?;
        let version = self.version.unwrap_or(ProtocolVersion::V765);
        let direction = self.role.send_direction();
        let logical_id = message.logical_id();

        let opcode = opcode::opcode_for(logical_id, phase, direction, version).ok_or_else(|| {
            ConnectionError::Protocol(format!("{logical_id:?} has no opcode in phase {phase:?}"))
        })?;

        let mut cursor = ByteCursor::new(version);
        codec::encode(&mut cursor, &message)?;

        self.apply_transition(&message)?;
        Ok((opcode, cursor.into_bytes()))
    }

    fn apply_transition(&mut self, message: &Message) -> Result<(), ConnectionError> {
        match message {
            Message::Handshake(h) => {
                let version = ProtocolVersion::from_number(h.protocol_version).ok_or_else(|| {
                    ConnectionError::Protocol(format!(
                        "unsupported protocol version {}",
                        h.protocol_version
                    ))
                })?;
                let next = match h.next_state {
                    1 => Phase::Status,
                    2 => Phase::Login,
                    other => {
                        return Err(ConnectionError::Protocol(format!(
                            "handshake named unknown next_state {other}"
                        )));
                    },
                };
                self.version = Some(version);
                self.state = ConnectionState::Open(next);
            },

            Message::LoginSuccess(_) => {
                let version = self.version.unwrap_or(ProtocolVersion::V765);
                let next = if version.has_config_phase() { Phase::Config } else { Phase::Play };
                self.state = ConnectionState::Open(next);
            },

            Message::ConfigFinish(_) => {
                self.state = ConnectionState::Open(Phase::Play);
            },

            Message::LoginDisconnect(_) | Message::ConfigDisconnect(_) | Message::PlayDisconnect(_) => {
                self.state = ConnectionState::Closed;
            },

            _ => {},
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxelwire_proto::messages::{
        config::ConfigFinish,
        handshake::Handshake,
        login::{LoginStart, LoginSuccess},
        status::StatusRequest,
    };

    #[test]
    fn server_pins_version_and_phase_from_handshake() {
        let mut server = Connection::server();
        assert_eq!(server.version(), None);

        let mut client = Connection::client(ProtocolVersion::V765);
        let (opcode, body) = client
            .send(Message::Handshake(Handshake {
                protocol_version: 765,
                server_addr: "localhost".to_string(),
                server_port: 25565,
                next_state: 2,
            }))
            .unwrap();

        let (logical_id, message) = server.receive(opcode, body).unwrap();
        assert_eq!(logical_id, LogicalId::Handshake);
        assert!(matches!(message, Message::Handshake(_)));
        assert_eq!(server.version(), Some(ProtocolVersion::V765));
        assert_eq!(server.state(), ConnectionState::Open(Phase::Login));
    }

    #[test]
    fn unsupported_protocol_number_is_rejected() {
        let mut server = Connection::server();
        let mut client = Connection::client(ProtocolVersion::V47);
        let (opcode, body) = client
            .send(Message::Handshake(Handshake {
                protocol_version: 9999,
                server_addr: "h".to_string(),
                server_port: 1,
                next_state: 1,
            }))
            .unwrap();

        let result = server.receive(opcode, body);
        assert!(matches!(result, Err(ConnectionError::Protocol(_))));
    }

    #[test]
    fn login_success_moves_modern_version_to_config_and_legacy_to_play() {
        let mut modern = Connection::client(ProtocolVersion::V765);
        modern.state = ConnectionState::Open(Phase::Login);
        modern
            .send(Message::LoginSuccess(LoginSuccess {
                uuid: 1,
                name: "steve".to_string(),
                properties_count: 0,
            }))
            .unwrap();
        assert_eq!(modern.state(), ConnectionState::Open(Phase::Config));

        let mut legacy = Connection::client(ProtocolVersion::V47);
        legacy.state = ConnectionState::Open(Phase::Login);
        legacy
            .send(Message::LoginSuccess(LoginSuccess {
                uuid: 1,
                name: "steve".to_string(),
                properties_count: 0,
            }))
            .unwrap();
        assert_eq!(legacy.state(), ConnectionState::Open(Phase::Play));
    }

    #[test]
    fn config_finish_moves_to_play() {
        let mut conn = Connection::client(ProtocolVersion::V765);
        conn.state = ConnectionState::Open(Phase::Config);
        conn.send(Message::ConfigFinish(ConfigFinish)).unwrap();
        assert_eq!(conn.state(), ConnectionState::Open(Phase::Play));
    }

    #[test]
    fn disconnect_from_any_phase_closes_the_connection() {
        let mut conn = Connection::client(ProtocolVersion::V47);
        conn.state = ConnectionState::Open(Phase::Login);
        conn.send(Message::LoginDisconnect(voxelwire_proto::messages::login::LoginDisconnect {
            reason: "banned".to_string(),
        }))
        .unwrap();
        assert_eq!(conn.state(), ConnectionState::Closed);
    }

    #[test]
    fn closed_connection_rejects_further_traffic() {
        let mut conn = Connection::client(ProtocolVersion::V47);
        conn.state = ConnectionState::Closed;
        let result = conn.send(Message::StatusRequest(StatusRequest));
        assert!(matches!(result, Err(ConnectionError::Closed)));
    }

    #[test]
    fn unknown_opcode_is_reported_with_the_current_phase() {
        let mut server = Connection::server();
        server.version = Some(ProtocolVersion::V47);
        server.state = ConnectionState::Open(Phase::Play);
        let result = server.receive(0x7E, vec![]);
        assert!(matches!(
            result,
            Err(ConnectionError::UnknownOpcode { phase: Phase::Play, opcode: 0x7E })
        ));
    }

    #[test]
    fn round_trips_a_full_login_start_through_send_and_receive() {
        let mut client = Connection::client(ProtocolVersion::V47);
        client.state = ConnectionState::Open(Phase::Login);
        let mut server = Connection::server();
        server.version = Some(ProtocolVersion::V47);
        server.state = ConnectionState::Open(Phase::Login);

        let (opcode, body) = client
            .send(Message::LoginStart(LoginStart { name: "alex".to_string(), uuid: 0 }))
            .unwrap();
        let (logical_id, message) = server.receive(opcode, body).unwrap();
        assert_eq!(logical_id, LogicalId::LoginStart);
        assert_eq!(
            message,
            Message::LoginStart(LoginStart { name: "alex".to_string(), uuid: 0 })
        );
    }
}
