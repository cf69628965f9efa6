//! Connection lifecycle phase and message direction.

/// Connection lifecycle stage governing which messages are legal.
///
/// `Config` is only reachable on [`crate::ProtocolVersion::V765`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Initial phase: a client announces its intent and target version.
    Handshake,
    /// Server status ping/pong, reachable when the handshake selects it.
    Status,
    /// Authentication and compression negotiation.
    Login,
    /// Registry and resource-pack exchange, modern versions only.
    Config,
    /// Normal gameplay traffic.
    Play,
}

/// Direction a message travels relative to the codec's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Client to server.
    ClientToServer,
    /// Server to server; unused by this codec but kept for dispatch-key
    /// completeness.
    ServerToServer,
    /// Server to client.
    ServerToClient,
}
