//! Handshake-phase message records.

/// Opens a connection, announcing the protocol version the client intends
/// to speak and which phase to enter next.
///
/// Identical on the wire between v765 and v47 aside from dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handshake {
    /// Protocol version number the client claims to speak.
    pub protocol_version: i32,
    /// Hostname or address the client connected to.
    pub server_addr: String,
    /// Port the client connected to.
    pub server_port: u16,
    /// Target phase: `1` selects `status`, `2` selects `login`.
    pub next_state: i32,
}
