//! Status-phase message records: server list ping.

/// Client asks for the status response; carries no fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusRequest;

/// Server's status response, a single JSON-formatted string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusResponse {
    /// JSON document describing server version, players, and MOTD.
    pub response: String,
}

/// Client-sent timestamp to be echoed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPing {
    /// Opaque payload, typically a timestamp.
    pub payload: i64,
}

/// Server's echo of a [`StatusPing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPong {
    /// Opaque payload, echoed verbatim from the ping.
    pub payload: i64,
}
