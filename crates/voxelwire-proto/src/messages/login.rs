//! Login-phase message records: authentication and compression negotiation.

/// Server rejects the login attempt with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginDisconnect {
    /// Reason shown to the player.
    pub reason: String,
}

/// Server requests the client negotiate encryption with an external
/// identity service.
///
/// Out of scope beyond its shape: this codec does not perform the
/// encryption handshake itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginEncryptionRequest {
    /// Server's public key, DER-encoded.
    pub public_key: Vec<u8>,
    /// Server id used by the external identity service.
    pub server_id: String,
    /// Random token the client must echo back encrypted.
    pub verify_token: Vec<u8>,
}

/// Server confirms successful login.
///
/// Field sets diverge by version: v765 carries the player's id as a 128-bit
/// value and a trailing property count; v47 carries the id as its textual
/// form and no property count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    /// Player id.
    pub uuid: u128,
    /// Player name.
    pub name: String,
    /// Number of trailing profile properties. Unused (always 0) on v47.
    pub properties_count: i32,
}

/// Server enables payload compression above the given threshold.
///
/// The event is observable but acting on it is a transport concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginSetCompression {
    /// Packets at or above this byte length are compressed.
    pub threshold: i32,
}

/// Client announces its chosen name and, on v765, its id.
///
/// v765 emits name then a 128-bit id; v47 emits only the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginStart {
    /// Player name.
    pub name: String,
    /// Player id. Always zero on v47, where it is not sent.
    pub uuid: u128,
}

/// Client's encrypted response to a [`LoginEncryptionRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginEncryptionResponse {
    /// Shared secret, encrypted under the server's public key.
    pub shared_secret: Vec<u8>,
    /// Verify token, encrypted under the server's public key.
    pub verify_token: Vec<u8>,
}

/// Client confirms the `config` -> `play` transition. v765 only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoginAcknowledged;
