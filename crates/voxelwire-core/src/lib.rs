//! Connection lifecycle on top of `voxelwire-proto`'s wire codec: phase
//! transitions, version pinning, and the closed terminal state.

pub mod connection;
pub mod error;

pub use connection::{Connection, ConnectionState, Role};
pub use error::ConnectionError;
