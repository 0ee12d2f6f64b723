//! Transport layer for the Goban relay.
//!
//! Provides the [`Listener`] and [`Connection`] traits that abstract the
//! message-oriented link to each peer, plus the WebSocket implementation
//! used in production. The relay core above this layer only sees complete
//! messages and a stable [`ConnectionId`] per peer — framing, handshakes,
//! and socket mechanics all live here.
//!
//! # Feature Flags
//!
//! - `websocket` (default) — WebSocket transport via `tokio-tungstenite`

#![allow(async_fn_in_trait)]

mod error;
#[cfg(feature = "websocket")]
mod websocket;

pub use error::TransportError;
#[cfg(feature = "websocket")]
pub use websocket::{WebSocketConnection, WebSocketListener};

use std::fmt;

/// Stable identifier for one attached peer.
///
/// IDs are allocated from a monotonically increasing counter and are never
/// reused for the lifetime of the process, so a connection keeps its
/// identity even as other peers come and go. This is deliberately NOT the
/// peer's position in join order — join-order slots shift on removal,
/// identities must not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Creates a `ConnectionId` from a raw `u64`.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying `u64` value.
    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// Accepts new incoming connections.
pub trait Listener: Send + 'static {
    /// The connection type produced by this listener.
    type Connection: Connection;

    /// Waits for and accepts the next incoming connection.
    async fn accept(&mut self) -> Result<Self::Connection, TransportError>;
}

/// A single peer link carrying complete, independently parseable messages.
///
/// `send` and `recv` operate on opposite halves of the underlying socket,
/// so a task blocked in `recv` never delays an outbound `send` from
/// another task.
pub trait Connection: Send + Sync + 'static {
    /// Sends one complete message to the remote peer.
    async fn send(&self, data: &[u8]) -> Result<(), TransportError>;

    /// Receives the next complete message from the remote peer.
    ///
    /// Returns `Ok(None)` when the connection is cleanly closed.
    async fn recv(&self) -> Result<Option<Vec<u8>>, TransportError>;

    /// Closes the connection.
    async fn close(&self) -> Result<(), TransportError>;

    /// Returns the stable identifier for this connection.
    fn id(&self) -> ConnectionId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_id_new_and_into_inner() {
        let id = ConnectionId::new(42);
        assert_eq!(id.into_inner(), 42);
    }

    #[test]
    fn connection_id_display() {
        assert_eq!(ConnectionId::new(7).to_string(), "conn-7");
    }

    #[test]
    fn connection_id_ordering_follows_allocation() {
        // Later connections get larger IDs; the session relies on this
        // never wrapping or colliding.
        assert!(ConnectionId::new(1) < ConnectionId::new(2));
        assert_ne!(ConnectionId::new(1), ConnectionId::new(2));
    }

    #[test]
    fn connection_id_works_as_map_key() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(ConnectionId::new(1), "black");
        map.insert(ConnectionId::new(2), "white");
        assert_eq!(map[&ConnectionId::new(1)], "black");
    }
}
