//! Error types for the session layer.

use goban_transport::ConnectionId;

/// Errors that can occur during session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The given connection is not registered in the session.
    /// Seen when a leave races a connection that never joined.
    #[error("no connection {0} in this session")]
    UnknownConnection(ConnectionId),

    /// The session actor's command channel is closed.
    #[error("session is unavailable")]
    Unavailable,
}
