//! Unified error type for the Goban server.

use goban_protocol::ProtocolError;
use goban_session::SessionError;
use goban_transport::TransportError;

/// Top-level error that wraps all layer-specific errors.
///
/// The `#[from]` attribute on each variant auto-generates `From` impls,
/// so the `?` operator converts layer errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum GobanError {
    /// A transport-level error (bind, accept, send, recv).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (encode, decode, invalid message).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A session-level error (unknown connection, actor gone).
    #[error(transparent)]
    Session(#[from] SessionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_transport_error() {
        let err = TransportError::ConnectionClosed("gone".into());
        let goban_err: GobanError = err.into();
        assert!(matches!(goban_err, GobanError::Transport(_)));
        assert!(goban_err.to_string().contains("gone"));
    }

    #[test]
    fn from_protocol_error() {
        let err = ProtocolError::InvalidMessage("bad".into());
        let goban_err: GobanError = err.into();
        assert!(matches!(goban_err, GobanError::Protocol(_)));
    }

    #[test]
    fn from_session_error() {
        let err = SessionError::Unavailable;
        let goban_err: GobanError = err.into();
        assert!(matches!(goban_err, GobanError::Session(_)));
    }
}
