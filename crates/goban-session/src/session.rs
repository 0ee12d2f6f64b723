//! Session data types: configuration, roles, and connection records.

use goban_game::TurnState;
use goban_protocol::{ServerMessage, Stone};
use goban_transport::ConnectionId;
use tokio::sync::mpsc;

/// Channel sender for delivering outbound messages to one connection.
///
/// Unbounded on purpose: the actor must never block on a peer's socket.
/// Backpressure from a stalled peer ends in a disconnect, not in holding
/// up move processing for everyone else.
pub type OutboundSender = mpsc::UnboundedSender<ServerMessage>;

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Configuration for the session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Board edge length. The server owns the authoritative value;
    /// the original deployment uses 19.
    pub board_size: usize,

    /// Capacity of the actor's command channel.
    pub command_buffer: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_size: 19,
            command_buffer: 64,
        }
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// What a connected party may do, assigned once at join.
///
/// The first joiner to find the Black seat empty takes it, the next
/// takes White, everyone after that watches. A role never changes while
/// the connection lives; a vacated seat may only be taken by a *future*
/// joiner, never by promoting an existing spectator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// An active player holding the given seat.
    Player(Stone),
    /// An observer; the relay never applies its moves.
    Spectator,
}

impl Role {
    /// The seat this role holds, or `None` for spectators.
    pub fn seat(self) -> Option<Stone> {
        match self {
            Self::Player(stone) => Some(stone),
            Self::Spectator => None,
        }
    }

    /// Returns `true` for either player seat.
    pub fn is_player(self) -> bool {
        matches!(self, Self::Player(_))
    }
}

// ---------------------------------------------------------------------------
// ConnectionEntry
// ---------------------------------------------------------------------------

/// One attached party as the registry sees it.
///
/// Entries live in a `Vec` in join order; the *position* is the legacy
/// join-order index broadcast in `close-win`, while `id` is the stable
/// identity that survives other parties' removal.
#[derive(Debug)]
pub(crate) struct ConnectionEntry {
    pub(crate) id: ConnectionId,
    pub(crate) role: Role,
    pub(crate) sender: OutboundSender,
    /// Whether the replay log was non-empty when this party joined.
    /// Decides the `chance` notice for the White seat.
    pub(crate) joined_with_history: bool,
}

// ---------------------------------------------------------------------------
// SessionInfo
// ---------------------------------------------------------------------------

/// A snapshot of session metadata (not the board itself).
#[derive(Debug, Clone)]
pub struct SessionInfo {
    /// Number of attached connections, players and spectators alike.
    pub connections: usize,
    /// Number of filled player seats.
    pub players: usize,
    /// Length of the replay log.
    pub moves_logged: usize,
    /// Current arbiter state.
    pub turn: TurnState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_seat_and_is_player() {
        assert_eq!(Role::Player(Stone::Black).seat(), Some(Stone::Black));
        assert_eq!(Role::Spectator.seat(), None);
        assert!(Role::Player(Stone::White).is_player());
        assert!(!Role::Spectator.is_player());
    }

    #[test]
    fn default_config_matches_deployment() {
        let config = SessionConfig::default();
        assert_eq!(config.board_size, 19);
        assert!(config.command_buffer > 0);
    }
}
