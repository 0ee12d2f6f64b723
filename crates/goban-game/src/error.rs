//! Error types for move validation and arbitration.

use goban_protocol::Stone;

/// Why a submitted move was rejected.
///
/// None of these mutate anything: a rejected move leaves the board and
/// the turn state exactly as they were.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    /// The second player has not joined yet.
    #[error("waiting for a second player")]
    NotStarted,

    /// The game already ended (win or forfeit).
    #[error("game is over")]
    Finished,

    /// It is not this seat's turn.
    #[error("it is not {0}'s turn")]
    NotYourTurn(Stone),

    /// Spectators observe; their moves are never applied.
    #[error("spectators cannot move")]
    SpectatorCannotMove,

    /// The target cell lies outside the board.
    #[error("({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    /// The target cell already holds a stone.
    #[error("({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
}
