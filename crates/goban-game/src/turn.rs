//! Turn arbitration: who may move, and when the game ends.

use goban_protocol::Stone;

use crate::{Board, GameError};

/// The arbiter's state machine.
///
/// ```text
/// WaitingForPlayers ──(second player joins)──→ Turn(Black)
/// Turn(x) ──(valid non-winning move)──→ Turn(x.opponent())
/// Turn(x) ──(winning move / forfeit)──→ Over
/// Over ──(reset, both seats filled)──→ Turn(Black)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Fewer than two players are seated; no move is legal.
    WaitingForPlayers,
    /// The given stone is to move.
    Turn(Stone),
    /// The game ended by five-in-a-row or forfeit.
    Over,
}

/// What a successfully applied move produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The stone was placed; play continues with the other seat.
    Placed,
    /// The stone was placed and completed five in a row.
    Win,
}

/// The board plus the turn arbiter, driven only by the session actor.
///
/// [`Game::submit`] is a single check-then-apply step: turn ownership,
/// bounds, and occupancy are all validated before the one cell mutation,
/// so a rejected move can never leave partial state behind.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: TurnState,
}

impl Game {
    /// Creates a fresh game on an empty `size` × `size` board, waiting
    /// for players.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            turn: TurnState::WaitingForPlayers,
        }
    }

    /// Read access to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current arbiter state.
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Returns `true` once the game has ended (win or forfeit).
    pub fn is_over(&self) -> bool {
        self.turn == TurnState::Over
    }

    /// Called when the second player takes their seat: Black moves first.
    /// No-op unless the game was still waiting.
    pub fn begin(&mut self) {
        if self.turn == TurnState::WaitingForPlayers {
            self.turn = TurnState::Turn(Stone::Black);
        }
    }

    /// Ends the game immediately; the disconnecting player forfeits.
    pub fn forfeit(&mut self) {
        self.turn = TurnState::Over;
    }

    /// Submits a move for the given seat. `seat` is `None` for
    /// spectators, whose moves are hard-rejected.
    ///
    /// On success the cell is set and the turn advances (or the game
    /// ends, for a winning move). On any error nothing changed.
    pub fn submit(
        &mut self,
        seat: Option<Stone>,
        row: usize,
        col: usize,
    ) -> Result<MoveOutcome, GameError> {
        let stone = seat.ok_or(GameError::SpectatorCannotMove)?;
        match self.turn {
            TurnState::WaitingForPlayers => return Err(GameError::NotStarted),
            TurnState::Over => return Err(GameError::Finished),
            TurnState::Turn(mover) if mover != stone => {
                return Err(GameError::NotYourTurn(stone));
            }
            TurnState::Turn(_) => {}
        }

        self.board.place(row, col, stone)?;

        if self.board.is_winning_move(row, col, stone) {
            self.turn = TurnState::Over;
            Ok(MoveOutcome::Win)
        } else {
            self.turn = TurnState::Turn(stone.opponent());
            Ok(MoveOutcome::Placed)
        }
    }

    /// Resets for a new round: board emptied, Black to move if both
    /// seats are filled (`ready`), otherwise back to waiting.
    pub fn reset(&mut self, ready: bool) {
        self.board.reset();
        self.turn = if ready {
            TurnState::Turn(Stone::Black)
        } else {
            TurnState::WaitingForPlayers
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_game() -> Game {
        let mut game = Game::new(19);
        game.begin();
        game
    }

    #[test]
    fn no_move_before_second_player() {
        let mut game = Game::new(19);
        assert_eq!(
            game.submit(Some(Stone::Black), 9, 9),
            Err(GameError::NotStarted)
        );
        assert_eq!(game.turn(), TurnState::WaitingForPlayers);
    }

    #[test]
    fn black_moves_first_and_turns_alternate_strictly() {
        let mut game = started_game();
        assert_eq!(game.turn(), TurnState::Turn(Stone::Black));

        // Alternating valid moves keep alternating the mover.
        for i in 0..4 {
            let (stone, row) = if i % 2 == 0 {
                (Stone::Black, 0)
            } else {
                (Stone::White, 10)
            };
            assert_eq!(game.submit(Some(stone), row, i), Ok(MoveOutcome::Placed));
            assert_eq!(game.turn(), TurnState::Turn(stone.opponent()));
        }
    }

    #[test]
    fn out_of_turn_move_rejected_without_state_change() {
        let mut game = started_game();
        let before_board = game.board().clone();

        assert_eq!(
            game.submit(Some(Stone::White), 9, 9),
            Err(GameError::NotYourTurn(Stone::White))
        );
        assert_eq!(game.turn(), TurnState::Turn(Stone::Black));
        assert_eq!(*game.board(), before_board);
    }

    #[test]
    fn spectator_move_rejected() {
        let mut game = started_game();
        assert_eq!(game.submit(None, 9, 9), Err(GameError::SpectatorCannotMove));
        assert_eq!(game.turn(), TurnState::Turn(Stone::Black));
    }

    #[test]
    fn occupied_and_out_of_bounds_keep_the_turn() {
        let mut game = started_game();
        game.submit(Some(Stone::Black), 9, 9).unwrap();

        assert_eq!(
            game.submit(Some(Stone::White), 9, 9),
            Err(GameError::CellOccupied { row: 9, col: 9 })
        );
        assert_eq!(
            game.submit(Some(Stone::White), 42, 0),
            Err(GameError::OutOfBounds { row: 42, col: 0 })
        );
        // White still to move after both rejections.
        assert_eq!(game.turn(), TurnState::Turn(Stone::White));
    }

    #[test]
    fn fifth_in_a_row_wins_and_ends_the_game() {
        let mut game = started_game();
        // Black builds (9,9)..(9,13); White plays unrelated cells.
        for i in 0..4 {
            assert_eq!(
                game.submit(Some(Stone::Black), 9, 9 + i),
                Ok(MoveOutcome::Placed)
            );
            assert_eq!(
                game.submit(Some(Stone::White), 0, i),
                Ok(MoveOutcome::Placed)
            );
        }
        assert_eq!(game.submit(Some(Stone::Black), 9, 13), Ok(MoveOutcome::Win));
        assert!(game.is_over());

        // Nothing is accepted after the win.
        assert_eq!(
            game.submit(Some(Stone::White), 5, 5),
            Err(GameError::Finished)
        );
    }

    #[test]
    fn forfeit_ends_the_game() {
        let mut game = started_game();
        game.submit(Some(Stone::Black), 9, 9).unwrap();
        game.forfeit();
        assert!(game.is_over());
        assert_eq!(
            game.submit(Some(Stone::White), 0, 0),
            Err(GameError::Finished)
        );
    }

    #[test]
    fn reset_restarts_with_black_when_both_seated() {
        let mut game = started_game();
        game.submit(Some(Stone::Black), 9, 9).unwrap();
        game.forfeit();

        game.reset(true);
        assert_eq!(game.turn(), TurnState::Turn(Stone::Black));
        assert_eq!(game.board().get(9, 9), None);

        game.reset(false);
        assert_eq!(game.turn(), TurnState::WaitingForPlayers);
    }
}
