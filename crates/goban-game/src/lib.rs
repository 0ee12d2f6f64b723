//! Gomoku rules for the Goban relay.
//!
//! Pure, synchronous game state — no I/O, no async. The session actor
//! owns exactly one [`Game`] and is the only component allowed to
//! mutate it.
//!
//! # Key types
//!
//! - [`Board`] — the N×N grid with move application and the
//!   five-in-a-row detector
//! - [`Game`] — board plus turn arbitration; every move goes through
//!   [`Game::submit`] as one check-then-apply step
//! - [`TurnState`] — the arbiter's state machine
//! - [`GameError`] — the move-rejection taxonomy

mod board;
mod error;
mod turn;

pub use board::Board;
pub use error::GameError;
pub use turn::{Game, MoveOutcome, TurnState};
