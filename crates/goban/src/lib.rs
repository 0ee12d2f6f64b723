//! # Goban
//!
//! Game relay and adjudication server for two-player Gomoku with live
//! spectators.
//!
//! One process hosts one session: the first two WebSocket peers to
//! connect become the players, everyone after that watches. The server
//! is the single source of truth for the board — it validates every
//! move, adjudicates five-in-a-row, replays history to late joiners,
//! and fans authoritative state out to every connected party.
//!
//! ```rust,no_run
//! use goban::GobanServer;
//!
//! # async fn run() -> Result<(), goban::GobanError> {
//! let server = GobanServer::builder()
//!     .bind("0.0.0.0:8181")
//!     .board_size(19)
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod error;
mod handler;
mod server;

pub use error::GobanError;
pub use server::{GobanServer, GobanServerBuilder};

/// Commonly used types from across the workspace.
pub mod prelude {
    pub use goban_game::{Board, Game, GameError, MoveOutcome, TurnState};
    pub use goban_protocol::{ClientMessage, MoveRecord, ServerMessage, Stone};
    pub use goban_session::{Role, SessionConfig, SessionHandle, SessionInfo};

    pub use crate::{GobanError, GobanServer, GobanServerBuilder};
}
