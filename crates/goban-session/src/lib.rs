//! The Goban session: one shared game, many connected parties.
//!
//! A single actor task owns the board, the turn arbiter, the connection
//! registry, and the replay log. Every state-mutating operation — join,
//! leave, move, reset — arrives as a command on the actor's channel and
//! is processed to completion before the next one, so turn checks and
//! cell occupancy checks are atomic with respect to concurrent senders.
//!
//! Outbound fan-out goes through one unbounded channel per connection,
//! written by the actor in commit order: every connection observes the
//! broadcast stream in the order moves were applied, and a slow socket
//! never stalls the actor.
//!
//! # Key types
//!
//! - [`SessionHandle`] — send commands to the running actor
//! - [`spawn_session`] — start the actor task
//! - [`Role`] — player seat or spectator, fixed at join
//! - [`SessionConfig`] — board size and channel sizing

mod actor;
mod error;
mod handle;
mod session;

pub use error::SessionError;
pub use handle::{SessionHandle, spawn_session};
pub use session::{OutboundSender, Role, SessionConfig, SessionInfo};
