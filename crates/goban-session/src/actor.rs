//! The session actor: an isolated Tokio task owning all mutable state.
//!
//! The actor is the single serialization point the concurrency model
//! requires: validate-apply-broadcast for each move runs to completion
//! before the next command. Sends to peers are channel writes, never
//! socket I/O, so nothing here blocks on the network.

use goban_game::{Game, GameError, MoveOutcome, TurnState};
use goban_protocol::{ClientMessage, MoveRecord, ServerMessage, Stone};
use goban_transport::ConnectionId;
use tokio::sync::{mpsc, oneshot};

use crate::session::ConnectionEntry;
use crate::{Role, SessionConfig, SessionError, SessionInfo};

/// Commands sent to the session actor through its channel.
pub(crate) enum SessionCommand {
    /// Register a newly accepted connection.
    Join {
        id: ConnectionId,
        sender: crate::OutboundSender,
        reply: oneshot::Sender<Role>,
    },

    /// Remove a connection (socket closed or errored).
    Leave {
        id: ConnectionId,
        reply: oneshot::Sender<Result<(), SessionError>>,
    },

    /// Deliver an inbound protocol message from a connection.
    Inbound {
        id: ConnectionId,
        msg: ClientMessage,
    },

    /// Request a metadata snapshot.
    Info { reply: oneshot::Sender<SessionInfo> },

    /// Stop the actor.
    Shutdown,
}

/// The actor state. Runs inside a Tokio task; see [`crate::spawn_session`].
pub(crate) struct SessionActor {
    game: Game,
    /// Attached parties in join order.
    connections: Vec<ConnectionEntry>,
    /// Single global, ordered replay log. Replayed in full to every
    /// late joiner; terminal (winning) moves are never appended.
    log: Vec<MoveRecord>,
    receiver: mpsc::Receiver<SessionCommand>,
}

impl SessionActor {
    pub(crate) fn new(
        config: &SessionConfig,
        receiver: mpsc::Receiver<SessionCommand>,
    ) -> Self {
        Self {
            game: Game::new(config.board_size),
            connections: Vec::new(),
            log: Vec::new(),
            receiver,
        }
    }

    /// Runs the actor loop, processing commands until shutdown.
    pub(crate) async fn run(mut self) {
        tracing::info!("session actor started");

        while let Some(cmd) = self.receiver.recv().await {
            match cmd {
                SessionCommand::Join { id, sender, reply } => {
                    let role = self.handle_join(id, sender);
                    let _ = reply.send(role);
                }
                SessionCommand::Leave { id, reply } => {
                    let result = self.handle_leave(id);
                    let _ = reply.send(result);
                }
                SessionCommand::Inbound { id, msg } => {
                    self.handle_inbound(id, msg);
                }
                SessionCommand::Info { reply } => {
                    let _ = reply.send(self.info());
                }
                SessionCommand::Shutdown => {
                    tracing::info!("session shutting down");
                    break;
                }
            }
        }

        tracing::info!("session actor stopped");
    }

    /// Registers a connection and assigns its permanent role.
    ///
    /// Spectators are told so immediately; anyone joining a game with
    /// prior history gets the full replay before any live traffic
    /// (guaranteed by this single-threaded loop).
    fn handle_join(&mut self, id: ConnectionId, sender: crate::OutboundSender) -> Role {
        let role = self.next_role();
        let joined_with_history = !self.log.is_empty();
        let entry = ConnectionEntry {
            id,
            role,
            sender,
            joined_with_history,
        };

        if role == Role::Spectator {
            let _ = entry.sender.send(ServerMessage::MoreClients);
        }
        if joined_with_history {
            let _ = entry.sender.send(ServerMessage::History {
                moves: self.log.clone(),
            });
        }

        self.connections.push(entry);
        tracing::info!(
            %id,
            ?role,
            connections = self.connections.len(),
            "connection joined"
        );

        // Second seat filled: Black is to move.
        if role == Role::Player(Stone::White) {
            self.game.begin();
        }

        role
    }

    /// The role the next joiner receives: the lowest empty seat, else
    /// spectator.
    fn next_role(&self) -> Role {
        for stone in [Stone::Black, Stone::White] {
            if !self.seat_filled(stone) {
                return Role::Player(stone);
            }
        }
        Role::Spectator
    }

    fn seat_filled(&self, stone: Stone) -> bool {
        self.connections
            .iter()
            .any(|c| c.role == Role::Player(stone))
    }

    /// Removes a connection and broadcasts `close-win` with its vacated
    /// join-order index. A seated player leaving mid-game forfeits.
    fn handle_leave(&mut self, id: ConnectionId) -> Result<(), SessionError> {
        let position = self
            .connections
            .iter()
            .position(|c| c.id == id)
            .ok_or(SessionError::UnknownConnection(id))?;
        let entry = self.connections.remove(position);

        tracing::info!(
            %id,
            ?entry.role,
            vacated = position,
            connections = self.connections.len(),
            "connection left"
        );

        if entry.role.is_player() && matches!(self.game.turn(), TurnState::Turn(_)) {
            self.game.forfeit();
            tracing::info!(%id, "player disconnected mid-game, forfeit");
        }

        self.broadcast(ServerMessage::CloseWin { index: position });
        Ok(())
    }

    /// Single entry point for inbound protocol messages.
    fn handle_inbound(&mut self, id: ConnectionId, msg: ClientMessage) {
        if !self.connections.iter().any(|c| c.id == id) {
            tracing::warn!(%id, "message from unregistered connection, ignoring");
            return;
        }

        match msg {
            ClientMessage::ClientConnect => self.handle_client_connect(id),
            ClientMessage::Move { row, col, stone } => {
                self.handle_move(id, row, col, stone);
            }
            ClientMessage::NewGame => self.handle_new_game(),
            ClientMessage::Unknown => {
                tracing::warn!(%id, "unrecognized message type, dropping");
            }
        }
    }

    /// The readiness notice. When it comes from the seat that completed
    /// the pair, that party learns it is the second client — and gets
    /// the first-move `chance` if it joined into existing history.
    fn handle_client_connect(&mut self, id: ConnectionId) {
        let Some(entry) = self.connections.iter().find(|c| c.id == id) else {
            return;
        };

        if entry.role == Role::Player(Stone::White) && self.seat_filled(Stone::Black) {
            tracing::info!(%id, "second player ready");
            let _ = entry.sender.send(ServerMessage::SecondClient);
            if entry.joined_with_history {
                let _ = entry.sender.send(ServerMessage::Chance);
            }
        }
    }

    /// Validate → apply → broadcast, as one uninterruptible step.
    fn handle_move(&mut self, id: ConnectionId, row: usize, col: usize, claimed: Stone) {
        let Some(entry) = self.connections.iter().find(|c| c.id == id) else {
            return;
        };
        let seat = entry.role.seat();

        // The seat, not the payload, is authoritative for who is moving.
        // A player claiming the other colour is simply out of turn.
        let result = match seat {
            Some(stone) if stone != claimed => Err(GameError::NotYourTurn(claimed)),
            _ => self.game.submit(seat, row, col),
        };

        // An accepted move implies the sender was seated and the claimed
        // colour matched the seat.
        match result {
            Ok(MoveOutcome::Placed) => {
                let stone = claimed;
                self.log.push(MoveRecord { row, col, stone });
                tracing::debug!(%id, %stone, row, col, "move applied");
                self.broadcast(ServerMessage::Move { row, col, stone });
            }
            Ok(MoveOutcome::Win) => {
                let stone = claimed;
                // A terminal move is not appended: it is never replayed.
                tracing::info!(%id, %stone, row, col, "winning move");
                self.broadcast(ServerMessage::Winner { row, col, stone });
            }
            Err(e) => {
                tracing::debug!(%id, error = %e, "move rejected");
                self.send_to(id, ServerMessage::InvalidMove {
                    message: e.to_string(),
                });
            }
        }
    }

    /// Resets board, log, and turn state for a fresh round.
    fn handle_new_game(&mut self) {
        let ready =
            self.seat_filled(Stone::Black) && self.seat_filled(Stone::White);
        self.game.reset(ready);
        self.log.clear();
        tracing::info!(ready, "new game");
        self.broadcast(ServerMessage::NewGame);
    }

    /// Sends to every connection in join order, sender included.
    /// Channel writes only; a closed receiver is dropped silently and
    /// cleaned up by the subsequent leave.
    fn broadcast(&self, msg: ServerMessage) {
        for entry in &self.connections {
            let _ = entry.sender.send(msg.clone());
        }
    }

    fn send_to(&self, id: ConnectionId, msg: ServerMessage) {
        if let Some(entry) = self.connections.iter().find(|c| c.id == id) {
            let _ = entry.sender.send(msg);
        }
    }

    fn info(&self) -> SessionInfo {
        SessionInfo {
            connections: self.connections.len(),
            players: self.connections.iter().filter(|c| c.role.is_player()).count(),
            moves_logged: self.log.len(),
            turn: self.game.turn(),
        }
    }
}
