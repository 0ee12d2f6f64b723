//! Handle to the running session actor.

use goban_protocol::ClientMessage;
use goban_transport::ConnectionId;
use tokio::sync::{mpsc, oneshot};

use crate::actor::{SessionActor, SessionCommand};
use crate::{OutboundSender, Role, SessionConfig, SessionError, SessionInfo};

/// Cheap-to-clone handle for sending commands to the session actor.
/// Every connection handler holds one.
#[derive(Clone)]
pub struct SessionHandle {
    sender: mpsc::Sender<SessionCommand>,
}

impl SessionHandle {
    /// Registers a connection and returns its assigned role.
    ///
    /// `sender` is the connection's exclusive outbound channel; the
    /// caller pumps its receiving end into the socket.
    pub async fn join(
        &self,
        id: ConnectionId,
        sender: OutboundSender,
    ) -> Result<Role, SessionError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(SessionCommand::Join {
                id,
                sender,
                reply: reply_tx,
            })
            .await
            .map_err(|_| SessionError::Unavailable)?;
        reply_rx.await.map_err(|_| SessionError::Unavailable)
    }

    /// Removes a connection; triggers the forfeit path if it held a
    /// seat mid-game.
    pub async fn leave(&self, id: ConnectionId) -> Result<(), SessionError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(SessionCommand::Leave {
                id,
                reply: reply_tx,
            })
            .await
            .map_err(|_| SessionError::Unavailable)?;
        reply_rx.await.map_err(|_| SessionError::Unavailable)?
    }

    /// Delivers an inbound protocol message (fire-and-forget).
    pub async fn inbound(
        &self,
        id: ConnectionId,
        msg: ClientMessage,
    ) -> Result<(), SessionError> {
        self.sender
            .send(SessionCommand::Inbound { id, msg })
            .await
            .map_err(|_| SessionError::Unavailable)
    }

    /// Requests a metadata snapshot.
    ///
    /// Because the actor is single-threaded, the reply also acts as a
    /// barrier: every effect of previously sent commands has been
    /// applied once this returns.
    pub async fn info(&self) -> Result<SessionInfo, SessionError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(SessionCommand::Info { reply: reply_tx })
            .await
            .map_err(|_| SessionError::Unavailable)?;
        reply_rx.await.map_err(|_| SessionError::Unavailable)
    }

    /// Tells the session to shut down.
    pub async fn shutdown(&self) -> Result<(), SessionError> {
        self.sender
            .send(SessionCommand::Shutdown)
            .await
            .map_err(|_| SessionError::Unavailable)
    }
}

/// Spawns the single session actor task and returns a handle to it.
///
/// Called once at server start; the session lives for the process
/// lifetime.
pub fn spawn_session(config: SessionConfig) -> SessionHandle {
    let (tx, rx) = mpsc::channel(config.command_buffer);
    let actor = SessionActor::new(&config, rx);
    tokio::spawn(actor.run());
    SessionHandle { sender: tx }
}
