//! `GobanServer` builder and accept loop.
//!
//! Binds the WebSocket listener, spawns the single session actor, and
//! hands each accepted connection to its own handler task.

use goban_session::{SessionConfig, SessionHandle, spawn_session};
use goban_transport::{Listener, WebSocketListener};

use crate::GobanError;
use crate::handler::handle_connection;

/// Builder for configuring and starting a Goban server.
pub struct GobanServerBuilder {
    bind_addr: String,
    session_config: SessionConfig,
}

impl GobanServerBuilder {
    /// Creates a new builder with default settings: localhost on the
    /// original deployment's port, 19×19 board.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:8181".to_string(),
            session_config: SessionConfig::default(),
        }
    }

    /// Sets the address to bind the listener to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets the board edge length. The server's value is authoritative
    /// for every client.
    pub fn board_size(mut self, size: usize) -> Self {
        self.session_config.board_size = size;
        self
    }

    /// Binds the listener and spawns the session actor.
    pub async fn build(self) -> Result<GobanServer, GobanError> {
        let listener = WebSocketListener::bind(&self.bind_addr).await?;
        let session = spawn_session(self.session_config);
        Ok(GobanServer { listener, session })
    }
}

impl Default for GobanServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A running Goban relay server.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct GobanServer {
    listener: WebSocketListener,
    session: SessionHandle,
}

impl GobanServer {
    /// Creates a new builder.
    pub fn builder() -> GobanServerBuilder {
        GobanServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.listener.local_addr()
    }

    /// Runs the accept loop.
    ///
    /// Spawns a handler task per connection. Runs until the process is
    /// terminated; the session outlives every individual connection.
    pub async fn run(mut self) -> Result<(), GobanError> {
        tracing::info!("goban relay running");

        loop {
            match self.listener.accept().await {
                Ok(conn) => {
                    let session = self.session.clone();
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(conn, session).await {
                            tracing::debug!(error = %e, "connection ended with error");
                        }
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }
}
