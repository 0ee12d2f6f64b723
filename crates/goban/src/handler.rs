//! Per-connection handler: registration, outbound pump, inbound loop.
//!
//! Each accepted connection gets its own Tokio task running this
//! handler. The flow is:
//!   1. Register with the session → get a role, hand over an outbound
//!      channel
//!   2. Spawn the outbound pump: session broadcasts → codec → socket
//!   3. Loop: receive frames → decode → forward to the session
//!   4. On close or error: leave the session (forfeit path for players)

use std::sync::Arc;

use goban_protocol::{ClientMessage, Codec, JsonCodec};
use goban_session::SessionHandle;
use goban_transport::{Connection, WebSocketConnection};
use tokio::sync::mpsc;

use crate::GobanError;

/// Handles a single connection from accept to close.
pub(crate) async fn handle_connection(
    conn: WebSocketConnection,
    session: SessionHandle,
) -> Result<(), GobanError> {
    let id = conn.id();
    let codec = JsonCodec;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let role = session.join(id, tx).await?;
    tracing::info!(%id, ?role, "connection registered");

    let conn = Arc::new(conn);

    // Outbound pump: drains this connection's broadcast queue into the
    // socket. Runs independently of the inbound loop so a send in
    // flight never delays receiving, and vice versa.
    let writer = Arc::clone(&conn);
    let pump = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            let bytes = match codec.encode(&msg) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::error!(%id, error = %e, "encode failed, skipping");
                    continue;
                }
            };
            if let Err(e) = writer.send(&bytes).await {
                tracing::debug!(%id, error = %e, "outbound send failed");
                break;
            }
        }
    });

    // Inbound loop. A malformed frame is logged and dropped — the
    // connection stays open and state is untouched.
    loop {
        match conn.recv().await {
            Ok(Some(data)) => {
                let msg: ClientMessage = match codec.decode(&data) {
                    Ok(msg) => msg,
                    Err(e) => {
                        tracing::debug!(%id, error = %e, "malformed message, dropping");
                        continue;
                    }
                };
                if let Err(e) = session.inbound(id, msg).await {
                    tracing::warn!(%id, error = %e, "session unavailable");
                    break;
                }
            }
            Ok(None) => {
                tracing::info!(%id, "connection closed");
                break;
            }
            Err(e) => {
                tracing::debug!(%id, error = %e, "recv error");
                break;
            }
        }
    }

    pump.abort();
    session.leave(id).await?;
    Ok(())
}
