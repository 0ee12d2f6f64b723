//! Wire protocol for the Goban relay.
//!
//! This crate defines the "language" that the relay and its clients speak:
//!
//! - **Types** ([`ClientMessage`], [`ServerMessage`], [`Stone`],
//!   [`MoveRecord`]) — the message structures that travel on the wire.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how those messages are
//!   converted to/from bytes.
//! - **Errors** ([`ProtocolError`]) — what can go wrong during
//!   encoding/decoding.
//!
//! Every message is one JSON object shaped `{"type": <string>, ...}`, one
//! complete object per transport frame. The type strings and the
//! `data1`/`data2`/`color` field names are fixed by the deployed canvas
//! client; variant names here describe what each message does, the serde
//! renames pin the legacy wire spelling.

mod codec;
mod error;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use types::{ClientMessage, MoveRecord, ServerMessage, Stone};
