//! Codec trait and implementations for serializing messages.
//!
//! The relay core doesn't care how messages become bytes — it goes
//! through the [`Codec`] trait port. [`JsonCodec`] is the production
//! implementation because the canvas client speaks JSON text frames;
//! a binary codec could be swapped in without touching the relay.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// Encodes Rust message types to bytes and decodes bytes back.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the bytes are malformed,
    /// incomplete, or don't match the expected type.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

/// A [`Codec`] using JSON via `serde_json`.
///
/// One complete JSON object per transport frame; no partial-message
/// buffering is ever required. Behind the `json` feature (default).
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use crate::{ClientMessage, ServerMessage, Stone};

    #[test]
    fn json_codec_round_trips_client_message() {
        let codec = JsonCodec;
        let msg = ClientMessage::Move {
            row: 9,
            col: 9,
            stone: Stone::Black,
        };
        let bytes = codec.encode(&msg).unwrap();
        let decoded: ClientMessage = codec.decode(&bytes).unwrap();
        assert_eq!(msg, decoded);
    }

    #[test]
    fn json_codec_round_trips_server_message() {
        let codec = JsonCodec;
        let msg = ServerMessage::CloseWin { index: 2 };
        let bytes = codec.encode(&msg).unwrap();
        let decoded: ServerMessage = codec.decode(&bytes).unwrap();
        assert_eq!(msg, decoded);
    }

    #[test]
    fn json_codec_decode_rejects_truncated_input() {
        let codec = JsonCodec;
        let result: Result<ClientMessage, _> = codec.decode(br#"{"type":"gameb"#);
        assert!(result.is_err());
    }
}
