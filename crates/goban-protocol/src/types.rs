//! Message types for the relay's wire format.
//!
//! Inbound and outbound kinds are each a closed tagged enum: the `"type"`
//! field selects the variant, remaining fields are the payload. The relay
//! handles every variant exhaustively; inbound messages with a tag we have
//! never seen land in [`ClientMessage::Unknown`] instead of failing the
//! parse, so they can be dropped with a diagnostic without disturbing the
//! connection.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Stone — the mover identity
// ---------------------------------------------------------------------------

/// The stone colour a seat plays. Black is the first joiner and always
/// moves first; White is the second joiner.
///
/// On the wire this is the bare integer the original client sends in its
/// `color` field: `1` for black, `2` for white. Cell value `0` (empty)
/// never travels on the wire — an empty cell is simply `None` server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    /// Returns the opposing colour.
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

impl From<Stone> for u8 {
    fn from(stone: Stone) -> u8 {
        match stone {
            Stone::Black => 1,
            Stone::White => 2,
        }
    }
}

impl TryFrom<u8> for Stone {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Stone::Black),
            2 => Ok(Stone::White),
            other => Err(format!("invalid stone value: {other}")),
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Black => write!(f, "black"),
            Self::White => write!(f, "white"),
        }
    }
}

// ---------------------------------------------------------------------------
// MoveRecord — one applied move in the replay log
// ---------------------------------------------------------------------------

/// One validated, applied move.
///
/// Immutable once appended to the session's replay log. Serialized with
/// the same field names as a live `gameboard-index` payload so a late
/// joiner can feed each record through its normal move-rendering path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    #[serde(rename = "data1")]
    pub row: usize,
    #[serde(rename = "data2")]
    pub col: usize,
    #[serde(rename = "color")]
    pub stone: Stone,
}

// ---------------------------------------------------------------------------
// ClientMessage — inbound kinds consumed by the relay
// ---------------------------------------------------------------------------

/// Messages a connected party sends to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// "My client is ready." May trigger the `second-client` / `chance`
    /// notices when it comes from the seat that completed the pair.
    ClientConnect,

    /// A move attempt at (`row`, `col`) claiming to play `stone`.
    #[serde(rename = "gameboard-index")]
    Move {
        #[serde(rename = "data1")]
        row: usize,
        #[serde(rename = "data2")]
        col: usize,
        #[serde(rename = "color")]
        stone: Stone,
    },

    /// Start a fresh round: board and history cleared, Black to move.
    #[serde(rename = "new-game")]
    NewGame,

    /// Any tag we do not recognize. Dropped with a diagnostic; never an
    /// error and never a state change.
    #[serde(other)]
    Unknown,
}

// ---------------------------------------------------------------------------
// ServerMessage — outbound kinds produced by the relay
// ---------------------------------------------------------------------------

/// Messages the relay sends to connected parties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// To the 3rd-or-later joiner only: both seats are taken, you are
    /// watching.
    #[serde(rename = "more-clients")]
    MoreClients,

    /// To a new joiner only, before any live traffic: the full ordered
    /// replay log.
    #[serde(rename = "history")]
    History {
        #[serde(rename = "data")]
        moves: Vec<MoveRecord>,
    },

    /// To the connection that just became the White player.
    #[serde(rename = "second-client")]
    SecondClient,

    /// To the White player, only if history pre-existed at its join: it
    /// gets the first move opportunity.
    #[serde(rename = "chance")]
    Chance,

    /// To all connections: a move was applied, game continues.
    #[serde(rename = "gameboard-index")]
    Move {
        #[serde(rename = "data1")]
        row: usize,
        #[serde(rename = "data2")]
        col: usize,
        #[serde(rename = "color")]
        stone: Stone,
    },

    /// To all connections: this move completed five in a row.
    #[serde(rename = "winner")]
    Winner {
        #[serde(rename = "data1")]
        row: usize,
        #[serde(rename = "data2")]
        col: usize,
        #[serde(rename = "color")]
        stone: Stone,
    },

    /// To all remaining connections when a party disconnects. `color`
    /// carries the vacated join-order index (legacy field reuse); the UI
    /// uses it to declare the other player winner by forfeit.
    #[serde(rename = "close-win")]
    CloseWin {
        #[serde(rename = "color")]
        index: usize,
    },

    /// To all connections: the board was reset for a new round.
    #[serde(rename = "new-game")]
    NewGame,

    /// To the offending connection only: its move was rejected and why.
    #[serde(rename = "invalid-move")]
    InvalidMove { message: String },
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! The deployed client parses these exact JSON shapes. These tests pin
    //! the tag strings, the legacy `data1`/`data2`/`color` field names,
    //! and the bare-integer stone encoding.

    use super::*;

    #[test]
    fn stone_serializes_as_bare_integer() {
        assert_eq!(serde_json::to_string(&Stone::Black).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Stone::White).unwrap(), "2");
    }

    #[test]
    fn stone_deserializes_from_bare_integer() {
        let black: Stone = serde_json::from_str("1").unwrap();
        let white: Stone = serde_json::from_str("2").unwrap();
        assert_eq!(black, Stone::Black);
        assert_eq!(white, Stone::White);
    }

    #[test]
    fn stone_rejects_out_of_range_values() {
        assert!(serde_json::from_str::<Stone>("0").is_err());
        assert!(serde_json::from_str::<Stone>("3").is_err());
    }

    #[test]
    fn stone_opponent_flips() {
        assert_eq!(Stone::Black.opponent(), Stone::White);
        assert_eq!(Stone::White.opponent(), Stone::Black);
    }

    #[test]
    fn client_move_json_shape() {
        let json = r#"{"type":"gameboard-index","data1":9,"data2":13,"color":1}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert_eq!(
            msg,
            ClientMessage::Move {
                row: 9,
                col: 13,
                stone: Stone::Black,
            }
        );
    }

    #[test]
    fn client_connect_json_shape() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"ClientConnect"}"#).unwrap();
        assert_eq!(msg, ClientMessage::ClientConnect);
    }

    #[test]
    fn unknown_client_tag_falls_back_instead_of_failing() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"FlyToMoon","speed":9000}"#).unwrap();
        assert_eq!(msg, ClientMessage::Unknown);
    }

    #[test]
    fn server_move_json_shape() {
        let msg = ServerMessage::Move {
            row: 3,
            col: 4,
            stone: Stone::White,
        };
        let json: serde_json::Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "gameboard-index");
        assert_eq!(json["data1"], 3);
        assert_eq!(json["data2"], 4);
        assert_eq!(json["color"], 2);
    }

    #[test]
    fn winner_json_shape() {
        let msg = ServerMessage::Winner {
            row: 9,
            col: 13,
            stone: Stone::Black,
        };
        let json: serde_json::Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "winner");
        assert_eq!(json["data1"], 9);
        assert_eq!(json["data2"], 13);
        assert_eq!(json["color"], 1);
    }

    #[test]
    fn close_win_carries_vacated_index_in_color_field() {
        let msg = ServerMessage::CloseWin { index: 1 };
        let json: serde_json::Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "close-win");
        assert_eq!(json["color"], 1);
    }

    #[test]
    fn history_replays_move_shaped_records() {
        let msg = ServerMessage::History {
            moves: vec![
                MoveRecord {
                    row: 9,
                    col: 9,
                    stone: Stone::Black,
                },
                MoveRecord {
                    row: 0,
                    col: 0,
                    stone: Stone::White,
                },
            ],
        };
        let json: serde_json::Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "history");
        assert_eq!(json["data"][0]["data1"], 9);
        assert_eq!(json["data"][0]["color"], 1);
        assert_eq!(json["data"][1]["color"], 2);
    }

    #[test]
    fn notice_messages_are_tag_only() {
        for (msg, tag) in [
            (ServerMessage::MoreClients, "more-clients"),
            (ServerMessage::SecondClient, "second-client"),
            (ServerMessage::Chance, "chance"),
            (ServerMessage::NewGame, "new-game"),
        ] {
            let json: serde_json::Value = serde_json::to_value(&msg).unwrap();
            assert_eq!(json["type"], tag);
            assert_eq!(json.as_object().unwrap().len(), 1, "{tag} has no payload");
        }
    }

    #[test]
    fn server_message_round_trips() {
        let msgs = vec![
            ServerMessage::MoreClients,
            ServerMessage::History { moves: vec![] },
            ServerMessage::SecondClient,
            ServerMessage::Chance,
            ServerMessage::Move {
                row: 1,
                col: 2,
                stone: Stone::Black,
            },
            ServerMessage::Winner {
                row: 5,
                col: 5,
                stone: Stone::White,
            },
            ServerMessage::CloseWin { index: 0 },
            ServerMessage::NewGame,
            ServerMessage::InvalidMove {
                message: "cell is occupied".into(),
            },
        ];
        for msg in msgs {
            let bytes = serde_json::to_vec(&msg).unwrap();
            let decoded: ServerMessage = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(msg, decoded);
        }
    }

    #[test]
    fn decode_garbage_returns_error() {
        let garbage = b"not json at all";
        let result: Result<ClientMessage, _> = serde_json::from_slice(garbage);
        assert!(result.is_err());
    }

    #[test]
    fn decode_missing_fields_returns_error() {
        // Right tag, missing payload — must not decode to a half-move.
        let wrong = r#"{"type":"gameboard-index","data1":3}"#;
        let result: Result<ClientMessage, _> = serde_json::from_str(wrong);
        assert!(result.is_err());
    }
}
