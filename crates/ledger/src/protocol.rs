use chipnet_core::Chips;
use serde::Deserialize;

/// Errors that can occur while decoding client frames.
#[derive(Debug, Clone)]
pub enum ProtocolError {
    InvalidMessage(String),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMessage(s) => write!(f, "invalid message: {}", s),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Actions a connected device can submit.
///
/// Actions name their player explicitly; the table trusts the room it is
/// standing in, so there is no identity check tying a connection to a name.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// The pot device announces itself as the table authority.
    JoinAsPot,
    /// Join (or rejoin) the table under the given name.
    Join { name: String },
    /// Ask for a private snapshot.
    GetState,
    /// Commit chips to the current betting round.
    Bet { name: String, amount: Chips },
    /// Take chips out of the pot.
    ClaimPot { name: String, amount: Chips },
    /// End the betting round: reset every turn bet.
    ClearBets,
}

/// Decodes raw WebSocket text frames into [`ClientMessage`]s.
/// Centralizes the protocol layer between the wire and the table.
pub struct Protocol;

impl Protocol {
    pub fn decode(s: &str) -> Result<ClientMessage, ProtocolError> {
        serde_json::from_str(s).map_err(|e| ProtocolError::InvalidMessage(e.to_string()))
    }
}
