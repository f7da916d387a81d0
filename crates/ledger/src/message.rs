use super::*;
use chipnet_core::Chips;
use serde::Serialize;
use std::collections::BTreeMap;

/// Which side of the table a device joined as.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Player,
    Pot,
}

/// Messages sent from server to client over WebSocket.
///
/// Every state-mutating action is followed by a `Status` broadcast, whether
/// it succeeded or not, so observers can detect no-ops. Claim attempts get
/// a distinct `ClaimResult` so clients can show transient feedback without
/// waiting to diff the next snapshot.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Join confirmation, unicast to the joining device.
    Joined { status: bool, joined_as: Role },
    /// Full table state.
    Status {
        players: BTreeMap<String, PlayerView>,
        pot: Chips,
    },
    /// Outcome of a claim attempt. Amount present only on success.
    ClaimResult {
        status: bool,
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        amount: Option<Chips>,
    },
}

impl ServerMessage {
    pub fn joined(status: bool, joined_as: Role) -> Self {
        Self::Joined { status, joined_as }
    }
    pub fn status(snapshot: Snapshot) -> Self {
        Self::Status {
            players: snapshot.players,
            pot: snapshot.pot,
        }
    }
    pub fn claim_result(status: bool, name: &str, amount: Option<Chips>) -> Self {
        Self::ClaimResult {
            status,
            name: name.to_string(),
            amount,
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}
