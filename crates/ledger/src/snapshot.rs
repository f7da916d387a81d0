use super::*;
use chipnet_core::Chips;
use serde::Serialize;
use std::collections::BTreeMap;

/// Consistent point-in-time view of the whole table, as broadcast to every
/// connected device after each action. Sorted by player name so repeated
/// snapshots serialize identically.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub players: BTreeMap<String, PlayerView>,
    pub pot: Chips,
}

/// One player's slice of a [`Snapshot`].
#[derive(Clone, Debug, Serialize)]
pub struct PlayerView {
    pub chips: Chips,
    pub turn_bet: Chips,
    pub connection: String,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            chips: player.chips(),
            turn_bet: player.turn_bet(),
            connection: player.connection().to_string(),
        }
    }
}
