use super::*;
use chipnet_core::Chips;
use chipnet_core::ID;

/// Marker type for WebSocket connection identifiers.
/// The ledger stores these as opaque routing hints; it never inspects them.
#[derive(Debug)]
pub struct Connection;

/// A single seat's ledger entry: remaining chips, the chips committed to
/// the current betting round, and the connection the player is reachable on.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    chips: Chips,
    turn_bet: Chips,
    connection: ID<Connection>,
}

impl Player {
    pub fn new(name: &str, chips: Chips, connection: ID<Connection>) -> Self {
        Self {
            name: name.to_string(),
            chips,
            turn_bet: 0,
            connection,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> Chips {
        self.chips
    }
    pub fn turn_bet(&self) -> Chips {
        self.turn_bet
    }
    pub fn connection(&self) -> ID<Connection> {
        self.connection
    }
    /// Moves chips from the player's balance into their turn bet.
    /// Validates before mutating so a failed bet leaves the seat untouched.
    pub fn bet(&mut self, amount: Chips) -> Result<(), LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount);
        }
        if amount > self.chips {
            return Err(LedgerError::InsufficientChips);
        }
        self.chips -= amount;
        self.turn_bet += amount;
        Ok(())
    }
    /// Credits chips won from the pot.
    pub fn collect(&mut self, amount: Chips) {
        self.chips += amount;
    }
    /// Resets the turn bet at the end of a betting round. Chips untouched.
    pub fn clear_turn_bet(&mut self) {
        self.turn_bet = 0;
    }
    /// Replaces the connection handle after a reconnect.
    pub fn reconnect(&mut self, connection: ID<Connection>) {
        self.connection = connection;
    }
}
