use super::*;
use chipnet_core::Chips;
use chipnet_core::ID;
use chipnet_core::STACK;
use std::collections::BTreeMap;

/// Reasons a ledger operation can refuse to run.
/// Callers that only care about success collapse these with `is_ok()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    NameTaken,
    UnknownPlayer,
    InvalidAmount,
    InsufficientChips,
    InsufficientPot,
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameTaken => write!(f, "name already registered"),
            Self::UnknownPlayer => write!(f, "no such player"),
            Self::InvalidAmount => write!(f, "amount must be positive"),
            Self::InsufficientChips => write!(f, "not enough chips"),
            Self::InsufficientPot => write!(f, "not enough in the pot"),
        }
    }
}

impl std::error::Error for LedgerError {}

/// Authoritative record of every player's chips and the shared pot.
///
/// All operations are synchronous and total: a failing operation returns
/// its reason and leaves the ledger exactly as it found it. The ledger is
/// the sole owner of all [`Player`] records; players are never removed.
#[derive(Debug, Clone)]
pub struct Ledger {
    players: BTreeMap<String, Player>,
    pot: Chips,
    stack: Chips,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_stack(STACK)
    }
    /// A ledger handing out a non-default starting balance.
    pub fn with_stack(stack: Chips) -> Self {
        Self {
            players: BTreeMap::new(),
            pot: 0,
            stack,
        }
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }
    /// Seats a new player with the starting stack and an empty turn bet.
    /// Names are unique and case-sensitive; a taken name is rejected so the
    /// caller can fall back to [`Ledger::reassociate`].
    pub fn register(&mut self, name: &str, connection: ID<Connection>) -> Result<(), LedgerError> {
        if self.players.contains_key(name) {
            return Err(LedgerError::NameTaken);
        }
        self.players
            .insert(name.to_string(), Player::new(name, self.stack, connection));
        Ok(())
    }
    /// Points an existing player at a new connection. No chip or bet change.
    pub fn reassociate(
        &mut self,
        name: &str,
        connection: ID<Connection>,
    ) -> Result<(), LedgerError> {
        self.players
            .get_mut(name)
            .map(|player| player.reconnect(connection))
            .ok_or(LedgerError::UnknownPlayer)
    }
    /// Moves `amount` from the named player's balance into their turn bet
    /// and the shared pot, as one indivisible step.
    pub fn place_bet(&mut self, name: &str, amount: Chips) -> Result<(), LedgerError> {
        let player = self
            .players
            .get_mut(name)
            .ok_or(LedgerError::UnknownPlayer)?;
        player.bet(amount)?;
        self.pot += amount;
        Ok(())
    }
    /// Zeroes every player's turn bet. Chips and pot untouched.
    /// Invoked once per betting round by the pot device.
    pub fn clear_turn_bets(&mut self) {
        for player in self.players.values_mut() {
            player.clear_turn_bet();
        }
    }
    /// Pays `amount` out of the pot to the named player.
    ///
    /// Deliberately permissive: any registered player may claim any amount
    /// up to the full pot. The table awards pots; the ledger only moves
    /// chips.
    pub fn claim_pot(&mut self, name: &str, amount: Chips) -> Result<(), LedgerError> {
        if !self.players.contains_key(name) {
            return Err(LedgerError::UnknownPlayer);
        }
        if amount < 0 {
            return Err(LedgerError::InvalidAmount);
        }
        if amount > self.pot {
            return Err(LedgerError::InsufficientPot);
        }
        let player = self
            .players
            .get_mut(name)
            .ok_or(LedgerError::UnknownPlayer)?;
        self.pot -= amount;
        player.collect(amount);
        Ok(())
    }
    /// A consistent point-in-time view of the full table for broadcast.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            players: self
                .players
                .values()
                .map(|p| (p.name().to_string(), PlayerView::from(p)))
                .collect(),
            pot: self.pot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn register_seats_player_with_stack() {
        let mut ledger = Ledger::new();
        assert!(ledger.register("alice", ID::default()).is_ok());
        let alice = ledger.player("alice").unwrap();
        assert_eq!(alice.chips(), STACK);
        assert_eq!(alice.turn_bet(), 0);
    }
    #[test]
    fn register_rejects_taken_name() {
        let mut ledger = Ledger::new();
        let original = ID::default();
        assert!(ledger.register("alice", original).is_ok());
        ledger.place_bet("alice", 100).unwrap();
        assert_eq!(
            ledger.register("alice", ID::default()),
            Err(LedgerError::NameTaken)
        );
        let alice = ledger.player("alice").unwrap();
        assert_eq!(alice.chips(), STACK - 100);
        assert_eq!(alice.connection(), original);
        assert_eq!(ledger.snapshot().players.len(), 1);
    }
    #[test]
    fn reassociate_changes_only_the_handle() {
        let mut ledger = Ledger::new();
        ledger.register("alice", ID::default()).unwrap();
        ledger.place_bet("alice", 25).unwrap();
        let before = ledger.snapshot();
        let next = ID::default();
        assert!(ledger.reassociate("alice", next).is_ok());
        let after = ledger.snapshot();
        assert_eq!(ledger.player("alice").unwrap().connection(), next);
        assert_eq!(before.pot, after.pot);
        assert_eq!(before.players["alice"].chips, after.players["alice"].chips);
        assert_eq!(
            before.players["alice"].turn_bet,
            after.players["alice"].turn_bet
        );
        assert_ne!(
            before.players["alice"].connection,
            after.players["alice"].connection
        );
    }
    #[test]
    fn reassociate_unknown_player_fails() {
        let mut ledger = Ledger::new();
        assert_eq!(
            ledger.reassociate("ghost", ID::default()),
            Err(LedgerError::UnknownPlayer)
        );
    }
    #[test]
    fn bet_moves_chips_through_to_pot() {
        let mut ledger = Ledger::new();
        ledger.register("alice", ID::default()).unwrap();
        assert!(ledger.place_bet("alice", 100).is_ok());
        let alice = ledger.player("alice").unwrap();
        assert_eq!(alice.chips(), STACK - 100);
        assert_eq!(alice.turn_bet(), 100);
        assert_eq!(alice.chips() + alice.turn_bet(), STACK);
        assert_eq!(ledger.pot(), 100);
    }
    #[test]
    fn bet_failures_leave_state_unchanged() {
        let mut ledger = Ledger::new();
        ledger.register("alice", ID::default()).unwrap();
        assert_eq!(
            ledger.place_bet("alice", 0),
            Err(LedgerError::InvalidAmount)
        );
        assert_eq!(
            ledger.place_bet("alice", -10),
            Err(LedgerError::InvalidAmount)
        );
        assert_eq!(
            ledger.place_bet("alice", STACK + 1),
            Err(LedgerError::InsufficientChips)
        );
        assert_eq!(
            ledger.place_bet("ghost", 10),
            Err(LedgerError::UnknownPlayer)
        );
        let alice = ledger.player("alice").unwrap();
        assert_eq!(alice.chips(), STACK);
        assert_eq!(alice.turn_bet(), 0);
        assert_eq!(ledger.pot(), 0);
    }
    #[test]
    fn claim_conserves_chips_plus_pot() {
        let mut ledger = Ledger::new();
        ledger.register("alice", ID::default()).unwrap();
        ledger.register("bob", ID::default()).unwrap();
        ledger.place_bet("alice", 100).unwrap();
        ledger.place_bet("bob", 60).unwrap();
        let before = ledger.player("bob").unwrap().chips() + ledger.pot();
        assert!(ledger.claim_pot("bob", 150).is_ok());
        let after = ledger.player("bob").unwrap().chips() + ledger.pot();
        assert_eq!(before, after);
        assert_eq!(ledger.pot(), 10);
        assert_eq!(ledger.player("bob").unwrap().chips(), STACK - 60 + 150);
    }
    #[test]
    fn claim_failures_leave_state_unchanged() {
        let mut ledger = Ledger::new();
        ledger.register("alice", ID::default()).unwrap();
        ledger.place_bet("alice", 50).unwrap();
        assert_eq!(
            ledger.claim_pot("alice", 51),
            Err(LedgerError::InsufficientPot)
        );
        assert_eq!(
            ledger.claim_pot("ghost", 10),
            Err(LedgerError::UnknownPlayer)
        );
        assert_eq!(
            ledger.claim_pot("alice", -1),
            Err(LedgerError::InvalidAmount)
        );
        assert_eq!(ledger.pot(), 50);
        assert_eq!(ledger.player("alice").unwrap().chips(), STACK - 50);
    }
    #[test]
    fn claim_of_zero_is_a_legal_noop() {
        let mut ledger = Ledger::new();
        ledger.register("alice", ID::default()).unwrap();
        assert!(ledger.claim_pot("alice", 0).is_ok());
        assert_eq!(ledger.pot(), 0);
        assert_eq!(ledger.player("alice").unwrap().chips(), STACK);
    }
    #[test]
    fn clear_turn_bets_resets_every_seat() {
        let mut ledger = Ledger::new();
        ledger.clear_turn_bets(); // empty table is fine
        ledger.register("alice", ID::default()).unwrap();
        ledger.register("bob", ID::default()).unwrap();
        ledger.place_bet("alice", 100).unwrap();
        ledger.place_bet("bob", 40).unwrap();
        ledger.clear_turn_bets();
        assert_eq!(ledger.player("alice").unwrap().turn_bet(), 0);
        assert_eq!(ledger.player("bob").unwrap().turn_bet(), 0);
        assert_eq!(ledger.player("alice").unwrap().chips(), STACK - 100);
        assert_eq!(ledger.player("bob").unwrap().chips(), STACK - 40);
        assert_eq!(ledger.pot(), 140);
    }
    #[test]
    fn full_round_of_play() {
        let mut ledger = Ledger::new();
        ledger.register("alice", ID::default()).unwrap();
        ledger.register("bob", ID::default()).unwrap();
        ledger.place_bet("alice", 100).unwrap();
        assert_eq!(ledger.player("alice").unwrap().chips(), 900);
        assert_eq!(ledger.player("alice").unwrap().turn_bet(), 100);
        assert_eq!(ledger.pot(), 100);
        ledger.place_bet("bob", 50).unwrap();
        assert_eq!(ledger.player("bob").unwrap().chips(), 950);
        assert_eq!(ledger.player("bob").unwrap().turn_bet(), 50);
        assert_eq!(ledger.pot(), 150);
        ledger.claim_pot("alice", 150).unwrap();
        assert_eq!(ledger.player("alice").unwrap().chips(), 1050);
        assert_eq!(ledger.pot(), 0);
        ledger.clear_turn_bets();
        let snapshot = ledger.snapshot();
        assert_eq!(snapshot.players["alice"].chips, 1050);
        assert_eq!(snapshot.players["alice"].turn_bet, 0);
        assert_eq!(snapshot.players["bob"].chips, 950);
        assert_eq!(snapshot.players["bob"].turn_bet, 0);
        assert_eq!(snapshot.pot, 0);
    }
    #[test]
    fn custom_stack_applies_to_new_players() {
        let mut ledger = Ledger::with_stack(25);
        ledger.register("alice", ID::default()).unwrap();
        assert_eq!(ledger.player("alice").unwrap().chips(), 25);
    }
}
