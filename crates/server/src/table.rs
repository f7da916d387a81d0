use super::*;
use chipnet_core::Chips;
use chipnet_core::ID;
use chipnet_ledger::*;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::sync::mpsc::unbounded_channel;

/// The one live table.
/// Imperative shell that owns the Ledger (functional core) and the
/// connection registry, bridges WebSocket sessions onto both, and maps
/// inbound actions to ledger operations.
///
/// Every mutation produces its broadcast snapshot under the same write
/// guard, so the state observers receive is always the state the mutation
/// left behind.
pub struct Table {
    ledger: RwLock<Ledger>,
    connections: RwLock<Connections>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Self::with_ledger(Ledger::new())
    }
    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            ledger: RwLock::new(ledger),
            connections: RwLock::new(Connections::new()),
        }
    }
    pub async fn snapshot(&self) -> Snapshot {
        self.ledger.read().await.snapshot()
    }
    /// Seats a new player, or points an already-seated name at this
    /// connection. The original registration keeps its chips and turn bet.
    pub async fn join(&self, id: ID<Connection>, name: &str) -> (bool, Snapshot) {
        let mut ledger = self.ledger.write().await;
        let status = match ledger.register(name, id) {
            Ok(()) => {
                log::info!("[table] {} joined the game", name);
                true
            }
            Err(LedgerError::NameTaken) => {
                log::info!("[table] {} already seated, reassociating with {}", name, id);
                ledger.reassociate(name, id).is_ok()
            }
            Err(e) => {
                log::warn!("[table] rejected join by {}: {}", name, e);
                false
            }
        };
        (status, ledger.snapshot())
    }
    pub async fn bet(&self, name: &str, amount: Chips) -> (Result<(), LedgerError>, Snapshot) {
        let mut ledger = self.ledger.write().await;
        let result = ledger.place_bet(name, amount);
        (result, ledger.snapshot())
    }
    pub async fn claim(&self, name: &str, amount: Chips) -> (Result<(), LedgerError>, Snapshot) {
        let mut ledger = self.ledger.write().await;
        let result = ledger.claim_pot(name, amount);
        (result, ledger.snapshot())
    }
    pub async fn clear_bets(&self) -> Snapshot {
        let mut ledger = self.ledger.write().await;
        ledger.clear_turn_bets();
        ledger.snapshot()
    }
}

impl Table {
    /// Bridges a fresh WebSocket session onto the table.
    /// Spawns the per-connection pump: outbound frames from the registry
    /// channel, inbound frames dispatched as actions. Deregisters on close.
    pub async fn attach(
        self: &Arc<Self>,
        mut session: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
    ) {
        use futures::StreamExt;
        let id = ID::default();
        let (tx, mut rx) = unbounded_channel::<String>();
        self.connections.write().await.attach(id, tx);
        log::info!("[table] device connected on {}", id);
        let table = self.clone();
        actix_web::rt::spawn(async move {
            'sesh: loop {
                tokio::select! {
                    biased;
                    frame = rx.recv() => match frame {
                        Some(json) => if session.text(json).await.is_err() { break 'sesh },
                        None => break 'sesh,
                    },
                    msg = stream.next() => match msg {
                        Some(Ok(actix_ws::Message::Text(text))) => table.dispatch(id, &text).await,
                        Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                        Some(Err(_)) => break 'sesh,
                        None => break 'sesh,
                        _ => continue 'sesh,
                    },
                }
            }
            table.connections.write().await.detach(id);
            log::info!("[table] device disconnected from {}", id);
        });
    }
    async fn dispatch(&self, id: ID<Connection>, frame: &str) {
        match Protocol::decode(frame) {
            Ok(message) => self.apply(id, message).await,
            Err(e) => log::warn!("[table] dropping frame from {}: {}", id, e),
        }
    }
    /// One inbound action, one ledger call, then the rebroadcast. Failed
    /// actions rebroadcast too, so observers can tell a no-op happened.
    async fn apply(&self, id: ID<Connection>, message: ClientMessage) {
        match message {
            ClientMessage::JoinAsPot => {
                log::info!("[table] pot device joined on {}", id);
                let snapshot = self.snapshot().await;
                let connections = self.connections.read().await;
                connections.unicast(id, ServerMessage::joined(true, Role::Pot).to_json());
                connections.unicast(id, ServerMessage::status(snapshot).to_json());
            }
            ClientMessage::Join { name } => {
                let (status, snapshot) = self.join(id, &name).await;
                let connections = self.connections.read().await;
                connections.unicast(id, ServerMessage::joined(status, Role::Player).to_json());
                connections.broadcast(ServerMessage::status(snapshot).to_json());
            }
            ClientMessage::GetState => {
                let snapshot = self.snapshot().await;
                let connections = self.connections.read().await;
                connections.unicast(id, ServerMessage::status(snapshot).to_json());
            }
            ClientMessage::Bet { name, amount } => {
                let (result, snapshot) = self.bet(&name, amount).await;
                match result {
                    Ok(()) => log::info!("[table] {} bet {}", name, amount),
                    Err(e) => log::info!("[table] rejected bet by {}: {}", name, e),
                }
                let connections = self.connections.read().await;
                connections.broadcast(ServerMessage::status(snapshot).to_json());
            }
            ClientMessage::ClaimPot { name, amount } => {
                let (result, snapshot) = self.claim(&name, amount).await;
                let connections = self.connections.read().await;
                match result {
                    Ok(()) => {
                        log::info!("[table] {} claimed {} from the pot", name, amount);
                        connections
                            .broadcast(ServerMessage::claim_result(true, &name, Some(amount)).to_json());
                    }
                    Err(e) => {
                        log::info!("[table] rejected claim by {}: {}", name, e);
                        connections.broadcast(ServerMessage::claim_result(false, &name, None).to_json());
                    }
                }
                connections.broadcast(ServerMessage::status(snapshot).to_json());
            }
            ClientMessage::ClearBets => {
                let snapshot = self.clear_bets().await;
                log::info!("[table] turn bets cleared");
                let connections = self.connections.read().await;
                connections.broadcast(ServerMessage::status(snapshot).to_json());
            }
        }
    }
}
