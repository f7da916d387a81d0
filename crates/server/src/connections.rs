use chipnet_core::ID;
use chipnet_ledger::Connection;
use std::collections::HashMap;
use tokio::sync::mpsc::UnboundedSender;

/// Registry of live WebSocket connections and their outbound channels.
/// Separates connection lifecycle from table state: devices come and go,
/// the ledger's players do not.
#[derive(Debug, Default)]
pub struct Connections {
    senders: HashMap<ID<Connection>, UnboundedSender<String>>,
}

impl Connections {
    pub fn new() -> Self {
        Self::default()
    }
    /// Registers a freshly opened connection.
    pub fn attach(&mut self, id: ID<Connection>, sender: UnboundedSender<String>) {
        self.senders.insert(id, sender);
    }
    /// Removes a closed connection.
    pub fn detach(&mut self, id: ID<Connection>) {
        self.senders.remove(&id);
    }
    /// Returns the number of open connections.
    pub fn connected_count(&self) -> usize {
        self.senders.len()
    }
    /// Gets the outbound sender for a connection.
    pub fn sender(&self, id: ID<Connection>) -> Option<&UnboundedSender<String>> {
        self.senders.get(&id)
    }
    /// Sends a frame to a single connection.
    pub fn unicast(&self, id: ID<Connection>, frame: String) {
        match self.sender(id).map(|outbox| outbox.send(frame)) {
            Some(Ok(())) => log::debug!("[connections] unicast to {} succeeded", id),
            Some(Err(e)) => log::warn!("[connections] unicast to {} failed: {:?}", id, e),
            None => log::warn!("[connections] unicast to {}: no such connection", id),
        }
    }
    /// Sends a frame to every open connection.
    pub fn broadcast(&self, frame: String) {
        log::debug!("[connections] broadcast to {} devices", self.senders.len());
        self.senders
            .iter()
            .for_each(|(id, outbox)| match outbox.send(frame.clone()) {
                Ok(()) => {}
                Err(e) => log::warn!("[connections] broadcast to {} failed: {:?}", id, e),
            });
    }
}
