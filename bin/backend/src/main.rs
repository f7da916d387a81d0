//! chipnet table server.
//!
//! Tracks chips, bets, and the shared pot for one poker table and pushes
//! live state to every connected device. Binds BIND_ADDR (default
//! 0.0.0.0:3001).

#[tokio::main]
async fn main() {
    chipnet_core::log();
    chipnet_core::kys();
    chipnet_server::run().await.unwrap();
}
