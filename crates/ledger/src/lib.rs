//! Authoritative chip accounting for a live poker table.
//!
//! This crate is the functional core of chipnet: it owns every player's
//! chip count, their commitment for the current betting round, and the
//! shared pot, and exposes the small set of state transitions the table
//! runs on. It performs no I/O and holds no locks; the server crate is
//! the imperative shell that serializes access and fans out snapshots.
//!
//! ## Architecture
//!
//! - [`Ledger`] — the table state and its transition operations
//! - [`Player`] — a single seat's balance, turn bet, and connection handle
//! - [`Snapshot`] — consistent point-in-time view for broadcast
//!
//! ## Protocol
//!
//! - [`ClientMessage`] — inbound actions from player and pot devices
//! - [`ServerMessage`] — outbound events (snapshots, join/claim results)
mod ledger;
mod message;
mod player;
mod protocol;
mod snapshot;

pub use ledger::*;
pub use message::*;
pub use player::*;
pub use protocol::*;
pub use snapshot::*;
