//! Session router for the chipnet table.
//!
//! Accepts WebSocket connections from player and pot devices, maps their
//! actions onto the authoritative ledger, and fans the resulting snapshots
//! back out to every connected device.
//!
//! ## Submodules
//!
//! - [`Table`] — imperative shell owning the ledger and the live connections
//! - [`Connections`] — registry of per-device outbound channels
//! - [`handlers`] — HTTP surface (index, health, WebSocket upgrade)

pub mod handlers;

mod connections;
mod table;

pub use connections::*;
pub use table::*;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

/// Bind address, from BIND_ADDR or the default tracker port.
fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("0.0.0.0:3001"))
}

#[rustfmt::skip]
pub async fn run() -> Result<(), std::io::Error> {
    let table = web::Data::new(Table::new());
    log::info!("starting table server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(table.clone())
            .route("/",       web::get().to(handlers::index))
            .route("/health", web::get().to(handlers::health))
            .route("/table",  web::get().to(handlers::join))
    })
    .workers(2)
    .bind(bind_addr())?
    .run()
    .await
}
