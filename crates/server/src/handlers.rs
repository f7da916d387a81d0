use super::*;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

pub async fn index() -> impl Responder {
    HttpResponse::Ok().body("you probably need a frontend to play this game")
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Upgrades the request to a WebSocket and bridges it onto the table.
pub async fn join(table: web::Data<Table>, body: web::Payload, req: HttpRequest) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            table.into_inner().attach(session, stream).await;
            response
        }
        Err(e) => {
            log::error!("[handlers] websocket upgrade failed: {}", e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}
