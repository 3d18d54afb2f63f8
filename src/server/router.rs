//! HTTP and WebSocket routing configuration.
//!
//! Defines the play endpoint and the art-lookup route. The play endpoint is
//! handled by a dedicated WebSocket actor that owns the connection's session.

use actix_web::web;

use crate::server::session::{art_lookup, ws_play};

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/ws/play").to(ws_play))
        .service(web::resource("/art/{symbol}/{variant}").route(web::get().to(art_lookup)));
}
