//! Main entry point for the backend server.
//!
//! Initializes logging, configures application state, and launches the HTTP
//! server with the WebSocket play endpoint and the art-lookup route.

use actix_web::{web, App, HttpServer};
use std::path::PathBuf;

pub mod config;
mod editor;
mod game;
mod server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(PathBuf::from(
        config::game::LEVEL_DIR,
    )));

    // Start the HTTP server with the WebSocket play endpoint.
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*")),
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind(config::server::BIND_ADDR)?
    .run()
    .await
}
