//! Per-connection play session actor.
//!
//! Each WebSocket connection owns an independent `Session`. The actor pushes
//! a full state snapshot at a fixed tick and applies move commands as they
//! arrive; both run on the same actor context, so grid access is serialized
//! and each step stays atomic. Disconnecting stops the actor and drops the
//! session.

use std::time::Duration;

use actix::{Actor, ActorContext, AsyncContext, StreamHandler};
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{debug, info};
use uuid::Uuid;

use crate::config::game::{START_FLOOR, TICK_INTERVAL_MS};
use crate::game::art;
use crate::game::state::{LevelStore, Session};
use crate::game::types::Direction;
use crate::server::messages::{ClientCommand, StateUpdate};
use crate::server::ws_error::ws_error_message;

pub struct PlaySessionActor {
    pub session_id: Uuid,
    session: Session,
    /// Message from the most recent step, rebroadcast until the next one.
    last_message: Option<String>,
    complete: bool,
}

impl PlaySessionActor {
    pub fn new(levels: LevelStore) -> Self {
        PlaySessionActor {
            session_id: Uuid::new_v4(),
            session: Session::new(levels, START_FLOOR),
            last_message: None,
            complete: false,
        }
    }

    fn broadcast_state(&self, ctx: &mut ws::WebsocketContext<Self>) {
        let update = StateUpdate::snapshot(&self.session, self.last_message.clone(), self.complete);
        match serde_json::to_string(&update) {
            Ok(text) => ctx.text(text),
            Err(e) => ctx.text(ws_error_message(
                "SERIALIZE_FAILED",
                "Failed to serialize game state",
                Some(&e.to_string()),
            )),
        }
    }
}

impl Actor for PlaySessionActor {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!("[PlaySession {}] connected", self.session_id);
        ctx.run_interval(Duration::from_millis(TICK_INTERVAL_MS), |act, ctx| {
            act.broadcast_state(ctx);
        });
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        info!("[PlaySession {}] disconnected", self.session_id);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for PlaySessionActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                // Deserialize the client command. Unknown direction strings
                // fail deserialization and are reported; a well-formed
                // command is applied immediately.
                let command: ClientCommand = match serde_json::from_str(&text) {
                    Ok(c) => c,
                    Err(_) => {
                        debug!("[PlaySession {}] invalid command: {}", self.session_id, text);
                        ctx.text(ws_error_message("INVALID_COMMAND", "Invalid command", None));
                        return;
                    }
                };
                // A well-formed command naming an unknown direction is a
                // silent no-op; only malformed JSON gets the error payload.
                let Some(direction) = Direction::from_name(&command.direction) else {
                    debug!(
                        "[PlaySession {}] unknown direction: {}",
                        self.session_id, command.direction
                    );
                    return;
                };
                let outcome = self.session.step(direction);
                self.last_message = outcome.message;
            }
            Ok(ws::Message::Ping(bytes)) => ctx.pong(&bytes),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            _ => (),
        }
    }
}

/// WebSocket entry point: start an independent play session for this
/// connection.
pub async fn ws_play(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    let actor = PlaySessionActor::new(LevelStore::Dir(data.level_dir.clone()));
    ws::start(actor, &req, stream)
}

/// Art-lookup route: `(symbol, variant) -> asset name`. The symbol arrives
/// percent-encoded (the floor tile is a space).
pub async fn art_lookup(path: web::Path<(String, i32)>) -> HttpResponse {
    let (raw_symbol, variant) = path.into_inner();
    let decoded = urlencoding::decode(&raw_symbol).unwrap_or_default();
    let symbol = decoded.chars().next().unwrap_or('\0');
    HttpResponse::Ok().json(serde_json::json!({
        "asset": art::art_asset(symbol, variant),
    }))
}
