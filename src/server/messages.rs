//! Wire message shapes for the play session protocol.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::game::state::Session;
use crate::game::tiles;
use crate::game::types::Position;

/// Command sent by the client: `{"move": "up"}`. The direction stays a raw
/// string here; an unknown name is a no-op for the session, not a protocol
/// error, so it must not fail deserialization.
#[derive(Debug, Deserialize)]
pub struct ClientCommand {
    #[serde(rename = "move")]
    pub direction: String,
}

/// Full state snapshot pushed to the client every tick. Idempotent: a
/// dropped message is self-healed by the next tick.
#[derive(Debug, Serialize)]
pub struct StateUpdate {
    pub grid: Vec<String>,
    pub player: Position,
    pub tile_registry: BTreeMap<String, (i32, i32)>,
    pub message: Option<String>,
    pub complete: bool,
}

impl StateUpdate {
    pub fn snapshot(session: &Session, message: Option<String>, complete: bool) -> Self {
        StateUpdate {
            grid: session.grid.symbol_rows(),
            player: session.player.pos,
            tile_registry: tiles::registry_payload(),
            message,
            complete,
        }
    }
}
