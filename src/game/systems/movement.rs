//! Movement and interaction engine.
//!
//! One direction input is classified against the destination tile and acted
//! on in a fixed precedence order: bounds, solid, locked door, key pickup,
//! chest, stairs, plain move. Permanent changes (a door or key tile reverted
//! to floor) go through the mutation log and are applied to both grids in
//! the same step. The engine never switches floors itself; a stair step
//! returns a transition intent for the session layer.

use crate::game::mutations::{apply_record, MutationRecord};
use crate::game::state::Session;
use crate::game::tiles::BASE_FLOOR;
use crate::game::types::Direction;

/// Result of one step: an optional player-facing message and, for stair
/// tiles, the stair variant to route on.
#[derive(Debug, Clone, Default)]
pub struct StepOutcome {
    pub message: Option<String>,
    pub transition: Option<i32>,
}

impl StepOutcome {
    fn silent() -> Self {
        StepOutcome::default()
    }

    fn say(text: impl Into<String>) -> Self {
        StepOutcome {
            message: Some(text.into()),
            transition: None,
        }
    }
}

/// Majority floor variant among the four cardinal neighbors of `(x, y)`,
/// scanning +x, -x, +y, -y with ties broken by first encountered. Falls back
/// to variant 0 when no neighbor is a floor tile. This decides what a door
/// or key tile reveals when it converts back to floor.
fn adjacent_floor_variant(session: &Session, x: usize, y: usize) -> i32 {
    const NEIGHBORS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
    let mut seen: Vec<(i32, usize)> = Vec::new();
    for (dx, dy) in NEIGHBORS {
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        if !session.grid.in_bounds(nx, ny) {
            continue;
        }
        let cell = session.grid.value[ny as usize][nx as usize];
        if cell.base != BASE_FLOOR {
            continue;
        }
        match seen.iter_mut().find(|(v, _)| *v == cell.variant) {
            Some((_, count)) => *count += 1,
            None => seen.push((cell.variant, 1)),
        }
    }
    // Only a strictly greater count replaces the best candidate, so ties go
    // to the first-encountered neighbor.
    let mut best: Option<(i32, usize)> = None;
    for &(v, count) in &seen {
        if best.is_none_or(|(_, bc)| count > bc) {
            best = Some((v, count));
        }
    }
    best.map_or(0, |(v, _)| v)
}

/// Record a permanent conversion of `(x, y)` to floor and apply it to the
/// current grids immediately.
fn reveal_floor(session: &mut Session, x: usize, y: usize) {
    let variant = adjacent_floor_variant(session, x, y);
    session.log.record(session.floor, x, y, BASE_FLOOR, variant);
    let rec = MutationRecord {
        floor: session.floor,
        x,
        y,
        base: BASE_FLOOR,
        variant,
    };
    apply_record(&mut session.grid, &session.chest_table, &rec);
}

/// Process one direction input against the session's world.
pub fn step(session: &mut Session, direction: Direction) -> StepOutcome {
    let (dx, dy) = direction.offset();
    let tx = session.player.pos.x as i64 + dx;
    let ty = session.player.pos.y as i64 + dy;

    // Pure boundary no-op.
    if !session.grid.in_bounds(tx, ty) {
        return StepOutcome::silent();
    }
    let (tx, ty) = (tx as usize, ty as usize);

    let symbol = session.grid.display[ty][tx].symbol;
    let value = session.grid.value[ty][tx];

    match symbol {
        // Solid: walls and enemies block.
        '#' | 'E' => StepOutcome::say("Blocked."),

        // Door: unlocks if the matching key was collected, otherwise blocks.
        '=' => {
            let key_id = value.variant;
            if session.player.keys.contains(&key_id) {
                reveal_floor(session, tx, ty);
                session.player.pos.x = tx;
                session.player.pos.y = ty;
                StepOutcome::say("Door unlocked.")
            } else {
                StepOutcome::say(format!("Door blocked — need key: {key_id}"))
            }
        }

        // Key: pick it up and revert the tile to floor.
        '<' => {
            let key_id = value.variant;
            session.player.keys.insert(key_id);
            reveal_floor(session, tx, ty);
            session.player.pos.x = tx;
            session.player.pos.y = ty;
            StepOutcome::say(format!("Picked up a key: {key_id}"))
        }

        // Chest: the chest-table row is the loot contract, left to the caller.
        'c' => {
            session.player.pos.x = tx;
            session.player.pos.y = ty;
            StepOutcome::say("Opened chest!")
        }

        // Stairs: move on, then hand the variant back as a transition intent.
        '^' | 'v' => {
            session.player.pos.x = tx;
            session.player.pos.y = ty;
            StepOutcome {
                message: None,
                transition: Some(value.variant),
            }
        }

        '?' => {
            session.player.pos.x = tx;
            session.player.pos.y = ty;
            StepOutcome::say("Nothing happens.")
        }

        // Everything else (floor, empty, landings, unknown symbols) is
        // walkable and silent.
        _ => {
            session.player.pos.x = tx;
            session.player.pos.y = ty;
            StepOutcome::silent()
        }
    }
}
