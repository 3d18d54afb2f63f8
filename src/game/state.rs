//! Play session state.
//!
//! A `Session` owns everything one player's run needs: the current world
//! grid, the chest table, the player state, the mutation log, and the level
//! store. Nothing here is global; every websocket connection gets its own
//! session, so one player's door-unlock is never visible to another (the
//! mutation log is deliberately per-session).

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;

use log::{error, info};

use crate::game::codec::{self, LevelError};
use crate::game::grid::{BuiltWorld, WorldGrid};
use crate::game::mutations::MutationLog;
use crate::game::systems::movement::{self, StepOutcome};
use crate::game::tiles::BASE_STAIR_LANDING;
use crate::game::types::{Direction, Position, TileToken};

/// Source of level document text, keyed by floor id.
#[derive(Debug, Clone)]
pub enum LevelStore {
    /// `level_{floor}.txt` files under a directory (the server).
    Dir(PathBuf),
    /// In-memory documents (tests and the local demo).
    Memory(HashMap<i32, String>),
}

impl LevelStore {
    pub fn read(&self, floor: i32) -> Result<String, LevelError> {
        match self {
            LevelStore::Dir(dir) => Ok(fs::read_to_string(dir.join(format!("level_{floor}.txt")))?),
            LevelStore::Memory(levels) => levels.get(&floor).cloned().ok_or_else(|| {
                LevelError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no level for floor {floor}"),
                ))
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerState {
    pub pos: Position,
    pub floor: i32,
    pub keys: HashSet<i32>,
}

pub struct Session {
    pub grid: WorldGrid,
    pub chest_table: Vec<Vec<TileToken>>,
    pub player: PlayerState,
    pub log: MutationLog,
    pub floor: i32,
    levels: LevelStore,
}

impl Session {
    /// Start a session on the given floor. A level that fails to load drops
    /// the player into the fallback room instead of failing the connection.
    pub fn new(levels: LevelStore, start_floor: i32) -> Self {
        let mut session = Session {
            grid: WorldGrid::fallback_room().grid,
            chest_table: Vec::new(),
            player: PlayerState {
                pos: Position { x: 0, y: 0 },
                floor: start_floor,
                keys: HashSet::new(),
            },
            log: MutationLog::default(),
            floor: start_floor,
            levels,
        };
        session.load_floor(start_floor, None);
        session
    }

    /// Build (or rebuild) the world for a floor: parse the document, build
    /// fresh grids, replay the mutation log, place the player. Keys survive
    /// floor changes; the grid never does.
    pub fn load_floor(&mut self, floor: i32, start_override: Option<Position>) {
        let built = self.build_floor(floor).unwrap_or_else(|e| {
            error!("level for floor {floor} failed to load: {e}");
            WorldGrid::fallback_room()
        });

        self.grid = built.grid;
        self.chest_table = built.chest_table;
        self.floor = floor;
        self.log
            .apply_to(&mut self.grid, &self.chest_table, floor);
        self.player.floor = floor;
        self.player.pos = start_override.unwrap_or(built.start);
        info!(
            "floor {floor} loaded ({}x{}), player at ({}, {})",
            self.grid.width, self.grid.height, self.player.pos.x, self.player.pos.y
        );
    }

    fn build_floor(&self, floor: i32) -> Result<BuiltWorld, LevelError> {
        let text = self.levels.read(floor)?;
        let doc = codec::decode_document(&text)?;
        Ok(WorldGrid::build(&doc))
    }

    /// Process one direction input to completion, including any stair
    /// transition it triggers. Each step is atomic; there is no multi-step
    /// transaction.
    pub fn step(&mut self, direction: Direction) -> StepOutcome {
        let mut outcome = movement::step(self, direction);
        if let Some(stair_variant) = outcome.transition.take() {
            self.take_stairs(stair_variant, &mut outcome);
        }
        outcome
    }

    /// Stair routing: the variant digits encode `dest_floor * 100 + landing`,
    /// and the landing is the stair-landing tile on the destination floor
    /// whose variant matches. A stair that leads nowhere is informational,
    /// not an error.
    fn take_stairs(&mut self, stair_variant: i32, outcome: &mut StepOutcome) {
        let dest_floor = stair_variant / 100;
        let landing_id = stair_variant % 100;

        let built = match self.build_floor(dest_floor) {
            Ok(built) => built,
            Err(e) => {
                error!("stair destination floor {dest_floor} failed to load: {e}");
                outcome.message = Some("The stairs lead nowhere.".to_string());
                return;
            }
        };
        let Some(landing) = find_landing(&built, landing_id) else {
            error!("floor {dest_floor} has no landing {landing_id}");
            outcome.message = Some("The stairs lead nowhere.".to_string());
            return;
        };

        self.load_floor(dest_floor, Some(landing));
        outcome.message = Some(format!("You take the stairs to floor {dest_floor}."));
    }

    /// Loot contract surface for an opened chest: the chest-table row
    /// indexed by the chest's variant, if any.
    pub fn chest_loot(&self, chest_id: i32) -> Option<&[TileToken]> {
        usize::try_from(chest_id)
            .ok()
            .and_then(|i| self.chest_table.get(i))
            .map(Vec::as_slice)
    }
}

/// Row-major scan for the stair-landing tile with the given id.
fn find_landing(built: &BuiltWorld, landing_id: i32) -> Option<Position> {
    for y in 0..built.grid.height {
        for x in 0..built.grid.width {
            let cell = built.grid.value[y][x];
            if cell.base == BASE_STAIR_LANDING && cell.variant == landing_id {
                return Some(Position { x, y });
            }
        }
    }
    None
}
