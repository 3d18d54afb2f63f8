//! Runtime world grid.
//!
//! Two parallel grids are kept in lockstep: the display grid of tile tokens
//! (what clients see) and the value grid of semantic cells (what the
//! interaction engine reasons about). Both are rebuilt from the level
//! document on every load and then patched by mutation replay.

use log::warn;

use crate::config::game::FALLBACK_SIZE;
use crate::game::codec::LevelDocument;
use crate::game::tiles::{self, FLOOR_SYMBOL, PLAYER_START_SYMBOL};
use crate::game::types::{Position, TileToken, ValueCell};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldGrid {
    pub width: usize,
    pub height: usize,
    pub display: Vec<Vec<TileToken>>,
    pub value: Vec<Vec<ValueCell>>,
}

/// Result of building a world from a level document.
#[derive(Debug, Clone)]
pub struct BuiltWorld {
    pub grid: WorldGrid,
    pub chest_table: Vec<Vec<TileToken>>,
    pub start: Position,
    /// False when the document had no player-start marker and the default
    /// start position was used. The build still succeeds; no cell is forced.
    pub start_found: bool,
}

impl WorldGrid {
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Write one logical tile: both grids, atomically from the caller's view.
    pub fn set_cell(&mut self, x: usize, y: usize, token: TileToken, value: ValueCell) {
        self.display[y][x] = token;
        self.value[y][x] = value;
    }

    /// Display rows as plain symbol strings, for the state broadcast.
    pub fn symbol_rows(&self) -> Vec<String> {
        self.display
            .iter()
            .map(|row| row.iter().map(|t| t.symbol).collect())
            .collect()
    }

    /// Build the paired grids from a parsed document, locate the player
    /// start, and rewrite every start marker to plain floor so the marker
    /// never reappears once the session begins.
    pub fn build(doc: &LevelDocument) -> BuiltWorld {
        let mut display = Vec::with_capacity(doc.height);
        let mut value = Vec::with_capacity(doc.height);
        for row in &doc.grid_rows {
            let tokens: Vec<TileToken> = row.iter().take(doc.width).copied().collect();
            let cells: Vec<ValueCell> = tokens.iter().map(tiles::resolve).collect();
            display.push(tokens);
            value.push(cells);
        }

        let mut grid = WorldGrid {
            width: doc.width,
            height: doc.height,
            display,
            value,
        };

        // Row-major scan: the first start marker becomes the player position,
        // and every marker cell becomes plain floor in both grids.
        let floor_token = TileToken::numbered(FLOOR_SYMBOL, 0);
        let floor_cell = tiles::resolve(&floor_token);
        let mut start = None;
        for y in 0..grid.height {
            for x in 0..grid.width {
                if grid.display[y][x].symbol == PLAYER_START_SYMBOL {
                    if start.is_none() {
                        start = Some(Position { x, y });
                    }
                    grid.set_cell(x, y, floor_token, floor_cell);
                }
            }
        }

        let start_found = start.is_some();
        if !start_found {
            warn!("level has no player-start marker, defaulting to (0, 0)");
        }

        BuiltWorld {
            grid,
            chest_table: doc.table_rows.clone(),
            start: start.unwrap_or(Position { x: 0, y: 0 }),
            start_found,
        }
    }

    /// Minimal bordered room used when a level document cannot be loaded.
    /// The session keeps running inside it instead of crashing.
    pub fn fallback_room() -> BuiltWorld {
        let n = FALLBACK_SIZE;
        let wall = TileToken::numbered('#', 0);
        let floor = TileToken::numbered(FLOOR_SYMBOL, 0);
        let mut display = vec![vec![floor; n]; n];
        for i in 0..n {
            display[0][i] = wall;
            display[n - 1][i] = wall;
            display[i][0] = wall;
            display[i][n - 1] = wall;
        }
        let value = display
            .iter()
            .map(|row| row.iter().map(tiles::resolve).collect())
            .collect();

        BuiltWorld {
            grid: WorldGrid {
                width: n,
                height: n,
                display,
                value,
            },
            chest_table: Vec::new(),
            start: Position { x: n / 2, y: n / 2 },
            start_found: true,
        }
    }
}
