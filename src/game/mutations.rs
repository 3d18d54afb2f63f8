//! Floor-scoped log of permanent tile changes.
//!
//! Every permanent change the engine makes (a door unlocked, a key tile
//! reverted to floor) is appended here and replayed on each load of the
//! matching floor, so a reloaded floor reflects prior player actions.
//! Replay is idempotent: later records for the same cell overwrite earlier
//! ones, and records for other floors are no-ops.

use log::debug;

use crate::game::grid::WorldGrid;
use crate::game::tiles::{self, FLOOR_SYMBOL, VariantPolicy};
use crate::game::types::{TileToken, ValueCell};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationRecord {
    pub floor: i32,
    pub x: usize,
    pub y: usize,
    pub base: i32,
    pub variant: i32,
}

#[derive(Debug, Clone, Default)]
pub struct MutationLog {
    records: Vec<MutationRecord>,
}

/// Display symbol for a base type id written by a mutation. The chest table
/// doubles as the reverse lookup (row index == base id, first token of the
/// row); plain floor is the fallback.
fn symbol_for_base(base: i32, chest_table: &[Vec<TileToken>]) -> char {
    usize::try_from(base)
        .ok()
        .and_then(|i| chest_table.get(i))
        .and_then(|row| row.first())
        .map_or(FLOOR_SYMBOL, |t| t.symbol)
}

/// Apply one record to both grids. Out-of-range coordinates (stale records
/// after a level edit) are skipped and logged, never fatal.
pub fn apply_record(grid: &mut WorldGrid, chest_table: &[Vec<TileToken>], rec: &MutationRecord) {
    if !grid.in_bounds(rec.x as i64, rec.y as i64) {
        debug!(
            "skipping out-of-range mutation at ({}, {}) on floor {}",
            rec.x, rec.y, rec.floor
        );
        return;
    }
    let symbol = symbol_for_base(rec.base, chest_table);
    let variant = match tiles::kind_of(symbol).map(|k| k.policy) {
        Some(VariantPolicy::FromSuffix) => u32::try_from(rec.variant).ok(),
        _ => None,
    };
    grid.set_cell(
        rec.x,
        rec.y,
        TileToken { symbol, variant },
        ValueCell::new(rec.base, rec.variant),
    );
}

impl MutationLog {
    /// Append a record unconditionally. No dedup: last write for a given
    /// cell wins at replay time.
    pub fn record(&mut self, floor: i32, x: usize, y: usize, base: i32, variant: i32) {
        self.records.push(MutationRecord {
            floor,
            x,
            y,
            base,
            variant,
        });
    }

    /// Replay every record for `floor` against a freshly built grid, in
    /// append order.
    pub fn apply_to(&self, grid: &mut WorldGrid, chest_table: &[Vec<TileToken>], floor: i32) {
        for rec in self.records.iter().filter(|r| r.floor == floor) {
            apply_record(grid, chest_table, rec);
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
