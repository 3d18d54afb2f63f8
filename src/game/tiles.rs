//! Static tile registry.
//!
//! Maps every level symbol to its base type id and variant policy, and
//! resolves a decoded token to the semantic cell the interaction logic
//! reasons about. Resolution is total: an unrecognized symbol is data,
//! not an error, and yields the sentinel invalid cell.

use std::collections::BTreeMap;

use crate::game::types::{TileToken, ValueCell};

pub const BASE_EMPTY: i32 = 0;
pub const BASE_WALL: i32 = 1;
pub const BASE_FLOOR: i32 = 2;
pub const BASE_PLAYER_START: i32 = 3;
pub const BASE_INTERACTABLE: i32 = 7;
pub const BASE_KEY: i32 = 8;
pub const BASE_DOOR: i32 = 9;
pub const BASE_STAIR_UP: i32 = 11;
pub const BASE_STAIR_DOWN: i32 = 12;
pub const BASE_STAIR_LANDING: i32 = 13;
pub const BASE_CHEST: i32 = 21;
pub const BASE_POWERUP: i32 = 22;

pub const EMPTY_SYMBOL: char = '-';
pub const FLOOR_SYMBOL: char = ' ';
pub const PLAYER_START_SYMBOL: char = '*';

/// How a tile kind derives its per-cell variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantPolicy {
    /// The kind carries no meaningful per-tile variant; every cell of this
    /// kind gets the same fixed value.
    Fixed(i32),
    /// The variant is read from the token's digit suffix, defaulting to 0.
    FromSuffix,
}

/// Registry entry for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileKind {
    pub base: i32,
    pub policy: VariantPolicy,
}

/// Every symbol the level format knows about. The enemy symbol shares the
/// empty base id; that quirk is part of the level format and kept as-is.
pub const SYMBOLS: [char; 13] = [
    '-', '#', ' ', '*', '=', '<', '?', 'E', '^', 'v', '@', 'c', 'p',
];

/// Look up the kind for a symbol. Returns `None` for unregistered symbols.
pub fn kind_of(symbol: char) -> Option<TileKind> {
    let (base, policy) = match symbol {
        '-' => (BASE_EMPTY, VariantPolicy::Fixed(-2)),
        '#' => (BASE_WALL, VariantPolicy::FromSuffix),
        ' ' => (BASE_FLOOR, VariantPolicy::FromSuffix),
        '*' => (BASE_PLAYER_START, VariantPolicy::Fixed(-2)),
        '=' => (BASE_DOOR, VariantPolicy::FromSuffix),
        '<' => (BASE_KEY, VariantPolicy::FromSuffix),
        '?' => (BASE_INTERACTABLE, VariantPolicy::FromSuffix),
        'E' => (BASE_EMPTY, VariantPolicy::FromSuffix),
        '^' => (BASE_STAIR_UP, VariantPolicy::FromSuffix),
        'v' => (BASE_STAIR_DOWN, VariantPolicy::FromSuffix),
        '@' => (BASE_STAIR_LANDING, VariantPolicy::FromSuffix),
        'c' => (BASE_CHEST, VariantPolicy::FromSuffix),
        'p' => (BASE_POWERUP, VariantPolicy::FromSuffix),
        _ => return None,
    };
    Some(TileKind { base, policy })
}

/// Resolve a token to its semantic cell. Total and deterministic: an
/// unregistered symbol yields `(-1, -1)` instead of failing.
pub fn resolve(token: &TileToken) -> ValueCell {
    match kind_of(token.symbol) {
        None => ValueCell::INVALID,
        Some(kind) => {
            let variant = match kind.policy {
                VariantPolicy::Fixed(v) => v,
                VariantPolicy::FromSuffix => token.variant.map_or(0, |v| v as i32),
            };
            ValueCell::new(kind.base, variant)
        }
    }
}

/// Registry payload sent to clients: symbol -> `[base, code]`, where code is
/// -1 for suffix-numbered kinds and the fixed value otherwise. Matches the
/// tile table shape the web client renders from.
pub fn registry_payload() -> BTreeMap<String, (i32, i32)> {
    let mut map = BTreeMap::new();
    for symbol in SYMBOLS {
        if let Some(kind) = kind_of(symbol) {
            let code = match kind.policy {
                VariantPolicy::Fixed(v) => v,
                VariantPolicy::FromSuffix => -1,
            };
            map.insert(symbol.to_string(), (kind.base, code));
        }
    }
    map
}
