use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Wire-name lookup. Unknown names are `None` rather than an error so
    /// callers can treat them as a no-op.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Grid offset for one step in this direction (x grows right, y grows down).
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// One decoded unit of a level row: a symbol plus optional numeric variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileToken {
    pub symbol: char,
    pub variant: Option<u32>,
}

impl TileToken {
    pub fn bare(symbol: char) -> Self {
        TileToken {
            symbol,
            variant: None,
        }
    }

    pub fn numbered(symbol: char, variant: u32) -> Self {
        TileToken {
            symbol,
            variant: Some(variant),
        }
    }
}

/// Semantic value of one grid cell: the base type id and its variant.
///
/// Unrecognized symbols resolve to `ValueCell::INVALID`; interaction treats
/// those cells as inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCell {
    pub base: i32,
    pub variant: i32,
}

impl ValueCell {
    pub const INVALID: ValueCell = ValueCell {
        base: -1,
        variant: -1,
    };

    pub fn new(base: i32, variant: i32) -> Self {
        ValueCell { base, variant }
    }
}
