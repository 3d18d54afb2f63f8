//! Expandable editor canvas.
//!
//! A dense grid of tile tokens that grows in any of the four directions when
//! a paint lands outside it. Growth shifts storage indices but never logical
//! coordinates: the viewport offset is shifted by the same amount, so a cell
//! once painted stays at the same offset-adjusted position. Saving trims to
//! the used bounding box and deliberately does not preserve the canvas
//! origin — a reload anchors the bounding box at (0, 0).

use crate::game::codec::{self, LevelError};
use crate::game::tiles::{self, EMPTY_SYMBOL, VariantPolicy};
use crate::game::types::TileToken;

const EMPTY: TileToken = TileToken {
    symbol: EMPTY_SYMBOL,
    variant: None,
};

#[derive(Debug, Clone)]
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    tiles: Vec<Vec<TileToken>>,
    /// Viewport offset in storage coordinates, shifted on expansion so the
    /// camera keeps pointing at the same world cells.
    pub offset_x: i64,
    pub offset_y: i64,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            width,
            height,
            tiles: vec![vec![EMPTY; width]; height],
            offset_x: 0,
            offset_y: 0,
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&TileToken> {
        self.tiles.get(y).and_then(|row| row.get(x))
    }

    /// Tile under a viewport cell. Stable across expansion for cells that
    /// were already on the canvas.
    pub fn at_view(&self, vx: usize, vy: usize) -> Option<&TileToken> {
        let x = usize::try_from(vx as i64 + self.offset_x).ok()?;
        let y = usize::try_from(vy as i64 + self.offset_y).ok()?;
        self.get(x, y)
    }

    /// Grow the canvas so `(gx, gy)` is inside, adding empty rows/columns
    /// before existing content for negative coordinates. Returns the
    /// `(left, top)` shift applied to existing storage indices; `(0, 0)`
    /// when no growth was needed.
    pub fn expand_to_include(&mut self, gx: i64, gy: i64) -> (i64, i64) {
        let add_left = (-gx).max(0) as usize;
        let add_top = (-gy).max(0) as usize;
        let add_right = (gx - (self.width as i64 - 1)).max(0) as usize;
        let add_bottom = (gy - (self.height as i64 - 1)).max(0) as usize;

        if add_left == 0 && add_top == 0 && add_right == 0 && add_bottom == 0 {
            return (0, 0);
        }

        let new_w = self.width + add_left + add_right;
        let new_h = self.height + add_top + add_bottom;
        let mut new_tiles = vec![vec![EMPTY; new_w]; new_h];
        for y in 0..self.height {
            for x in 0..self.width {
                new_tiles[y + add_top][x + add_left] = self.tiles[y][x];
            }
        }
        self.tiles = new_tiles;
        self.width = new_w;
        self.height = new_h;
        self.offset_x += add_left as i64;
        self.offset_y += add_top as i64;
        (add_left as i64, add_top as i64)
    }

    /// Paint a tile, growing the canvas first if needed. Kinds numbered from
    /// their suffix get a forced 0 variant when none was supplied, matching
    /// what the save format will emit anyway.
    pub fn place_tile(&mut self, gx: i64, gy: i64, token: TileToken) {
        let (shift_x, shift_y) = self.expand_to_include(gx, gy);
        let x = (gx + shift_x) as usize;
        let y = (gy + shift_y) as usize;

        let numbered = matches!(
            tiles::kind_of(token.symbol).map(|k| k.policy),
            Some(VariantPolicy::FromSuffix)
        );
        self.tiles[y][x] = if numbered && token.variant.is_none() {
            TileToken::numbered(token.symbol, 0)
        } else {
            token
        };
    }

    /// Bounding box of non-empty cells as `(min_x, min_y, max_x, max_y)`,
    /// or `None` for an entirely empty canvas.
    pub fn used_bounding_box(&self) -> Option<(usize, usize, usize, usize)> {
        let mut bbox: Option<(usize, usize, usize, usize)> = None;
        for (y, row) in self.tiles.iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                if tile.symbol == EMPTY_SYMBOL {
                    continue;
                }
                bbox = Some(match bbox {
                    None => (x, y, x, y),
                    Some((min_x, min_y, max_x, max_y)) => {
                        (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
                    }
                });
            }
        }
        bbox
    }

    /// Serialize the used bounding box as a level document, or `None` when
    /// there is nothing to persist. The absolute origin is not saved.
    pub fn save_trimmed(&self) -> Option<String> {
        let (min_x, min_y, max_x, max_y) = self.used_bounding_box()?;
        let width = max_x - min_x + 1;
        let height = max_y - min_y + 1;
        let rows: Vec<Vec<TileToken>> = (min_y..=max_y)
            .map(|y| self.tiles[y][min_x..=max_x].to_vec())
            .collect();
        Some(codec::encode_document(width, height, &rows))
    }

    /// Load a document into the canvas at (0, 0), growing right/bottom if
    /// the parsed size exceeds the current bounds, and reset the viewport.
    pub fn load_into(&mut self, text: &str) -> Result<(), LevelError> {
        let doc = codec::decode_document(text)?;

        if doc.width > self.width || doc.height > self.height {
            let new_w = self.width.max(doc.width);
            let new_h = self.height.max(doc.height);
            for row in &mut self.tiles {
                row.resize(new_w, EMPTY);
            }
            self.tiles.resize(new_h, vec![EMPTY; new_w]);
            self.width = new_w;
            self.height = new_h;
        }

        // Rows may carry trailing tokens past the declared width; the header
        // wins, as it does when building a playable grid.
        for (y, row) in doc.grid_rows.iter().enumerate() {
            for (x, token) in row.iter().take(doc.width).enumerate() {
                self.tiles[y][x] = *token;
            }
        }
        self.offset_x = 0;
        self.offset_y = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_left_shifts_content_and_offset() {
        let mut canvas = Canvas::new(10, 10);
        canvas.place_tile(5, 5, TileToken::bare('#'));
        assert_eq!(canvas.at_view(5, 5).unwrap().symbol, '#');

        let shift = canvas.expand_to_include(-2, 0);
        assert_eq!(shift, (2, 0));
        assert_eq!(canvas.width, 12);
        assert_eq!(canvas.height, 10);
        // Storage moved right by two columns.
        assert_eq!(canvas.get(7, 5).unwrap().symbol, '#');
        // Logical (viewport-adjusted) coordinate did not move.
        assert_eq!(canvas.at_view(5, 5).unwrap().symbol, '#');
        assert_eq!((canvas.offset_x, canvas.offset_y), (2, 0));
    }

    #[test]
    fn expand_inside_is_a_noop() {
        let mut canvas = Canvas::new(4, 4);
        assert_eq!(canvas.expand_to_include(3, 3), (0, 0));
        assert_eq!((canvas.width, canvas.height), (4, 4));
    }

    #[test]
    fn place_tile_forces_suffix_default() {
        let mut canvas = Canvas::new(4, 4);
        canvas.place_tile(1, 1, TileToken::bare('#'));
        canvas.place_tile(2, 1, TileToken::bare('-'));
        assert_eq!(canvas.get(1, 1), Some(&TileToken::numbered('#', 0)));
        assert_eq!(canvas.get(2, 1), Some(&TileToken::bare('-')));
    }

    #[test]
    fn save_trims_to_bounding_box_and_reload_anchors_at_origin() {
        let mut canvas = Canvas::new(60, 10);
        canvas.place_tile(57, 3, TileToken::numbered('#', 1));

        let text = canvas.save_trimmed().unwrap();
        assert_eq!(text, "width = 1\nheight = 1\n#1\n");

        let mut reloaded = Canvas::new(10, 10);
        reloaded.load_into(&text).unwrap();
        // Origin is not preserved: the tile lands at (0, 0).
        assert_eq!(reloaded.get(0, 0), Some(&TileToken::numbered('#', 1)));
        assert_eq!((reloaded.offset_x, reloaded.offset_y), (0, 0));
    }

    #[test]
    fn empty_canvas_has_nothing_to_save() {
        let canvas = Canvas::new(8, 8);
        assert!(canvas.used_bounding_box().is_none());
        assert!(canvas.save_trimmed().is_none());
    }

    #[test]
    fn load_clamps_rows_wider_than_the_header() {
        let mut canvas = Canvas::new(2, 2);
        canvas.load_into("width = 2\nheight = 1\n---\n").unwrap();
        assert_eq!((canvas.width, canvas.height), (2, 2));
        assert_eq!(canvas.get(0, 0), Some(&TileToken::bare('-')));
        assert_eq!(canvas.get(1, 0), Some(&TileToken::bare('-')));
    }

    #[test]
    fn load_grows_right_and_bottom_only() {
        let mut canvas = Canvas::new(2, 2);
        canvas
            .load_into("width = 4\nheight = 3\n####\n#  #\n####\n")
            .unwrap();
        assert_eq!((canvas.width, canvas.height), (4, 3));
        assert_eq!(canvas.get(3, 2).unwrap().symbol, '#');
    }
}
