//! Art-lookup collaborator.
//!
//! Pure mapping from `(symbol, variant)` to an asset file name. Never fails:
//! anything without registered art gets the error placeholder, so renderers
//! always have something deterministic to draw.

pub const ERROR_ASSET: &str = "error.png";

/// Asset file name for a tile. Floors and walls pick a texture by variant;
/// unknown symbols and unregistered variants fall back to the placeholder.
pub fn art_asset(symbol: char, variant: i32) -> &'static str {
    match symbol {
        '#' => {
            if variant == 1 {
                "wood_wall.png"
            } else {
                "concrete_wall.png"
            }
        }
        ' ' => match variant {
            1 => "wood_floor.png",
            2 => "green_carpet.png",
            3 => "tile_floor.png",
            _ => "concrete_floor.png",
        },
        '*' => "duck_player.png",
        '=' | '?' => "door_templates.png",
        '<' | 'p' => "cardboard_box.png",
        'c' => "Chest.png",
        'E' => "roomba.png",
        '^' | 'v' | '@' => "tile_floor.png",
        _ => ERROR_ASSET,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_selects_texture() {
        assert_eq!(art_asset('#', 1), "wood_wall.png");
        assert_eq!(art_asset('#', 0), "concrete_wall.png");
        assert_eq!(art_asset(' ', 2), "green_carpet.png");
        assert_eq!(art_asset(' ', 99), "concrete_floor.png");
    }

    #[test]
    fn unregistered_symbol_falls_back() {
        assert_eq!(art_asset('!', 0), ERROR_ASSET);
        assert_eq!(art_asset('-', 3), ERROR_ASSET);
    }
}
