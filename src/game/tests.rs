#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::game::codec::decode_document;
    use crate::game::grid::WorldGrid;
    use crate::game::mutations::MutationLog;
    use crate::game::state::{LevelStore, Session};
    use crate::game::tiles::{resolve, BASE_FLOOR};
    use crate::game::types::{Direction, Position, TileToken, ValueCell};

    // 7x5 room: key 3 next to the start, door 3 further in, floor variants
    // arranged so the door reveals variant 1 and the key tile variant 0.
    const KEY_DOOR_LEVEL: &str = "\
width = 7
height = 5
#0#0#0#0#0#0#0
#0*<3 0 0 0#0
#0 0 1=3 1 0#0
#0 0 0 1 0 0#0
#0#0#0#0#0#0#0
";

    fn session_with(levels: &[(i32, &str)]) -> Session {
        let map: HashMap<i32, String> = levels
            .iter()
            .map(|(floor, text)| (*floor, text.to_string()))
            .collect();
        Session::new(LevelStore::Memory(map), 0)
    }

    #[test]
    fn unregistered_symbol_resolves_to_invalid() {
        assert_eq!(resolve(&TileToken::bare('Z')), ValueCell::INVALID);
        assert_eq!(resolve(&TileToken::numbered('!', 7)), ValueCell::INVALID);
    }

    #[test]
    fn build_is_deterministic() {
        let doc = decode_document(KEY_DOOR_LEVEL).unwrap();
        let a = WorldGrid::build(&doc);
        let b = WorldGrid::build(&doc);
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.start, b.start);
    }

    #[test]
    fn start_marker_becomes_floor() {
        let doc = decode_document(KEY_DOOR_LEVEL).unwrap();
        let built = WorldGrid::build(&doc);
        assert!(built.start_found);
        assert_eq!(built.start, Position { x: 1, y: 1 });
        assert_eq!(built.grid.display[1][1].symbol, ' ');
        assert_eq!(built.grid.value[1][1], ValueCell::new(BASE_FLOOR, 0));
    }

    #[test]
    fn missing_start_is_flagged_not_forced() {
        let doc = decode_document("width = 2\nheight = 1\n 0 0\n").unwrap();
        let built = WorldGrid::build(&doc);
        assert!(!built.start_found);
        assert_eq!(built.start, Position { x: 0, y: 0 });
        // No cell was force-written.
        assert_eq!(built.grid.display[0][0], TileToken::numbered(' ', 0));
        assert_eq!(built.grid.display[0][1], TileToken::numbered(' ', 0));
    }

    #[test]
    fn replay_is_idempotent() {
        let doc = decode_document(KEY_DOOR_LEVEL).unwrap();
        let mut log = MutationLog::default();
        log.record(0, 3, 2, BASE_FLOOR, 1);
        log.record(0, 2, 1, BASE_FLOOR, 0);
        log.record(0, 3, 2, BASE_FLOOR, 2); // last write wins
        log.record(1, 1, 1, BASE_FLOOR, 9); // other floor, no-op here
        log.record(0, 99, 99, BASE_FLOOR, 0); // out of range, skipped

        let mut once = WorldGrid::build(&doc);
        log.apply_to(&mut once.grid, &once.chest_table, 0);
        let mut twice = WorldGrid::build(&doc);
        log.apply_to(&mut twice.grid, &twice.chest_table, 0);
        log.apply_to(&mut twice.grid, &twice.chest_table, 0);

        assert_eq!(once.grid, twice.grid);
        assert_eq!(once.grid.value[2][3], ValueCell::new(BASE_FLOOR, 2));
    }

    #[test]
    fn wall_blocks_and_grids_are_untouched() {
        let mut session = session_with(&[(0, KEY_DOOR_LEVEL)]);
        let before = session.grid.clone();
        let outcome = session.step(Direction::Up);
        assert_eq!(outcome.message.as_deref(), Some("Blocked."));
        assert_eq!(session.player.pos, Position { x: 1, y: 1 });
        assert_eq!(session.grid, before);
    }

    #[test]
    fn boundary_step_is_a_silent_noop() {
        let mut session = session_with(&[(0, "width = 2\nheight = 1\n* 0\n")]);
        assert_eq!(session.player.pos, Position { x: 0, y: 0 });
        let outcome = session.step(Direction::Left);
        assert!(outcome.message.is_none());
        assert_eq!(session.player.pos, Position { x: 0, y: 0 });
    }

    #[test]
    fn locked_door_needs_the_key() {
        let mut session = session_with(&[(0, KEY_DOOR_LEVEL)]);
        // Walk around the key to the tile above the door.
        session.player.pos = Position { x: 3, y: 1 };
        let outcome = session.step(Direction::Down);
        assert_eq!(
            outcome.message.as_deref(),
            Some("Door blocked — need key: 3")
        );
        assert_eq!(session.player.pos, Position { x: 3, y: 1 });
        assert!(session.log.is_empty());
    }

    #[test]
    fn key_pickup_then_unlock_persists_across_reloads() {
        let mut session = session_with(&[(0, KEY_DOOR_LEVEL)]);

        // Pick up key 3; the tile reverts to the neighbor-majority floor.
        let outcome = session.step(Direction::Right);
        assert_eq!(outcome.message.as_deref(), Some("Picked up a key: 3"));
        assert!(session.player.keys.contains(&3));
        assert_eq!(session.player.pos, Position { x: 2, y: 1 });
        assert_eq!(session.grid.value[1][2], ValueCell::new(BASE_FLOOR, 0));
        assert_eq!(session.log.len(), 1);

        // Step to the tile above the door, then unlock it.
        session.step(Direction::Right);
        let outcome = session.step(Direction::Down);
        assert_eq!(outcome.message.as_deref(), Some("Door unlocked."));
        assert_eq!(session.player.pos, Position { x: 3, y: 2 });
        assert_eq!(session.log.len(), 2);
        // Neighbor majority around the door is floor variant 1.
        assert_eq!(session.grid.value[2][3], ValueCell::new(BASE_FLOOR, 1));
        assert_eq!(session.grid.display[2][3].symbol, ' ');

        // A fresh load of the same floor replays both conversions.
        session.load_floor(0, None);
        assert_eq!(session.grid.value[1][2], ValueCell::new(BASE_FLOOR, 0));
        assert_eq!(session.grid.value[2][3], ValueCell::new(BASE_FLOOR, 1));
        assert_eq!(session.grid.display[2][3].symbol, ' ');
    }

    #[test]
    fn chest_message_and_loot_contract() {
        let level = "width = 3\nheight = 1\n*c0 0\np1p2\n";
        let mut session = session_with(&[(0, level)]);
        let outcome = session.step(Direction::Right);
        assert_eq!(outcome.message.as_deref(), Some("Opened chest!"));
        assert_eq!(session.player.pos, Position { x: 1, y: 0 });
        assert_eq!(
            session.chest_loot(0),
            Some(&[TileToken::numbered('p', 1), TileToken::numbered('p', 2)][..])
        );
        assert_eq!(session.chest_loot(5), None);
    }

    #[test]
    fn stairs_route_to_the_matching_landing() {
        let floor0 = "width = 3\nheight = 1\n*^102 0\n";
        let floor1 = "width = 3\nheight = 1\n 0@2 0\n";
        let mut session = session_with(&[(0, floor0), (1, floor1)]);

        let outcome = session.step(Direction::Right);
        assert_eq!(
            outcome.message.as_deref(),
            Some("You take the stairs to floor 1.")
        );
        assert_eq!(session.floor, 1);
        assert_eq!(session.player.pos, Position { x: 1, y: 0 });
        // Keys survive the floor change.
        assert!(session.player.keys.is_empty());
    }

    #[test]
    fn broken_stairs_keep_the_player_in_place() {
        let floor0 = "width = 3\nheight = 1\n*^902 0\n";
        let mut session = session_with(&[(0, floor0)]);
        let outcome = session.step(Direction::Right);
        assert_eq!(outcome.message.as_deref(), Some("The stairs lead nowhere."));
        assert_eq!(session.floor, 0);
    }

    #[test]
    fn unknown_tile_is_inert_but_walkable() {
        let mut session = session_with(&[(0, "width = 3\nheight = 1\n*Z 0\n")]);
        assert_eq!(session.grid.value[0][1], ValueCell::INVALID);
        let outcome = session.step(Direction::Right);
        assert!(outcome.message.is_none());
        assert_eq!(session.player.pos, Position { x: 1, y: 0 });
    }

    #[test]
    fn malformed_level_falls_back_to_the_bordered_room() {
        let mut session = session_with(&[(0, "not a level at all")]);
        assert_eq!((session.grid.width, session.grid.height), (10, 10));
        assert_eq!(session.player.pos, Position { x: 5, y: 5 });
        assert_eq!(session.grid.display[0][0].symbol, '#');
        // The room is playable.
        let outcome = session.step(Direction::Up);
        assert!(outcome.message.is_none());
        assert_eq!(session.player.pos, Position { x: 5, y: 4 });
    }
}
