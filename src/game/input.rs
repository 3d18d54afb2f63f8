//! Local keypress mapping.
//!
//! Collaborator interface for a raw terminal reader: a single keypress,
//! case-insensitive, maps to the four directions plus a quit signal.
//! Anything else is ignored, not an error.

use crate::game::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Move(Direction),
    Quit,
}

pub fn parse_key(key: char) -> Option<KeyCommand> {
    match key.to_ascii_lowercase() {
        'w' => Some(KeyCommand::Move(Direction::Up)),
        's' => Some(KeyCommand::Move(Direction::Down)),
        'a' => Some(KeyCommand::Move(Direction::Left)),
        'd' => Some(KeyCommand::Move(Direction::Right)),
        'q' => Some(KeyCommand::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_maps_case_insensitively() {
        assert_eq!(parse_key('W'), Some(KeyCommand::Move(Direction::Up)));
        assert_eq!(parse_key('a'), Some(KeyCommand::Move(Direction::Left)));
        assert_eq!(parse_key('Q'), Some(KeyCommand::Quit));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(parse_key('x'), None);
        assert_eq!(parse_key('1'), None);
    }
}
