/// Game configuration constants.
///
/// This module defines the main gameplay parameters: the state broadcast tick,
/// the level file layout, and the fallback world used when a level fails to load.

/// Interval (in milliseconds) between state broadcasts to a connected client.
pub const TICK_INTERVAL_MS: u64 = 30;

/// Floor loaded when a play session first connects.
pub const START_FLOOR: i32 = 0;

/// Directory holding the level documents, relative to the working directory.
pub const LEVEL_DIR: &str = "assets/levels";

/// Side length of the bordered fallback room built when a level fails to load.
pub const FALLBACK_SIZE: usize = 10;
