//! Application state for the backend server.
//!
//! Shared between HTTP/WebSocket handlers. Play sessions themselves are
//! per-connection; the only shared piece is where to find the levels.

use std::path::PathBuf;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Directory the level documents are read from.
    pub level_dir: PathBuf,
}

impl AppState {
    pub fn new(level_dir: PathBuf) -> Self {
        AppState { level_dir }
    }
}
