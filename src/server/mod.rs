//! Server layer root module.
//!
//! This module organizes the backend server components:
//! - Application state management
//! - HTTP/WebSocket routing
//! - Per-connection play sessions (state broadcast, player commands)

pub mod messages;
pub mod router;
pub mod session;
pub mod state;
pub mod ws_error;
