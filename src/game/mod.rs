pub mod art;
pub mod codec;
pub mod grid;
pub mod input;
pub mod mutations;
pub mod state;
pub mod systems;
pub mod tests;
pub mod tiles;
pub mod types;
