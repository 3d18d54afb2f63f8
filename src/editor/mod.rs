//! Level editor support.
//!
//! The editor's backing grid is separate from the runtime world grid: it
//! grows on demand in any direction while painting, and trims to the used
//! bounding box on save.

pub mod canvas;
