//! Tile Maker - a tile-grid 2D platformer construction kit
//!
//! Core modules:
//! - `level`: Cell vocabulary, owned grid, validation and editor operations
//! - `sim`: Fixed-timestep simulation (collisions, enemy patrol, pickups)
//! - `session`: Play/dead/won lifecycle with checkpoint snapshots
//! - `tuning`: Data-driven physics constants
//! - `generate`: Prompt-to-level boundary plus an offline generator
//! - `library`: Named level storage with JSON export/import
//! - `web`: Browser bindings (wasm32 only)

pub mod error;
pub mod generate;
pub mod level;
pub mod library;
pub mod session;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{MakerError, Result};
pub use level::{CellKind, Grid};
pub use library::LevelLibrary;
pub use session::{Checkpoint, Session, SessionState};
pub use sim::{GameEvent, InputState};
pub use tuning::Tuning;

/// Level geometry constants
pub mod consts {
    /// Edge length of one grid cell in pixels
    pub const TILE_SIZE: f32 = 32.0;
    /// Grid width in cells
    pub const COLS: usize = 24;
    /// Grid height in cells
    pub const ROWS: usize = 16;

    /// Playfield size in pixels
    pub const LOGICAL_WIDTH: f32 = COLS as f32 * TILE_SIZE;
    pub const LOGICAL_HEIGHT: f32 = ROWS as f32 * TILE_SIZE;

    /// Offset of an actor's top-left corner inside its spawn cell
    pub const SPAWN_OFFSET_X: f32 = 4.0;
    pub const SPAWN_OFFSET_Y: f32 = 8.0;
}

/// Grid cell index containing a pixel coordinate (floor, may be negative)
#[inline]
pub fn cell_index(px: f32) -> i32 {
    (px / consts::TILE_SIZE).floor() as i32
}

/// Pixel position where an actor spawned from cell (col, row) is placed
#[inline]
pub fn spawn_point(col: usize, row: usize) -> glam::Vec2 {
    glam::Vec2::new(
        col as f32 * consts::TILE_SIZE + consts::SPAWN_OFFSET_X,
        row as f32 * consts::TILE_SIZE + consts::SPAWN_OFFSET_Y,
    )
}
