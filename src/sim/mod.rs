//! Platformer simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only (one call = one frame)
//! - Stable iteration order (row-major cells, enemies in spawn order)
//! - No rendering, input devices or storage
//! - Never blocks; outcomes are reported through flags and events

pub mod collision;
pub mod enemy;
pub mod state;
pub mod tick;
pub mod world;

pub use collision::{CellRange, resolve_collisions};
pub use enemy::update_enemy;
pub use state::{Axis, Checkpoint, Enemy, GameEvent, InputState, Pickup, Player, aabb_overlap};
pub use tick::update_physics;
pub use world::{FALLBACK_SPAWN, World};
