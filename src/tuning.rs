//! Data-driven physics tuning
//!
//! Defaults reproduce the stock game feel. Hosts may load partial overrides
//! from JSON; missing fields keep their defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Per-frame physics constants (pixels and pixels/frame)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Horizontal speed while a direction is held
    pub move_speed: f32,
    /// Added to vertical velocity every frame
    pub gravity: f32,
    /// Maximum falling speed
    pub terminal_velocity: f32,
    /// Vertical velocity set by a grounded jump (negative = up)
    pub jump_impulse: f32,
    /// Vertical velocity set when landing on a jump pad
    pub jump_pad_impulse: f32,
    /// Score added per coin
    pub coin_value: u32,
    /// Patrol speed of enemies
    pub enemy_speed: f32,
    /// Patrol half-range in cells
    pub enemy_amplitude_cells: f32,
    /// Player bounding box
    pub player_size: Vec2,
    /// Enemy bounding box
    pub enemy_size: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            move_speed: 4.0,
            gravity: 0.5,
            terminal_velocity: 12.0,
            jump_impulse: -10.0,
            jump_pad_impulse: -16.0,
            coin_value: 100,
            enemy_speed: 2.0,
            enemy_amplitude_cells: 3.0,
            player_size: Vec2::splat(24.0),
            enemy_size: Vec2::splat(24.0),
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning = serde_json::from_str(json)?;
        log::info!("Loaded physics tuning overrides");
        Ok(tuning)
    }

    /// Patrol half-range in pixels
    #[inline]
    pub fn enemy_amplitude(&self) -> f32 {
        self.enemy_amplitude_cells * crate::consts::TILE_SIZE
    }
}
