//! Actor state and per-frame inputs
//!
//! Everything the simulation mutates lives here. Positions are the top-left
//! corner of the actor's bounding box in pixels, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::level::{CellKind, Grid};

/// Current player intents
///
/// The one intentionally shared mutable record: host input handlers flip
/// single fields as device events arrive, and the simulation reads the whole
/// record once per step. Each flag is independent, so no locking is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Movement axis, used both for collision passes and enemy patrols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Component of `v` along this axis
    #[inline]
    pub fn component(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    /// Mutable component of `v` along this axis
    #[inline]
    pub fn component_mut(self, v: &mut Vec2) -> &mut f32 {
        match self {
            Axis::Horizontal => &mut v.x,
            Axis::Vertical => &mut v.y,
        }
    }
}

/// Axis-aligned bounding-box overlap (touching edges do not overlap)
#[inline]
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

/// The player actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Resting on a solid surface; gates jumping
    pub grounded: bool,
    pub dead: bool,
    pub won: bool,
    pub score: u32,
    pub keys: u32,
}

impl Player {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            grounded: false,
            dead: false,
            won: false,
            score: 0,
            keys: 0,
        }
    }

    /// Dead or won; no further integration until reset
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.dead || self.won
    }
}

/// A patrolling enemy materialized from a spawn marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub axis: Axis,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Patrol anchor
    pub origin: Vec2,
    pub dead: bool,
}

impl Enemy {
    /// New enemy at `pos` moving in the positive direction of `axis`
    pub fn new(axis: Axis, pos: Vec2, size: Vec2, speed: f32) -> Self {
        let vel = match axis {
            Axis::Horizontal => Vec2::new(speed, 0.0),
            Axis::Vertical => Vec2::new(0.0, speed),
        };
        Self {
            axis,
            pos,
            vel,
            size,
            origin: pos,
            dead: false,
        }
    }

    /// Patrol axis for a spawn marker, `None` for other cells
    pub fn axis_for(kind: CellKind) -> Option<Axis> {
        kind.is_enemy_spawn().then(|| match kind {
            CellKind::EnemyVertical => Axis::Vertical,
            _ => Axis::Horizontal,
        })
    }

    /// Signed distance from the patrol anchor along the patrol axis
    #[inline]
    pub fn displacement(&self) -> f32 {
        self.axis.component(self.pos) - self.axis.component(self.origin)
    }

    #[inline]
    pub fn overlaps(&self, player: &Player) -> bool {
        aabb_overlap(self.pos, self.size, player.pos, player.size)
    }
}

/// A pickup/trigger cell touched by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pickup {
    pub col: usize,
    pub row: usize,
    pub kind: CellKind,
}

/// Saved progress used to re-seed the session after death
///
/// Captured whole when the player touches a checkpoint cell; a new capture
/// replaces the old one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Respawn position (the checkpoint cell's spawn point)
    pub pos: Vec2,
    pub score: u32,
    pub keys: u32,
    /// Grid at capture time, collected pickups already cleared
    pub grid: Grid,
}

/// Outcome of one simulation step, reported to the host
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    CoinCollected { col: usize, row: usize },
    KeyCollected { col: usize, row: usize },
    CheckpointReached { col: usize, row: usize, snapshot: Checkpoint },
    Died,
    Won,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_overlap_excludes_touching() {
        let size = Vec2::splat(24.0);
        assert!(aabb_overlap(Vec2::ZERO, size, Vec2::new(23.0, 0.0), size));
        assert!(!aabb_overlap(Vec2::ZERO, size, Vec2::new(24.0, 0.0), size));
        assert!(!aabb_overlap(Vec2::ZERO, size, Vec2::new(0.0, 24.0), size));
    }

    #[test]
    fn test_enemy_new_moves_along_axis() {
        let e = Enemy::new(Axis::Vertical, Vec2::new(36.0, 40.0), Vec2::splat(24.0), 2.0);
        assert_eq!(e.vel, Vec2::new(0.0, 2.0));
        assert_eq!(e.origin, e.pos);
        assert_eq!(e.displacement(), 0.0);
        assert_eq!(Enemy::axis_for(CellKind::EnemyHorizontal), Some(Axis::Horizontal));
        assert_eq!(Enemy::axis_for(CellKind::Coin), None);
    }

    #[test]
    fn test_axis_component_mut() {
        let mut v = Vec2::new(1.0, 2.0);
        *Axis::Vertical.component_mut(&mut v) = -5.0;
        assert_eq!(v, Vec2::new(1.0, -5.0));
        assert_eq!(Axis::Horizontal.component(v), 1.0);
    }
}
