//! Enemy patrol
//!
//! Enemies oscillate along one axis around their spawn point. Two
//! independent checks each negate the velocity: reaching the patrol
//! amplitude, and the cell ahead of the leading edge being a block or spike.
//! Both can fire in the same step, in which case they cancel out.

use super::state::{Axis, Enemy};
use crate::cell_index;
use crate::level::{CellKind, Grid};

/// Advance one enemy by one step
pub fn update_enemy(enemy: &mut Enemy, grid: &Grid, amplitude: f32) {
    if enemy.dead {
        return;
    }

    enemy.pos += enemy.vel;

    let axis = enemy.axis;
    if enemy.displacement().abs() >= amplitude {
        *axis.component_mut(&mut enemy.vel) *= -1.0;
    }

    let (col, row) = leading_cell(enemy);
    if matches!(grid.get(col, row), Some(kind) if blocks_patrol(kind)) {
        *axis.component_mut(&mut enemy.vel) *= -1.0;
    }
}

/// Cell just ahead of the enemy's leading edge, probed at its mid-line
fn leading_cell(enemy: &Enemy) -> (i32, i32) {
    let mid = enemy.pos + enemy.size / 2.0;
    match enemy.axis {
        Axis::Horizontal => {
            let edge = if enemy.vel.x > 0.0 {
                enemy.pos.x + enemy.size.x
            } else {
                enemy.pos.x
            };
            (cell_index(edge), cell_index(mid.y))
        }
        Axis::Vertical => {
            let edge = if enemy.vel.y > 0.0 {
                enemy.pos.y + enemy.size.y
            } else {
                enemy.pos.y
            };
            (cell_index(mid.x), cell_index(edge))
        }
    }
}

#[inline]
fn blocks_patrol(kind: CellKind) -> bool {
    kind.is_solid() || kind == CellKind::Spike
}
