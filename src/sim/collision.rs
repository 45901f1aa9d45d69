//! Player vs grid collision resolution
//!
//! Movement is integrated one axis at a time; after each axis the player's
//! box is tested against every grid cell it covers and pushed out along that
//! axis only. Non-solid cells apply their trigger semantics.

use glam::Vec2;

use super::state::{Axis, Pickup, Player};
use crate::cell_index;
use crate::consts::TILE_SIZE;
use crate::level::{CellKind, Grid};
use crate::tuning::Tuning;

/// Inclusive range of cells covered by a box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start_col: i32,
    pub end_col: i32,
    pub start_row: i32,
    pub end_row: i32,
}

impl CellRange {
    /// Cells covered by a box at `pos` of `size`. The trailing edges are
    /// inset by one pixel so a box flush against a cell boundary does not
    /// reach into the next cell.
    pub fn covering(pos: Vec2, size: Vec2) -> Self {
        Self {
            start_col: cell_index(pos.x),
            end_col: cell_index(pos.x + size.x - 1.0),
            start_row: cell_index(pos.y),
            end_row: cell_index(pos.y + size.y - 1.0),
        }
    }

    /// `(col, row)` pairs, row-major
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        (self.start_row..=self.end_row)
            .flat_map(move |row| (self.start_col..=self.end_col).map(move |col| (col, row)))
    }
}

/// Resolve the player against the grid after moving along `axis`.
///
/// The covered range is computed once before any push, so a push never
/// changes which cells are visited in this pass. `on_pickup` receives the
/// grid so the host can clear the cell before the next cell is read.
pub fn resolve_collisions<F>(
    player: &mut Player,
    grid: &mut Grid,
    axis: Axis,
    total_keys: u32,
    tuning: &Tuning,
    on_pickup: &mut F,
) where
    F: FnMut(&mut Grid, &Player, Pickup),
{
    let range = CellRange::covering(player.pos, player.size);

    for (col, row) in range.cells() {
        let Some(kind) = grid.get(col, row) else {
            continue;
        };
        let cell_min = Vec2::new(col as f32, row as f32) * TILE_SIZE;

        match kind {
            k if k.is_solid() => push_out_of_block(player, axis, cell_min),
            k if k.is_hazard() => player.dead = true,
            CellKind::Goal => {
                if total_keys == 0 || player.keys >= total_keys {
                    player.won = true;
                }
            }
            CellKind::JumpPad => {
                if axis == Axis::Vertical && player.vel.y > 0.0 {
                    player.pos.y = cell_min.y - player.size.y;
                    player.vel.y = tuning.jump_pad_impulse;
                    player.grounded = false;
                }
            }
            k if k.is_pickup() => {
                match kind {
                    CellKind::Coin => player.score += tuning.coin_value,
                    CellKind::Key => player.keys += 1,
                    _ => {}
                }
                let pickup = Pickup {
                    col: col as usize,
                    row: row as usize,
                    kind,
                };
                on_pickup(grid, player, pickup);
            }
            _ => {}
        }
    }
}

/// Snap to the near edge of a solid cell, opposite the velocity sign, and
/// stop motion on that axis.
fn push_out_of_block(player: &mut Player, axis: Axis, cell_min: Vec2) {
    let vel = axis.component(player.vel);
    let near = axis.component(cell_min);
    let extent = axis.component(player.size);

    let pos = axis.component_mut(&mut player.pos);
    if vel > 0.0 {
        *pos = near - extent;
    } else if vel < 0.0 {
        *pos = near + TILE_SIZE;
    }

    if axis == Axis::Vertical && vel > 0.0 {
        player.grounded = true;
    }
    *axis.component_mut(&mut player.vel) = 0.0;
}
