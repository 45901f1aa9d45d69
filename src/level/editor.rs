//! Editor operations on a level grid
//!
//! Painting, clearing and the starter stage. Drawing the palette and mapping
//! pointer coordinates to cells is the host's job.

use super::cell::CellKind;
use super::grid::Grid;
use crate::consts::{COLS, ROWS};

/// Paint one cell. Player and goal markers stay unique: placing one erases
/// the previous marker of the same kind.
pub fn paint(grid: &mut Grid, col: usize, row: usize, kind: CellKind) {
    if col >= grid.cols() || row >= grid.rows() {
        return;
    }
    if matches!(kind, CellKind::PlayerSpawn | CellKind::Goal) {
        grid.replace_all(kind, CellKind::Empty);
    }
    grid.set(col, row, kind);
}

/// Reset every cell to empty
pub fn clear(grid: &mut Grid) {
    *grid = Grid::new(grid.cols(), grid.rows());
}

/// Starter stage: two floor rows, player at the left, goal near the right
pub fn default_level() -> Grid {
    let mut grid = Grid::new(COLS, ROWS);
    for row in ROWS - 2..ROWS {
        for col in 0..COLS {
            grid.set(col, row, CellKind::Block);
        }
    }
    grid.set(0, ROWS - 3, CellKind::PlayerSpawn);
    grid.set(COLS - 2, ROWS - 3, CellKind::Goal);
    grid
}
