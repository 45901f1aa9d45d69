//! Host-side level checks run before a session starts
//!
//! The simulation never validates; a level without a goal simply can't be won.

use super::cell::CellKind;
use super::grid::Grid;
use crate::error::{MakerError, Result};

/// Require exactly `cols` x `rows` cells with uniform row width
pub fn validate_dimensions(grid: &Grid, cols: usize, rows: usize) -> Result<()> {
    if grid.rows() != rows || grid.cols() != cols || !grid.is_uniform() {
        return Err(MakerError::Dimensions {
            expected_cols: cols,
            expected_rows: rows,
            cols: grid.cols(),
            rows: grid.rows(),
        });
    }
    Ok(())
}

/// Require exactly one player spawn and one goal
pub fn validate_playable(grid: &Grid) -> Result<()> {
    for kind in [CellKind::PlayerSpawn, CellKind::Goal] {
        match grid.count(kind) {
            0 => return Err(MakerError::MissingMarker(kind)),
            1 => {}
            n => return Err(MakerError::DuplicateMarker(kind, n)),
        }
    }
    Ok(())
}
