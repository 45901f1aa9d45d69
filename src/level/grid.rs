//! Owned, mutable 2D cell grid
//!
//! Indexed `[row][col]` with row 0 at the top. Rows are expected to share a
//! width but every lookup checks both the row count and the individual row
//! length, so a ragged grid never panics.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cell::CellKind;
use crate::error::{MakerError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "Vec<String>", try_from = "Vec<String>")]
pub struct Grid {
    cells: Vec<Vec<CellKind>>,
}

impl Grid {
    /// Create a grid of empty cells
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cells: vec![vec![CellKind::Empty; cols]; rows],
        }
    }

    /// Parse rows of cell codes
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let cells = rows
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.as_ref()
                    .chars()
                    .enumerate()
                    .map(|(col, code)| {
                        CellKind::from_char(code).ok_or(MakerError::UnknownCell { row, col, code })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { cells })
    }

    /// Serialize back to rows of cell codes
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.as_char()).collect())
            .collect()
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Width of the first row (rows are expected to be uniform)
    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// True when every row has the same width
    pub fn is_uniform(&self) -> bool {
        let cols = self.cols();
        self.cells.iter().all(|row| row.len() == cols)
    }

    /// Cell at (col, row), `None` when out of range
    #[inline]
    pub fn get(&self, col: i32, row: i32) -> Option<CellKind> {
        if col < 0 || row < 0 {
            return None;
        }
        self.cells.get(row as usize)?.get(col as usize).copied()
    }

    /// Overwrite a cell. Out-of-range indices are ignored.
    pub fn set(&mut self, col: usize, row: usize, kind: CellKind) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = kind;
        }
    }

    /// Iterate `(col, row, kind)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellKind)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &kind)| (col, row, kind))
        })
    }

    /// Number of cells of a kind
    pub fn count(&self, kind: CellKind) -> usize {
        self.iter().filter(|&(_, _, k)| k == kind).count()
    }

    /// First cell of a kind in row-major order
    pub fn find(&self, kind: CellKind) -> Option<(usize, usize)> {
        self.iter()
            .find(|&(_, _, k)| k == kind)
            .map(|(col, row, _)| (col, row))
    }

    /// Replace every cell of `from` with `to`
    pub fn replace_all(&mut self, from: CellKind, to: CellKind) {
        for cell in self.cells.iter_mut().flatten() {
            if *cell == from {
                *cell = to;
            }
        }
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = MakerError;

    fn try_from(rows: Vec<String>) -> Result<Self> {
        Grid::parse(&rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
