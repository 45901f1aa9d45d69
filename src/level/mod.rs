//! Level model
//!
//! Pure data: the closed cell vocabulary and the grid it lives in. Cells are
//! parsed from characters once at the boundary and serialized back once.

pub mod cell;
pub mod editor;
pub mod grid;
pub mod validate;

pub use cell::CellKind;
pub use editor::{clear, default_level, paint};
pub use grid::Grid;
pub use validate::{validate_dimensions, validate_playable};
