//! Board geometry: shape templates, falling pieces and the walled grid.

pub use self::{grid::*, piece::*, shape::*};

pub(crate) mod grid;
pub(crate) mod piece;
pub(crate) mod shape;

/// Side length of the playable area.
pub const BOARD_SIDE: usize = 20;

/// Side length of the grid including the one-cell wall on each side.
pub const BOARD_SIDE_WITH_WALL: usize = BOARD_SIDE + 2;
