use std::fmt;

use super::{BOARD_SIDE_WITH_WALL, piece::Piece, shape::ShapeRowMask};

// Bit masks for wall regions
// Left wall: bit 0 (x=0)
const LEFT_WALL_MASK: u32 = 1;
// Right wall: bit 21 (x=21)
const RIGHT_WALL_MASK: u32 = 1 << (BOARD_SIDE_WITH_WALL - 1);
// Bits beyond the right wall: never addressable, always reported as occupied
const OUTSIDE_MASK: u32 = !((1 << BOARD_SIDE_WITH_WALL) - 1);
// Floor row (every cell occupied)
const FULL_ROW_MASK: u32 = u32::MAX;

/// Single row of the grid as a 32-bit bitmask; bit N corresponds to column N.
///
/// # Bit Layout (LSB to MSB)
///
/// - Bit 0: left wall
/// - Bits 1-20: playable area (20 cells)
/// - Bit 21: right wall
/// - Bits 22-31: outside the grid, always set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRow {
    bits: u32,
}

impl GridRow {
    pub const EMPTY: Self = Self {
        bits: LEFT_WALL_MASK | RIGHT_WALL_MASK | OUTSIDE_MASK,
    };
    pub const FLOOR: Self = Self {
        bits: FULL_ROW_MASK,
    };

    /// Checks if the cell in column `x` is occupied.
    #[inline]
    #[must_use]
    pub fn is_cell_occupied(self, x: usize) -> bool {
        x >= BOARD_SIDE_WITH_WALL || (self.bits & (1 << x)) != 0
    }

    /// Checks if any cell in the given mask (shifted by x0) is occupied.
    #[inline]
    fn is_any_cell_occupied(self, x0: usize, mask: ShapeRowMask) -> bool {
        let bits = u32::from(mask) << x0;
        (self.bits & bits) != 0
    }

    /// Sets cells in the given mask (shifted by x0) as occupied.
    #[inline]
    fn occupy_cells(&mut self, x0: usize, mask: ShapeRowMask) {
        let bits = u32::from(mask) << x0;
        self.bits |= bits;
    }

    /// Iterates over every cell of the row, walls included, returning its occupied status.
    #[inline]
    pub fn iter_cells(self) -> impl Iterator<Item = bool> {
        (0..BOARD_SIDE_WITH_WALL).map(move |x| (self.bits & (1 << x)) != 0)
    }
}

/// The playfield: a square occupancy grid with a permanent wall border.
///
/// # Layout
///
/// ```text
///          0 1 2 ...       20 21
/// row  0   W . . .  .  .  . . W   <- open top: pieces spawn here
/// row  1   W . . .  .  .  . . W
///  ...
/// row 20   W . . .  .  .  . . W
/// row 21   W W W W  W  W  W W W   <- floor
/// ```
///
/// The side walls and the floor are set at construction and never cleared.
/// Interior cells only ever go from empty to occupied, through [`Grid::fill_piece`].
/// Any coordinate outside the grid is reported as occupied, so collision checks
/// never need a separate bounds test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [GridRow; BOARD_SIDE_WITH_WALL],
}

impl Default for Grid {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl Grid {
    pub const SIDE: usize = BOARD_SIDE_WITH_WALL;

    pub const INITIAL: Self = {
        let mut rows = [GridRow::EMPTY; BOARD_SIDE_WITH_WALL];
        rows[BOARD_SIDE_WITH_WALL - 1] = GridRow::FLOOR;
        Self { rows }
    };

    /// Returns an iterator over all rows, top to bottom, walls included.
    pub fn rows(&self) -> impl Iterator<Item = GridRow> + '_ {
        self.rows.iter().copied()
    }

    /// Checks if the cell at `(row, col)` is occupied; out-of-grid cells count as occupied.
    #[must_use]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .is_none_or(|grid_row| grid_row.is_cell_occupied(col))
    }

    /// Checks if the cell at `(row, col)` belongs to the permanent wall border.
    #[must_use]
    pub fn is_wall(row: usize, col: usize) -> bool {
        row == BOARD_SIDE_WITH_WALL - 1 || col == 0 || col == BOARD_SIDE_WITH_WALL - 1
    }

    /// Checks if any filled cell of the piece overlaps an occupied or out-of-grid cell.
    #[must_use]
    pub fn is_colliding(&self, piece: &Piece) -> bool {
        let x0 = piece.position().col();
        let y0 = piece.position().row();
        piece
            .shape()
            .row_masks()
            .enumerate()
            .filter(|(_, mask)| *mask != 0)
            .any(|(dy, mask)| {
                self.rows
                    .get(y0 + dy)
                    .is_none_or(|row| row.is_any_cell_occupied(x0, mask))
            })
    }

    /// Merges the piece's filled cells into the grid (bitwise OR).
    ///
    /// Cells outside the grid are ignored; a legal piece never has any.
    pub fn fill_piece(&mut self, piece: &Piece) {
        let x0 = piece.position().col();
        let y0 = piece.position().row();
        for (dy, mask) in piece.shape().row_masks().enumerate() {
            if let Some(row) = self.rows.get_mut(y0 + dy) {
                row.occupy_cells(x0, mask);
            }
        }
    }

    /// Fills a single cell.
    ///
    /// Useful to prepare board situations; filling a wall cell is a no-op.
    pub fn fill_cell(&mut self, row: usize, col: usize) {
        if col >= BOARD_SIDE_WITH_WALL {
            return;
        }
        if let Some(grid_row) = self.rows.get_mut(row) {
            grid_row.bits |= 1 << col;
        }
    }
}

/// Draws the grid one character per cell: `*` for occupied, space for empty.
///
/// Every row, including the last, ends with a newline.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for occupied in row.iter_cells() {
                f.write_str(if occupied { "*" } else { " " })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{PiecePosition, ShapeKind};

    use super::*;

    const LAST: usize = BOARD_SIDE_WITH_WALL - 1;

    #[test]
    fn test_initial_grid() {
        let grid = Grid::INITIAL;
        for y in 0..BOARD_SIDE_WITH_WALL {
            for x in 0..BOARD_SIDE_WITH_WALL {
                assert_eq!(
                    grid.is_occupied(y, x),
                    Grid::is_wall(y, x),
                    "unexpected cell state at ({y}, {x})",
                );
            }
        }
    }

    #[test]
    fn test_outside_cells_are_occupied() {
        let grid = Grid::INITIAL;
        assert!(grid.is_occupied(0, BOARD_SIDE_WITH_WALL));
        assert!(grid.is_occupied(0, 31));
        assert!(grid.is_occupied(BOARD_SIDE_WITH_WALL, 5));
    }

    #[test]
    fn test_top_row_is_open() {
        let grid = Grid::INITIAL;
        assert!((1..LAST).all(|x| !grid.is_occupied(0, x)));
    }

    #[test]
    fn test_collision_with_walls() {
        let grid = Grid::INITIAL;
        let on_left_wall = Piece::new(ShapeKind::O, PiecePosition::new(5, 0));
        let on_right_wall = Piece::new(ShapeKind::O, PiecePosition::new(5, LAST - 1));
        let on_floor = Piece::new(ShapeKind::O, PiecePosition::new(LAST - 1, 5));
        let inside = Piece::new(ShapeKind::O, PiecePosition::new(LAST - 2, 1));
        assert!(grid.is_colliding(&on_left_wall));
        assert!(grid.is_colliding(&on_right_wall));
        assert!(grid.is_colliding(&on_floor));
        assert!(!grid.is_colliding(&inside));
    }

    #[test]
    fn test_collision_past_the_right_edge() {
        let grid = Grid::INITIAL;
        // Horizontal bar whose bounding box sticks out of the grid
        let bar = Piece::new(ShapeKind::I, PiecePosition::new(3, LAST)).rotated_clockwise();
        assert!(grid.is_colliding(&bar));
    }

    #[test]
    fn test_collision_past_the_bottom_edge() {
        let grid = Grid::INITIAL;
        let bar = Piece::new(ShapeKind::I, PiecePosition::new(LAST, 3));
        assert!(grid.is_colliding(&bar));
    }

    #[test]
    fn test_empty_shape_cells_do_not_collide() {
        let mut grid = Grid::INITIAL;
        // J has an empty cell at its top-left corner
        grid.fill_cell(4, 4);
        let piece = Piece::new(ShapeKind::J, PiecePosition::new(4, 4));
        assert!(!grid.is_colliding(&piece));
        grid.fill_cell(4, 5);
        assert!(grid.is_colliding(&piece));
    }

    #[test]
    fn test_fill_piece_only_touches_shape_cells() {
        let mut grid = Grid::INITIAL;
        let before = grid.clone();
        let piece = Piece::new(ShapeKind::S, PiecePosition::new(7, 3));
        grid.fill_piece(&piece);

        let filled: Vec<_> = piece.occupied_cells().collect();
        for y in 0..BOARD_SIDE_WITH_WALL {
            for x in 0..BOARD_SIDE_WITH_WALL {
                if filled.contains(&(y, x)) {
                    assert!(grid.is_occupied(y, x));
                } else {
                    assert_eq!(grid.is_occupied(y, x), before.is_occupied(y, x));
                }
            }
        }
    }

    #[test]
    fn test_fill_piece_never_clears() {
        let mut grid = Grid::INITIAL;
        grid.fill_cell(10, 3);
        // L covers (8, 3), (9, 3), (10, 3) and (10, 4); (10, 3) is already set
        let piece = Piece::new(ShapeKind::L, PiecePosition::new(8, 3));
        grid.fill_piece(&piece);
        assert!(grid.is_occupied(10, 3));
        assert!(grid.is_occupied(10, 4));
        assert!(!grid.is_occupied(9, 4));
    }

    #[test]
    fn test_display_initial_grid() {
        let rendered = Grid::INITIAL.to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), BOARD_SIDE_WITH_WALL);
        let open_row = format!("*{}*", " ".repeat(BOARD_SIDE_WITH_WALL - 2));
        for line in &lines[..LAST] {
            assert_eq!(*line, open_row);
        }
        assert_eq!(lines[LAST], "*".repeat(BOARD_SIDE_WITH_WALL));
        assert!(rendered.ends_with('\n'));
    }
}
