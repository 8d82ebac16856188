use super::{
    BOARD_SIDE, BOARD_SIDE_WITH_WALL,
    shape::{Shape, ShapeKind},
};

/// The falling piece: a shape plus the grid position of its bounding box.
///
/// Pieces never consult the grid. Movement and rotation return new candidate
/// pieces; the engine decides whether a candidate replaces the live piece.
///
/// # Example
///
/// ```
/// use textris_engine::{Piece, ShapeKind};
///
/// let piece = Piece::spawn(ShapeKind::L, 5);
/// let moved = piece.moved_right().unwrap();
/// let rotated = moved.rotated_clockwise();
/// assert_eq!((rotated.rows(), rotated.cols()), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: ShapeKind,
    shape: Shape,
    position: PiecePosition,
}

impl Piece {
    /// Leftmost anchor column a spawned piece may take (the first non-wall column).
    pub const SPAWN_COL_MIN: usize = 1;

    #[must_use]
    pub fn new(kind: ShapeKind, position: PiecePosition) -> Self {
        Self {
            kind,
            shape: kind.shape(),
            position,
        }
    }

    /// Creates a piece in spawn orientation at the top row.
    #[must_use]
    pub fn spawn(kind: ShapeKind, col: usize) -> Self {
        Self::new(kind, PiecePosition::new(0, col))
    }

    /// Largest anchor column keeping a freshly spawned `kind` inside the side walls.
    #[must_use]
    pub fn spawn_col_max(kind: ShapeKind) -> usize {
        BOARD_SIDE + 1 - kind.shape().cols()
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn position(&self) -> PiecePosition {
        self.position
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    /// Iterates over the absolute `(row, col)` grid cells covered by this piece.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.shape
            .occupied_offsets()
            .map(move |(dr, dc)| (self.position.row() + dr, self.position.col() + dc))
    }

    fn with_position(&self, position: PiecePosition) -> Self {
        Self {
            kind: self.kind,
            shape: self.shape.clone(),
            position,
        }
    }

    fn with_shape(&self, shape: Shape) -> Self {
        Self {
            kind: self.kind,
            shape,
            position: self.position,
        }
    }

    #[must_use]
    pub fn moved_down(&self) -> Option<Self> {
        Some(self.with_position(self.position.down()?))
    }

    #[must_use]
    pub fn moved_left(&self) -> Option<Self> {
        Some(self.with_position(self.position.left()?))
    }

    #[must_use]
    pub fn moved_right(&self) -> Option<Self> {
        Some(self.with_position(self.position.right()?))
    }

    #[must_use]
    pub fn moved(&self, direction: MoveDirection) -> Option<Self> {
        match direction {
            MoveDirection::Left => self.moved_left(),
            MoveDirection::Right => self.moved_right(),
        }
    }

    #[must_use]
    pub fn rotated_clockwise(&self) -> Self {
        self.with_shape(self.shape.rotated_clockwise())
    }

    #[must_use]
    pub fn rotated_counter_clockwise(&self) -> Self {
        self.with_shape(self.shape.rotated_counter_clockwise())
    }

    #[must_use]
    pub fn rotated(&self, direction: RotateDirection) -> Self {
        match direction {
            RotateDirection::Clockwise => self.rotated_clockwise(),
            RotateDirection::CounterClockwise => self.rotated_counter_clockwise(),
        }
    }
}

/// Anchor of a piece: the top-left corner of its bounding box in grid coordinates.
///
/// Row 0 is the top grid row and column 0 is the left wall. Both coordinates
/// stay inside the grid; stepping past an edge yields `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiecePosition {
    row: u8,
    col: u8,
}

impl PiecePosition {
    /// # Panics
    ///
    /// Panics if the position lies outside the grid.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < BOARD_SIDE_WITH_WALL);
        assert!(col < BOARD_SIDE_WITH_WALL);
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    #[must_use]
    pub fn row(self) -> usize {
        usize::from(self.row)
    }

    #[must_use]
    pub fn col(self) -> usize {
        usize::from(self.col)
    }

    #[must_use]
    pub const fn left(&self) -> Option<Self> {
        if self.col == 0 {
            None
        } else {
            Some(Self {
                row: self.row,
                col: self.col - 1,
            })
        }
    }

    #[must_use]
    pub const fn right(&self) -> Option<Self> {
        if self.col as usize >= BOARD_SIDE_WITH_WALL - 1 {
            None
        } else {
            Some(Self {
                row: self.row,
                col: self.col + 1,
            })
        }
    }

    #[must_use]
    pub const fn down(&self) -> Option<Self> {
        if self.row as usize >= BOARD_SIDE_WITH_WALL - 1 {
            None
        } else {
            Some(Self {
                row: self.row + 1,
                col: self.col,
            })
        }
    }
}

/// Horizontal shift requested by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveDirection {
    #[display("left")]
    Left,
    #[display("right")]
    Right,
}

/// Rotation requested by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RotateDirection {
    #[display("clockwise")]
    Clockwise,
    #[display("counter clockwise")]
    CounterClockwise,
}
