use arrayvec::ArrayVec;
use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};

/// Largest row or column extent of any shape in the catalog.
pub const MAX_SHAPE_EXTENT: usize = 4;

/// Row bitmask of a shape: bit `c` is set when column `c` is filled.
pub(crate) type ShapeRowMask = u8;

/// One of the five shape templates in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ShapeKind {
    /// Vertical bar, 4×1.
    I = 0,
    /// Square, 2×2.
    O = 1,
    /// L, 3×2.
    L = 2,
    /// J (mirror of L), 3×2.
    J = 3,
    /// S standing upright, 3×2.
    S = 4,
}

impl Distribution<ShapeKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeKind {
        ShapeKind::ALL[rng.random_range(0..ShapeKind::LEN)]
    }
}

impl ShapeKind {
    /// Number of shapes in the catalog (5).
    pub const LEN: usize = 5;

    pub const ALL: [Self; Self::LEN] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
    ];

    /// Returns a fresh copy of this kind's template in spawn orientation.
    #[must_use]
    pub fn shape(self) -> Shape {
        Shape::from_cells(SHAPE_TEMPLATES[self as usize])
    }
}

type ShapeTemplate = &'static [&'static [bool]];

const SHAPE_TEMPLATES: [ShapeTemplate; ShapeKind::LEN] = {
    const C: bool = true;
    const E: bool = false;
    [
        // I-shape
        &[&[C], &[C], &[C], &[C]],
        // O-shape
        &[&[C, C], &[C, C]],
        // L-shape
        &[&[C, E], &[C, E], &[C, C]],
        // J-shape
        &[&[E, C], &[E, C], &[C, C]],
        // S-shape
        &[&[E, C], &[C, C], &[C, E]],
    ]
};

/// Rectangular binary matrix describing which cells of a piece's bounding box are filled.
///
/// Rows are stored as bitmasks, top row first. Extents are at most
/// [`MAX_SHAPE_EXTENT`] in either direction and swap when a non-square shape is rotated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: ArrayVec<ShapeRowMask, MAX_SHAPE_EXTENT>,
    cols: usize,
}

impl Shape {
    /// Builds a shape from a row-major cell matrix.
    ///
    /// # Panics
    ///
    /// Panics if the matrix exceeds [`MAX_SHAPE_EXTENT`] or its rows differ in length.
    #[must_use]
    pub fn from_cells(cells: &[&[bool]]) -> Self {
        let cols = cells.first().map_or(0, |row| row.len());
        assert!(cols <= MAX_SHAPE_EXTENT, "shape wider than {MAX_SHAPE_EXTENT}");
        let rows = cells
            .iter()
            .map(|row| {
                assert_eq!(row.len(), cols, "shape rows must have equal length");
                row.iter()
                    .enumerate()
                    .filter(|(_, filled)| **filled)
                    .fold(0, |bits: ShapeRowMask, (c, _)| bits | (1 << c))
            })
            .collect();
        Self { rows, cols }
    }

    /// Number of rows of the bounding box.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns of the bounding box.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        col < self.cols && self.rows.get(row).is_some_and(|&bits| bits & (1 << col) != 0)
    }

    pub(crate) fn row_masks(&self) -> impl Iterator<Item = ShapeRowMask> + '_ {
        self.rows.iter().copied()
    }

    /// Iterates over the `(row, col)` offsets of filled cells, relative to the top-left corner.
    pub fn occupied_offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows()).flat_map(move |r| {
            (0..self.cols)
                .filter(move |&c| self.is_filled(r, c))
                .map(move |c| (r, c))
        })
    }

    /// Reverses the row order, then transposes.
    ///
    /// This is the only rotation primitive; [`Self::rotated_clockwise`] is built from it.
    #[must_use]
    pub fn rotated_counter_clockwise(&self) -> Self {
        let height = self.rows();
        let rows = (0..self.cols)
            .map(|c| {
                (0..height)
                    .filter(|&r| self.is_filled(height - 1 - r, c))
                    .fold(0, |bits: ShapeRowMask, r| bits | (1 << r))
            })
            .collect();
        Self { rows, cols: height }
    }

    /// Applies the counter-clockwise primitive three times.
    #[must_use]
    pub fn rotated_clockwise(&self) -> Self {
        self.rotated_counter_clockwise()
            .rotated_counter_clockwise()
            .rotated_counter_clockwise()
    }
}
