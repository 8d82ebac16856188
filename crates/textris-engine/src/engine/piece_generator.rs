use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;

use crate::{Piece, ShapeKind};

/// Source of the pieces spawned at game start and after every freeze.
///
/// Every generated piece must sit on row 0 with its bounding box between the
/// side walls (anchor column in `Piece::SPAWN_COL_MIN..=Piece::spawn_col_max(kind)`).
pub trait PieceGenerator {
    fn next_piece(&mut self) -> Piece;
}

impl<G: PieceGenerator + ?Sized> PieceGenerator for &mut G {
    fn next_piece(&mut self) -> Piece {
        (**self).next_piece()
    }
}

/// Spawns pieces with a uniformly random shape at a uniformly random legal column.
///
/// # Example
///
/// ```
/// use textris_engine::{PieceGenerator as _, PieceSeed, RandomPieceGenerator};
///
/// let seed = PieceSeed::from_bytes([42; 16]);
/// let mut a = RandomPieceGenerator::with_seed(seed);
/// let mut b = RandomPieceGenerator::with_seed(seed);
///
/// // Same seed, same sequence
/// assert_eq!(a.next_piece(), b.next_piece());
/// ```
#[derive(Debug, Clone)]
pub struct RandomPieceGenerator {
    rng: Pcg32,
}

impl Default for RandomPieceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPieceGenerator {
    /// Creates a generator seeded from the thread-local random source.
    ///
    /// For deterministic generation, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }
}

impl PieceGenerator for RandomPieceGenerator {
    fn next_piece(&mut self) -> Piece {
        let kind: ShapeKind = self.rng.random();
        let col = self
            .rng
            .random_range(Piece::SPAWN_COL_MIN..=Piece::spawn_col_max(kind));
        Piece::spawn(kind, col)
    }
}

/// Replays a fixed list of pieces, starting over once the list is exhausted.
#[derive(Debug, Clone)]
pub struct FixedPieceGenerator {
    pieces: Vec<Piece>,
    next: usize,
}

impl FixedPieceGenerator {
    /// # Panics
    ///
    /// Panics if `pieces` is empty.
    #[must_use]
    pub fn new(pieces: impl IntoIterator<Item = Piece>) -> Self {
        let pieces: Vec<_> = pieces.into_iter().collect();
        assert!(!pieces.is_empty(), "at least one piece is required");
        Self { pieces, next: 0 }
    }
}

impl PieceGenerator for FixedPieceGenerator {
    fn next_piece(&mut self) -> Piece {
        let piece = self.pieces[self.next].clone();
        self.next = (self.next + 1) % self.pieces.len();
        piece
    }
}

/// Seed for deterministic piece generation.
///
/// A 128-bit seed for the generator's random number generator. Displayed and
/// parsed as 32 hexadecimal digits so a game can be replayed from the command line.
///
/// # Example
///
/// ```
/// use textris_engine::PieceSeed;
///
/// let seed: PieceSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
/// assert_eq!(seed.to_string(), "000102030405060708090a0b0c0d0e0f");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSeed([u8; 16]);

impl PieceSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PieceSeed(seed)
    }
}

impl fmt::Display for PieceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    #[display("invalid seed: expected 32 hex digits, got {len} characters")]
    InvalidLength { len: usize },
    #[display("invalid seed: {text:?} is not hexadecimal")]
    InvalidDigit { text: String },
}

impl FromStr for PieceSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        // from_str_radix accepts a leading '+', which is not a hex digit
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseSeedError::InvalidDigit { text: s.to_owned() });
        }
        let num = u128::from_str_radix(s, 16)
            .map_err(|_| ParseSeedError::InvalidDigit { text: s.to_owned() })?;
        Ok(Self(num.to_be_bytes()))
    }
}
