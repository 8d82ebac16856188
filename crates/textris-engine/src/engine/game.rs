use tracing::{debug, info, trace};

use crate::{
    Command, Frame, MoveDirection, MoveRejection, PieceGenerator, PieceSeed,
    RandomPieceGenerator, RotateDirection,
    core::{grid::Grid, piece::Piece},
};

/// Result of one step of gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Gravity {
    /// The piece moved down one row.
    Descended,
    /// The piece could not move down; it was frozen and a new piece spawned.
    Frozen,
}

/// What happened during one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The parsed command, or `None` if the input was not a command.
    pub command: Option<Command>,
    /// Whether the command was legal and applied.
    pub accepted: bool,
    /// Whether a piece was frozen into the grid this turn.
    pub frozen: bool,
}

/// The game: grid, falling piece and status message.
///
/// The falling piece is only ever replaced by a candidate that passed
/// [`Game::is_legal`], or by a newly spawned piece after a freeze.
#[derive(Debug, Clone)]
pub struct Game<G = RandomPieceGenerator> {
    grid: Grid,
    falling_piece: Piece,
    status: Option<MoveRejection>,
    generator: G,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game whose pieces come from a randomly seeded generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(RandomPieceGenerator::new())
    }

    /// Like [`Self::new`], but with a specific seed for a reproducible piece sequence.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self::with_generator(RandomPieceGenerator::with_seed(seed))
    }
}

impl<G> Game<G>
where
    G: PieceGenerator,
{
    #[must_use]
    pub fn with_generator(generator: G) -> Self {
        Self::with_grid(Grid::INITIAL, generator)
    }

    /// Starts a game on a prepared grid.
    #[must_use]
    pub fn with_grid(grid: Grid, mut generator: G) -> Self {
        let falling_piece = generator.next_piece();
        info!(piece = ?falling_piece, "game started");
        Self {
            grid,
            falling_piece,
            status: None,
            generator,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn falling_piece(&self) -> &Piece {
        &self.falling_piece
    }

    /// The rejection waiting to be shown on the next frame.
    #[must_use]
    pub fn status(&self) -> Option<MoveRejection> {
        self.status
    }

    /// Checks that every filled cell of the candidate maps to an empty grid cell.
    #[must_use]
    pub fn is_legal(&self, candidate: &Piece) -> bool {
        !self.grid.is_colliding(candidate)
    }

    #[must_use]
    pub fn can_move_down(&self) -> bool {
        self.falling_piece
            .moved_down()
            .is_some_and(|piece| self.is_legal(&piece))
    }

    /// Commits `candidate` if it is legal, otherwise records `rejection`.
    fn commit(
        &mut self,
        candidate: Option<Piece>,
        rejection: MoveRejection,
    ) -> Result<(), MoveRejection> {
        match candidate {
            Some(piece) if self.is_legal(&piece) => {
                self.falling_piece = piece;
                Ok(())
            }
            _ => {
                trace!(%rejection, "candidate rejected");
                self.status = Some(rejection);
                Err(rejection)
            }
        }
    }

    pub fn try_move(&mut self, direction: MoveDirection) -> Result<(), MoveRejection> {
        let candidate = self.falling_piece.moved(direction);
        self.commit(candidate, MoveRejection::Move { direction })?;
        debug!(%direction, position = ?self.falling_piece.position(), "piece moved");
        Ok(())
    }

    pub fn try_rotate(&mut self, direction: RotateDirection) -> Result<(), MoveRejection> {
        let candidate = self.falling_piece.rotated(direction);
        self.commit(Some(candidate), MoveRejection::Rotate { direction })?;
        debug!(%direction, shape = ?self.falling_piece.shape(), "piece rotated");
        Ok(())
    }

    /// Moves the piece down one row, or freezes it if that is not possible.
    pub fn step_gravity(&mut self) -> Gravity {
        match self.falling_piece.moved_down() {
            Some(piece) if self.is_legal(&piece) => {
                self.falling_piece = piece;
                Gravity::Descended
            }
            _ => {
                self.freeze();
                Gravity::Frozen
            }
        }
    }

    /// Merges the falling piece into the grid and spawns the next one.
    pub fn freeze(&mut self) {
        self.grid.fill_piece(&self.falling_piece);
        let next = self.generator.next_piece();
        info!(frozen = ?self.falling_piece, spawned = ?next, "piece frozen");
        self.falling_piece = next;
    }

    /// Checks whether the game has ended.
    ///
    /// The game is over when the falling piece is stuck on row 0, or when it
    /// was spawned on top of settled cells.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        let stuck_on_top = !self.can_move_down() && self.falling_piece.position().row() == 0;
        stuck_on_top || !self.is_legal(&self.falling_piece)
    }

    /// Renders the grid with the falling piece merged in, then clears the status message.
    ///
    /// The grid itself is not modified.
    pub fn render(&mut self) -> Frame {
        let mut scratch = self.grid.clone();
        scratch.fill_piece(&self.falling_piece);
        Frame::new(scratch.to_string(), self.status.take())
    }

    /// Applies an already parsed command; gravity is not applied.
    pub fn apply(&mut self, command: Command) -> Result<(), MoveRejection> {
        match command {
            Command::Move(direction) => self.try_move(direction),
            Command::Rotate(direction) => self.try_rotate(direction),
        }
    }

    /// Plays one turn for one line of player input.
    ///
    /// An accepted command is followed by one step of gravity. A piece that
    /// cannot descend at the end of the turn is frozen, at most once per turn.
    pub fn play_turn(&mut self, input: &str) -> TurnOutcome {
        let command = Command::parse(input);
        let accepted = match command {
            Some(command) => self.apply(command).is_ok(),
            None => {
                trace!(input, "undefined move");
                self.status = Some(MoveRejection::UndefinedMove);
                false
            }
        };

        let mut frozen = accepted && self.step_gravity().is_frozen();
        if !frozen && !self.can_move_down() {
            self.freeze();
            frozen = true;
        }

        TurnOutcome {
            command,
            accepted,
            frozen,
        }
    }
}
