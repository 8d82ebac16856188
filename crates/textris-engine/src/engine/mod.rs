//! Game engine logic and state management.
//!
//! This module drives the core data structures through the turn-based game:
//!
//! - [`Game`] - Grid, falling piece and status message, plus the turn state machine
//! - [`Command`] - Player commands and their key bindings
//! - [`Frame`] - One rendered view of the game
//! - [`PieceGenerator`] - Source of newly spawned pieces
//! - [`Screen`] - Output seam used by [`Game::play`]
//!
//! # Game Flow
//!
//! 1. Create a [`Game`], which spawns the first piece
//! 2. Render and read one command
//! 3. Apply the command; an accepted command is followed by one step of gravity
//! 4. A piece that can no longer descend is frozen into the grid and a new one spawns
//! 5. Repeat until a piece is stuck on the top row
//!
//! # Example
//!
//! ```
//! use textris_engine::{Command, Game, MoveDirection, PieceSeed};
//!
//! let mut game = Game::with_seed(PieceSeed::from_bytes([7; 16]));
//!
//! if game.try_move(MoveDirection::Left).is_ok() {
//!     game.step_gravity();
//! }
//!
//! let turn = game.play_turn("d\n");
//! assert_eq!(turn.command, Some(Command::Move(MoveDirection::Right)));
//!
//! println!("{}", game.render());
//! ```

pub use self::{command::*, frame::*, game::*, piece_generator::*, session::*};

mod command;
mod frame;
mod game;
mod piece_generator;
mod session;
