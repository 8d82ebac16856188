use std::io::{self, BufRead};

use tracing::info;

use crate::{Frame, Game, PieceGenerator};

/// Output side of the game loop.
///
/// The engine never talks to a console directly; a front end implements this
/// trait to clear the viewport and draw frames.
pub trait Screen {
    /// Clears the viewport and draws the frame.
    fn show(&mut self, frame: &Frame) -> io::Result<()>;

    /// Asks the player for the next command.
    fn prompt(&mut self) -> io::Result<()>;

    /// Announces the end of the game.
    fn game_over(&mut self) -> io::Result<()>;
}

impl<S: Screen + ?Sized> Screen for &mut S {
    fn show(&mut self, frame: &Frame) -> io::Result<()> {
        (**self).show(frame)
    }

    fn prompt(&mut self) -> io::Result<()> {
        (**self).prompt()
    }

    fn game_over(&mut self) -> io::Result<()> {
        (**self).game_over()
    }
}

/// Text shown by [`Screen::prompt`] front ends.
pub const PROMPT: &str = "Your move:";

/// Text shown by [`Screen::game_over`] front ends.
pub const GAME_OVER: &str = "GAME OVER!";

/// How a call to [`Game::play`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlayOutcome {
    /// A piece got stuck on the top row.
    GameOver,
    /// The command source reached end of input.
    InputClosed,
}

impl<G> Game<G>
where
    G: PieceGenerator,
{
    /// Runs the game loop until the game is over or input ends.
    ///
    /// Each iteration checks for game over, renders, prompts, reads one line
    /// and plays it as a turn. No input is read once the game is over.
    pub fn play<R, S>(&mut self, input: &mut R, screen: &mut S) -> io::Result<PlayOutcome>
    where
        R: BufRead + ?Sized,
        S: Screen + ?Sized,
    {
        let mut line = String::new();
        let mut turns = 0_u64;
        while !self.is_game_over() {
            let frame = self.render();
            screen.show(&frame)?;
            screen.prompt()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                info!(turns, "input closed");
                return Ok(PlayOutcome::InputClosed);
            }
            self.play_turn(&line);
            turns += 1;
        }

        info!(turns, "game over");
        screen.game_over()?;
        Ok(PlayOutcome::GameOver)
    }
}
