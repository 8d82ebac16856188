use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Print, Stylize as _},
    terminal::{Clear, ClearType},
};
use textris_engine::{Frame, GAME_OVER, Legend, PROMPT, Screen};

/// Line-oriented terminal output for the game loop.
///
/// Each frame repaints the whole viewport from the top left corner. Input is
/// read separately, one line at a time, so raw mode is never enabled.
#[derive(Debug)]
pub(crate) struct Terminal<W: Write = Stdout> {
    writer: BufWriter<W>,
}

impl Terminal {
    pub(crate) fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Terminal<W> {
    pub(crate) fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(io::IntoInnerError::into_error)
    }
}

impl<W: Write> Screen for Terminal<W> {
    fn show(&mut self, frame: &Frame) -> io::Result<()> {
        queue!(
            self.writer,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Print(frame.board()),
            Print(Legend),
        )?;
        match frame.status() {
            Some(status) => queue!(self.writer, Print(status.to_string().red()), Print("\n"))?,
            None => queue!(self.writer, Print("\n"))?,
        }
        self.writer.flush()
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.writer, "{PROMPT} ")?;
        self.writer.flush()
    }

    fn game_over(&mut self) -> io::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", GAME_OVER.bold())?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use textris_engine::{FixedPieceGenerator, Game, Piece, ShapeKind};

    use super::*;

    fn play(script: &str) -> String {
        let mut game = Game::with_generator(FixedPieceGenerator::new([Piece::spawn(
            ShapeKind::O,
            1,
        )]));
        let mut terminal = Terminal::new(Vec::new());
        game.play(&mut Cursor::new(script), &mut terminal).unwrap();
        String::from_utf8(terminal.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_frame_is_drawn_with_legend_and_prompt() {
        let output = play("");
        assert!(output.contains("***                  *\n"));
        assert!(output.contains("Control:\n"));
        assert!(output.contains("to rotate piece counter clockwise - press button s\n"));
        assert!(output.ends_with("Your move: "));
        assert!(!output.contains("GAME OVER!"));
    }

    #[test]
    fn test_rejection_is_printed() {
        let output = play("a\n");
        assert!(output.contains("Move left is not correct!"));
    }

    #[test]
    fn test_game_over_is_announced() {
        let output = play(&"w\n".repeat(200));
        assert!(output.contains("GAME OVER!"));
    }
}
