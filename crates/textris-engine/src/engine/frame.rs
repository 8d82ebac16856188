use std::fmt;

use crate::{KEY_BINDINGS, MoveRejection};

/// One rendered view of the game: the board with the falling piece merged in,
/// the control legend and the status message of the previous turn.
///
/// `Display` yields the plain-text frame; a terminal front end may style the
/// board and status separately and print [`Legend`] between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    board: String,
    status: Option<MoveRejection>,
}

impl Frame {
    pub(crate) fn new(board: String, status: Option<MoveRejection>) -> Self {
        Self { board, status }
    }

    /// The board, one newline-terminated line per grid row.
    #[must_use]
    pub fn board(&self) -> &str {
        &self.board
    }

    /// The rejection of the previous turn, if any.
    #[must_use]
    pub fn status(&self) -> Option<MoveRejection> {
        self.status
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.board)?;
        write!(f, "{Legend}")?;
        match self.status {
            Some(status) => writeln!(f, "{status}"),
            None => writeln!(f),
        }
    }
}

/// The control legend, generated from [`KEY_BINDINGS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Legend;

impl fmt::Display for Legend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Control:")?;
        for (key, command) in KEY_BINDINGS {
            writeln!(f, "    to {command} - press button {key}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::MoveDirection;

    use super::*;

    #[test]
    fn test_legend_text() {
        assert_eq!(
            Legend.to_string(),
            "Control:\n\
             \x20   to move piece left - press button a\n\
             \x20   to move piece right - press button d\n\
             \x20   to rotate piece clockwise - press button w\n\
             \x20   to rotate piece counter clockwise - press button s\n"
        );
    }

    #[test]
    fn test_frame_display_without_status() {
        let frame = Frame::new("*  *\n".to_owned(), None);
        assert_eq!(frame.to_string(), format!("*  *\n{Legend}\n"));
    }

    #[test]
    fn test_frame_display_with_status() {
        let status = MoveRejection::Move {
            direction: MoveDirection::Left,
        };
        let frame = Frame::new("**\n".to_owned(), Some(status));
        assert_eq!(
            frame.to_string(),
            format!("**\n{Legend}Move left is not correct!\n")
        );
    }
}
