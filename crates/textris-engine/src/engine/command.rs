use crate::{MoveDirection, RotateDirection};

/// A player command, one per turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Command {
    #[display("move piece {_0}")]
    Move(MoveDirection),
    #[display("rotate piece {_0}")]
    Rotate(RotateDirection),
}

/// A key and the command it triggers.
pub type KeyBinding = (char, Command);

/// Key bindings used both for parsing input and for the on-screen legend.
pub const KEY_BINDINGS: [KeyBinding; 4] = [
    ('a', Command::Move(MoveDirection::Left)),
    ('d', Command::Move(MoveDirection::Right)),
    ('w', Command::Rotate(RotateDirection::Clockwise)),
    ('s', Command::Rotate(RotateDirection::CounterClockwise)),
];

impl Command {
    /// Parses one line of player input.
    ///
    /// The trailing line terminator is ignored and matching is case-insensitive.
    /// Anything else, including an empty line, is not a command.
    ///
    /// # Examples
    ///
    /// ```
    /// use textris_engine::{Command, MoveDirection};
    ///
    /// assert_eq!(Command::parse("A\n"), Some(Command::Move(MoveDirection::Left)));
    /// assert_eq!(Command::parse("x"), None);
    /// assert_eq!(Command::parse("\n"), None);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let mut chars = line.chars();
        let (Some(key), None) = (chars.next(), chars.next()) else {
            return None;
        };
        let key = key.to_ascii_lowercase();
        KEY_BINDINGS
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, command)| *command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_binding() {
        for (key, command) in KEY_BINDINGS {
            assert_eq!(Command::parse(&key.to_string()), Some(command));
            assert_eq!(Command::parse(&format!("{key}\n")), Some(command));
            assert_eq!(Command::parse(&format!("{key}\r\n")), Some(command));
            let upper = key.to_ascii_uppercase();
            assert_eq!(Command::parse(&format!("{upper}\n")), Some(command));
        }
    }

    #[test]
    fn test_parse_rejects_other_input() {
        for line in ["", "\n", "q\n", "aa\n", " a\n", "left\n", "ä"] {
            assert_eq!(Command::parse(line), None, "{line:?} should not parse");
        }
    }

    #[test]
    fn test_bindings_are_unique() {
        for (i, (key, command)) in KEY_BINDINGS.iter().enumerate() {
            for (other_key, other_command) in &KEY_BINDINGS[i + 1..] {
                assert_ne!(key, other_key);
                assert_ne!(command, other_command);
            }
        }
    }

    #[test]
    fn test_command_display() {
        assert_eq!(
            Command::Move(MoveDirection::Right).to_string(),
            "move piece right"
        );
        assert_eq!(
            Command::Rotate(RotateDirection::CounterClockwise).to_string(),
            "rotate piece counter clockwise"
        );
    }
}
