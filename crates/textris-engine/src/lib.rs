pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// A player action that could not be applied.
///
/// Rejections are expected outcomes, not faults: the game state is left
/// unchanged and the message is shown to the player on the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveRejection {
    #[display("Move {direction} is not correct!")]
    Move { direction: MoveDirection },
    #[display("Rotate {direction} is not correct!")]
    Rotate { direction: RotateDirection },
    #[display("Your move is undefined")]
    UndefinedMove,
}
