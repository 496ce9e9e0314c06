use thiserror::Error;

/// A coordinate outside the 8x8 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("coordinate ({x}, {y}) is outside the board")]
pub struct OutOfBounds {
    pub x: i32,
    pub y: i32,
}

/// Why a placement on an in-bounds cell was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("cell ({x}, {y}) is already occupied")]
    CellOccupied { x: u8, y: u8 },

    #[error("placing at ({x}, {y}) captures nothing")]
    NoCaptures { x: u8, y: u8 },
}

/// Errors returned by [`crate::GameState::make_move`].
///
/// The state the move was attempted on is never modified, so callers can
/// simply ask for another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),

    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),

    #[error("game is already over")]
    GameOver,
}
