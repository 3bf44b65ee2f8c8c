//! Error types for move handling.

use thiserror::Error;

/// Represents an error occurred when making a move.
///
/// Every rejection is reported as a value; the engine has no panicking
/// failure mode during normal play. A rejected move leaves the position
/// exactly as it was before the attempt.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already been decided; no further moves are accepted.
    #[error("the game is already over")]
    GameOver,
    /// The source square holds a piece of the side that is not to move.
    #[error("the piece does not belong to the side to move")]
    NotYourTurn,
    /// The movement pattern of the piece does not permit the move, the
    /// destination holds a friendly piece, or the source square is empty.
    #[error("the piece cannot move to there")]
    IllegalShape,
    /// The move is shape-legal but would leave the mover's own king
    /// attacked; it has been reverted.
    #[error("the king is in check")]
    OwnKingInCheck,
}
