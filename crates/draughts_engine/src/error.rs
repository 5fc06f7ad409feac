//! Error types for draughts engine
//!
//! Provides custom error types for engine operations including move
//! validation, capture sequence construction and board parsing.
//!
//! Most engine paths degrade instead of failing (see [`crate::make_move::apply_move`]);
//! these errors surface through the strict variants only.

use crate::types::Position;
use thiserror::Error;

/// Errors that can occur in the draughts engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraughtsError {
    /// Move is structurally invalid (source equals destination)
    #[error("Invalid move: from {from} to {to}")]
    InvalidMove { from: Position, to: Position },

    /// A move references a square outside the board
    #[error("Position {position} is off the board (rows and columns must be 0-7)")]
    OffBoard { position: Position },

    /// No piece at source square
    #[error("No piece at source square {position}")]
    NoPieceAt { position: Position },

    /// Capture sequence without any move
    #[error("Capture sequence is empty")]
    EmptySequence,

    /// Jump does not start where the previous jump landed
    #[error("Capture sequence is broken at jump {index}")]
    BrokenChain { index: usize },

    /// Plain move found inside a capture sequence
    #[error("Move {index} of capture sequence does not capture")]
    NotACapture { index: usize },

    /// Player name other than `white` or `black`
    #[error("Unknown player '{0}' (expected white or black)")]
    UnknownPlayer(String),

    /// Difficulty name other than `easy`, `medium` or `hard`
    #[error("Unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),

    /// Board text could not be parsed
    #[error("Failed to parse board at line {line}: {message}")]
    ParseBoard { line: usize, message: String },
}

/// Result type alias for draughts engine operations
pub type DraughtsResult<T> = Result<T, DraughtsError>;
