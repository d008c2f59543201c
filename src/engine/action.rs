//! Moves and the ways a move can be refused.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A proposed move: `mark` wants the cell labeled `label`.
///
/// The label is kept raw so that an out-of-range choice can still be
/// described and rejected by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being played.
    pub mark: Mark,
    /// The 1-based cell label chosen.
    pub label: u8,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(mark: Mark, label: u8) -> Self {
        Self { mark, label }
    }

    /// Returns the mark making this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the chosen label.
    pub fn label(&self) -> u8 {
        self.label
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.label)
    }
}

/// Why a move was refused. Both kinds are recoverable: the same player
/// simply chooses again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The label is not in 1-9.
    #[display("Cell {} is out of range (must be 1-9)", _0)]
    OutOfRange(u8),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),
}

impl std::error::Error for MoveError {}
