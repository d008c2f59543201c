//! Phase marker types and match outcomes.
//!
//! The markers exist solely to encode the match phase in the type of
//! [`Match`](super::Match). They have no runtime representation.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Phase marker: moves are still being accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InProgress;

/// Phase marker: the last mover completed a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Won;

/// Phase marker: the board filled up without a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Drawn;

/// State of a match as read from the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line and free cells remain.
    InProgress,
    /// The mark completed a line.
    Win(Mark),
    /// Every cell is marked and nobody won.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the match can no longer change.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
