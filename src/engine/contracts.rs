//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, InvariantViolation, MoveInvariants, Step};
use super::{Board, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the label must name one of the 9 cells.
pub struct LabelInRange;

impl LabelInRange {
    /// Resolves the label to a position.
    pub fn check(label: u8) -> Result<Position, MoveError> {
        Position::from_label(label).ok_or(MoveError::OutOfRange(label))
    }
}

/// Precondition: the target cell must not hold a mark.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks the cell at `pos`.
    pub fn check(board: &Board, pos: Position) -> Result<(), MoveError> {
        if board.is_marked(pos) {
            Err(MoveError::CellOccupied(pos))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: in range first, then empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, returning the target position.
    #[instrument(skip(board))]
    pub fn check(board: &Board, label: u8) -> Result<Position, MoveError> {
        let pos = LabelInRange::check(label)?;
        CellIsEmpty::check(board, pos)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Label is in 1-9
/// - Cell is empty
///
/// Postconditions:
/// - Board grows by exactly one mark
/// - Marks still alternate
pub struct MoveContract;

impl Contract<Board, Move> for MoveContract {
    fn pre(board: &Board, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(board, action.label).map(|_| ())
    }

    fn post(before: &Board, after: &Board) -> Result<(), InvariantViolation> {
        MoveInvariants::check_all(&Step::new(before, after)).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Move postcondition failed");
            InvariantViolation::new(descriptions)
        })
    }
}
