//! Win detection for the mark that just moved.

use super::super::{Board, Cell, Mark, Position};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line entirely held by `mark`, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, mark: Mark) -> Option<[Position; 3]> {
    LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == Cell::Marked(mark)))
}

/// Checks if `mark` holds any complete line.
///
/// Only the mover needs checking: a move can never complete the
/// opponent's line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board, mark: Mark) -> bool {
    winning_line(board, mark).is_some()
}
