//! Draw detection.

use super::super::Board;
use tracing::instrument;

/// Checks if every cell is marked.
///
/// Only meaningful once the winner check for the most recent mover came
/// back false; a full board can also be a won board.
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}
