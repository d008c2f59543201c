//! The engine's public contract as plain functions over a [`Board`].
//!
//! Everything here is pure apart from [`apply_move`], which writes a single
//! cell. Nothing performs I/O.

use super::action::MoveError;
use super::contracts::LegalMove;
use super::phases::Outcome;
use super::rules::{check_draw, check_winner};
use super::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Returns a fresh board: cell `i` shows label `i + 1`, nothing is marked.
pub fn new_board() -> Board {
    Board::new()
}

/// Resolves `label` to an empty cell or says why it cannot be played.
///
/// # Errors
///
/// `MoveError::OutOfRange` when the label is not in 1-9,
/// `MoveError::CellOccupied` when the cell already holds a mark.
pub fn validate(board: &Board, label: u8) -> Result<Position, MoveError> {
    LegalMove::check(board, label)
}

/// Checks if `label` is in 1-9 and its cell is unmarked.
pub fn is_legal(board: &Board, label: u8) -> bool {
    validate(board, label).is_ok()
}

/// Writes `mark` into the cell labeled `label`.
///
/// The board is left untouched when the move is not legal, so repeated
/// illegal attempts never change it.
///
/// # Errors
///
/// Same as [`validate`].
#[instrument(skip(board))]
pub fn apply_move(board: &mut Board, label: u8, mark: Mark) -> Result<Position, MoveError> {
    let pos = validate(board, label)?;
    board.place(pos, mark);
    debug!(position = %pos, "Mark placed");
    Ok(pos)
}

/// Hands the turn to the other mark.
pub fn next_turn(mark: Mark) -> Mark {
    mark.opponent()
}

/// Reads the outcome from the board after `mover` played.
///
/// The winner is checked before fullness, so a board that is both full and
/// won reports the win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mover: Mark) -> Outcome {
    if check_winner(board, mover) {
        Outcome::Win(mover)
    } else if check_draw(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_move_touches_one_cell() {
        let mut board = new_board();
        let before = board.clone();

        let pos = apply_move(&mut board, 6, Mark::O).expect("legal move");
        assert_eq!(pos, Position::MiddleRight);

        for other in Position::ALL {
            if other != pos {
                assert_eq!(board.get(other), before.get(other));
            }
        }
        assert!(!is_legal(&board, 6));
    }

    #[test]
    fn test_apply_move_rejects_without_mutation() {
        let mut board = new_board();
        apply_move(&mut board, 1, Mark::X).expect("legal move");
        let snapshot = board.clone();

        for _ in 0..3 {
            assert_eq!(
                apply_move(&mut board, 1, Mark::O),
                Err(MoveError::CellOccupied(Position::TopLeft))
            );
            assert_eq!(apply_move(&mut board, 0, Mark::O), Err(MoveError::OutOfRange(0)));
        }
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_evaluate_prefers_win_over_full_board() {
        let mut board = new_board();
        // Ends as X X X / O O X / X O O; the ninth move completes the top row.
        for (label, mark) in [
            (1, Mark::X),
            (4, Mark::O),
            (2, Mark::X),
            (5, Mark::O),
            (6, Mark::X),
            (8, Mark::O),
            (7, Mark::X),
            (9, Mark::O),
        ] {
            apply_move(&mut board, label, mark).expect("legal move");
            assert_eq!(evaluate(&board, mark), Outcome::InProgress);
        }
        apply_move(&mut board, 3, Mark::X).expect("legal move");

        assert!(check_draw(&board));
        assert_eq!(evaluate(&board, Mark::X), Outcome::Win(Mark::X));
    }
}
