//! Behaviour of the engine operations on scripted boards.

use gato::{
    Board, Cell, Mark, MoveError, Outcome, Position, apply_move, check_draw, check_winner,
    evaluate, is_legal, new_board, next_turn, validate,
};

/// Plays labels in order, alternating from X.
fn play(labels: &[u8]) -> Board {
    let mut board = new_board();
    let mut mark = Mark::X;
    for &label in labels {
        apply_move(&mut board, label, mark).expect("scripted move is legal");
        mark = next_turn(mark);
    }
    board
}

#[test]
fn test_new_board_is_labeled_and_empty() {
    let board = new_board();
    for pos in Position::ALL {
        assert_eq!(board.get(pos), Cell::Empty(pos.label()));
        assert!(is_legal(&board, pos.label()));
    }
    assert!(!check_winner(&board, Mark::X));
    assert!(!check_winner(&board, Mark::O));
    assert!(!check_draw(&board));
}

#[test]
fn test_top_row_win() {
    let board = play(&[1, 5, 2, 4, 3]);
    assert!(check_winner(&board, Mark::X));
    assert!(!check_winner(&board, Mark::O));
    assert_eq!(evaluate(&board, Mark::X), Outcome::Win(Mark::X));
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    // X O X / X O O / O X X
    let board = play(&[1, 2, 3, 5, 4, 6, 8, 7, 9]);
    assert!(check_draw(&board));
    assert!(!check_winner(&board, Mark::X));
    assert!(!check_winner(&board, Mark::O));
    assert_eq!(evaluate(&board, Mark::X), Outcome::Draw);
}

#[test]
fn test_left_column_ends_match_early() {
    let board = play(&[1, 2, 4, 5, 7]);
    assert!(check_winner(&board, Mark::X));
    assert!(!check_draw(&board));
}

#[test]
fn test_diagonal_win() {
    let board = play(&[1, 2, 5, 3, 9]);
    assert!(check_winner(&board, Mark::X));
    assert_eq!(evaluate(&board, Mark::X), Outcome::Win(Mark::X));
}

#[test]
fn test_repeated_illegal_attempts_leave_board_untouched() {
    let mut board = play(&[1]);
    let snapshot = board.clone();

    for _ in 0..3 {
        assert!(!is_legal(&board, 1));
        assert_eq!(
            apply_move(&mut board, 1, Mark::O),
            Err(MoveError::CellOccupied(Position::TopLeft))
        );
        assert_eq!(board, snapshot);
    }

    for label in [0, 10, 255] {
        assert_eq!(validate(&board, label), Err(MoveError::OutOfRange(label)));
        assert!(apply_move(&mut board, label, Mark::O).is_err());
        assert_eq!(board, snapshot);
    }
}

#[test]
fn test_win_on_full_board_is_not_a_draw() {
    // X X X / O O X / X O O, completed by the ninth move.
    let board = play(&[1, 4, 6, 5, 7, 8, 3, 9, 2]);
    assert!(board.is_full());
    assert!(check_winner(&board, Mark::X));
    assert_eq!(evaluate(&board, Mark::X), Outcome::Win(Mark::X));
}

#[test]
fn test_board_round_trips_through_json() {
    let board = play(&[5, 1, 9]);
    let json = serde_json::to_string(&board).expect("serialize");
    let back: Board = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, board);
}

#[test]
fn test_next_turn_alternates() {
    assert_eq!(next_turn(Mark::X), Mark::O);
    assert_eq!(next_turn(next_turn(Mark::X)), Mark::X);
    assert_eq!(next_turn(next_turn(Mark::O)), Mark::O);
}

#[test]
fn test_legality_bounds_on_fresh_board() {
    let board = new_board();
    assert!((1..=9).all(|label| is_legal(&board, label)));
    assert!(!is_legal(&board, 0));
    assert!(!is_legal(&board, 10));
}

#[test]
fn test_applied_cell_becomes_illegal_and_others_stay() {
    let mut board = new_board();
    let placed = apply_move(&mut board, 6, Mark::X).expect("legal move");
    assert_eq!(placed, Position::MiddleRight);
    assert!(!is_legal(&board, 6));

    for pos in Position::ALL.into_iter().filter(|pos| *pos != placed) {
        assert_eq!(board.get(pos), Cell::Empty(pos.label()));
    }
}
