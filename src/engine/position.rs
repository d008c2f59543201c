//! Cell addressing: names, 1-based labels, indices and (row, col) pairs.

use super::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Cells per side of the grid.
pub const SIDE: usize = 3;

/// Cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// A position on the board.
///
/// Labels fill the grid left-to-right, top-to-bottom: label `n` sits at
/// `row = (n - 1) / 3`, `col = (n - 1) % 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (label 1)
    TopLeft,
    /// Top-center (label 2)
    TopCenter,
    /// Top-right (label 3)
    TopRight,
    /// Middle-left (label 4)
    MiddleLeft,
    /// Center (label 5)
    Center,
    /// Middle-right (label 6)
    MiddleRight,
    /// Bottom-left (label 7)
    BottomLeft,
    /// Bottom-center (label 8)
    BottomCenter,
    /// Bottom-right (label 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in label order.
    pub const ALL: [Position; CELLS] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable name, used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts position to its selection label (1-9).
    pub fn label(self) -> u8 {
        self as u8 + 1
    }

    /// Row of this position (0 is the top row).
    pub fn row(self) -> usize {
        self.index() / SIDE
    }

    /// Column of this position (0 is the left column).
    pub fn col(self) -> usize {
        self.index() % SIDE
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a selection label; `None` outside 1-9.
    #[instrument]
    pub fn from_label(label: u8) -> Option<Self> {
        label
            .checked_sub(1)
            .and_then(|index| Self::from_index(usize::from(index)))
    }

    /// Creates position from a (row, col) pair.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row >= SIDE || col >= SIDE {
            return None;
        }
        Self::from_index(row * SIDE + col)
    }

    /// Positions whose cell is still unmarked.
    #[instrument(skip(board))]
    pub fn open(board: &Board) -> Vec<Position> {
        Self::iter().filter(|pos| !board.is_marked(*pos)).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Mark;

    #[test]
    fn test_label_formula_matches_row_col() {
        for label in 1..=9u8 {
            let pos = Position::from_label(label).expect("label in range");
            let zero_based = usize::from(label - 1);
            assert_eq!(pos.row(), zero_based / 3);
            assert_eq!(pos.col(), zero_based % 3);
            assert_eq!(pos.label(), label);
        }
    }

    #[test]
    fn test_from_label_rejects_out_of_range() {
        assert_eq!(Position::from_label(0), None);
        assert_eq!(Position::from_label(10), None);
        assert_eq!(Position::from_label(u8::MAX), None);
    }

    #[test]
    fn test_from_row_col() {
        assert_eq!(Position::from_row_col(0, 0), Some(Position::TopLeft));
        assert_eq!(Position::from_row_col(1, 1), Some(Position::Center));
        assert_eq!(Position::from_row_col(2, 0), Some(Position::BottomLeft));
        assert_eq!(Position::from_row_col(3, 0), None);
        assert_eq!(Position::from_row_col(0, 3), None);
    }

    #[test]
    fn test_iter_matches_all() {
        let iterated: Vec<Position> = Position::iter().collect();
        assert_eq!(iterated, Position::ALL.to_vec());
    }

    #[test]
    fn test_open_filters_marked() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::X);
        board.place(Position::Center, Mark::O);

        let open = Position::open(&board);
        assert_eq!(open.len(), 7);
        assert!(!open.contains(&Position::TopLeft));
        assert!(!open.contains(&Position::Center));
        assert!(open.contains(&Position::BottomRight));
    }
}
