//! Core domain types for the gato board.

use super::position::{CELLS, Position, SIDE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Mark {
    /// Player X (always moves first).
    X,
    /// Player O.
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
///
/// An unplayed cell carries its 1-based label so the board can be shown
/// to players as-is. Once marked, the label is gone for the rest of the match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Cell {
    /// Not played yet; holds the label players type to select it.
    #[display("{_0}")]
    Empty(u8),
    /// Claimed by a mark.
    #[display("{_0}")]
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Marked(mark) => Some(mark),
            Cell::Empty(_) => None,
        }
    }

    /// Checks if the cell holds X or O.
    pub fn is_marked(self) -> bool {
        matches!(self, Cell::Marked(_))
    }
}

/// 3x3 board stored row-major.
///
/// Serialized as the bare cell array. Deserializing checks that every empty
/// cell still carries its own label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Cell; CELLS]", into = "[Cell; CELLS]")]
pub struct Board {
    /// Cells in row-major order (index 0-8, labels 1-9).
    cells: [Cell; CELLS],
}

/// An empty cell whose label does not match its place on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Cell at index {} must be labeled {}, found {}", index, expected, found)]
pub struct MislabeledCell {
    /// Row-major index of the cell.
    pub index: usize,
    /// Label the cell should carry.
    pub expected: u8,
    /// Label it actually carried.
    pub found: u8,
}

impl std::error::Error for MislabeledCell {}

impl TryFrom<[Cell; CELLS]> for Board {
    type Error = MislabeledCell;

    fn try_from(cells: [Cell; CELLS]) -> Result<Self, Self::Error> {
        for (pos, cell) in Position::ALL.into_iter().zip(cells) {
            match cell {
                Cell::Empty(found) if found != pos.label() => {
                    return Err(MislabeledCell {
                        index: pos.index(),
                        expected: pos.label(),
                        found,
                    });
                }
                _ => {}
            }
        }
        Ok(Self { cells })
    }
}

impl From<Board> for [Cell; CELLS] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl Board {
    /// Creates a board where every cell shows its own label.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: Position::ALL.map(|pos| Cell::Empty(pos.label())),
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Checks if the cell at `pos` holds a mark.
    pub fn is_marked(&self, pos: Position) -> bool {
        self.get(pos).is_marked()
    }

    /// Writes `mark` into the cell at `pos`.
    ///
    /// Legality is the caller's business; see [`crate::apply_move`].
    pub(crate) fn place(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.index()] = Cell::Marked(mark);
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Iterates the board one row at a time, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(SIDE)
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.mark() == Some(mark))
            .count()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_marked())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
