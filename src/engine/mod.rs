//! The game engine: board state, move legality, win/draw detection and turn
//! sequencing. Nothing in here performs I/O.

mod action;
mod contracts;
mod game;
pub mod invariants;
mod phases;
mod position;
mod rules;
mod typestate;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{CellIsEmpty, Contract, LabelInRange, LegalMove, MoveContract};
pub use game::{apply_move, evaluate, is_legal, new_board, next_turn, validate};
pub use phases::{Drawn, InProgress, Outcome, Won};
pub use position::{CELLS, Position, SIDE};
pub use rules::{LINES, check_draw, check_winner, winning_line};
pub use typestate::{Match, Rejected, Transition};
pub use types::{Board, Cell, Mark, MislabeledCell};
