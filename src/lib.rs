//! Gato - two-player tic-tac-toe on the console
//!
//! A pure game engine with typestate match phases, and a console shell
//! that drives matches between two people sharing one keyboard.
//!
//! # Architecture
//!
//! - **Engine**: board, move legality, win/draw detection, turn order
//! - **Contracts**: preconditions and invariants checked around every move
//! - **Shell**: rendering, input parsing and the replay loop
//!
//! # Example
//!
//! ```
//! use gato::{Match, Mark, Transition};
//!
//! let game = Match::new();
//! let Ok(Transition::InProgress(game)) = game.play(5) else {
//!     panic!("the centre is open on a fresh board");
//! };
//! assert_eq!(game.to_move(), Mark::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod engine;
mod shell;

// Crate-level exports - Invariants
pub use engine::invariants;

// Crate-level exports - Engine types
pub use engine::{
    Board, CELLS, Cell, Drawn, InProgress, LINES, Mark, Match, MislabeledCell, Move, MoveError,
    Outcome, Position, Rejected, SIDE, Transition, Won,
};

// Crate-level exports - Engine operations
pub use engine::{
    apply_move, check_draw, check_winner, evaluate, is_legal, new_board, next_turn, validate,
    winning_line,
};

// Crate-level exports - Contracts
pub use engine::{CellIsEmpty, Contract, LabelInRange, LegalMove, MoveContract};

// Crate-level exports - Console shell
pub use shell::{
    Scoreboard, Session, ShellConfig, is_blank, parse_answer, parse_label, read_line,
    render_board,
};
