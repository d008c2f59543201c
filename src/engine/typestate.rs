//! Typestate state machine for one match.
//!
//! The phase lives in the type parameter, so a finished match has no
//! `play()` and an unfinished one has no `winner()`.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::game::{apply_move, evaluate, next_turn};
use super::phases::{Drawn, InProgress, Outcome, Won};
use super::{Board, Mark, Position};
use std::marker::PhantomData;
use tracing::{debug, info, instrument};

/// One match, parameterised by its phase.
///
/// - `Match<InProgress>` accepts moves
/// - `Match<Won>` knows its winner
/// - `Match<Drawn>` is a full board with no line
#[derive(Debug, Clone)]
pub struct Match<S> {
    board: Board,
    /// Mark to move while in progress; the last mover once finished.
    to_move: Mark,
    _phase: PhantomData<S>,
}

/// Result of a legal move: the phase the match moved into.
#[derive(Debug)]
pub enum Transition {
    /// Match continues with the other mark.
    InProgress(Match<InProgress>),
    /// The mover completed a line.
    Won(Match<Won>),
    /// The board is full with no line.
    Drawn(Match<Drawn>),
}

impl Transition {
    /// Returns the board in whichever phase.
    pub fn board(&self) -> &Board {
        match self {
            Transition::InProgress(game) => game.board(),
            Transition::Won(game) => game.board(),
            Transition::Drawn(game) => game.board(),
        }
    }

    /// Returns the outcome this transition represents.
    pub fn outcome(&self) -> Outcome {
        match self {
            Transition::InProgress(_) => Outcome::InProgress,
            Transition::Won(game) => Outcome::Win(game.winner()),
            Transition::Drawn(_) => Outcome::Draw,
        }
    }
}

/// An illegal move, carrying the untouched match back to the caller.
#[derive(Debug)]
pub struct Rejected {
    game: Match<InProgress>,
    error: MoveError,
}

impl Rejected {
    /// Why the move was refused.
    pub fn error(&self) -> MoveError {
        self.error
    }

    /// Recovers the match so the same mark can try again.
    pub fn into_game(self) -> Match<InProgress> {
        self.game
    }

    /// Splits into the match and the error.
    pub fn into_parts(self) -> (Match<InProgress>, MoveError) {
        (self.game, self.error)
    }
}

impl std::fmt::Display for Rejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} rejected: {}", self.game.to_move, self.error)
    }
}

// ─────────────────────────────────────────────────────────────
//  Constructor - always starts InProgress with X to move
// ─────────────────────────────────────────────────────────────

impl Match<InProgress> {
    /// Creates a match on a fresh board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            _phase: PhantomData,
        }
    }

    /// Plays the current mark on the cell labeled `label`.
    ///
    /// Consumes the match and returns the phase it moved into. The winner is
    /// checked for the mover before the draw check; only when neither holds
    /// does the turn pass to the other mark.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected`] holding the unchanged match when the label is out
    /// of range or the cell is occupied.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn play(mut self, label: u8) -> Result<Transition, Rejected> {
        let mover = self.to_move;
        let action = Move::new(mover, label);

        #[cfg(debug_assertions)]
        let before = self.board.clone();

        let applied = MoveContract::pre(&self.board, &action)
            .and_then(|()| apply_move(&mut self.board, action.label(), action.mark()));
        if let Err(error) = applied {
            debug!(%error, "Move rejected");
            return Err(Rejected { game: self, error });
        }

        #[cfg(debug_assertions)]
        {
            let checked = MoveContract::post(&before, &self.board);
            debug_assert!(checked.is_ok(), "{:?}", checked);
        }

        match evaluate(&self.board, mover) {
            Outcome::Win(winner) => {
                info!(%winner, "Match won");
                Ok(Transition::Won(self.into_phase()))
            }
            Outcome::Draw => {
                info!("Match drawn");
                Ok(Transition::Drawn(self.into_phase()))
            }
            Outcome::InProgress => {
                self.to_move = next_turn(mover);
                Ok(Transition::InProgress(self))
            }
        }
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the cells that can still be played.
    pub fn legal_positions(&self) -> Vec<Position> {
        Position::open(&self.board)
    }

    fn into_phase<T>(self) -> Match<T> {
        Match {
            board: self.board,
            to_move: self.to_move,
            _phase: PhantomData,
        }
    }
}

impl Default for Match<InProgress> {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Common methods available on all phases
// ─────────────────────────────────────────────────────────────

impl<S> Match<S> {
    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

// ─────────────────────────────────────────────────────────────
//  Terminal phases
// ─────────────────────────────────────────────────────────────

impl Match<Won> {
    /// Returns the mark that completed a line.
    pub fn winner(&self) -> Mark {
        self.to_move
    }

    /// Returns the cells of the completed line.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        super::rules::winning_line(&self.board, self.to_move)
    }
}
