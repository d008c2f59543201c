//! Alternating turn invariant: X, O, X, O, ...

use super::{Invariant, Step};
use crate::engine::Mark;

/// Invariant: marks alternate starting with X.
///
/// Read from board contents alone: after any number of alternating moves
/// X has either as many marks as O or exactly one more.
pub struct AlternatingTurnInvariant;

impl<'a> Invariant<Step<'a>> for AlternatingTurnInvariant {
    fn holds(step: &Step<'a>) -> bool {
        let x = step.after.count(Mark::X);
        let o = step.after.count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "Marks alternate (X, O, X, O, ...)"
    }
}
