//! Monotonic board invariant: a move adds exactly one mark and changes
//! nothing else.

use super::{Invariant, Step};
use crate::engine::Position;

/// Invariant: the set of occupied cells only grows, one cell per move.
///
/// Every cell marked before the move keeps its mark, and exactly one
/// previously empty cell becomes marked.
pub struct MonotonicBoardInvariant;

impl<'a> Invariant<Step<'a>> for MonotonicBoardInvariant {
    fn holds(step: &Step<'a>) -> bool {
        let mut added = 0;

        for pos in Position::ALL {
            let before = step.before.get(pos);
            let after = step.after.get(pos);

            if before.is_marked() {
                if before != after {
                    return false;
                }
            } else if after.is_marked() {
                added += 1;
            } else if before != after {
                // An empty cell must keep its label.
                return false;
            }
        }

        added == 1
    }

    fn description() -> &'static str {
        "Board grows by exactly one mark per move"
    }
}
