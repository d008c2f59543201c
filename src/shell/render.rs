//! Stateless board rendering for the console.

use super::config::ShellConfig;
use super::messages::{CLOSING_RULE, ROW_SEPARATOR, TITLE};
use crate::engine::{Board, Cell, Mark, Position, SIDE};
use crossterm::{
    cursor::MoveTo,
    execute,
    style::Stylize,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use tracing::instrument;

/// Draws the board, optionally highlighting a completed line.
///
/// Each row reads ` a | b | c`; empty cells show their label.
#[instrument(skip(out, board))]
pub fn render_board<W: Write>(
    out: &mut W,
    board: &Board,
    config: &ShellConfig,
    highlight: Option<[Position; 3]>,
) -> io::Result<()> {
    if *config.clear_screen() {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }

    writeln!(out)?;
    writeln!(out, "{}", TITLE)?;
    for (row, cells) in board.rows().enumerate() {
        let painted: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let highlighted = Position::from_row_col(row, col)
                    .zip(highlight)
                    .is_some_and(|(pos, line)| line.contains(&pos));
                paint(*cell, config, highlighted)
            })
            .collect();
        writeln!(out, " {}", painted.join(" | "))?;
        if row + 1 < SIDE {
            writeln!(out, "{}", ROW_SEPARATOR)?;
        }
    }
    writeln!(out, "{}", CLOSING_RULE)?;
    out.flush()
}

/// Formats one cell, styling marks when colour is on.
fn paint(cell: Cell, config: &ShellConfig, highlighted: bool) -> String {
    let text = cell.to_string();
    match cell {
        Cell::Marked(mark) if *config.color() => {
            let styled = match mark {
                Mark::X => text.red().bold(),
                Mark::O => text.blue().bold(),
            };
            if highlighted {
                styled.underlined().to_string()
            } else {
                styled.to_string()
            }
        }
        Cell::Empty(_) if *config.color() => text.dark_grey().to_string(),
        _ => text,
    }
}
