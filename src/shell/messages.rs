//! Player-facing text.

use crate::engine::Mark;

/// Heading printed above the board.
pub const TITLE: &str = "--- Juego del Gato (Tic Tac Toe) ---";

/// Separator between board rows.
pub const ROW_SEPARATOR: &str = "---|---|---";

/// Rule printed under the board.
pub const CLOSING_RULE: &str = "---------------------------------";

/// Re-prompt after non-numeric or out-of-range input.
pub const INVALID_ENTRY: &str = "Entrada invalida. Por favor, elige un numero entre 1 y 9: ";

/// Notice after choosing a cell that is already marked.
pub const CELL_OCCUPIED: &str = "Casilla ocupada. Intenta de nuevo.";

/// Announcement for a full board without a line.
pub const DRAW: &str = "¡Es un empate!";

/// Replay question asked after every match.
pub const PLAY_AGAIN: &str = "¿Quieren jugar de nuevo? (s/n): ";

/// Printed once when the session ends.
pub const FAREWELL: &str = "¡Gracias por jugar! Adios.";

/// Prompt asking `mark` for a cell.
pub fn turn_prompt(mark: Mark) -> String {
    format!("Turno del jugador '{}'. Elige una casilla (1-9): ", mark)
}

/// Announcement for a won match.
pub fn winner(mark: Mark) -> String {
    format!("¡El jugador {} ha ganado!", mark)
}
