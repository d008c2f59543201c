//! Win and draw rules.

mod draw;
mod win;

pub use draw::check_draw;
pub use win::{LINES, check_winner, winning_line};
