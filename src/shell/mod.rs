//! Console front end: renders the board, reads moves and runs the session.

mod config;
mod input;
mod messages;
mod render;
mod session;

pub use config::ShellConfig;
pub use input::{is_blank, parse_answer, parse_label, read_line};
pub use render::render_board;
pub use session::{Scoreboard, Session};
