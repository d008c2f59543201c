//! Presentation settings for the console shell.

use derive_getters::Getters;
use derive_new::new;
use derive_setters::Setters;

/// How the shell draws the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, new)]
#[setters(prefix = "with_")]
pub struct ShellConfig {
    /// Clear the console before every board render.
    clear_screen: bool,
    /// Style marks with ANSI colours.
    color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl ShellConfig {
    /// No clearing and no colours: output that is stable enough to compare.
    pub fn plain() -> Self {
        Self::new(false, false)
    }
}
