//! The session loop: matches back to back while the players want more.

use super::config::ShellConfig;
use super::input::{is_blank, parse_answer, parse_label, read_line};
use super::messages;
use super::render::render_board;
use crate::engine::{Board, Mark, Match, MoveError, Outcome, Position, Transition};
use anyhow::{Result, bail};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Results accumulated over one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Matches won by X.
    x_wins: u32,
    /// Matches won by O.
    o_wins: u32,
    /// Matches drawn.
    draws: u32,
}

impl Scoreboard {
    /// Counts a finished match. In-progress outcomes are ignored.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Mark::X) => self.x_wins += 1,
            Outcome::Win(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => warn!("Ignoring unfinished match"),
        }
    }

    /// Total matches counted.
    pub fn matches(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Marcador: X {} | O {} | Empates {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Drives matches between two humans over a reader and a writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: ShellConfig,
    scoreboard: Scoreboard,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty scoreboard.
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            input,
            output,
            config,
            scoreboard: Scoreboard::default(),
        }
    }

    /// Plays matches until the players decline a rematch.
    ///
    /// # Errors
    ///
    /// Fails if the input closes in the middle of a match or the output
    /// cannot be written.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Scoreboard> {
        info!("Session started");
        loop {
            let outcome = self.play_match()?;
            self.scoreboard.record(outcome);
            writeln!(self.output, "{}", self.scoreboard)?;

            if !self.wants_rematch()? {
                break;
            }
            debug!(played = self.scoreboard.matches(), "Starting another match");
        }

        writeln!(self.output, "\n{}", messages::FAREWELL)?;
        self.output.flush()?;
        info!(scoreboard = %self.scoreboard, "Session finished");
        Ok(self.scoreboard)
    }

    /// Plays one match from a fresh board to a terminal outcome.
    ///
    /// # Errors
    ///
    /// Fails if the input closes before the match ends or the output cannot
    /// be written.
    #[instrument(skip(self))]
    pub fn play_match(&mut self) -> Result<Outcome> {
        let mut game = Match::new();
        let mut notice: Option<&'static str> = None;

        loop {
            self.show(game.board(), None)?;
            if let Some(text) = notice.take() {
                writeln!(self.output, "{}", text)?;
            }

            let mark = game.to_move();
            let label = self.read_label(mark)?;

            game = match game.play(label) {
                Ok(Transition::InProgress(next)) => next,
                Ok(Transition::Won(done)) => {
                    self.show(done.board(), done.winning_line())?;
                    writeln!(self.output, "{}", messages::winner(done.winner()))?;
                    return Ok(Outcome::Win(done.winner()));
                }
                Ok(Transition::Drawn(done)) => {
                    self.show(done.board(), None)?;
                    writeln!(self.output, "{}", messages::DRAW)?;
                    return Ok(Outcome::Draw);
                }
                Err(rejected) => {
                    debug!(%rejected, "Asking the same player again");
                    notice = Some(match rejected.error() {
                        MoveError::CellOccupied(_) => messages::CELL_OCCUPIED,
                        MoveError::OutOfRange(_) => messages::INVALID_ENTRY.trim_end(),
                    });
                    rejected.into_game()
                }
            };
        }
    }

    /// Results so far.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Everything written so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn show(&mut self, board: &Board, highlight: Option<[Position; 3]>) -> Result<()> {
        render_board(&mut self.output, board, &self.config, highlight)?;
        Ok(())
    }

    /// Prompts until a number in 1-9 is typed. Occupancy is the engine's call.
    ///
    /// Blank lines are skipped without a message.
    fn read_label(&mut self, mark: Mark) -> Result<u8> {
        write!(self.output, "{}", messages::turn_prompt(mark))?;
        self.output.flush()?;

        loop {
            let Some(line) = read_line(&mut self.input)? else {
                bail!("Input closed while waiting for player {}", mark);
            };
            if is_blank(&line) {
                continue;
            }

            match parse_label(&line) {
                Some(label) if (1..=9).contains(&label) => return Ok(label),
                _ => {
                    debug!(input = %line.trim(), "Malformed cell choice");
                    write!(self.output, "{}", messages::INVALID_ENTRY)?;
                    self.output.flush()?;
                }
            }
        }
    }

    /// Asks the replay question; closed input counts as no.
    ///
    /// Blank lines are skipped until an answer arrives.
    fn wants_rematch(&mut self) -> Result<bool> {
        write!(self.output, "\n{}", messages::PLAY_AGAIN)?;
        self.output.flush()?;

        while let Some(line) = read_line(&mut self.input)? {
            if !is_blank(&line) {
                return Ok(parse_answer(&line));
            }
        }
        Ok(false)
    }
}
