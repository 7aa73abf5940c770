#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Context};
use rand::rngs::SmallRng;

use crate::{coordinate::Coordinate, player::Player, BoardError};

/// Malformed coordinate input. Rejected before anything reaches the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Not exactly two values.
    WrongArity(usize),
    /// A value is not a non-negative integer.
    NotANumber,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongArity(_) => write!(f, "Enter 2 coordinates: row and column"),
            InputError::NotANumber => write!(f, "Enter numbers"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a `row col` line (1-indexed, whitespace or comma separated) into a
/// 0-indexed coordinate. Bounds are left for the board to check.
pub fn parse_coord(input: &str) -> Result<Coordinate, InputError> {
    let parts: Vec<&str> = input
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 2 {
        return Err(InputError::WrongArity(parts.len()));
    }
    let mut values = [0i32; 2];
    for (slot, part) in values.iter_mut().zip(&parts) {
        if !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::NotANumber);
        }
        *slot = part.parse().map_err(|_| InputError::NotANumber)?;
    }
    Ok(Coordinate::from_one_based(values[0], values[1]))
}

/// Human player reading targets from `input` and writing prompts and
/// feedback to `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, msg: fmt::Arguments<'_>) {
        let _ = writeln!(self.output, "{}", msg);
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn propose_target(&mut self, _rng: &mut SmallRng, _size: usize) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("reading move from input")?;
            if read == 0 {
                return Err(anyhow!("input closed before a move was entered"));
            }
            match parse_coord(line.trim()) {
                Ok(coord) => return Ok(coord),
                Err(e) => self.say(format_args!(" {}", e)),
            }
        }
    }

    fn name(&self) -> &str {
        "Player"
    }

    fn on_rejected(&mut self, _target: Coordinate, error: &BoardError) {
        self.say(format_args!("{}", error));
    }
}
