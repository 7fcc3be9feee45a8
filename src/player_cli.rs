#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};

use log::debug;

use crate::player::CoordinatePrompt;

/// Why a line of input was not a coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Not exactly two values on the line.
    WrongCount,
    /// A value is not a non-negative integer.
    NotANumber,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongCount => write!(f, "Enter exactly two coordinates"),
            InputError::NotANumber => write!(f, "Coordinates must be whole numbers"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a line like `3 5` into a 1-indexed `(x, y)` pair.
pub fn parse_coordinate_pair(line: &str) -> Result<(i32, i32), InputError> {
    let mut parts = line.split_whitespace();
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::WrongCount);
    };
    Ok((parse_axis(x)?, parse_axis(y)?))
}

fn parse_axis(token: &str) -> Result<i32, InputError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber);
    }
    token.parse().map_err(|_| InputError::NotANumber)
}

/// Console prompt reading pairs from `input` and writing to `output`.
pub struct StdinPrompt<R, W> {
    input: R,
    output: W,
}

impl StdinPrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt bound to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdinPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> CoordinatePrompt for StdinPrompt<R, W> {
    fn prompt_pair(&mut self) -> anyhow::Result<(i32, i32)> {
        loop {
            write!(self.output, "Your move (x y): ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("input closed before a move was entered");
            }
            match parse_coordinate_pair(&line) {
                Ok(pair) => return Ok(pair),
                Err(e) => writeln!(self.output, "{}!", e)?,
            }
        }
    }

    fn announce(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{}", message) {
            debug!("could not show message {:?}: {}", message, e);
        }
    }
}
