//! # Console
//!
//! Prompt, validate, retry. The input readers block on one line at a time
//! and never give up: every bad answer prints a warning and the same
//! prompt again. Only end of input (or a broken terminal) gets out.
//!
//! ```text
//! Opción: 9
//! ⚠️  Debe ser <= 5.
//! Opción: x
//! ⚠️  Ingrese solo números enteros.
//! Opción: 3        ──► Ok(3)
//! ```
//!
//! Generic over `BufRead`/`Write` so the whole dialogue runs against
//! stdin/stdout in production and against in-memory buffers in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::{trace, warn};

use crate::error::{CliError, CliResult};
use comanda_core::validation::{parse_amount, parse_int};
use comanda_core::{Money, ValidationError};

/// Prefix for every warning shown to the operator.
const WARNING: &str = "⚠️  ";

/// Shown when a free-text answer cannot be decoded.
const UNREADABLE: &str = "Texto inválido. Ingrese solo caracteres legibles.";

/// Interactive terminal: one input stream, one output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Prints one line.
    pub fn say(&mut self, text: impl Display) -> CliResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prints pre-formatted text as is.
    pub fn print_block(&mut self, text: &str) -> CliResult<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Prints a warning line.
    pub fn warn(&mut self, message: impl Display) -> CliResult<()> {
        writeln!(self.output, "{WARNING}{message}")?;
        Ok(())
    }

    /// Shows `prompt` and returns the trimmed answer.
    ///
    /// A line that is not valid UTF-8 gets a warning and the prompt again.
    ///
    /// ## Errors
    /// [`CliError::EndOfInput`] when the input stream is exhausted.
    pub fn ask(&mut self, prompt: &str) -> CliResult<String> {
        loop {
            match self.read_answer(prompt)? {
                Answer::Text(text) => return Ok(text),
                Answer::Undecodable(_) => self.warn(UNREADABLE)?,
            }
        }
    }

    /// Reads an integer, optionally bounded, asking until it is valid.
    pub fn read_int(&mut self, prompt: &str, min: Option<i64>, max: Option<i64>) -> CliResult<i64> {
        loop {
            let answer = match self.read_answer(prompt)? {
                Answer::Text(text) => text,
                Answer::Undecodable(_) => {
                    self.warn(ValidationError::NotAnInteger)?;
                    continue;
                }
            };
            match parse_int(&answer, min, max) {
                Ok(value) => return Ok(value),
                Err(e) => self.warn(e)?,
            }
        }
    }

    /// Reads a decimal amount (`.` or `,` separator), asking until it parses.
    ///
    /// No range check: the caller compares against what is owed.
    pub fn read_decimal(&mut self, prompt: &str) -> CliResult<Money> {
        loop {
            let parsed = match self.read_answer(prompt)? {
                Answer::Text(text) => parse_amount(&text),
                Answer::Undecodable(input) => Err(ValidationError::InvalidAmount { input }),
            };
            match parsed {
                Ok(amount) => return Ok(amount),
                Err(e) => self.warn(e)?,
            }
        }
    }

    /// One prompt, one line.
    fn read_answer(&mut self, prompt: &str) -> CliResult<Answer> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            // Keep the next output off the dangling prompt line.
            writeln!(self.output)?;
            return Err(CliError::EndOfInput);
        }

        match String::from_utf8(raw) {
            Ok(line) => {
                trace!(prompt, answer = line.trim(), "Operator input");
                Ok(Answer::Text(line.trim().to_string()))
            }
            Err(e) => {
                warn!(prompt, "Operator input is not valid UTF-8");
                let lossy = String::from_utf8_lossy(e.as_bytes()).trim().to_string();
                Ok(Answer::Undecodable(lossy))
            }
        }
    }
}

/// A line as typed, or its lossy rendering when it was not UTF-8.
enum Answer {
    Text(String),
    Undecodable(String),
}
