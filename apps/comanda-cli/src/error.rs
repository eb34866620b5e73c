//! # CLI Error Type
//!
//! Errors that end a command or the whole session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Comanda                                │
//! │                                                                         │
//! │  ValidationError ──► Console prints warning, asks again (never here)   │
//! │                                                                         │
//! │  CoreError ────────► Command prints warning, returns Ok(())            │
//! │                      (no journal write happened)                       │
//! │                                                                         │
//! │  CliError::EndOfInput ──► session ends, exit status 0                  │
//! │  CliError::Terminal   ──► fatal, exit status 1                         │
//! │  CliError::Journal    ──► fatal, exit status 1                         │
//! │  CliError::Domain     ──► fatal, exit status 1 (broken invariant)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use comanda_core::CoreError;
use comanda_journal::JournalError;
use std::io;
use thiserror::Error;

/// Session-level errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input stream was closed while waiting for an answer.
    #[error("End of input")]
    EndOfInput,

    /// Reading the prompt answer or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    /// A journal file could not be created, read or appended.
    #[error(transparent)]
    Journal(#[from] JournalError),

    /// A domain rule failed where the dialogue had already checked it.
    #[error("Unexpected domain error: {0}")]
    Domain(#[from] CoreError),
}

impl CliError {
    /// True when the session should end quietly with success.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, CliError::EndOfInput)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
