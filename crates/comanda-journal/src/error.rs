//! # Journal Error Types
//!
//! Error types for journal file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (open / read / write)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  JournalError (this module) ← Adds the action and the file path        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CliError::Journal (in app) ← Fatal: logged, printed, exit status 1    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Journal operation errors.
#[derive(Debug, Error)]
pub enum JournalError {
    /// The file could not be created.
    ///
    /// ## When This Occurs
    /// - Data directory is not writable
    /// - Disk full
    #[error("Could not create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but could not be read.
    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Opening for append or writing the record failed.
    ///
    /// The record is considered unsaved; nothing is rolled back.
    #[error("Could not append to {}: {source}", .path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl JournalError {
    /// Creates a Create error for `path`.
    pub fn create(path: &Path, source: io::Error) -> Self {
        JournalError::Create {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates a Read error for `path`.
    pub fn read(path: &Path, source: io::Error) -> Self {
        JournalError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates an Append error for `path`.
    pub fn append(path: &Path, source: io::Error) -> Self {
        JournalError::Append {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The file the failed operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            JournalError::Create { path, .. }
            | JournalError::Read { path, .. }
            | JournalError::Append { path, .. } => path,
        }
    }
}

/// Result type for journal operations.
pub type JournalResult<T> = Result<T, JournalError>;
