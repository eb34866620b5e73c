//! # Repository Module
//!
//! One repository per journal file.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  CLI command                                                            │
//! │       │                                                                 │
//! │       │  journal.sales().record(&sale)                                  │
//! │       ▼                                                                 │
//! │  SaleJournal                                                            │
//! │  ├── next_sale_id(&self)                                                │
//! │  └── record(&self, sale)                                                │
//! │       │                                                                 │
//! │       │  open(append) → write block → close                            │
//! │       ▼                                                                 │
//! │  ventas.txt                                                             │
//! │                                                                         │
//! │  File paths and line layouts stay behind this module.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`SaleJournal`](sale::SaleJournal) - Sale id scan and sale blocks
//! - [`ShiftJournal`](shift::ShiftJournal) - Entrance / exit lines

pub mod sale;
pub mod shift;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{JournalError, JournalResult};

/// Opens `path` for append (creating it if needed), writes `text` and closes it.
pub(crate) fn append_text(path: &Path, text: &str) -> JournalResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| JournalError::append(path, e))?;

    file.write_all(text.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| JournalError::append(path, e))
}
