//! # Sale Journal
//!
//! Sale numbering and sale blocks in `ventas.txt`.
//!
//! ## Sale Numbering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Sale Lifecycle                                    │
//! │                                                                         │
//! │  1. NEXT ID                                                            │
//! │     └── next_sale_id() → scan file, count "--- Venta #" lines, +1      │
//! │         (missing file counts as zero sales)                            │
//! │                                                                         │
//! │  2. RECORD                                                             │
//! │     └── record(&sale) → append one block, close the file               │
//! │                                                                         │
//! │  The id is never stored anywhere else: it is recomputed from the file  │
//! │  for every sale, so it stays correct across restarts.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::append_text;
use crate::error::{JournalError, JournalResult};
use comanda_core::receipt::{is_sale_header, render_sale_record};
use comanda_core::Sale;

/// Repository for the sales journal file.
#[derive(Debug, Clone)]
pub struct SaleJournal {
    path: PathBuf,
}

impl SaleJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SaleJournal { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of sale blocks currently in the journal.
    pub fn count_sales(&self) -> JournalResult<u32> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(JournalError::read(&self.path, e)),
        };

        let mut count: u32 = 0;
        for line in BufReader::new(file).split(b'\n') {
            let line = line.map_err(|e| JournalError::read(&self.path, e))?;
            if is_sale_header(&String::from_utf8_lossy(&line)) {
                count = count.saturating_add(1);
            }
        }

        Ok(count)
    }

    /// Id for the next sale: 1 + sales already recorded.
    pub fn next_sale_id(&self) -> JournalResult<u32> {
        let next = self.count_sales()?.saturating_add(1);
        debug!(path = %self.path.display(), next, "Computed next sale id");
        Ok(next)
    }

    /// Appends the sale block.
    ///
    /// If this fails the sale is unsaved; no partial block is cleaned up.
    pub fn record(&self, sale: &Sale) -> JournalResult<()> {
        debug!(id = sale.id, operator = %sale.operator, "Appending sale");
        append_text(&self.path, &render_sale_record(sale))
    }
}
