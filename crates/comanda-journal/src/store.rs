//! # Journal Store
//!
//! Locates the two journal files and makes sure they exist.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Data directory                                  │
//! │                                                                         │
//! │  App startup                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  JournalConfig::new(data_dir) ← file names, overridable                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Journal::open(config) ← creates empty files when missing              │
//! │       │                                                                 │
//! │       ├──► journal.sales()   → SaleJournal  (ventas.txt)               │
//! │       └──► journal.shifts()  → ShiftJournal (registro.txt)             │
//! │                                                                         │
//! │  Handles are cheap path holders; each write opens, appends and closes. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{JournalError, JournalResult};
use crate::repository::sale::SaleJournal;
use crate::repository::shift::ShiftJournal;

/// Default sales journal file name.
pub const DEFAULT_SALES_FILE: &str = "ventas.txt";

/// Default shift registry file name.
pub const DEFAULT_REGISTRY_FILE: &str = "registro.txt";

// =============================================================================
// Configuration
// =============================================================================

/// Where the journals live.
///
/// ## Example
/// ```rust
/// use comanda_journal::JournalConfig;
///
/// let config = JournalConfig::new("/var/lib/comanda").registry_file("turnos.txt");
/// assert!(config.sales_path.ends_with("ventas.txt"));
/// assert!(config.registry_path.ends_with("turnos.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct JournalConfig {
    /// Directory holding both files.
    pub data_dir: PathBuf,

    /// Full path of the sales journal.
    pub sales_path: PathBuf,

    /// Full path of the shift registry.
    pub registry_path: PathBuf,
}

impl JournalConfig {
    /// Uses the default file names inside `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        JournalConfig {
            sales_path: data_dir.join(DEFAULT_SALES_FILE),
            registry_path: data_dir.join(DEFAULT_REGISTRY_FILE),
            data_dir,
        }
    }

    /// Sets the sales journal file name.
    pub fn sales_file(mut self, name: impl AsRef<Path>) -> Self {
        self.sales_path = self.data_dir.join(name);
        self
    }

    /// Sets the shift registry file name.
    pub fn registry_file(mut self, name: impl AsRef<Path>) -> Self {
        self.registry_path = self.data_dir.join(name);
        self
    }
}

// =============================================================================
// Journal
// =============================================================================

/// Main journal handle providing access to both files.
#[derive(Debug, Clone)]
pub struct Journal {
    config: JournalConfig,
}

impl Journal {
    /// Opens the journals, creating empty files (and the data directory)
    /// when they are missing. Existing content is never touched.
    pub fn open(config: JournalConfig) -> JournalResult<Self> {
        info!(
            data_dir = %config.data_dir.display(),
            "Opening journals"
        );

        fs::create_dir_all(&config.data_dir)
            .map_err(|e| JournalError::create(&config.data_dir, e))?;

        ensure_file(&config.sales_path)?;
        ensure_file(&config.registry_path)?;

        Ok(Journal { config })
    }

    pub fn config(&self) -> &JournalConfig {
        &self.config
    }

    /// Returns the sales journal.
    pub fn sales(&self) -> SaleJournal {
        SaleJournal::new(self.config.sales_path.clone())
    }

    /// Returns the shift registry.
    pub fn shifts(&self) -> ShiftJournal {
        ShiftJournal::new(self.config.registry_path.clone())
    }
}

/// Creates `path` empty if it does not exist yet.
fn ensure_file(path: &Path) -> JournalResult<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| JournalError::create(path, e))?;

    debug!(path = %path.display(), "Journal file ready");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
