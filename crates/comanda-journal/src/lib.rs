//! # comanda-journal: Text Journals for Comanda
//!
//! This crate owns the counter's two append-only files.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Comanda Data Flow                                │
//! │                                                                         │
//! │  CLI command (take order / entrance / exit / view)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 comanda-journal (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Journal     │    │  Repositories │    │   Viewer     │  │   │
//! │  │   │  (store.rs)   │    │               │    │ (viewer.rs)  │  │   │
//! │  │   │               │    │ SaleJournal   │    │              │  │   │
//! │  │   │ file paths    │◄───│ ShiftJournal  │    │ FileView     │  │   │
//! │  │   │ bootstrap     │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │   ventas.txt      registro.txt      (UTF-8, append-only)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use comanda_journal::{Journal, JournalConfig};
//!
//! let journal = Journal::open(JournalConfig::new("."))?;
//! let next_id = journal.sales().next_sale_id()?;
//! # Ok::<(), comanda_journal::JournalError>(())
//! ```

pub mod error;
pub mod repository;
pub mod store;
pub mod viewer;

pub use error::{JournalError, JournalResult};
pub use repository::sale::SaleJournal;
pub use repository::shift::ShiftJournal;
pub use store::{Journal, JournalConfig, DEFAULT_REGISTRY_FILE, DEFAULT_SALES_FILE};
pub use viewer::FileView;
