//! # Configuration State
//!
//! Settings fixed at startup. Nothing is read from the environment or a
//! config file: the counter runs from its working directory with the
//! built-in menu. Only logging honours `RUST_LOG`.
//!
//! Read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use comanda_core::MenuCatalog;
use comanda_journal::{JournalConfig, DEFAULT_REGISTRY_FILE, DEFAULT_SALES_FILE};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Shown in the welcome banner
    pub store_name: String,

    /// Directory holding both journals
    pub data_dir: PathBuf,

    /// Sales journal file name
    pub sales_file: String,

    /// Shift registry file name
    pub registry_file: String,

    /// Items offered when taking an order
    pub menu: MenuCatalog,
}

impl AppConfig {
    /// Same settings, journals under `dir`.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Same settings, different menu.
    pub fn with_menu(mut self, menu: MenuCatalog) -> Self {
        self.menu = menu;
        self
    }

    /// Journal locations derived from this config.
    pub fn journal_config(&self) -> JournalConfig {
        JournalConfig::new(self.data_dir.clone())
            .sales_file(&self.sales_file)
            .registry_file(&self.registry_file)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            store_name: "Hamburguesería".to_string(),
            data_dir: PathBuf::from("."),
            sales_file: DEFAULT_SALES_FILE.to_string(),
            registry_file: DEFAULT_REGISTRY_FILE.to_string(),
            menu: MenuCatalog::default(),
        }
    }
}
