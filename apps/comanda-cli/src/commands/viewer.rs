//! # File Viewer Command

use std::io::{BufRead, Write};
use std::path::Path;
use tracing::debug;

use crate::console::Console;
use crate::error::CliResult;
use comanda_journal::FileView;

/// Prints `=== title ===` followed by the file, `(vacío)` or `(no existe)`.
pub fn show_file<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    path: &Path,
    title: &str,
) -> CliResult<()> {
    debug!(path = %path.display(), "Showing file");
    let view = FileView::load(path)?;

    console.say(format!("\n=== {title} ==="))?;
    console.say(view)
}
