//! # File Viewer
//!
//! Reads a journal back for the operator. Read-only: a missing file is
//! reported, never created.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::error::{JournalError, JournalResult};

/// What a journal file looks like right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileView {
    /// The file does not exist.
    Missing,
    /// The file exists and holds only whitespace.
    Empty,
    /// Trimmed content.
    Content(String),
}

impl FileView {
    /// Loads `path`.
    pub fn load(path: &Path) -> JournalResult<Self> {
        let raw = match fs::read(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Viewed file does not exist");
                return Ok(FileView::Missing);
            }
            Err(e) => return Err(JournalError::read(path, e)),
        };

        let text = String::from_utf8_lossy(&raw);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Ok(FileView::Empty)
        } else {
            Ok(FileView::Content(trimmed.to_string()))
        }
    }
}

/// The content, or `(vacío)` / `(no existe)`.
impl fmt::Display for FileView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileView::Missing => f.write_str("(no existe)"),
            FileView::Empty => f.write_str("(vacío)"),
            FileView::Content(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_not_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ventas.txt");

        let view = FileView::load(&path).unwrap();
        assert_eq!(view, FileView::Missing);
        assert_eq!(view.to_string(), "(no existe)");
        assert!(!path.exists());
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("registro.txt");
        fs::write(&path, "\n  \n").unwrap();

        let view = FileView::load(&path).unwrap();
        assert_eq!(view, FileView::Empty);
        assert_eq!(view.to_string(), "(vacío)");
    }

    #[test]
    fn test_content_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("registro.txt");
        fs::write(&path, "[x] ENTRADA - Encargado: Ana\n").unwrap();

        assert_eq!(
            FileView::load(&path).unwrap().to_string(),
            "[x] ENTRADA - Encargado: Ana"
        );
    }
}
