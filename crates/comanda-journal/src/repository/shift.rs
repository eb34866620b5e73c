//! # Shift Registry
//!
//! Appends one line per entrance or exit to `registro.txt`.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::append_text;
use crate::error::JournalResult;
use comanda_core::receipt::render_shift_event;
use comanda_core::ShiftEvent;

/// Repository for the shift registry file.
#[derive(Debug, Clone)]
pub struct ShiftJournal {
    path: PathBuf,
}

impl ShiftJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ShiftJournal { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends the event's registry line.
    pub fn record(&self, event: &ShiftEvent) -> JournalResult<()> {
        debug!(kind = ?event.kind, operator = %event.operator, "Appending shift event");
        append_text(&self.path, &render_shift_event(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use comanda_core::ShiftEventKind;
    use std::fs;
    use tempfile::TempDir;

    fn event(kind: ShiftEventKind, hour: u32) -> ShiftEvent {
        ShiftEvent {
            timestamp: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            kind,
            operator: "Ana".to_string(),
        }
    }

    #[test]
    fn test_lines_are_appended_in_order() {
        let dir = TempDir::new().unwrap();
        let journal = ShiftJournal::new(dir.path().join("registro.txt"));

        journal.record(&event(ShiftEventKind::Entrance, 8)).unwrap();
        journal.record(&event(ShiftEventKind::Exit, 16)).unwrap();

        assert_eq!(
            fs::read_to_string(journal.path()).unwrap(),
            "[2024-05-01 08:00:00] ENTRADA - Encargado: Ana\n\
             [2024-05-01 16:00:00] SALIDA  - Encargado: Ana\n"
        );
    }

    #[test]
    fn test_append_failure_names_the_file() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be opened for append.
        let journal = ShiftJournal::new(dir.path());

        let err = journal.record(&event(ShiftEventKind::Entrance, 8)).unwrap_err();
        assert_eq!(err.path(), dir.path());
    }
}
