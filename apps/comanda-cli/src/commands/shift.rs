//! # Shift Commands
//!
//! Entrance and exit of the operator on duty.

use std::io::{BufRead, Write};
use tracing::{info, warn};

use crate::console::Console;
use crate::error::CliResult;
use crate::state::SessionState;
use comanda_core::CoreError;
use comanda_journal::Journal;

/// Registers the start of a shift.
///
/// The vacancy check runs before the name prompt, so a second operator is
/// turned away without being asked anything.
pub fn register_entrance<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    journal: &Journal,
    session: &mut SessionState,
) -> CliResult<()> {
    if let Err(e) = session.shift.ensure_vacant() {
        warn!(error = %e, "Entrance rejected");
        console.say(e)?;
        return Ok(());
    }

    let name = console.ask("Nombre del encargado/a: ")?;
    let at = session.now();
    let event = match session.shift.enter(&name, at) {
        Ok(event) => event,
        Err(e) => {
            warn!(error = %e, "Entrance rejected");
            console.warn(e)?;
            return Ok(());
        }
    };

    journal.shifts().record(&event)?;
    info!(operator = %event.operator, "Shift started");
    console.say("✅ Entrada registrada.")
}

/// Registers the end of the current shift.
pub fn register_exit<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    journal: &Journal,
    session: &mut SessionState,
) -> CliResult<()> {
    let at = session.now();
    let event = match session.shift.exit(at) {
        Ok(event) => event,
        Err(e @ CoreError::NoOperatorOnDuty) => {
            warn!("Exit rejected: nobody on duty");
            console.warn(e)?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    journal.shifts().record(&event)?;
    info!(operator = %event.operator, "Shift ended");
    console.say("✅ Salida registrada.")
}
