//! # Comanda Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Open the journals in the working directory, creating missing files
//! 3. Run the main menu on stdin/stdout until "0) Salir" or end of input
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    comanda_cli::run()
}
