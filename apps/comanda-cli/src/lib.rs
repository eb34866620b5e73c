//! # Comanda Terminal Library
//!
//! The interactive counter session. `main.rs` only calls [`run`]; the
//! dialogue itself is generic over its input and output so tests can
//! script it end to end with [`run_session`].
//!
//! ## Module Organization
//! ```text
//! comanda_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── app.rs          ◄─── Main menu loop
//! ├── console.rs      ◄─── Prompt / validate / retry
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── AppConfig (store name, files, menu)
//! │   └── session.rs  ◄─── Shift on duty, clock
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── shift.rs    ◄─── Entrance / exit
//! │   ├── order.rs    ◄─── Order → payment → sale → ticket
//! │   └── viewer.rs   ◄─── Show a journal file
//! └── error.rs        ◄─── CliError
//! ```

pub mod app;
pub mod commands;
pub mod console;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use app::App;
use comanda_journal::Journal;
use console::Console;
use error::CliResult;
use state::{AppConfig, SessionState};

/// Runs the counter on stdin/stdout with the default configuration.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Open Journals ────────────────────────────────────────────────────► │
/// │     • ventas.txt and registro.txt in the working directory              │
/// │     • Created empty when missing                                        │
/// │                                                                         │
/// │  3. Serve the Main Menu ──────────────────────────────────────────────► │
/// │     • Until "0) Salir" or end of input (exit status 0)                  │
/// │     • A journal or terminal failure ends the program (exit status 1)    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    init_tracing();

    info!("Starting Comanda");

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_session(AppConfig::default(), SessionState::new(), stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Fatal error");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Opens the journals and serves one session on the given streams.
pub fn run_session<R: BufRead, W: Write>(
    config: AppConfig,
    session: SessionState,
    input: R,
    output: W,
) -> CliResult<()> {
    let journal = Journal::open(config.journal_config())?;
    let mut app = App::new(Console::new(input, output), config, journal, session);
    app.run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never mix with the dialogue on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=info` - Shift changes and sales
/// - `RUST_LOG=comanda_journal=debug` - File operations
/// - Default: WARN (rejected operations and failures only)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
