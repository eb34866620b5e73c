//! # State Module
//!
//! Session state for the counter terminal.
//!
//! Instead of one struct containing everything, state is split by concern
//! and each command borrows only what it needs:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────────┐      │
//! │  │  AppConfig   │  │     Journal      │  │    SessionState      │      │
//! │  │              │  │ (comanda-journal)│  │                      │      │
//! │  │  store_name  │  │  ventas.txt      │  │  ShiftRegister       │      │
//! │  │  data_dir    │  │  registro.txt    │  │  clock               │      │
//! │  │  menu        │  │                  │  │                      │      │
//! │  └──────────────┘  └──────────────────┘  └──────────────────────┘      │
//! │   read-only          opened at startup    mutated by entrance/exit     │
//! │                                                                         │
//! │  take_order(console, &config, &journal, &session)                      │
//! │  register_entrance(console, &journal, &mut session)                    │
//! │  show_file(console, path, title)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The process is single-threaded and blocking, so nothing here needs a
//! lock. The shift lives only in memory: a restart always begins with
//! nobody on duty.

mod config;
mod session;

pub use config::AppConfig;
pub use session::{Clock, SessionState};
