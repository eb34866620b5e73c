//! # Commands Module
//!
//! One function per main-menu option.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── shift.rs    ◄─── 1) Registrar ENTRADA, 2) Registrar SALIDA
//! ├── order.rs    ◄─── 3) Tomar pedido
//! └── viewer.rs   ◄─── 4) Ver ventas.txt, 5) Ver registro.txt
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  App main loop reads "Opción: "                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  command(console, <only the state it needs>) -> CliResult<()>          │
//! │         │                                                               │
//! │         ├── rule violated (CoreError) → message printed, Ok(())        │
//! │         │   nothing written, back to the main menu                     │
//! │         │                                                               │
//! │         ├── journal write failed → Err(CliError::Journal), fatal       │
//! │         │                                                               │
//! │         └── input closed → Err(CliError::EndOfInput), quiet exit       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod order;
pub mod shift;
pub mod viewer;
