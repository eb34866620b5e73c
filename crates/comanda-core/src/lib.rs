//! # comanda-core: Pure Business Logic for Comanda
//!
//! Everything the counter needs to know about money, the menu, orders,
//! sales and shifts, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Comanda Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 comanda-cli (terminal dialogue)                 │   │
//! │  │    Main menu ──► Shift ──► Take order ──► Ticket ──► Viewer     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ comanda-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  money  │ │  menu   │ │  types  │ │  shift  │ │ receipt │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO FILES • NO STDIN • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 comanda-journal (text files)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Exact decimal `Money` with half-up display rounding
//! - [`validation`] - Parsing of operator-typed integers, amounts and names
//! - [`menu`] - The fixed, ordered menu catalog
//! - [`types`] - Order lines, orders, sales and shift events
//! - [`shift`] - Who is on duty, and the entrance/exit transitions
//! - [`receipt`] - Text rendering of journal blocks, tickets and shift lines
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use comanda_core::{MenuCatalog, Money, Order};
//!
//! let menu = MenuCatalog::default();
//! let burger = menu.item_at(1).unwrap();
//!
//! let mut order = Order::new();
//! order.add_line(burger, 2).unwrap();
//!
//! assert_eq!(order.subtotal().to_string(), "ARS$7000.00");
//! assert_eq!(Money::from_major(10000) - order.subtotal(), Money::from_major(3000));
//! ```

pub mod error;
pub mod menu;
pub mod money;
pub mod receipt;
pub mod shift;
pub mod types;
pub mod validation;

pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::{MenuCatalog, MenuItem};
pub use money::Money;
pub use shift::{ShiftRegister, ShiftState};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Prefix printed in front of every amount.
pub const CURRENCY_PREFIX: &str = "ARS$";

/// `strftime` pattern used for every timestamp written or shown.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Smallest quantity accepted for one order line.
pub const MIN_LINE_QUANTITY: u32 = 1;

/// Largest quantity accepted for one order line.
///
/// Catches slips like typing 200 instead of 2.
pub const MAX_LINE_QUANTITY: u32 = 50;

/// Every sale block in the sales journal starts with this text.
/// Counting lines that start with it yields the number of recorded sales.
pub const SALE_HEADER_MARKER: &str = "--- Venta #";

/// Width of the dashed rule closing a sale block.
pub const SALE_RULE_WIDTH: usize = 46;

/// Width of the rules framing an on-screen ticket.
pub const TICKET_WIDTH: usize = 32;
