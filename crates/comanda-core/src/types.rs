//! # Domain Types
//!
//! Core domain types used throughout Comanda.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   OrderLine     │   │      Order      │   │      Sale       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code (frozen)  │──►│  lines          │──►│  id (sequential)│       │
//! │  │  name (frozen)  │   │  subtotal()     │   │  timestamp      │       │
//! │  │  unit_price     │   └─────────────────┘   │  operator       │       │
//! │  │  quantity       │                         │  subtotal/paid  │       │
//! │  └─────────────────┘                         │  change         │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   ShiftEvent    │   │ ShiftEventKind  │                             │
//! │  │  timestamp      │   │  Entrance       │                             │
//! │  │  kind, operator │   │  Exit           │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Order lines copy code, name and price from the menu item when they are
//! created, so a recorded sale never depends on the catalog afterwards.

use chrono::NaiveDateTime;

use crate::error::{CoreError, CoreResult};
use crate::menu::MenuItem;
use crate::money::Money;
use crate::validation::validate_quantity;

// =============================================================================
// Order Line
// =============================================================================

/// One (item, quantity) pick inside an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    /// Item code at time of selection (frozen).
    pub code: String,
    /// Item name at time of selection (frozen).
    pub name: String,
    /// Unit price at time of selection (frozen).
    pub unit_price: Money,
    /// Always within `MIN_LINE_QUANTITY..=MAX_LINE_QUANTITY`.
    pub quantity: u32,
}

impl OrderLine {
    /// Snapshots `item` with the given quantity.
    pub fn new(item: &MenuItem, quantity: u32) -> CoreResult<Self> {
        validate_quantity(i64::from(quantity))?;

        Ok(OrderLine {
            code: item.code.clone(),
            name: item.name.clone(),
            unit_price: item.unit_price,
            quantity,
        })
    }

    /// unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order being taken at the counter.
///
/// ## Invariants
/// - Lines keep selection order
/// - Re-selecting an item adds a new line; lines are never merged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    pub fn new() -> Self {
        Order::default()
    }

    /// Appends a line for `item`.
    pub fn add_line(&mut self, item: &MenuItem, quantity: u32) -> CoreResult<&OrderLine> {
        let line = OrderLine::new(item, quantity)?;
        self.lines.push(line);
        Ok(&self.lines[self.lines.len() - 1])
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Σ unit price × quantity.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(OrderLine::line_total).sum()
    }

    /// Checks a payment against the subtotal and returns the change.
    ///
    /// ## Example
    /// ```rust
    /// use comanda_core::{CoreError, MenuCatalog, Money, Order};
    ///
    /// let menu = MenuCatalog::default();
    /// let mut order = Order::new();
    /// order.add_line(menu.item_at(1).unwrap(), 2).unwrap();
    ///
    /// assert_eq!(order.change_for(Money::from_major(10000)), Ok(Money::from_major(3000)));
    /// assert!(matches!(
    ///     order.change_for(Money::from_major(6500)),
    ///     Err(CoreError::InsufficientPayment { .. })
    /// ));
    /// ```
    pub fn change_for(&self, paid: Money) -> CoreResult<Money> {
        let total = self.subtotal();

        if paid < total {
            return Err(CoreError::InsufficientPayment {
                total,
                paid,
                shortfall: total - paid,
            });
        }

        Ok(paid - total)
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A completed, paid order ready to be journaled.
///
/// Only [`Sale::complete`] builds one, so every `Sale` has at least one
/// line and `paid >= subtotal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sale {
    /// Sequential number, 1 + sales already in the journal.
    pub id: u32,
    pub timestamp: NaiveDateTime,
    pub operator: String,
    pub lines: Vec<OrderLine>,
    pub subtotal: Money,
    pub paid: Money,
    /// `paid - subtotal`, never negative.
    pub change: Money,
}

impl Sale {
    /// Closes an order into a sale.
    ///
    /// ## Errors
    /// - [`CoreError::EmptyOrder`] when the order has no lines
    /// - [`CoreError::InsufficientPayment`] when `paid` is below the subtotal
    pub fn complete(
        id: u32,
        timestamp: NaiveDateTime,
        operator: impl Into<String>,
        order: Order,
        paid: Money,
    ) -> CoreResult<Self> {
        if order.is_empty() {
            return Err(CoreError::EmptyOrder);
        }

        let change = order.change_for(paid)?;
        let subtotal = order.subtotal();

        Ok(Sale {
            id,
            timestamp,
            operator: operator.into(),
            lines: order.lines,
            subtotal,
            paid,
            change,
        })
    }
}

// =============================================================================
// Shift Events
// =============================================================================

/// What happened to the shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftEventKind {
    /// Operator checked in.
    Entrance,
    /// Operator checked out.
    Exit,
}

impl ShiftEventKind {
    /// Label written to the registry, padded so both kinds align.
    pub const fn label(&self) -> &'static str {
        match self {
            ShiftEventKind::Entrance => "ENTRADA",
            ShiftEventKind::Exit => "SALIDA ",
        }
    }
}

/// One line of the shift registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftEvent {
    pub timestamp: NaiveDateTime,
    pub kind: ShiftEventKind,
    pub operator: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuCatalog;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(13, 45, 2)
            .unwrap()
    }

    #[test]
    fn test_order_lines_are_not_merged() {
        let menu = MenuCatalog::default();
        let burger = menu.item_at(1).unwrap();

        let mut order = Order::new();
        order.add_line(burger, 1).unwrap();
        order.add_line(burger, 2).unwrap();

        assert_eq!(order.lines().len(), 2);
        assert_eq!(order.subtotal(), Money::from_major(10500));
    }

    #[test]
    fn test_order_line_rejects_bad_quantity() {
        let menu = MenuCatalog::default();
        let mut order = Order::new();
        assert!(order.add_line(menu.item_at(1).unwrap(), 0).is_err());
        assert!(order.add_line(menu.item_at(1).unwrap(), 51).is_err());
        assert!(order.is_empty());
    }

    #[test]
    fn test_change_is_exact() {
        let item = MenuItem::new("X1", "Test", Money::new(Decimal::new(123, 2)));
        let mut order = Order::new();
        order.add_line(&item, 3).unwrap(); // 3.69

        let change = order.change_for(Money::new(Decimal::new(5, 0))).unwrap();
        assert_eq!(change, Money::new(Decimal::new(131, 2)));
    }

    #[test]
    fn test_shortfall_is_reported() {
        let menu = MenuCatalog::default();
        let mut order = Order::new();
        order.add_line(menu.item_at(1).unwrap(), 2).unwrap();

        let err = order.change_for(Money::from_major(6500)).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientPayment {
                total: Money::from_major(7000),
                paid: Money::from_major(6500),
                shortfall: Money::from_major(500),
            }
        );
    }

    #[test]
    fn test_sale_complete() {
        let menu = MenuCatalog::default();
        let mut order = Order::new();
        order.add_line(menu.item_at(1).unwrap(), 2).unwrap();

        let sale = Sale::complete(7, at(), "Ana", order, Money::from_major(10000)).unwrap();
        assert_eq!(sale.id, 7);
        assert_eq!(sale.subtotal, Money::from_major(7000));
        assert_eq!(sale.change, Money::from_major(3000));
        assert_eq!(sale.lines.len(), 1);
    }

    #[test]
    fn test_sale_rejects_empty_order() {
        let result = Sale::complete(1, at(), "Ana", Order::new(), Money::from_major(100));
        assert_eq!(result, Err(CoreError::EmptyOrder));
    }

    #[test]
    fn test_exact_payment_gives_zero_change() {
        let menu = MenuCatalog::default();
        let mut order = Order::new();
        order.add_line(menu.item_at(4).unwrap(), 1).unwrap();

        let sale = Sale::complete(1, at(), "Ana", order, Money::from_major(1500)).unwrap();
        assert_eq!(sale.change, Money::zero());
    }

    #[test]
    fn test_shift_labels_align() {
        assert_eq!(
            ShiftEventKind::Entrance.label().len(),
            ShiftEventKind::Exit.label().len()
        );
    }
}
