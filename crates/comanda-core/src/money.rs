//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  At the counter:                                                        │
//! │    paid 10000.10, total 8500.05 → change must be exactly 1500.05       │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 fixed point (rust_decimal)                       │
//! │    Every sum and difference is exact. Rounding happens only when an    │
//! │    amount is rendered, and it is always half-up to two places.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use comanda_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let price = Money::from_major(3500);
//! let line_total = price.multiply_quantity(2);
//! assert_eq!(line_total.to_string(), "ARS$7000.00");
//!
//! // Half-up, not bankers rounding
//! let odd = Money::new(Decimal::new(10005, 3)); // 10.005
//! assert_eq!(odd.to_string(), "ARS$10.01");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use crate::CURRENCY_PREFIX;

/// Number of fractional digits shown for every amount.
const DISPLAY_SCALE: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in the shop's single currency.
///
/// ## Design Decisions
/// - **Decimal (not cents)**: the operator may type a payment with more
///   than two decimals; the exact value is kept and only rounded on display
/// - **Single field tuple struct**: zero-cost wrapper over `Decimal`
/// - **Ordering is numeric**: `3500` and `3500.00` compare equal
///
/// ## Where Money is Used
/// ```text
/// MenuItem.unit_price ──► OrderLine.line_total ──► Order.subtotal
///                                                        │
///                      Sale.paid ──(paid - subtotal)──► Sale.change
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a whole-unit amount.
    ///
    /// ```rust
    /// use comanda_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(1500).to_string(), "ARS$1500.00");
    /// ```
    #[inline]
    pub fn from_major(units: i64) -> Self {
        Money(Decimal::from(units))
    }

    /// Zero.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// The exact, unrounded amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// True when the amount can be shown with exactly two decimals.
    ///
    /// Values whose mantissa already uses every digit `Decimal` holds
    /// cannot be padded to two places.
    pub fn has_display_precision(&self) -> bool {
        let mut padded = self.0;
        padded.rescale(DISPLAY_SCALE);
        padded.scale() == DISPLAY_SCALE
    }

    /// The amount rounded half-up (away from zero) to exactly two places.
    ///
    /// ## Rounding Explained
    /// ```text
    /// 10.004 → 10.00
    /// 10.005 → 10.01   (bankers rounding would give 10.00)
    /// 0.125  → 0.13    (bankers rounding would give 0.12)
    /// 3500   → 3500.00 (padded to two places)
    /// ```
    pub fn rounded(&self) -> Decimal {
        let mut value = self
            .0
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(DISPLAY_SCALE);
        value
    }

    /// Multiplies a unit price by a line quantity.
    ///
    /// ```rust
    /// use comanda_core::money::Money;
    ///
    /// let unit_price = Money::from_major(1200);
    /// assert_eq!(unit_price.multiply_quantity(3), Money::from_major(3600));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `ARS$` followed by the half-up rounded amount with two decimals.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CURRENCY_PREFIX, self.rounded())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(num: i64, scale: u32) -> Money {
        Money::new(Decimal::new(num, scale))
    }

    #[test]
    fn test_display_pads_to_two_places() {
        assert_eq!(Money::from_major(3500).to_string(), "ARS$3500.00");
        assert_eq!(Money::zero().to_string(), "ARS$0.00");
        assert_eq!(dec(105, 1).to_string(), "ARS$10.50");
    }

    #[test]
    fn test_display_rounds_half_up() {
        assert_eq!(dec(10005, 3).to_string(), "ARS$10.01");
        assert_eq!(dec(10004, 3).to_string(), "ARS$10.00");
        assert_eq!(dec(125, 3).to_string(), "ARS$0.13");
        assert_eq!(dec(135, 3).to_string(), "ARS$0.14");
        assert_eq!(dec(999995, 4).to_string(), "ARS$100.00");
    }

    #[test]
    fn test_formatting_is_repeatable() {
        let amount = dec(1234567, 4);
        assert_eq!(amount.to_string(), amount.to_string());
        assert_eq!(amount.to_string(), "ARS$123.46");
    }

    #[test]
    fn test_arithmetic_is_exact() {
        let paid = dec(1000010, 2); // 10000.10
        let total = dec(850005, 2); // 8500.05
        assert_eq!(paid - total, dec(150005, 2));

        let tenth = dec(1, 1);
        let fifth = dec(2, 1);
        assert_eq!(tenth + fifth, dec(3, 1));
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_major(3500);
        assert_eq!(unit_price.multiply_quantity(2), Money::from_major(7000));
        assert_eq!(unit_price * 3, Money::from_major(10500));
    }

    #[test]
    fn test_sum_of_lines() {
        let total: Money = [Money::from_major(7000), Money::from_major(1500)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_major(8500));
    }

    #[test]
    fn test_equality_ignores_scale() {
        assert_eq!(Money::from_major(3500), dec(350000, 2));
    }

    #[test]
    fn test_display_precision_limit() {
        assert!(Money::from_major(10000).has_display_precision());
        assert!(dec(1_005, 3).has_display_precision());
        assert!(!Money::new(Decimal::MAX).has_display_precision());
        assert!(dec(i64::MAX, 0).has_display_precision());
    }

    proptest! {
        #[test]
        fn prop_third_decimal_rounds_half_up(cents in 0i64..1_000_000_000, third in 0i64..10) {
            let amount = dec(cents * 10 + third, 3);
            let expected_cents = if third >= 5 { cents + 1 } else { cents };
            prop_assert_eq!(amount.rounded(), Decimal::new(expected_cents, 2));
        }

        #[test]
        fn prop_two_place_amounts_render_unchanged(cents in 0i64..1_000_000_000) {
            let amount = dec(cents, 2);
            prop_assert_eq!(
                amount.to_string(),
                format!("ARS${}.{:02}", cents / 100, cents % 100)
            );
        }
    }
}
