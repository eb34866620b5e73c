//! # Validation Module
//!
//! Turns the raw text an operator types into checked values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Input Handling Layers                              │
//! │                                                                         │
//! │  Layer 1: Prompt loop (comanda-cli)                                    │
//! │  ├── Reads one line, detects end of input                              │
//! │  └── Prints the error and asks again on failure                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (pure)                                           │
//! │  ├── parse_int      → empty / not an integer / below min / above max   │
//! │  ├── parse_amount   → "10000", "10000.50" or "10000,50"                │
//! │  └── validate_*     → operator names, line quantities                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Domain types (Order, Sale, ShiftRegister)                    │
//! │  └── Re-check their own invariants                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use comanda_core::validation::{parse_amount, parse_int};
//!
//! assert_eq!(parse_int(" 3 ", Some(0), Some(5)), Ok(3));
//! assert_eq!(parse_amount("10000,50"), parse_amount("10000.50"));
//! ```

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::{MAX_LINE_QUANTITY, MIN_LINE_QUANTITY};

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses an optionally bounded integer.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Empty input → [`ValidationError::Required`]
/// - One optional leading `-`, then ASCII digits only, otherwise
///   [`ValidationError::NotAnInteger`]
/// - `min` is checked before `max`, each with its own error
///
/// Digit strings too long for an `i64` are reported against the bound on
/// their side of zero, when that bound exists.
///
/// ## Example
/// ```rust
/// use comanda_core::validation::parse_int;
/// use comanda_core::ValidationError;
///
/// assert_eq!(parse_int("0", Some(0), Some(5)), Ok(0));
/// assert_eq!(parse_int("", Some(0), Some(5)), Err(ValidationError::Required));
/// assert_eq!(parse_int("x", None, None), Err(ValidationError::NotAnInteger));
/// assert_eq!(parse_int("9", Some(0), Some(5)), Err(ValidationError::AboveMaximum { max: 5 }));
/// ```
pub fn parse_int(input: &str, min: Option<i64>, max: Option<i64>) -> ValidationResult<i64> {
    let text = input.trim();

    if text.is_empty() {
        return Err(ValidationError::Required);
    }

    let negative = text.starts_with('-');
    let digits = if negative { &text[1..] } else { text };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NotAnInteger);
    }

    let value = match text.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            return Err(match (negative, min, max) {
                (true, Some(min), _) => ValidationError::BelowMinimum { min },
                (false, _, Some(max)) => ValidationError::AboveMaximum { max },
                _ => ValidationError::NotAnInteger,
            })
        }
    };

    if let Some(min) = min {
        if value < min {
            return Err(ValidationError::BelowMinimum { min });
        }
    }

    if let Some(max) = max {
        if value > max {
            return Err(ValidationError::AboveMaximum { max });
        }
    }

    Ok(value)
}

/// Parses a monetary amount typed by the operator.
///
/// `,` and `.` are both accepted as the decimal separator. No range check
/// happens here; comparing against the total is the caller's job.
///
/// ## Example
/// ```rust
/// use comanda_core::validation::parse_amount;
/// use comanda_core::Money;
///
/// assert_eq!(parse_amount("10000"), Ok(Money::from_major(10000)));
/// assert_eq!(parse_amount("10000,50"), parse_amount("10000.50"));
/// assert!(parse_amount("diez mil").is_err());
/// ```
pub fn parse_amount(input: &str) -> ValidationResult<Money> {
    let normalized = input.trim().replace(',', ".");
    let invalid = || ValidationError::InvalidAmount {
        input: input.trim().to_string(),
    };

    let amount = Decimal::from_str(&normalized)
        .map(Money::new)
        .map_err(|_| invalid())?;

    // Too many digits to print as `ARS$n.nn`.
    if !amount.has_display_precision() {
        return Err(invalid());
    }

    Ok(amount)
}

// =============================================================================
// Domain Validators
// =============================================================================

/// Validates an operator name and returns it trimmed.
///
/// ## Example
/// ```rust
/// use comanda_core::validation::validate_operator_name;
///
/// assert_eq!(validate_operator_name("  Ana "), Ok("Ana".to_string()));
/// assert!(validate_operator_name("   ").is_err());
/// ```
pub fn validate_operator_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::BlankName);
    }

    Ok(name.to_string())
}

/// Validates a quantity for one order line and narrows it to `u32`.
///
/// ## Rules
/// - Must be at least [`MIN_LINE_QUANTITY`]
/// - Must not exceed [`MAX_LINE_QUANTITY`]
pub fn validate_quantity(quantity: i64) -> ValidationResult<u32> {
    u32::try_from(quantity)
        .ok()
        .filter(|q| (MIN_LINE_QUANTITY..=MAX_LINE_QUANTITY).contains(q))
        .ok_or(ValidationError::QuantityOutOfRange {
            quantity,
            min: MIN_LINE_QUANTITY,
            max: MAX_LINE_QUANTITY,
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
