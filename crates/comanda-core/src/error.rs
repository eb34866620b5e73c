//! # Error Types
//!
//! Domain-specific error types for comanda-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  comanda-core errors (this file)                                       │
//! │  ├── CoreError        - Domain precondition violations                 │
//! │  └── ValidationError  - Operator input that does not parse / fit      │
//! │                                                                         │
//! │  comanda-journal errors (separate crate)                               │
//! │  └── JournalError     - File creation / read / append failures         │
//! │                                                                         │
//! │  comanda-cli errors (in app)                                           │
//! │  └── CliError         - End of input, terminal I/O, journal failures   │
//! │                                                                         │
//! │  ValidationError → re-prompt       CoreError → warning, abort action   │
//! │  JournalError / CliError → fatal (except end of input = quit)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Display text is what the operator reads, so it is in Spanish
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations.
///
/// Each of these aborts the operation that raised it without touching the
/// journals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Entrance attempted while somebody is already on duty.
    #[error("Ya hay un encargado en turno: {operator}. Finalice su turno antes de iniciar otro.")]
    OperatorAlreadyOnDuty { operator: String },

    /// Exit attempted while nobody is on duty.
    #[error("No hay encargado/a en turno.")]
    NoOperatorOnDuty,

    /// Order taking attempted while nobody is on duty.
    #[error("Debe registrar ENTRADA antes de tomar pedidos.")]
    ShiftRequired,

    /// An order with no lines cannot become a sale.
    #[error("Pedido vacío. No se registró venta.")]
    EmptyOrder,

    /// Payment is below the order total.
    ///
    /// ## User Workflow
    /// ```text
    /// Subtotal: ARS$7000.00
    /// Importe recibido: 6500
    ///      │
    ///      ▼
    /// InsufficientPayment { total: 7000, paid: 6500, shortfall: 500 }
    ///      │
    ///      ▼
    /// Operator is asked for the amount again
    /// ```
    #[error("El pago es menor que el total ({total}). Faltan {shortfall}.")]
    InsufficientPayment {
        total: Money,
        paid: Money,
        shortfall: Money,
    },

    /// Menu position outside the catalog.
    #[error("No existe el ítem número {position} en el menú.")]
    ItemNotFound { position: usize },

    /// Validation error (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Operator input errors.
///
/// The prompt loops print these and ask again; they never end an operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing (or only whitespace) was typed for a number.
    #[error("Debe ingresar un número.")]
    Required,

    /// Text that is not an optionally signed run of digits.
    #[error("Ingrese solo números enteros.")]
    NotAnInteger,

    /// Integer below the accepted minimum.
    #[error("Debe ser >= {min}.")]
    BelowMinimum { min: i64 },

    /// Integer above the accepted maximum.
    #[error("Debe ser <= {max}.")]
    AboveMaximum { max: i64 },

    /// Text that is not a decimal amount.
    #[error("Importe inválido. Ej: 10000 o 10000.50")]
    InvalidAmount { input: String },

    /// A blank operator name.
    #[error("El nombre no puede estar vacío.")]
    BlankName,

    /// Line quantity outside the allowed range.
    #[error("La cantidad debe estar entre {min} y {max}.")]
    QuantityOutOfRange { quantity: i64, min: u32, max: u32 },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::OperatorAlreadyOnDuty {
            operator: "Ana".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Ya hay un encargado en turno: Ana. Finalice su turno antes de iniciar otro."
        );

        let err = CoreError::InsufficientPayment {
            total: Money::from_major(7000),
            paid: Money::from_major(6500),
            shortfall: Money::from_major(500),
        };
        assert_eq!(
            err.to_string(),
            "El pago es menor que el total (ARS$7000.00). Faltan ARS$500.00."
        );
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::Required.to_string(), "Debe ingresar un número.");
        assert_eq!(
            ValidationError::BelowMinimum { min: 1 }.to_string(),
            "Debe ser >= 1."
        );
        assert_eq!(
            ValidationError::AboveMaximum { max: 50 }.to_string(),
            "Debe ser <= 50."
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::BlankName.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "El nombre no puede estar vacío.");
    }
}
