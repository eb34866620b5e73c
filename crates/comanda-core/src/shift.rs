//! # Shift State
//!
//! Tracks who, if anyone, is running the counter.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            enter(name)                                                  │
//! │   ┌──────────────────┐ ─────────────────► ┌──────────────────────────┐ │
//! │   │ NoOperatorOnDuty │                    │ OperatorOnDuty(name)     │ │
//! │   └──────────────────┘ ◄───────────────── └──────────────────────────┘ │
//! │                              exit()                                     │
//! │                                                                         │
//! │  enter() while on duty   → OperatorAlreadyOnDuty, state unchanged       │
//! │  enter("   ")            → BlankName, state unchanged                   │
//! │  exit() while off duty   → NoOperatorOnDuty, state unchanged            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every successful transition yields the [`ShiftEvent`] that must be
//! appended to the registry. Persisting it is the journal's job.

use chrono::NaiveDateTime;

use crate::error::{CoreError, CoreResult};
use crate::types::{ShiftEvent, ShiftEventKind};
use crate::validation::validate_operator_name;

/// Who is on duty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ShiftState {
    #[default]
    NoOperatorOnDuty,
    OperatorOnDuty(String),
}

/// Owns the [`ShiftState`] and performs the entrance/exit transitions.
#[derive(Debug, Clone, Default)]
pub struct ShiftRegister {
    state: ShiftState,
}

impl ShiftRegister {
    /// Starts with nobody on duty.
    pub fn new() -> Self {
        ShiftRegister::default()
    }

    pub fn state(&self) -> &ShiftState {
        &self.state
    }

    /// Name of the operator on duty, if any.
    pub fn current_operator(&self) -> Option<&str> {
        match &self.state {
            ShiftState::OperatorOnDuty(name) => Some(name),
            ShiftState::NoOperatorOnDuty => None,
        }
    }

    /// Fails with [`CoreError::OperatorAlreadyOnDuty`] if the shift is taken.
    pub fn ensure_vacant(&self) -> CoreResult<()> {
        match &self.state {
            ShiftState::OperatorOnDuty(name) => Err(CoreError::OperatorAlreadyOnDuty {
                operator: name.clone(),
            }),
            ShiftState::NoOperatorOnDuty => Ok(()),
        }
    }

    /// Returns the operator on duty or [`CoreError::ShiftRequired`].
    pub fn require_operator(&self) -> CoreResult<&str> {
        self.current_operator().ok_or(CoreError::ShiftRequired)
    }

    /// Checks `name` in.
    ///
    /// ```rust
    /// use comanda_core::ShiftRegister;
    /// use chrono::NaiveDateTime;
    ///
    /// let mut shift = ShiftRegister::new();
    /// let now = NaiveDateTime::default();
    /// shift.enter(" Ana ", now).unwrap();
    /// assert_eq!(shift.current_operator(), Some("Ana"));
    /// assert!(shift.enter("Beto", now).is_err());
    /// assert_eq!(shift.current_operator(), Some("Ana"));
    /// ```
    pub fn enter(&mut self, name: &str, at: NaiveDateTime) -> CoreResult<ShiftEvent> {
        self.ensure_vacant()?;
        let name = validate_operator_name(name)?;

        self.state = ShiftState::OperatorOnDuty(name.clone());

        Ok(ShiftEvent {
            timestamp: at,
            kind: ShiftEventKind::Entrance,
            operator: name,
        })
    }

    /// Checks the current operator out.
    pub fn exit(&mut self, at: NaiveDateTime) -> CoreResult<ShiftEvent> {
        match std::mem::take(&mut self.state) {
            ShiftState::OperatorOnDuty(name) => Ok(ShiftEvent {
                timestamp: at,
                kind: ShiftEventKind::Exit,
                operator: name,
            }),
            ShiftState::NoOperatorOnDuty => Err(CoreError::NoOperatorOnDuty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn now() -> NaiveDateTime {
        NaiveDateTime::default()
    }

    #[test]
    fn test_enter_then_exit() {
        let mut shift = ShiftRegister::new();

        let entrance = shift.enter("Ana", now()).unwrap();
        assert_eq!(entrance.kind, ShiftEventKind::Entrance);
        assert_eq!(shift.state(), &ShiftState::OperatorOnDuty("Ana".to_string()));

        let exit = shift.exit(now()).unwrap();
        assert_eq!(exit.kind, ShiftEventKind::Exit);
        assert_eq!(exit.operator, "Ana");
        assert_eq!(shift.state(), &ShiftState::NoOperatorOnDuty);
    }

    #[test]
    fn test_second_entrance_keeps_first_operator() {
        let mut shift = ShiftRegister::new();
        shift.enter("Ana", now()).unwrap();

        let err = shift.enter("Beto", now()).unwrap_err();
        assert_eq!(
            err,
            CoreError::OperatorAlreadyOnDuty {
                operator: "Ana".to_string()
            }
        );
        assert_eq!(shift.current_operator(), Some("Ana"));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut shift = ShiftRegister::new();
        let err = shift.enter("   ", now()).unwrap_err();
        assert_eq!(err, CoreError::Validation(ValidationError::BlankName));
        assert_eq!(shift.state(), &ShiftState::NoOperatorOnDuty);
    }

    #[test]
    fn test_exit_without_operator() {
        let mut shift = ShiftRegister::new();
        assert_eq!(shift.exit(now()), Err(CoreError::NoOperatorOnDuty));

        shift.enter("Ana", now()).unwrap();
        shift.exit(now()).unwrap();
        assert_eq!(shift.exit(now()), Err(CoreError::NoOperatorOnDuty));
    }

    #[test]
    fn test_require_operator() {
        let mut shift = ShiftRegister::new();
        assert_eq!(shift.require_operator(), Err(CoreError::ShiftRequired));
        shift.enter("Ana", now()).unwrap();
        assert_eq!(shift.require_operator(), Ok("Ana"));
    }
}
