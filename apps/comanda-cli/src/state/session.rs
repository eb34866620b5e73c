//! # Session State
//!
//! Who is on duty, plus the clock every record is stamped with.

use chrono::{Local, NaiveDateTime};
use comanda_core::ShiftRegister;

/// Source of "now" for journal lines and tickets.
pub type Clock = fn() -> NaiveDateTime;

/// Local wall-clock time, no timezone suffix.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Mutable state of one run of the program.
#[derive(Debug)]
pub struct SessionState {
    pub shift: ShiftRegister,
    clock: Clock,
}

impl SessionState {
    /// Nobody on duty, local clock.
    pub fn new() -> Self {
        SessionState {
            shift: ShiftRegister::new(),
            clock: local_now,
        }
    }

    /// Replaces the clock (fixed timestamps in tests).
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
