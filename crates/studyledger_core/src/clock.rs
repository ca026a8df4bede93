//! Wall-clock source for session timestamps.
//!
//! The ledger never calls `Local::now()` directly; it reads time through a
//! `Clock` so durations can be pinned down exactly in tests.

use chrono::{DateTime, Local};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Source of the current local wall-clock time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the host clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Manually driven clock.
///
/// Clones share the same instant, so a test can keep one handle and move
/// time forward while the ledger holds another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Local>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Local>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, instant: DateTime<Local>) {
        self.now.set(instant);
    }

    /// Moves the clock forward by `step`.
    ///
    /// Steps too large for chrono's range leave the clock unchanged.
    pub fn advance(&self, step: Duration) {
        let Ok(delta) = chrono::Duration::from_std(step) else {
            return;
        };
        if let Some(next) = self.now.get().checked_add_signed(delta) {
            self.now.set(next);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        self.now.get()
    }
}
