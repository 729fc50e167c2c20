use assistant_bot::Clock;
use chrono::{Days, NaiveDate};
use std::cell::Cell;
use std::rc::Rc;

/// Mock clock for testing.
///
/// Clones share the same date and call counter, so a test can keep one
/// handle while the session owns another, move the date forward between
/// commands, and check how often the session asked for it.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockClock {
    today: Rc<Cell<NaiveDate>>,
    calls: Rc<Cell<usize>>,
}

#[allow(dead_code)]
impl MockClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Rc::new(Cell::new(today)),
            calls: Rc::new(Cell::new(0)),
        }
    }

    /// Move the clock forward by `days`.
    pub fn advance(&self, days: u64) {
        self.today.set(self.today.get() + Days::new(days));
    }

    /// Number of times `today()` was read.
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }
}

impl Clock for MockClock {
    fn today(&self) -> NaiveDate {
        self.calls.set(self.calls.get() + 1);
        self.today.get()
    }
}
