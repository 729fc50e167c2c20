//! Source of the current date.
//!
//! The weekly birthday query depends on "today", so it reads the date through
//! [`Clock`] instead of calling chrono directly. Tests pin the date with
//! [`FixedClock`].

use chrono::{Local, NaiveDate};

/// Provides today's date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
