// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

/// Source of the calendar date that case report dates count back from.
pub trait Clock: Send + Sync + 'static {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
