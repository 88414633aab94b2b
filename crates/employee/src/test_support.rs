//! Test utilities for the employee crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`). Only
//! compiled for tests or with the `test-support` feature.

use std::sync::Mutex;

use chrono::{DateTime, Days, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to local noon of a settable calendar day.
pub struct MutableClock(Mutex<NaiveDate>);

impl MutableClock {
    /// Pin the clock to `today`.
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self(Mutex::new(today))
    }

    /// Move the clock to another day.
    pub fn set_today(&self, today: NaiveDate) {
        *self.lock_today() = today;
    }

    /// Move the clock forward by `days`.
    ///
    /// # Panics
    ///
    /// Panics when the resulting date is out of range.
    pub fn advance_days(&self, days: u64) {
        let mut today = self.lock_today();
        let current = *today;
        *today = current
            .checked_add_days(Days::new(days))
            .unwrap_or_else(|| panic!("clock advanced out of range: {current} + {days} days"));
    }

    /// The day currently reported by the clock.
    ///
    /// # Panics
    ///
    /// Panics when the clock mutex is poisoned.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        *self.lock_today()
    }

    fn lock_today(&self) -> std::sync::MutexGuard<'_, NaiveDate> {
        self.0
            .lock()
            .unwrap_or_else(|error| panic!("clock mutex poisoned: {error}"))
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        let noon = self.today().and_time(NaiveTime::MIN) + chrono::TimeDelta::hours(12);
        Local
            .from_local_datetime(&noon)
            .earliest()
            .unwrap_or_else(|| panic!("local noon does not exist for {noon}"))
    }

    fn utc(&self) -> DateTime<Utc> {
        self.local().with_timezone(&Utc)
    }
}

/// Build a calendar date, panicking on invalid components.
///
/// # Panics
///
/// Panics when the components do not form a valid date.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day}"))
}
