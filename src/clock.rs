//! Time source for day keys and streaks

use std::cell::Cell;

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};

/// Supplies "now" and the local calendar day
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar day in the device's local timezone
    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&Local).date_naive()
    }
}

/// Format a day as its persisted key (`yyyy-MM-dd`)
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Wall clock of the running device
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one calendar day, movable by tests
#[derive(Debug)]
pub struct FixedClock {
    today: Cell<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Cell::new(today),
        }
    }

    pub fn set(&self, today: NaiveDate) {
        self.today.set(today);
    }

    pub fn advance_days(&self, days: i64) {
        self.today.set(self.today.get() + Duration::days(days));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        match self.today.get().and_hms_opt(12, 0, 0) {
            Some(noon) => Utc.from_utc_datetime(&noon),
            None => Utc::now(),
        }
    }

    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}
