use chrono::{DateTime, Utc};

/// Source of the current instant for date checks
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// True when `date` is strictly after the clock's current instant
pub fn is_future_date<C: Clock + ?Sized>(date: DateTime<Utc>, clock: &C) -> bool {
    date > clock.now()
}

/// True when `date` is strictly before the clock's current instant
pub fn is_past_date<C: Clock + ?Sized>(date: DateTime<Utc>, clock: &C) -> bool {
    date < clock.now()
}
