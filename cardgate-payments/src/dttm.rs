//! Request timestamps
//!
//! Every signed request carries a `dttm` token in `YYYYMMDDHHmmss` form, taken
//! from local time. The source of "now" is a [`Clock`] so that tests can pin
//! or step it.

use chrono::{Local, NaiveDateTime, TimeDelta};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// `dttm` format string
pub const DTTM_FORMAT: &str = "%Y%m%d%H%M%S";

/// A `YYYYMMDDHHmmss` timestamp token
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dttm(String);

impl Dttm {
    /// Format a local timestamp as a token
    pub fn from_naive(datetime: &NaiveDateTime) -> Self {
        Self(datetime.format(DTTM_FORMAT).to_string())
    }

    /// Parse a token received from the gateway
    pub fn parse(token: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(token, DTTM_FORMAT)
            .ok()
            .map(|dt| Self::from_naive(&dt))
    }

    /// Token text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Dttm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of request timestamps
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> Dttm;
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Dttm {
        Dttm::from_naive(&Local::now().naive_local())
    }
}

/// Clock that always returns the same instant
#[derive(Debug, Clone)]
pub struct FixedClock(Dttm);

impl FixedClock {
    /// Clock frozen at `datetime`
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(Dttm::from_naive(&datetime))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Dttm {
        self.0.clone()
    }
}

/// Clock that advances by one second on every reading
#[derive(Debug)]
pub struct SteppingClock {
    start: NaiveDateTime,
    ticks: AtomicI64,
}

impl SteppingClock {
    /// Clock whose first reading is `start`
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            start,
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Dttm {
        let tick = self.ticks.fetch_add(1, Ordering::Relaxed);
        let instant = self
            .start
            .checked_add_signed(TimeDelta::seconds(tick))
            .unwrap_or(self.start);
        Dttm::from_naive(&instant)
    }
}
