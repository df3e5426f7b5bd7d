//! Wall-clock snapshots.
//!
//! A snapshot is the six fields a file timestamp needs, in the order
//! `[hours, minutes, seconds, day-of-month, zero-based month, full year]`.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};

/// Broken-down wall-clock time.
///
/// `month` is zero-based (January is 0); `day` is the day of the month
/// starting at 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TimeSnapshot {
    pub hours: u16,
    pub minutes: u16,
    pub seconds: u16,
    pub day: u16,
    pub month: u16,
    pub year: u16,
}

impl TimeSnapshot {
    /// Take the snapshot fields from a chrono date-time in its own zone.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self {
            hours: datetime.hour() as u16,
            minutes: datetime.minute() as u16,
            seconds: datetime.second() as u16,
            day: datetime.day() as u16,
            month: datetime.month0() as u16,
            year: datetime.year().clamp(0, u16::MAX as i32) as u16,
        }
    }

    /// `[hours, minutes, seconds, day, month, year]`
    pub fn to_array(self) -> [u16; 6] {
        [
            self.hours,
            self.minutes,
            self.seconds,
            self.day,
            self.month,
            self.year,
        ]
    }

    pub fn from_array(fields: [u16; 6]) -> Self {
        let [hours, minutes, seconds, day, month, year] = fields;
        Self {
            hours,
            minutes,
            seconds,
            day,
            month,
            year,
        }
    }
}

impl From<TimeSnapshot> for [u16; 6] {
    fn from(snapshot: TimeSnapshot) -> Self {
        snapshot.to_array()
    }
}

/// A source of wall-clock snapshots.
pub trait SystemClock {
    fn snapshot(&self) -> TimeSnapshot;
}

/// The local wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl SystemClock for LocalClock {
    fn snapshot(&self) -> TimeSnapshot {
        TimeSnapshot::from_datetime(&Local::now())
    }
}

/// The UTC wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct UtcClock;

impl SystemClock for UtcClock {
    fn snapshot(&self) -> TimeSnapshot {
        TimeSnapshot::from_datetime(&Utc::now())
    }
}

/// A clock that always reads the same time. Useful for reproducible
/// archives and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedClock(pub TimeSnapshot);

impl SystemClock for FixedClock {
    fn snapshot(&self) -> TimeSnapshot {
        self.0
    }
}

/// Read the local wall clock as
/// `[hours, minutes, seconds, day-of-month, zero-based month, full year]`.
pub fn get_system_time() -> [u16; 6] {
    LocalClock.snapshot().to_array()
}
