//! MS-DOS date and time fields, as stored in zip entry headers.
//!
//! ```text
//! time: hhhhh mmmmmm sssss   (seconds / 2)
//! date: yyyyyyy mmmm ddddd   (years since 1980, month 1-12, day 1-31)
//! ```

use crate::{Error, SystemClock, TimeSnapshot};

/// First year a DOS date can hold.
pub const DOS_EPOCH_YEAR: u16 = 1980;

/// Last year a DOS date can hold.
pub const DOS_MAX_YEAR: u16 = DOS_EPOCH_YEAR + 127;

/// Pack a wall-clock time. Seconds lose their lowest bit.
///
/// Fields are not range checked; use [`DosDateTime::from_snapshot`] for
/// validated input.
pub fn pack_time(hours: u16, minutes: u16, seconds: u16) -> u16 {
    let mut dos_time: u16 = 0;

    dos_time |= seconds / 2;
    dos_time |= minutes << 5;
    dos_time |= hours << 11;

    dos_time
}

/// Pack a calendar date. `month` is one-based here, as DOS stores it.
///
/// Years before [`DOS_EPOCH_YEAR`] saturate to it; other fields are not
/// range checked.
pub fn pack_date(day: u16, month: u16, year: u16) -> u16 {
    let years_since_epoch = year.saturating_sub(DOS_EPOCH_YEAR);

    let mut dos_date: u16 = 0;

    dos_date |= day;
    dos_date |= month << 5;
    dos_date |= years_since_epoch << 9;

    dos_date
}

/// A packed DOS timestamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DosDateTime {
    pub time: u16,
    pub date: u16,
}

impl DosDateTime {
    /// Pack a snapshot, checking every field fits.
    pub fn from_snapshot(snapshot: &TimeSnapshot) -> Result<Self, Error> {
        if !(DOS_EPOCH_YEAR..=DOS_MAX_YEAR).contains(&snapshot.year) {
            return Err(Error::YearOutOfRange {
                year: snapshot.year,
            });
        }
        check_field("hours", snapshot.hours, 0, 23)?;
        check_field("minutes", snapshot.minutes, 0, 59)?;
        check_field("seconds", snapshot.seconds, 0, 59)?;
        check_field("day", snapshot.day, 1, 31)?;
        check_field("month", snapshot.month, 0, 11)?;

        Ok(Self {
            time: pack_time(snapshot.hours, snapshot.minutes, snapshot.seconds),
            date: pack_date(snapshot.day, snapshot.month + 1, snapshot.year),
        })
    }

    /// Pack the current reading of `clock`.
    pub fn now(clock: &dyn SystemClock) -> Result<Self, Error> {
        Self::from_snapshot(&clock.snapshot())
    }

    /// Unpack into a snapshot. Seconds come back rounded down to even.
    pub fn to_snapshot(&self) -> TimeSnapshot {
        TimeSnapshot {
            hours: self.time >> 11,
            minutes: (self.time >> 5) & 0x3f,
            seconds: (self.time & 0x1f) * 2,
            day: self.date & 0x1f,
            month: ((self.date >> 5) & 0x0f).saturating_sub(1),
            year: (self.date >> 9) + DOS_EPOCH_YEAR,
        }
    }
}

fn check_field(field: &'static str, value: u16, min: u16, max: u16) -> Result<(), Error> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::FieldOutOfRange { field, value })
    }
}
