//! # doggybag-sys
//!
//! Wall-clock access for doggybag.
//!
//! The directory mapping itself never looks at the clock. Archive writers
//! that stamp entries with a modification time use this crate to read it:
//!
//! ```rust
//! use doggybag_sys::{get_system_time, DosDateTime, FixedClock, TimeSnapshot};
//!
//! // [hours, minutes, seconds, day-of-month, zero-based month, full year]
//! let [_hours, _minutes, _seconds, day, month, _year] = get_system_time();
//! assert!((1..=31).contains(&day));
//! assert!(month < 12);
//!
//! let clock = FixedClock(TimeSnapshot::from_array([12, 0, 0, 1, 0, 2000]));
//! let stamp = DosDateTime::now(&clock).unwrap();
//! assert_eq!(stamp.to_snapshot(), clock.0);
//! ```

pub mod dos;
mod error;
pub mod time;

pub use dos::DosDateTime;
pub use error::Error;
pub use time::{get_system_time, FixedClock, LocalClock, SystemClock, TimeSnapshot, UtcClock};
