//! Proleptic Gregorian calendar engine for constrained environments.
//!
//! Converts between broken-down civil fields (year, month, day, hour, minute,
//! second, nanosecond) and a linear count of seconds elapsed since
//! `0001-01-01T00:00:00`, modeling the split between uniform atomic seconds
//! (TAI) and leap-second-adjusted civil seconds (UTC). Local civil time is
//! layered on top through a signed offset plus a pluggable daylight-saving
//! rule.
//!
//! Calendar values are plain immutable data. Out-of-range fields never panic
//! and never allocate an error: they are surfaced through `is_valid` so that
//! transiently invalid values, like the `23:59:60` instants of the leap-second
//! schedule, remain representable.

#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

mod clock;
mod common_era;
mod date;
mod date_time;
mod dst_rule;
mod error;
mod leap_second;
mod local_time;
mod misc;
mod month;
mod stamp;
mod time;
pub mod time_zone;
mod weekday;

#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::Clock;
pub use common_era::CommonEra;
pub use date::Date;
pub use date_time::DateTime;
pub use dst_rule::DstRule;
pub use error::Error;
pub use leap_second::{LeapHit, LeapSecond, LeapSecondTable};
pub use local_time::LocalTime;
pub use month::Month;
pub use stamp::{FORMAL_CAPACITY, STAMP_CAPACITY};
pub use time::{Meridiem, Time};
pub use weekday::Weekday;

/// Shortcut of [`core::result::Result<T, Error>`].
pub type Result<T> = core::result::Result<T, Error>;

pub(crate) const DAYS_PER_QUADRICENTURY: u32 = 146_097;
pub(crate) const NANOSECONDS_PER_MICROSECOND: u32 = 1_000;
pub(crate) const NANOSECONDS_PER_SECOND: u32 = 1_000_000_000;
pub(crate) const SECONDS_PER_DAY: u32 = misc::u16u32(SECONDS_PER_HOUR) * 24;
pub(crate) const SECONDS_PER_HOUR: u16 = misc::u8u16(SECONDS_PER_MINUTE) * 60;
pub(crate) const SECONDS_PER_MINUTE: u8 = 60;
pub(crate) const SECONDS_PER_YEAR: u64 = misc::u32u64(SECONDS_PER_DAY) * 365;
pub(crate) const SECONDS_PER_LEAP_YEAR: u64 = misc::u32u64(SECONDS_PER_DAY) * 366;
pub(crate) const SECONDS_PER_QUADRIYEAR: u64 = misc::u32u64(SECONDS_PER_DAY) * 1_461;
pub(crate) const SECONDS_PER_CENTURY: u64 = misc::u32u64(SECONDS_PER_DAY) * 36_524;
pub(crate) const SECONDS_PER_QUADRICENTURY: u64 =
  misc::u32u64(SECONDS_PER_DAY) * misc::u32u64(DAYS_PER_QUADRICENTURY);
/// Atomic seconds elapsed between the Common Era and the UNIX epoch.
pub(crate) const EPOCH_ATOMIC_SECONDS: u64 = 62_135_596_800;

pub(crate) const DAYS_OF_MONTHS: [[u16; 12]; 2] = [
  [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334],
  [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335],
];
