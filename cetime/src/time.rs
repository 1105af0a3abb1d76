#![allow(
  clippy::cast_possible_truncation,
  reason = "divisions against fixed constants keep the values within bounds"
)]

use crate::{
  misc::{u8u32, u16u32},
  NANOSECONDS_PER_SECOND, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use core::fmt::{Debug, Display, Formatter};

/// Half-day marker of the 12-hour clock.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Meridiem {
  /// Ante meridiem
  Am,
  /// Post meridiem
  Pm,
}

impl Meridiem {
  /// String representation
  #[inline]
  pub const fn label(&self) -> &'static str {
    match self {
      Self::Am => "AM",
      Self::Pm => "PM",
    }
  }
}

/// Clock time with nanosecond precision.
///
/// Construction folds a nanosecond overflow into `second` exactly once; the
/// carry never propagates further, so a folded value may leave `second`
/// outside its range and [`Time::is_valid`] reports it.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Time {
  hour: u8,
  minute: u8,
  second: u8,
  nanosecond: u32,
}

impl Time {
  /// Instance with every field at zero (00:00:00.000000000).
  pub const ZERO: Self = Self::new(0, 0, 0, 0);

  /// Hours of a day
  #[inline]
  pub const fn hour(self) -> u8 {
    self.hour
  }

  /// Whether every field is within its range.
  #[inline]
  pub const fn is_valid(self) -> bool {
    self.hour <= 23
      && self.minute <= 59
      && self.second <= 59
      && self.nanosecond < NANOSECONDS_PER_SECOND
  }

  /// Hour of the 12-hour clock alongside its half-day marker.
  #[inline]
  pub const fn meridiem(self) -> (u8, Meridiem) {
    match self.hour {
      0 => (12, Meridiem::Am),
      1..=11 => (self.hour, Meridiem::Am),
      12 => (12, Meridiem::Pm),
      _ => (self.hour.wrapping_sub(12), Meridiem::Pm),
    }
  }

  /// Minutes of a hour.
  #[inline]
  pub const fn minute(self) -> u8 {
    self.minute
  }

  /// Nanosecond of a second
  #[inline]
  pub const fn nanosecond(self) -> u32 {
    self.nanosecond
  }

  /// New instance from discrete fields. An out-of-range `nanosecond` has its
  /// whole-second part folded into `second` a single time.
  #[inline]
  pub const fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Self {
    let carry = (nanosecond / NANOSECONDS_PER_SECOND) as u8;
    Self {
      hour,
      minute,
      second: second.wrapping_add(carry),
      nanosecond: nanosecond % NANOSECONDS_PER_SECOND,
    }
  }

  /// Seconds of a minute
  #[inline]
  pub const fn second(self) -> u8 {
    self.second
  }

  /// The total number of seconds since midnight (00:00:00).
  #[inline]
  pub const fn seconds_of_day(self) -> u32 {
    let mut rslt = u8u32(self.hour).wrapping_mul(u16u32(SECONDS_PER_HOUR));
    rslt = rslt.wrapping_add(u8u32(self.minute).wrapping_mul(u8u32(SECONDS_PER_MINUTE)));
    rslt.wrapping_add(u8u32(self.second))
  }

  /// Overwrites the nanosecond without folding. The result is not
  /// re-validated.
  #[inline]
  pub const fn set_nanosecond(&mut self, nanosecond: u32) {
    self.nanosecond = nanosecond;
  }

  /// Overwrites the second. The result is not re-validated.
  #[inline]
  pub const fn set_second(&mut self, second: u8) {
    self.second = second;
  }

  /// Returns a new instance with the number of nanoseconds totally erased.
  #[inline]
  #[must_use]
  pub const fn trunc_to_sec(self) -> Self {
    let mut new = self;
    new.nanosecond = 0;
    new
  }
}

impl Debug for Time {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Display>::fmt(self, f)
  }
}

impl Default for Time {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

impl Display for Time {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
    if self.nanosecond > 0 {
      write!(f, ".{:09}", self.nanosecond)?;
    }
    Ok(())
  }
}
