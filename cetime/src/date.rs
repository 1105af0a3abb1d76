#![allow(
  clippy::cast_possible_truncation,
  reason = "reduced values fit the lighter representations by construction"
)]

use crate::{
  misc::{boolusize, u8u16},
  Weekday, DAYS_OF_MONTHS,
};
use core::fmt::{Debug, Display, Formatter};

/// Proleptic Gregorian calendar date.
///
/// Fields are stored as received. Constructors never reject values and setters
/// never re-validate, which keeps transiently invalid dates representable;
/// derived values are only meaningful when [`Date::is_valid`] holds.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date {
  year: u64,
  month: u8,
  day: u8,
}

impl Date {
  /// Instance that refers the common era (0001-01-01).
  pub const CE: Self = Self::new(1, 1, 1);
  /// Instance that refers the UNIX epoch (1970-01-01).
  pub const EPOCH: Self = Self::new(1970, 1, 1);

  /// Days of the given month, or zero for months outside `1..=12`.
  #[inline]
  pub const fn cardinal(year: u64, month: u8) -> u8 {
    match month {
      1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
      4 | 6 | 9 | 11 => 30,
      2 => {
        if Self::is_leap_year(year) {
          29
        } else {
          28
        }
      }
      _ => 0,
    }
  }

  /// Leap years are divisible by four, except centuries that aren't divisible
  /// by four hundred.
  #[inline]
  pub const fn is_leap_year(year: u64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
  }

  /// New instance from discrete fields. Nothing is checked.
  #[inline]
  pub const fn new(year: u64, month: u8, day: u8) -> Self {
    Self { year, month, day }
  }

  /// Day of the month where the `nth` occurrence of `weekday` falls, if the
  /// month has one.
  #[inline]
  pub const fn ordinal(year: u64, month: u8, nth: u8, weekday: Weekday) -> Option<u8> {
    if nth == 0 {
      return None;
    }
    let first = Self::new(year, month, 1).weekday();
    let shift = (weekday.num().wrapping_add(7).wrapping_sub(first.num())) % 7;
    let day = nth.wrapping_sub(1).wrapping_mul(7).wrapping_add(shift).wrapping_add(1);
    if day > Self::cardinal(year, month) {
      return None;
    }
    Some(day)
  }

  /// Day of the month.
  #[inline]
  pub const fn day(self) -> u8 {
    self.day
  }

  /// Whether the fields denote an existing calendar day.
  #[inline]
  pub const fn is_valid(self) -> bool {
    self.year >= 1
      && self.month >= 1
      && self.month <= 12
      && self.day >= 1
      && self.day <= Self::cardinal(self.year, self.month)
  }

  /// Ordinal day of the year, starting at one.
  #[inline]
  pub const fn julian(self) -> u16 {
    let idx = if self.month >= 1 && self.month <= 12 {
      (self.month - 1) as usize
    } else {
      0
    };
    DAYS_OF_MONTHS[boolusize(Self::is_leap_year(self.year))][idx].wrapping_add(u8u16(self.day))
  }

  /// Month of the year.
  #[inline]
  pub const fn month(self) -> u8 {
    self.month
  }

  /// Overwrites the day. The result is not re-validated.
  #[inline]
  pub const fn set_day(&mut self, day: u8) {
    self.day = day;
  }

  /// Overwrites the month. The result is not re-validated.
  #[inline]
  pub const fn set_month(&mut self, month: u8) {
    self.month = month;
  }

  /// Overwrites the year. The result is not re-validated.
  #[inline]
  pub const fn set_year(&mut self, year: u64) {
    self.year = year;
  }

  /// Day of the week.
  //
  // Zeller's Congruence re-based to ISO-8601 (Monday = 1). The Gregorian
  // calendar repeats every 400 years with an integral number of weeks, so the
  // year is reduced modulo a quadricentury first, which keeps the formula
  // exact for arbitrarily large years.
  #[inline]
  pub const fn weekday(self) -> Weekday {
    let reduced = (self.year.wrapping_sub(1) % 400).wrapping_add(1) as u16;
    let (month, year) = if self.month <= 2 {
      (u8u16(self.month).wrapping_add(12), reduced.wrapping_sub(1))
    } else {
      (u8u16(self.month), reduced)
    };
    let century = year / 100;
    let rest = year % 100;
    let mut sum = u8u16(self.day);
    sum = sum.wrapping_add((month.wrapping_add(1).wrapping_mul(13)) / 5);
    sum = sum.wrapping_add(rest);
    sum = sum.wrapping_add(rest / 4);
    sum = sum.wrapping_add(century / 4);
    sum = sum.wrapping_add(century.wrapping_mul(5));
    // Zeller counts from Saturday = 0
    match Weekday::from_num(((sum % 7).wrapping_add(5) % 7).wrapping_add(1) as u8) {
      Some(elem) => elem,
      None => Weekday::Monday,
    }
  }

  /// Year
  #[inline]
  pub const fn year(self) -> u64 {
    self.year
  }
}

impl Debug for Date {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Display>::fmt(self, f)
  }
}

impl Display for Date {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
  }
}
