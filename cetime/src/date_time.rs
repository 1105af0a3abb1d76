use crate::{Date, Time};
use core::fmt::{Debug, Display, Formatter};

/// A calendar date paired with a clock time.
///
/// Ordering is lexicographic: the date is compared first, then the time.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DateTime {
  date: Date,
  time: Time,
}

impl DateTime {
  /// Instance that refers the common era (0001-01-01 00:00:00).
  pub const CE: Self = Self::new(Date::CE, Time::ZERO);
  /// Instance that refers the UNIX epoch (1970-01-01 00:00:00).
  pub const EPOCH: Self = Self::new(Date::EPOCH, Time::ZERO);

  /// See [`Date`].
  #[inline]
  pub const fn date(self) -> Date {
    self.date
  }

  /// Whether both halves are within range.
  #[inline]
  pub const fn is_valid(self) -> bool {
    self.date.is_valid() && self.time.is_valid()
  }

  /// New instance from basic parameters
  #[inline]
  pub const fn new(date: Date, time: Time) -> Self {
    Self { date, time }
  }

  /// See [`Time`].
  #[inline]
  pub const fn time(self) -> Time {
    self.time
  }

  /// Returns a new instance with the number of nanoseconds totally erased.
  #[inline]
  #[must_use]
  pub const fn trunc_to_sec(self) -> Self {
    Self::new(self.date, self.time.trunc_to_sec())
  }
}

impl Debug for DateTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Display>::fmt(self, f)
  }
}

impl Default for DateTime {
  #[inline]
  fn default() -> Self {
    Self::CE
  }
}

impl Display for DateTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}T{}", self.date, self.time)
  }
}

#[cfg(test)]
mod tests {
  use crate::{Date, DateTime, Time};

  #[test]
  fn is_valid() {
    assert!(DateTime::CE.is_valid());
    assert!(!DateTime::new(Date::new(2025, 2, 29), Time::ZERO).is_valid());
    assert!(!DateTime::new(Date::EPOCH, Time::new(23, 59, 60, 0)).is_valid());
  }

  #[test]
  fn ordering_is_lexicographic() {
    let earlier = DateTime::new(Date::new(2025, 4, 20), Time::new(23, 59, 59, 0));
    let later = DateTime::new(Date::new(2025, 4, 21), Time::ZERO);
    assert!(earlier < later);
    let a = DateTime::new(Date::new(2025, 4, 20), Time::new(10, 0, 0, 0));
    let b = DateTime::new(Date::new(2025, 4, 20), Time::new(10, 0, 0, 1));
    assert!(a < b);
    assert_eq!(a, b.trunc_to_sec());
  }
}
