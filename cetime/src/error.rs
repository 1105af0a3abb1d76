use core::fmt::{Debug, Display, Formatter};

/// Grouped individual errors
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
  /// A set of arithmetic operations resulted in an overflow.
  ArithmeticOverflow,
  /// Zero or inconsistent ticks-per-second ratio reported by a clock.
  InvalidClockFrequency {
    /// Invalid received numerator
    numerator: u64,
    /// Invalid received denominator
    denominator: u64,
  },
  /// A year can only have up to 12 months
  InvalidMonth {
    /// Invalid received number
    received: u8,
  },
  /// A fixed-capacity string couldn't hold the rendered output.
  StringCapacity,
  /// A narrowing conversion discarded significant bits.
  TryFromIntError(core::num::TryFromIntError),
}

impl Display for Error {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl core::error::Error for Error {}

impl<T> From<arrayvec::CapacityError<T>> for Error {
  #[inline]
  fn from(_: arrayvec::CapacityError<T>) -> Self {
    Self::StringCapacity
  }
}

impl From<core::num::TryFromIntError> for Error {
  #[inline]
  fn from(from: core::num::TryFromIntError) -> Self {
    Self::TryFromIntError(from)
  }
}
