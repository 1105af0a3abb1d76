#![allow(
  clippy::cast_possible_truncation,
  reason = "divisions against fixed constants keep the values within bounds"
)]

#[cfg(test)]
mod tests;

use crate::{
  misc::{boolusize, u8u64, u16u64, u32u64},
  Clock, Date, DateTime, Error, LeapSecondTable, Time, DAYS_OF_MONTHS, NANOSECONDS_PER_SECOND,
  SECONDS_PER_CENTURY, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_LEAP_YEAR,
  SECONDS_PER_MINUTE, SECONDS_PER_QUADRICENTURY, SECONDS_PER_QUADRIYEAR, SECONDS_PER_YEAR,
};
use core::fmt::{Debug, Display, Formatter};

/// A [`DateTime`] anchored to the Common Era epoch (0001-01-01T00:00:00 UTC).
///
/// The broken-down fields always denote UTC. Atomic (TAI) seconds ignore leap
/// seconds entirely; the UTC-aware conversions consult a [`LeapSecondTable`]
/// and are the only place where a `23:59:60` reading can appear or be
/// consumed. Fields outside their ranges produce nonsensical conversion
/// results without panicking, mirroring the rest of the crate.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CommonEra {
  date_time: DateTime,
}

impl CommonEra {
  /// Instance that refers the epoch itself.
  pub const CE: Self = Self::new(DateTime::CE);
  /// Instance that refers the UNIX epoch (1970-01-01 00:00:00).
  pub const EPOCH: Self = Self::new(DateTime::EPOCH);

  /// See [`Date`].
  #[inline]
  pub const fn date(self) -> Date {
    self.date_time.date()
  }

  /// See [`DateTime`].
  #[inline]
  pub const fn date_time(self) -> DateTime {
    self.date_time
  }

  /// The exact inverse of [`CommonEra::to_atomic_seconds`], defined for the
  /// whole `u64` range.
  ///
  /// Quadricenturies are peeled off first, then up to three centuries, then
  /// up to twenty-three quadriyears, then individual years; months come from
  /// the cumulative table and the rest is division against fixed constants.
  #[inline]
  pub const fn from_atomic_seconds(seconds: u64, nanosecond: u32) -> Self {
    let mut rem = seconds.wrapping_add(u32u64(nanosecond / NANOSECONDS_PER_SECOND));
    let nanosecond = nanosecond % NANOSECONDS_PER_SECOND;
    let quadricenturies = rem / SECONDS_PER_QUADRICENTURY;
    rem %= SECONDS_PER_QUADRICENTURY;
    let mut year = quadricenturies.wrapping_mul(400).wrapping_add(1);
    let mut centuries = 0;
    while centuries < 3 && rem >= SECONDS_PER_CENTURY {
      rem -= SECONDS_PER_CENTURY;
      year = year.wrapping_add(100);
      centuries += 1;
    }
    let mut quadriyears = 0;
    while quadriyears < 23 && rem >= SECONDS_PER_QUADRIYEAR {
      rem -= SECONDS_PER_QUADRIYEAR;
      year = year.wrapping_add(4);
      quadriyears += 1;
    }
    // At most eight full years can remain after the block peeling
    loop {
      let in_year = seconds_of_year(year);
      if rem < in_year {
        break;
      }
      rem -= in_year;
      year = year.wrapping_add(1);
    }
    let leap = boolusize(Date::is_leap_year(year));
    let mut month: u8 = 12;
    let day_seconds = loop {
      let start = u16u64(DAYS_OF_MONTHS[leap][(month - 1) as usize])
        .wrapping_mul(u32u64(SECONDS_PER_DAY));
      if rem >= start {
        break rem - start;
      }
      month -= 1;
    };
    let day = (day_seconds / u32u64(SECONDS_PER_DAY)) as u8 + 1;
    let mut rest = day_seconds % u32u64(SECONDS_PER_DAY);
    let hour = (rest / u16u64(SECONDS_PER_HOUR)) as u8;
    rest %= u16u64(SECONDS_PER_HOUR);
    let minute = (rest / u8u64(SECONDS_PER_MINUTE)) as u8;
    let second = (rest % u8u64(SECONDS_PER_MINUTE)) as u8;
    Self::new(DateTime::new(
      Date::new(year, month, day),
      Time::new(hour, minute, second, nanosecond),
    ))
  }

  /// UTC-aware inverse of [`CommonEra::to_seconds`].
  ///
  /// A linear value listed in `table` resurrects the tabulated `23:59:60`
  /// instant, carrying the given nanosecond; any other value has the
  /// effective leap bias subtracted before the atomic conversion runs.
  #[inline]
  pub fn from_seconds(seconds: u64, nanosecond: u32, table: &LeapSecondTable) -> Self {
    let hit = table.by_utc_seconds(seconds);
    if let Some(entry) = hit.entry {
      let mut time = entry.instant().time();
      time.set_nanosecond(nanosecond % NANOSECONDS_PER_SECOND);
      return Self::new(DateTime::new(entry.instant().date(), time));
    }
    Self::from_atomic_seconds(seconds.wrapping_add_signed(-i64::from(hit.delta)), nanosecond)
  }

  /// Converts a platform tick count into civil fields through the clock's
  /// frequency ratio and epoch.
  ///
  /// Whether the result flows through the UTC-aware or the atomic path is
  /// decided by [`Clock::leap_second_ticks`].
  #[inline]
  pub fn from_ticks<C>(ticks: u64, clock: &C, table: &LeapSecondTable) -> crate::Result<Self>
  where
    C: Clock,
  {
    let (numerator, denominator) = clock.frequency();
    if numerator == 0 || denominator == 0 {
      return Err(Error::InvalidClockFrequency { numerator, denominator });
    }
    let total = u128::from(ticks).wrapping_mul(u128::from(denominator));
    let mut seconds: u64 = (total / u128::from(numerator)).try_into()?;
    let fraction = total % u128::from(numerator);
    let mut nanosecond: u32 = (fraction
      .wrapping_mul(u128::from(NANOSECONDS_PER_SECOND))
      / u128::from(numerator))
    .try_into()?;
    let (epoch_seconds, epoch_nanosecond) = clock.epoch();
    nanosecond = nanosecond.wrapping_add(epoch_nanosecond % NANOSECONDS_PER_SECOND);
    seconds = seconds.checked_add(epoch_seconds).ok_or(Error::ArithmeticOverflow)?;
    seconds = seconds
      .checked_add(u32u64(nanosecond / NANOSECONDS_PER_SECOND))
      .ok_or(Error::ArithmeticOverflow)?;
    nanosecond %= NANOSECONDS_PER_SECOND;
    Ok(if clock.leap_second_ticks() {
      Self::from_seconds(seconds, nanosecond, table)
    } else {
      Self::from_atomic_seconds(seconds, nanosecond)
    })
  }

  /// New instance from discrete fields without nanosecond precision.
  #[inline]
  pub const fn from_ymd_hms(
    year: u64,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
  ) -> Self {
    Self::new(DateTime::new(Date::new(year, month, day), Time::new(hour, minute, second, 0)))
  }

  /// Whether the fields denote an existing UTC reading. A `23:59:60` second
  /// is admitted when `table` lists the instant.
  #[inline]
  pub fn is_valid(&self, table: &LeapSecondTable) -> bool {
    if self.date_time.is_valid() {
      return true;
    }
    let time = self.date_time.time();
    self.date_time.date().is_valid()
      && time.hour() == 23
      && time.minute() == 59
      && time.second() == 60
      && time.nanosecond() < NANOSECONDS_PER_SECOND
      && table.by_instant(self.date_time).entry.is_some()
  }

  /// New instance from basic parameters
  #[inline]
  pub const fn new(date_time: DateTime) -> Self {
    Self { date_time }
  }

  /// The current civil reading according to `clock`.
  #[inline]
  pub fn now<C>(clock: &C, table: &LeapSecondTable) -> crate::Result<Self>
  where
    C: Clock,
  {
    Self::from_ticks(clock.now_ticks(), clock, table)
  }

  /// See [`Time`].
  #[inline]
  pub const fn time(self) -> Time {
    self.date_time.time()
  }

  /// Seconds elapsed since 0001-01-01T00:00:00 ignoring leap seconds
  /// entirely.
  ///
  /// Elapsed years decompose into quadricenturies, at most three centuries
  /// and at most twenty-three quadriyears, each block contributing a constant
  /// number of seconds. The clamps are load-bearing: the block following each
  /// clamped run has a different day count under the leap-year exception
  /// rule, so the tail is walked year by year instead.
  #[inline]
  pub const fn to_atomic_seconds(self) -> u64 {
    let date = self.date_time.date();
    let time = self.date_time.time();
    let years = date.year().wrapping_sub(1);
    let mut seconds = (years / 400).wrapping_mul(SECONDS_PER_QUADRICENTURY);
    let mut rem = years % 400;
    let mut centuries = rem / 100;
    if centuries > 3 {
      centuries = 3;
    }
    seconds = seconds.wrapping_add(centuries.wrapping_mul(SECONDS_PER_CENTURY));
    rem = rem.wrapping_sub(centuries.wrapping_mul(100));
    let mut quadriyears = rem / 4;
    if quadriyears > 23 {
      quadriyears = 23;
    }
    seconds = seconds.wrapping_add(quadriyears.wrapping_mul(SECONDS_PER_QUADRIYEAR));
    rem = rem.wrapping_sub(quadriyears.wrapping_mul(4));
    let mut year = date.year().wrapping_sub(rem);
    while year < date.year() {
      seconds = seconds.wrapping_add(seconds_of_year(year));
      year = year.wrapping_add(1);
    }
    let month_idx = if date.month() >= 1 && date.month() <= 12 {
      (date.month() - 1) as usize
    } else {
      0
    };
    let leap = boolusize(Date::is_leap_year(date.year()));
    seconds = seconds
      .wrapping_add(u16u64(DAYS_OF_MONTHS[leap][month_idx]).wrapping_mul(u32u64(SECONDS_PER_DAY)));
    seconds = seconds
      .wrapping_add(u8u64(date.day().wrapping_sub(1)).wrapping_mul(u32u64(SECONDS_PER_DAY)));
    seconds = seconds.wrapping_add(u8u64(time.hour()).wrapping_mul(u16u64(SECONDS_PER_HOUR)));
    seconds = seconds.wrapping_add(u8u64(time.minute()).wrapping_mul(u8u64(SECONDS_PER_MINUTE)));
    seconds = seconds.wrapping_add(u8u64(time.second()));
    seconds.wrapping_add(u32u64(time.nanosecond() / NANOSECONDS_PER_SECOND))
  }

  /// UTC seconds elapsed since the epoch alongside the nanosecond.
  ///
  /// An instant tabulated in `table` (nanosecond stripped for the comparison)
  /// returns the recorded linear value; any other instant returns the atomic
  /// count biased by the effective leap delta.
  #[inline]
  pub fn to_seconds(&self, table: &LeapSecondTable) -> (u64, u32) {
    let nanosecond = self.date_time.time().nanosecond();
    let hit = table.by_instant(self.date_time);
    if let Some(entry) = hit.entry {
      return (entry.utc_seconds(), nanosecond);
    }
    (self.to_atomic_seconds().wrapping_add_signed(i64::from(hit.delta)), nanosecond)
  }
}

impl Debug for CommonEra {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Display>::fmt(self, f)
  }
}

impl Default for CommonEra {
  #[inline]
  fn default() -> Self {
    Self::CE
  }
}

impl Display for CommonEra {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}Z", self.date_time)
  }
}

const fn seconds_of_year(year: u64) -> u64 {
  if Date::is_leap_year(year) {
    SECONDS_PER_LEAP_YEAR
  } else {
    SECONDS_PER_YEAR
  }
}
