//! Fixed-layout textual renditions of [`CommonEra`] and [`LocalTime`].
//!
//! Every format is plain field interpolation into a stack-allocated string,
//! sized for the widest possible year. Years shorter than four digits are
//! zero-padded, wider years simply take more room.

use crate::{
  time_zone, CommonEra, Error, LocalTime, Month, Time, NANOSECONDS_PER_MICROSECOND,
  SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use arrayvec::ArrayString;
use core::fmt::Write;

/// Capacity fitting a twenty-digit year plus the widest suffix.
pub const STAMP_CAPACITY: usize = 48;
/// Capacity fitting the formal layout with its spelled-out names.
pub const FORMAL_CAPACITY: usize = 64;

impl CommonEra {
  /// `YYYY-MM-DD HH:MM:SS UTC`
  #[inline]
  pub fn civilian_stamp(&self) -> crate::Result<ArrayString<STAMP_CAPACITY>> {
    let date = self.date();
    let mut out = ArrayString::new();
    push_civil_date_time(&mut out, date.year(), date.month(), date.day(), self.time())?;
    write!(out, " UTC").map_err(|_| Error::StringCapacity)?;
    Ok(out)
  }

  /// `Weekday, Month D, YYYY, H:MM AM/PM UTC`
  #[inline]
  pub fn formal_stamp(&self) -> crate::Result<ArrayString<FORMAL_CAPACITY>> {
    let date = self.date();
    push_formal(date.year(), date.month(), date.day(), self.date_time(), "UTC")
  }

  /// `YYYY-MM-DDTHH:MM:SS.NNNNNNNNN+00:00:00`
  #[inline]
  pub fn high_precision_stamp(&self) -> crate::Result<ArrayString<STAMP_CAPACITY>> {
    let date = self.date();
    let mut out = ArrayString::new();
    push_iso_date_time(&mut out, date.year(), date.month(), date.day(), self.time())?;
    write!(out, ".{:09}", self.time().nanosecond()).map_err(|_| Error::StringCapacity)?;
    push_offset(&mut out, 0, true)?;
    Ok(out)
  }

  /// `YYYY-MM-DDTHH:MM:SSZ`
  #[inline]
  pub fn iso8601_stamp(&self) -> crate::Result<ArrayString<STAMP_CAPACITY>> {
    let date = self.date();
    let mut out = ArrayString::new();
    push_iso_date_time(&mut out, date.year(), date.month(), date.day(), self.time())?;
    write!(out, "Z").map_err(|_| Error::StringCapacity)?;
    Ok(out)
  }

  /// `YYYY-MM-DD HH:MM:SS.NNNNNNZ` with microsecond precision.
  #[inline]
  pub fn log_stamp(&self) -> crate::Result<ArrayString<STAMP_CAPACITY>> {
    let date = self.date();
    let mut out = ArrayString::new();
    push_civil_date_time(&mut out, date.year(), date.month(), date.day(), self.time())?;
    write!(out, ".{:06}Z", self.time().nanosecond() / NANOSECONDS_PER_MICROSECOND)
      .map_err(|_| Error::StringCapacity)?;
    Ok(out)
  }

  /// `YYYY-Mon-DD HH:MM:SSZ`
  #[inline]
  pub fn milspec_stamp(&self) -> crate::Result<ArrayString<STAMP_CAPACITY>> {
    push_milspec(self.date().year(), self.date().month(), self.date().day(), self.time(), 'Z')
  }
}

impl LocalTime {
  /// `YYYY-MM-DD HH:MM:SS <zone>` with the daylight-adjusted abbreviation.
  #[inline]
  pub fn civilian_stamp(&self) -> crate::Result<ArrayString<STAMP_CAPACITY>> {
    let date = self.date_time().date();
    let mut out = ArrayString::new();
    push_civil_date_time(&mut out, date.year(), date.month(), date.day(), self.date_time().time())?;
    write!(out, " {}", time_zone::civilian(self.offset(), self.dst_active()))
      .map_err(|_| Error::StringCapacity)?;
    Ok(out)
  }

  /// `Weekday, Month D, YYYY, H:MM AM/PM <zone>`
  #[inline]
  pub fn formal_stamp(&self) -> crate::Result<ArrayString<FORMAL_CAPACITY>> {
    let date = self.date_time().date();
    push_formal(
      date.year(),
      date.month(),
      date.day(),
      self.date_time(),
      time_zone::civilian(self.offset(), self.dst_active()),
    )
  }

  /// `YYYY-MM-DDTHH:MM:SS.NNNNNNNNN±HH:MM:SS`
  #[inline]
  pub fn high_precision_stamp(&self) -> crate::Result<ArrayString<STAMP_CAPACITY>> {
    let date = self.date_time().date();
    let time = self.date_time().time();
    let mut out = ArrayString::new();
    push_iso_date_time(&mut out, date.year(), date.month(), date.day(), time)?;
    write!(out, ".{:09}", time.nanosecond()).map_err(|_| Error::StringCapacity)?;
    push_offset(&mut out, self.effective_offset(), true)?;
    Ok(out)
  }

  /// `YYYY-MM-DDTHH:MM:SS±HH:MM`
  #[inline]
  pub fn iso8601_stamp(&self) -> crate::Result<ArrayString<STAMP_CAPACITY>> {
    let date = self.date_time().date();
    let mut out = ArrayString::new();
    push_iso_date_time(&mut out, date.year(), date.month(), date.day(), self.date_time().time())?;
    push_offset(&mut out, self.effective_offset(), false)?;
    Ok(out)
  }

  /// `YYYY-MM-DD HH:MM:SS.NNNNNN<letter>` with microsecond precision.
  #[inline]
  pub fn log_stamp(&self) -> crate::Result<ArrayString<STAMP_CAPACITY>> {
    let date = self.date_time().date();
    let time = self.date_time().time();
    let mut out = ArrayString::new();
    push_civil_date_time(&mut out, date.year(), date.month(), date.day(), time)?;
    write!(
      out,
      ".{:06}{}",
      time.nanosecond() / NANOSECONDS_PER_MICROSECOND,
      time_zone::military(self.effective_offset())
    )
    .map_err(|_| Error::StringCapacity)?;
    Ok(out)
  }

  /// `YYYY-Mon-DD HH:MM:SS<letter>`
  #[inline]
  pub fn milspec_stamp(&self) -> crate::Result<ArrayString<STAMP_CAPACITY>> {
    let date = self.date_time().date();
    push_milspec(
      date.year(),
      date.month(),
      date.day(),
      self.date_time().time(),
      time_zone::military(self.effective_offset()),
    )
  }
}

fn month_of(num: u8) -> crate::Result<Month> {
  Month::from_num(num).ok_or(Error::InvalidMonth { received: num })
}

fn push_civil_date_time<const N: usize>(
  out: &mut ArrayString<N>,
  year: u64,
  month: u8,
  day: u8,
  time: Time,
) -> crate::Result<()> {
  write!(
    out,
    "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
    year,
    month,
    day,
    time.hour(),
    time.minute(),
    time.second()
  )
  .map_err(|_| Error::StringCapacity)
}

fn push_formal(
  year: u64,
  month: u8,
  day: u8,
  date_time: crate::DateTime,
  zone: &str,
) -> crate::Result<ArrayString<FORMAL_CAPACITY>> {
  let time = date_time.time();
  let (hour, meridiem) = time.meridiem();
  let weekday = date_time.date().weekday();
  let mut out = ArrayString::new();
  write!(
    out,
    "{}, {} {}, {:04}, {}:{:02} {} {}",
    weekday.name(),
    month_of(month)?.name(),
    day,
    year,
    hour,
    time.minute(),
    meridiem.label(),
    zone
  )
  .map_err(|_| Error::StringCapacity)?;
  Ok(out)
}

fn push_iso_date_time<const N: usize>(
  out: &mut ArrayString<N>,
  year: u64,
  month: u8,
  day: u8,
  time: Time,
) -> crate::Result<()> {
  write!(
    out,
    "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
    year,
    month,
    day,
    time.hour(),
    time.minute(),
    time.second()
  )
  .map_err(|_| Error::StringCapacity)
}

fn push_milspec(
  year: u64,
  month: u8,
  day: u8,
  time: Time,
  letter: char,
) -> crate::Result<ArrayString<STAMP_CAPACITY>> {
  let mut out = ArrayString::new();
  write!(
    out,
    "{:04}-{}-{:02} {:02}:{:02}:{:02}{}",
    year,
    month_of(month)?.short_name(),
    day,
    time.hour(),
    time.minute(),
    time.second(),
    letter
  )
  .map_err(|_| Error::StringCapacity)?;
  Ok(out)
}

fn push_offset<const N: usize>(
  out: &mut ArrayString<N>,
  offset: i32,
  with_seconds: bool,
) -> crate::Result<()> {
  let sign = if offset < 0 { '-' } else { '+' };
  let magnitude = offset.unsigned_abs();
  let hours = magnitude / u32::from(SECONDS_PER_HOUR);
  let minutes = magnitude % u32::from(SECONDS_PER_HOUR) / u32::from(SECONDS_PER_MINUTE);
  write!(out, "{}{:02}:{:02}", sign, hours, minutes).map_err(|_| Error::StringCapacity)?;
  if with_seconds {
    write!(out, ":{:02}", magnitude % u32::from(SECONDS_PER_MINUTE))
      .map_err(|_| Error::StringCapacity)?;
  }
  Ok(())
}
