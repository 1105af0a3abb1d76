use crate::{
  misc::u16i32, time_zone, Clock, CommonEra, DateTime, DstRule, LeapSecondTable,
  SECONDS_PER_HOUR,
};
use core::fmt::{Debug, Display, Formatter};

/// Civil reading shifted into a fixed-offset zone, with the daylight-saving
/// state resolved at construction.
///
/// The stored offset is the standard-time offset; when `dst_active` holds,
/// the broken-down fields already include the additional hour. Ordering is
/// by offset first, then daylight state, then the wall-clock fields, so two
/// instances at different offsets never compare equal even when their wall
/// clocks coincide.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct LocalTime {
  offset: i32,
  dst_active: bool,
  date_time: DateTime,
}

impl LocalTime {
  /// Wall-clock fields of the local reading.
  #[inline]
  pub const fn date_time(self) -> DateTime {
    self.date_time
  }

  /// Whether the daylight-saving shift is folded into the fields.
  #[inline]
  pub const fn dst_active(self) -> bool {
    self.dst_active
  }

  /// Offset actually separating the fields from UTC, in seconds.
  #[inline]
  pub const fn effective_offset(self) -> i32 {
    if self.dst_active {
      self.offset.wrapping_add(u16i32(SECONDS_PER_HOUR))
    } else {
      self.offset
    }
  }

  /// Local rendition of a UTC reading.
  #[inline]
  pub fn from_common_era(
    ce: CommonEra,
    offset: i32,
    rule: DstRule,
    table: &LeapSecondTable,
  ) -> Self {
    let (seconds, nanosecond) = ce.to_seconds(table);
    Self::from_seconds(seconds, nanosecond, offset, rule, table)
  }

  /// Local rendition of a linear UTC-seconds value.
  ///
  /// The rule is evaluated against the standard-time reading first; only
  /// then, if the shift is in force, is the extra hour applied and the
  /// fields re-derived. Offsets outside a day are normalized.
  #[inline]
  pub fn from_seconds(
    seconds: u64,
    nanosecond: u32,
    offset: i32,
    rule: DstRule,
    table: &LeapSecondTable,
  ) -> Self {
    let offset = time_zone::normalize(offset);
    let mut shifted = seconds.wrapping_add_signed(i64::from(offset));
    let mut ce = CommonEra::from_seconds(shifted, nanosecond, table);
    let dst_active = rule.is_active(ce.date_time());
    if dst_active {
      shifted = shifted.wrapping_add(u64::from(SECONDS_PER_HOUR));
      ce = CommonEra::from_seconds(shifted, nanosecond, table);
    }
    Self { offset, dst_active, date_time: ce.date_time() }
  }

  /// Local rendition of a platform tick count. `None` parameters fall back
  /// to the clock's defaults.
  #[inline]
  pub fn from_ticks<C>(
    ticks: u64,
    clock: &C,
    offset: Option<i32>,
    rule: Option<DstRule>,
    table: &LeapSecondTable,
  ) -> crate::Result<Self>
  where
    C: Clock,
  {
    let ce = CommonEra::from_ticks(ticks, clock, table)?;
    Ok(Self::from_common_era(
      ce,
      offset.unwrap_or_else(|| clock.default_offset()),
      rule.unwrap_or_else(|| clock.default_dst_rule()),
      table,
    ))
  }

  /// The current local reading according to `clock`.
  #[inline]
  pub fn now<C>(
    clock: &C,
    offset: Option<i32>,
    rule: Option<DstRule>,
    table: &LeapSecondTable,
  ) -> crate::Result<Self>
  where
    C: Clock,
  {
    Self::from_ticks(clock.now_ticks(), clock, offset, rule, table)
  }

  /// Standard-time offset from UTC, in seconds.
  #[inline]
  pub const fn offset(self) -> i32 {
    self.offset
  }
}

impl Display for LocalTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    let effective = self.effective_offset();
    let sign = if effective < 0 { '-' } else { '+' };
    let magnitude = effective.unsigned_abs();
    write!(
      f,
      "{}{}{:02}:{:02}",
      self.date_time,
      sign,
      magnitude / u32::from(SECONDS_PER_HOUR),
      magnitude % u32::from(SECONDS_PER_HOUR) / 60
    )
  }
}
