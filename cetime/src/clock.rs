use crate::DstRule;

/// Capability describing a monotonic tick source together with the metadata
/// needed to map ticks onto civil time.
///
/// Implementations are expected to be cheap handles. The frequency is a
/// rational ticks-per-second value so that sources like a 32.768 kHz crystal
/// are represented exactly.
pub trait Clock {
  /// Daylight-saving rule assumed when the caller does not supply one.
  fn default_dst_rule(&self) -> DstRule;

  /// UTC offset in seconds assumed when the caller does not supply one.
  fn default_offset(&self) -> i32;

  /// What tick zero means: atomic seconds since 0001-01-01T00:00:00 plus a
  /// sub-second nanosecond part.
  fn epoch(&self) -> (u64, u32);

  /// Ticks per second as a `(numerator, denominator)` ratio. Both halves must
  /// be non-zero.
  fn frequency(&self) -> (u64, u64);

  /// Whether the tick count already includes inserted leap seconds. When
  /// `true`, conversions route through the leap-second schedule.
  fn leap_second_ticks(&self) -> bool;

  /// The current tick count.
  fn now_ticks(&self) -> u64;
}

/// [`Clock`] backed by [`std::time::SystemTime`], counting nanoseconds since
/// the UNIX epoch. Readings before the epoch collapse to zero.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
  #[inline]
  fn default_dst_rule(&self) -> DstRule {
    DstRule::Never
  }

  #[inline]
  fn default_offset(&self) -> i32 {
    0
  }

  #[inline]
  fn epoch(&self) -> (u64, u32) {
    (crate::EPOCH_ATOMIC_SECONDS, 0)
  }

  #[inline]
  fn frequency(&self) -> (u64, u64) {
    (u64::from(crate::NANOSECONDS_PER_SECOND), 1)
  }

  #[inline]
  fn leap_second_ticks(&self) -> bool {
    false
  }

  #[inline]
  fn now_ticks(&self) -> u64 {
    let duration = std::time::SystemTime::now()
      .duration_since(std::time::SystemTime::UNIX_EPOCH)
      .unwrap_or_default();
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
  }
}
