use crate::{CommonEra, Date, DateTime, Time};

/// One entry of the leap-second schedule: the `23:59:60` civil instant, the
/// cumulative number of inserted seconds once it has passed, and the linear
/// UTC-seconds value the instant occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LeapSecond {
  cumulative: i32,
  instant: DateTime,
  utc_seconds: u64,
}

impl LeapSecond {
  /// Cumulative leap-second count effective strictly after this instant.
  #[inline]
  pub const fn cumulative(&self) -> i32 {
    self.cumulative
  }

  /// The `23:59:60` civil instant.
  #[inline]
  pub const fn instant(&self) -> DateTime {
    self.instant
  }

  /// Linear UTC-seconds value of the instant.
  #[inline]
  pub const fn utc_seconds(&self) -> u64 {
    self.utc_seconds
  }
}

/// Result of a schedule lookup. `delta` is always populated with the
/// effective bias, whether or not an entry matched exactly.
#[derive(Clone, Copy, Debug)]
pub struct LeapHit {
  /// Cumulative bias to apply for instants strictly after the matched or
  /// last-passed entry.
  pub delta: i32,
  /// The exactly matched entry, if any.
  pub entry: Option<LeapSecond>,
}

/// Ordered, immutable leap-second schedule.
///
/// The compiled-in default reflects the ITU-R history from 1972-06-30 through
/// 2016-12-31; extending it requires a source edit and rebuild. Entries are
/// read-only after construction, so concurrent lookups need no
/// synchronization.
#[derive(Clone, Copy, Debug)]
pub struct LeapSecondTable {
  entries: &'static [LeapSecond],
}

impl LeapSecondTable {
  /// The compiled-in historical schedule.
  pub const DEFAULT: Self = Self { entries: &SCHEDULE };

  /// Schedule lookup keyed on the civil instant, nanosecond stripped.
  #[inline]
  pub fn by_instant(&self, instant: DateTime) -> LeapHit {
    let stripped = instant.trunc_to_sec();
    let mut delta = 0;
    for entry in self.entries {
      if entry.instant == stripped {
        return LeapHit { delta: entry.cumulative, entry: Some(*entry) };
      }
      if entry.instant > stripped {
        break;
      }
      delta = entry.cumulative;
    }
    LeapHit { delta, entry: None }
  }

  /// Schedule lookup keyed on the linear UTC-seconds value.
  #[inline]
  pub fn by_utc_seconds(&self, utc_seconds: u64) -> LeapHit {
    let mut delta = 0;
    for entry in self.entries {
      if entry.utc_seconds == utc_seconds {
        return LeapHit { delta: entry.cumulative, entry: Some(*entry) };
      }
      if entry.utc_seconds > utc_seconds {
        break;
      }
      delta = entry.cumulative;
    }
    LeapHit { delta, entry: None }
  }

  /// The underlying entries, ascending by instant.
  #[inline]
  pub const fn entries(&self) -> &'static [LeapSecond] {
    self.entries
  }

  /// New instance over a custom schedule, ascending by instant.
  #[inline]
  pub const fn new(entries: &'static [LeapSecond]) -> Self {
    Self { entries }
  }
}

impl Default for LeapSecondTable {
  #[inline]
  fn default() -> Self {
    Self::DEFAULT
  }
}

// The linear value is the pure atomic conversion of the instant plus every
// previously inserted second. No leap second preceded the first entry, so its
// bias is zero.
const fn entry(year: u64, month: u8, day: u8, cumulative: i32) -> LeapSecond {
  let instant = DateTime::new(Date::new(year, month, day), Time::new(23, 59, 60, 0));
  let pure = CommonEra::new(instant).to_atomic_seconds();
  LeapSecond {
    cumulative,
    instant,
    utc_seconds: pure.wrapping_add_signed(cumulative as i64 - 1),
  }
}

static SCHEDULE: [LeapSecond; 27] = [
  entry(1972, 6, 30, 1),
  entry(1972, 12, 31, 2),
  entry(1973, 12, 31, 3),
  entry(1974, 12, 31, 4),
  entry(1975, 12, 31, 5),
  entry(1976, 12, 31, 6),
  entry(1977, 12, 31, 7),
  entry(1978, 12, 31, 8),
  entry(1979, 12, 31, 9),
  entry(1981, 6, 30, 10),
  entry(1982, 6, 30, 11),
  entry(1983, 6, 30, 12),
  entry(1985, 6, 30, 13),
  entry(1987, 12, 31, 14),
  entry(1989, 12, 31, 15),
  entry(1990, 12, 31, 16),
  entry(1992, 6, 30, 17),
  entry(1993, 6, 30, 18),
  entry(1994, 6, 30, 19),
  entry(1995, 12, 31, 20),
  entry(1997, 6, 30, 21),
  entry(1998, 12, 31, 22),
  entry(2005, 12, 31, 23),
  entry(2008, 12, 31, 24),
  entry(2012, 6, 30, 25),
  entry(2015, 6, 30, 26),
  entry(2016, 12, 31, 27),
];

#[cfg(test)]
mod tests {
  use crate::{CommonEra, Date, DateTime, LeapSecondTable, Time};

  #[test]
  fn by_instant_requires_an_exact_second() {
    let table = LeapSecondTable::DEFAULT;
    let on = DateTime::new(Date::new(1972, 6, 30), Time::new(23, 59, 60, 500_000_000));
    assert!(table.by_instant(on).entry.is_some());
    let before = DateTime::new(Date::new(1972, 6, 30), Time::new(23, 59, 59, 999_999_999));
    assert!(table.by_instant(before).entry.is_none());
    assert_eq!(table.by_instant(before).delta, 0);
    let after = DateTime::new(Date::new(1972, 7, 1), Time::new(0, 0, 0, 1));
    assert!(table.by_instant(after).entry.is_none());
    assert_eq!(table.by_instant(after).delta, 1);
  }

  #[test]
  fn deltas_move_by_exactly_one() {
    let entries = LeapSecondTable::DEFAULT.entries();
    let mut previous = 0;
    for entry in entries {
      let diff = entry.cumulative() - previous;
      assert_eq!(diff.abs(), 1, "{:?}", entry);
      previous = entry.cumulative();
    }
  }

  #[test]
  fn first_entry_round_trips_with_delta_one() {
    let table = LeapSecondTable::DEFAULT;
    let ce = CommonEra::new(DateTime::new(Date::new(1972, 6, 30), Time::new(23, 59, 60, 0)));
    let hit = table.by_instant(ce.date_time());
    assert_eq!(hit.delta, 1);
    let (seconds, nanosecond) = ce.to_seconds(&table);
    assert_eq!(CommonEra::from_seconds(seconds, nanosecond, &table), ce);
  }

  #[test]
  fn occurrences_end_june_or_december() {
    for entry in LeapSecondTable::DEFAULT.entries() {
      let date = entry.instant().date();
      let last = Date::cardinal(date.year(), date.month());
      assert!(date.month() == 6 || date.month() == 12, "{:?}", entry);
      assert_eq!(date.day(), last, "{:?}", entry);
      assert_eq!(entry.instant().time(), Time::new(23, 59, 60, 0));
    }
  }

  #[test]
  fn tabulated_boundaries() {
    let table = LeapSecondTable::DEFAULT;
    for entry in table.entries() {
      let value = entry.utc_seconds();
      let before = CommonEra::from_seconds(value - 1, 0, &table);
      assert_eq!(before.date(), entry.instant().date());
      assert_eq!(before.time(), Time::new(23, 59, 59, 0));
      let on = CommonEra::from_seconds(value, 123, &table);
      assert_eq!(on.date(), entry.instant().date());
      assert_eq!(on.time().second(), 60);
      assert_eq!(on.time().nanosecond(), 123);
      let after = CommonEra::from_seconds(value + 1, 0, &table);
      assert_eq!(after.time(), Time::ZERO);
      assert!(after.date() > entry.instant().date());
    }
  }
}
