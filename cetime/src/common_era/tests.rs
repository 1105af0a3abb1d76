use crate::{
  Clock, CommonEra, Date, DateTime, DstRule, Error, LeapSecondTable, Time, EPOCH_ATOMIC_SECONDS,
  SECONDS_PER_QUADRICENTURY,
};

struct FakeClock {
  epoch: (u64, u32),
  frequency: (u64, u64),
  leap: bool,
  ticks: u64,
}

impl Clock for FakeClock {
  fn default_dst_rule(&self) -> DstRule {
    DstRule::Never
  }

  fn default_offset(&self) -> i32 {
    0
  }

  fn epoch(&self) -> (u64, u32) {
    self.epoch
  }

  fn frequency(&self) -> (u64, u64) {
    self.frequency
  }

  fn leap_second_ticks(&self) -> bool {
    self.leap
  }

  fn now_ticks(&self) -> u64 {
    self.ticks
  }
}

#[test]
fn epoch_anchors() {
  assert_eq!(CommonEra::CE.to_atomic_seconds(), 0);
  assert_eq!(CommonEra::EPOCH.to_atomic_seconds(), EPOCH_ATOMIC_SECONDS);
  assert_eq!(CommonEra::from_atomic_seconds(0, 0), CommonEra::CE);
  assert_eq!(CommonEra::from_atomic_seconds(EPOCH_ATOMIC_SECONDS, 0), CommonEra::EPOCH);
}

#[test]
fn quadricentury_has_146097_days() {
  assert_eq!(SECONDS_PER_QUADRICENTURY, 146_097 * 86_400);
  assert_eq!(
    CommonEra::from_ymd_hms(401, 1, 1, 0, 0, 0).to_atomic_seconds(),
    SECONDS_PER_QUADRICENTURY
  );
  assert_eq!(
    CommonEra::from_ymd_hms(801, 1, 1, 0, 0, 0).to_atomic_seconds(),
    2 * SECONDS_PER_QUADRICENTURY
  );
}

#[test]
fn thirty_two_bit_rollover_instant() {
  let ce = CommonEra::from_ymd_hms(2038, 1, 19, 3, 14, 7);
  assert_eq!(ce.to_atomic_seconds(), 64_283_080_447);
  assert_eq!(ce.to_atomic_seconds(), EPOCH_ATOMIC_SECONDS + 2_147_483_647);
}

#[test]
fn atomic_round_trip() {
  let years = [1, 4, 100, 101, 396, 400, 401, 1600, 1900, 1970, 2000, 2024, 2100, 9999, 400_000];
  for year in years {
    for (month, day) in [(1, 1), (2, 28), (3, 1), (6, 30), (12, 31)] {
      let ce = CommonEra::from_ymd_hms(year, month, day, 23, 59, 59);
      assert_eq!(CommonEra::from_atomic_seconds(ce.to_atomic_seconds(), 0), ce, "{}", ce);
    }
    if Date::is_leap_year(year) {
      let ce = CommonEra::from_ymd_hms(year, 2, 29, 12, 30, 0);
      assert_eq!(CommonEra::from_atomic_seconds(ce.to_atomic_seconds(), 0), ce, "{}", ce);
    }
  }
}

#[test]
fn extreme_values_round_trip() {
  let ce = CommonEra::from_atomic_seconds(u64::MAX, 999_999_999);
  assert_eq!(ce.to_atomic_seconds(), u64::MAX);
  assert_eq!(ce.time().nanosecond(), 999_999_999);
}

#[test]
fn nanosecond_overflow_carries_into_seconds() {
  let ce = CommonEra::from_atomic_seconds(59, 1_500_000_000);
  assert_eq!(ce.time(), Time::new(0, 1, 0, 500_000_000));
}

#[test]
fn utc_bias_after_last_entry() {
  let table = LeapSecondTable::DEFAULT;
  let ce = CommonEra::from_ymd_hms(2020, 1, 1, 0, 0, 0);
  let (seconds, nanosecond) = ce.to_seconds(&table);
  assert_eq!(seconds, ce.to_atomic_seconds() + 27);
  assert_eq!(nanosecond, 0);
  assert_eq!(CommonEra::from_seconds(seconds, nanosecond, &table), ce);
}

#[test]
fn utc_bias_before_first_entry() {
  let table = LeapSecondTable::DEFAULT;
  let (seconds, _) = CommonEra::EPOCH.to_seconds(&table);
  assert_eq!(seconds, EPOCH_ATOMIC_SECONDS);
  assert_eq!(CommonEra::from_seconds(seconds, 0, &table), CommonEra::EPOCH);
}

#[test]
fn validity_admits_tabulated_leap_instants() {
  let table = LeapSecondTable::DEFAULT;
  let tabulated = CommonEra::from_ymd_hms(2016, 12, 31, 23, 59, 60);
  assert!(tabulated.is_valid(&table));
  let fabricated = CommonEra::from_ymd_hms(2017, 12, 31, 23, 59, 60);
  assert!(!fabricated.is_valid(&table));
  assert!(CommonEra::from_ymd_hms(2024, 2, 29, 0, 0, 0).is_valid(&table));
  assert!(!CommonEra::from_ymd_hms(2023, 2, 29, 0, 0, 0).is_valid(&table));
}

#[test]
fn ticks_scale_through_rational_frequency() {
  let clock = FakeClock {
    epoch: (EPOCH_ATOMIC_SECONDS, 0),
    frequency: (32_768, 1),
    leap: false,
    ticks: 32_768 * 10 + 16_384,
  };
  let ce = CommonEra::now(&clock, &LeapSecondTable::DEFAULT).unwrap();
  assert_eq!(
    ce.date_time(),
    DateTime::new(Date::new(1970, 1, 1), Time::new(0, 0, 10, 500_000_000))
  );
}

#[test]
fn ticks_reject_degenerate_frequencies() {
  let clock =
    FakeClock { epoch: (0, 0), frequency: (0, 1), leap: false, ticks: 1 };
  assert!(matches!(
    CommonEra::from_ticks(1, &clock, &LeapSecondTable::DEFAULT),
    Err(Error::InvalidClockFrequency { .. })
  ));
}

#[test]
fn leap_aware_ticks_resurrect_the_inserted_second() {
  let first = LeapSecondTable::DEFAULT.entries()[0];
  let clock = FakeClock {
    epoch: (first.utc_seconds(), 0),
    frequency: (1, 1),
    leap: true,
    ticks: 0,
  };
  let ce = CommonEra::now(&clock, &LeapSecondTable::DEFAULT).unwrap();
  assert_eq!(ce.time().second(), 60);
  assert_eq!(ce.date(), Date::new(1972, 6, 30));
}

#[test]
fn display_appends_the_utc_designator() {
  let ce = CommonEra::from_ymd_hms(2024, 4, 20, 9, 5, 0);
  assert_eq!(std::format!("{}", ce), "2024-04-20T09:05:00Z");
}
