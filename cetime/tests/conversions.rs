use cetime::{CommonEra, Date, DateTime, Time};
use chrono::{Datelike, TimeZone, Timelike, Utc};
use proptest::prelude::*;

// Atomic seconds elapsed between 0001-01-01 and 1970-01-01.
const UNIX_OFFSET: i64 = 62_135_596_800;

#[test]
fn agrees_with_chrono_on_sampled_instants() {
  let samples = [
    (1970, 1, 1, 0, 0, 0),
    (1999, 12, 31, 23, 59, 59),
    (2000, 2, 29, 12, 0, 0),
    (2016, 12, 31, 23, 59, 59),
    (2038, 1, 19, 3, 14, 7),
    (2100, 3, 1, 0, 0, 0),
    (2400, 2, 29, 6, 30, 15),
  ];
  for (year, month, day, hour, minute, second) in samples {
    let chrono_instant = Utc
      .with_ymd_and_hms(year, month, day, hour, minute, second)
      .single()
      .unwrap();
    let ce = CommonEra::from_ymd_hms(
      u64::from(year.unsigned_abs()),
      month as u8,
      day as u8,
      hour as u8,
      minute as u8,
      second as u8,
    );
    assert_eq!(
      i64::try_from(ce.to_atomic_seconds()).unwrap(),
      chrono_instant.timestamp() + UNIX_OFFSET,
      "{}",
      ce
    );
  }
}

#[test]
fn agrees_with_chrono_on_decomposition() {
  for unix in (0i64..4_102_444_800).step_by(86_399 * 37) {
    let ce = CommonEra::from_atomic_seconds(u64::try_from(unix + UNIX_OFFSET).unwrap(), 0);
    let chrono_instant = Utc.timestamp_opt(unix, 0).single().unwrap();
    assert_eq!(u64::from(chrono_instant.year().unsigned_abs()), ce.date().year());
    assert_eq!(chrono_instant.month(), u32::from(ce.date().month()));
    assert_eq!(chrono_instant.day(), u32::from(ce.date().day()));
    assert_eq!(chrono_instant.hour(), u32::from(ce.time().hour()));
    assert_eq!(chrono_instant.minute(), u32::from(ce.time().minute()));
    assert_eq!(chrono_instant.second(), u32::from(ce.time().second()));
  }
}

#[test]
fn month_end_edges_round_trip() {
  for year in [1999u64, 2000, 2023, 2024, 2100] {
    for month in 1..=12u8 {
      let day = Date::cardinal(year, month);
      let ce = CommonEra::new(DateTime::new(
        Date::new(year, month, day),
        Time::new(23, 59, 59, 999_999_999),
      ));
      assert_eq!(CommonEra::from_atomic_seconds(ce.to_atomic_seconds(), 999_999_999), ce);
    }
  }
}

proptest! {
  #[test]
  fn round_trip_holds_for_arbitrary_fields(
    year in 1u64..=9_999,
    month in 1u8..=12,
    day in 1u8..=28,
    hour in 0u8..=23,
    minute in 0u8..=59,
    second in 0u8..=59,
    nanosecond in 0u32..1_000_000_000,
  ) {
    let ce = CommonEra::new(DateTime::new(
      Date::new(year, month, day),
      Time::new(hour, minute, second, nanosecond),
    ));
    prop_assert_eq!(CommonEra::from_atomic_seconds(ce.to_atomic_seconds(), nanosecond), ce);
  }

  #[test]
  fn decomposition_is_always_valid(seconds in proptest::num::u64::ANY) {
    let ce = CommonEra::from_atomic_seconds(seconds, 0);
    prop_assert!(ce.date_time().is_valid());
    prop_assert_eq!(ce.to_atomic_seconds(), seconds);
  }
}
