use crate::{Date, DateTime, Time, Weekday};

/// Daylight-saving policy evaluated against a civil instant.
///
/// Rules are statute shapes, not zone databases: a rule answers whether the
/// shift is in force at a given reading, nothing more.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DstRule {
  /// The shift is always in force.
  Always,
  /// Last Sunday of March 01:00 through last Sunday of October 01:00.
  Europe,
  /// The shift is never in force.
  #[default]
  Never,
  /// Second Sunday of March 02:00 through first Sunday of November 02:00.
  UnitedStates,
}

impl DstRule {
  /// Whether the shift is in force at `date_time`, interpreted in the
  /// standard time of the zone the rule describes.
  #[inline]
  pub fn is_active(self, date_time: DateTime) -> bool {
    let date = date_time.date();
    let time = date_time.time();
    match self {
      Self::Always => true,
      Self::Never => false,
      Self::Europe => match date.month() {
        4..=9 => true,
        3 => at_or_after(date, time, last_sunday(date.year(), 3), 1),
        10 => !at_or_after(date, time, last_sunday(date.year(), 10), 1),
        _ => false,
      },
      Self::UnitedStates => match date.month() {
        4..=10 => true,
        3 => at_or_after(date, time, nth_sunday(date.year(), 3, 2), 2),
        11 => !at_or_after(date, time, nth_sunday(date.year(), 11, 1), 2),
        _ => false,
      },
    }
  }
}

fn at_or_after(date: Date, time: Time, transition_day: u8, transition_hour: u8) -> bool {
  if date.day() != transition_day {
    return date.day() > transition_day;
  }
  time >= Time::new(transition_hour, 0, 0, 0)
}

fn last_sunday(year: u64, month: u8) -> u8 {
  Date::ordinal(year, month, 5, Weekday::Sunday)
    .or_else(|| Date::ordinal(year, month, 4, Weekday::Sunday))
    .unwrap_or_default()
}

fn nth_sunday(year: u64, month: u8, nth: u8) -> u8 {
  Date::ordinal(year, month, nth, Weekday::Sunday).unwrap_or_default()
}

#[cfg(test)]
mod tests {
  use crate::{Date, DateTime, DstRule, Time};

  fn at(month: u8, day: u8, hour: u8) -> DateTime {
    DateTime::new(Date::new(2024, month, day), Time::new(hour, 0, 0, 0))
  }

  #[test]
  fn constant_rules() {
    assert!(DstRule::Always.is_active(at(1, 1, 0)));
    assert!(!DstRule::Never.is_active(at(7, 1, 12)));
  }

  #[test]
  fn european_transitions() {
    // 2024: last Sunday of March is the 31st, of October the 27th
    assert!(!DstRule::Europe.is_active(at(3, 31, 0)));
    assert!(DstRule::Europe.is_active(at(3, 31, 1)));
    assert!(DstRule::Europe.is_active(at(7, 15, 12)));
    assert!(DstRule::Europe.is_active(at(10, 27, 0)));
    assert!(!DstRule::Europe.is_active(at(10, 27, 1)));
    assert!(!DstRule::Europe.is_active(at(12, 25, 12)));
  }

  #[test]
  fn united_states_transitions() {
    // 2024: second Sunday of March is the 10th, first Sunday of November the 3rd
    assert!(!DstRule::UnitedStates.is_active(at(3, 10, 1)));
    assert!(DstRule::UnitedStates.is_active(at(3, 10, 2)));
    assert!(DstRule::UnitedStates.is_active(at(7, 4, 12)));
    assert!(DstRule::UnitedStates.is_active(at(11, 3, 1)));
    assert!(!DstRule::UnitedStates.is_active(at(11, 3, 2)));
    assert!(!DstRule::UnitedStates.is_active(at(1, 15, 12)));
  }
}
