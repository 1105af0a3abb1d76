/// The day of week.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Weekday {
  /// Monday.
  Monday,
  /// Tuesday.
  Tuesday,
  /// Wednesday.
  Wednesday,
  /// Thursday.
  Thursday,
  /// Friday.
  Friday,
  /// Saturday.
  Saturday,
  /// Sunday.
  Sunday,
}

impl Weekday {
  /// Creates a new instance from a valid ISO-8601 `num` number (Monday = 1).
  #[inline]
  pub const fn from_num(num: u8) -> Option<Self> {
    Some(match num {
      1 => Self::Monday,
      2 => Self::Tuesday,
      3 => Self::Wednesday,
      4 => Self::Thursday,
      5 => Self::Friday,
      6 => Self::Saturday,
      7 => Self::Sunday,
      _ => return None,
    })
  }

  /// Full name like `Monday` or `Sunday`
  #[inline]
  pub const fn name(&self) -> &'static str {
    match self {
      Self::Monday => "Monday",
      Self::Tuesday => "Tuesday",
      Self::Wednesday => "Wednesday",
      Self::Thursday => "Thursday",
      Self::Friday => "Friday",
      Self::Saturday => "Saturday",
      Self::Sunday => "Sunday",
    }
  }

  /// ISO-8601 integer representation (Monday = 1, Sunday = 7).
  #[inline]
  pub const fn num(&self) -> u8 {
    match self {
      Self::Monday => 1,
      Self::Tuesday => 2,
      Self::Wednesday => 3,
      Self::Thursday => 4,
      Self::Friday => 5,
      Self::Saturday => 6,
      Self::Sunday => 7,
    }
  }

  /// Short name like `Mon` or `Sun`
  #[inline]
  pub const fn short_name(&self) -> &'static str {
    match self {
      Self::Monday => "Mon",
      Self::Tuesday => "Tue",
      Self::Wednesday => "Wed",
      Self::Thursday => "Thu",
      Self::Friday => "Fri",
      Self::Saturday => "Sat",
      Self::Sunday => "Sun",
    }
  }
}
