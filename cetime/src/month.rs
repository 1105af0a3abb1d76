/// Month of the year.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Month {
  /// January
  January,
  /// February
  February,
  /// March
  March,
  /// April
  April,
  /// May
  May,
  /// June
  June,
  /// July
  July,
  /// August
  August,
  /// September
  September,
  /// October
  October,
  /// November
  November,
  /// December
  December,
}

impl Month {
  /// Creates a new instance from a valid `num` number.
  #[inline]
  pub const fn from_num(num: u8) -> Option<Self> {
    Some(match num {
      1 => Self::January,
      2 => Self::February,
      3 => Self::March,
      4 => Self::April,
      5 => Self::May,
      6 => Self::June,
      7 => Self::July,
      8 => Self::August,
      9 => Self::September,
      10 => Self::October,
      11 => Self::November,
      12 => Self::December,
      _ => return None,
    })
  }

  /// Full name like `January` or `December`
  #[inline]
  pub const fn name(&self) -> &'static str {
    match self {
      Self::January => "January",
      Self::February => "February",
      Self::March => "March",
      Self::April => "April",
      Self::May => "May",
      Self::June => "June",
      Self::July => "July",
      Self::August => "August",
      Self::September => "September",
      Self::October => "October",
      Self::November => "November",
      Self::December => "December",
    }
  }

  /// Integer representation
  #[inline]
  pub const fn num(&self) -> u8 {
    match self {
      Self::January => 1,
      Self::February => 2,
      Self::March => 3,
      Self::April => 4,
      Self::May => 5,
      Self::June => 6,
      Self::July => 7,
      Self::August => 8,
      Self::September => 9,
      Self::October => 10,
      Self::November => 11,
      Self::December => 12,
    }
  }

  /// Short name like `Jan` or `Dec`
  #[inline]
  pub const fn short_name(&self) -> &'static str {
    match self {
      Self::January => "Jan",
      Self::February => "Feb",
      Self::March => "Mar",
      Self::April => "Apr",
      Self::May => "May",
      Self::June => "Jun",
      Self::July => "Jul",
      Self::August => "Aug",
      Self::September => "Sep",
      Self::October => "Oct",
      Self::November => "Nov",
      Self::December => "Dec",
    }
  }
}
