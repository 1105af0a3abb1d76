//! Offset normalization and zone-designation tables.

#![allow(clippy::cast_possible_wrap, reason = "the day and hour constants fit an `i32`")]

use crate::{SECONDS_PER_DAY, SECONDS_PER_HOUR};

const HALF_DAY: i32 = SECONDS_PER_DAY as i32 / 2;
const HOUR: i32 = SECONDS_PER_HOUR as i32;

/// Civilian abbreviation for a whole-hour offset, standard or daylight
/// flavor. Offsets outside the table collapse to `"LCL"`.
#[inline]
pub const fn civilian(offset: i32, dst_active: bool) -> &'static str {
  if offset % HOUR != 0 {
    return "LCL";
  }
  match (offset / HOUR, dst_active) {
    (0, false) => "GMT",
    (0, true) => "BST",
    (-4, false) => "AST",
    (-4, true) => "ADT",
    (-5, false) => "EST",
    (-5, true) => "EDT",
    (-6, false) => "CST",
    (-6, true) => "CDT",
    (-7, false) => "MST",
    (-7, true) => "MDT",
    (-8, false) => "PST",
    (-8, true) => "PDT",
    (-10, false) => "HST",
    (-10, true) => "HDT",
    _ => "LCL",
  }
}

/// Military single-letter designation for a whole-hour offset. `J` stands
/// for unmapped local time and doubles as the answer for offsets the table
/// cannot express.
#[inline]
pub const fn military(offset: i32) -> char {
  if offset % HOUR != 0 {
    return 'J';
  }
  match offset / HOUR {
    0 => 'Z',
    1 => 'A',
    2 => 'B',
    3 => 'C',
    4 => 'D',
    5 => 'E',
    6 => 'F',
    7 => 'G',
    8 => 'H',
    9 => 'I',
    10 => 'K',
    11 => 'L',
    12 => 'M',
    -1 => 'N',
    -2 => 'O',
    -3 => 'P',
    -4 => 'Q',
    -5 => 'R',
    -6 => 'S',
    -7 => 'T',
    -8 => 'U',
    -9 => 'V',
    -10 => 'W',
    -11 => 'X',
    -12 => 'Y',
    _ => 'J',
  }
}

/// Folds an arbitrary second count into the canonical offset range, just
/// above minus half a day up to and including plus half a day.
#[inline]
pub const fn normalize(offset: i32) -> i32 {
  let mut folded = offset.rem_euclid(SECONDS_PER_DAY as i32);
  if folded > HALF_DAY {
    folded -= SECONDS_PER_DAY as i32;
  }
  folded
}
