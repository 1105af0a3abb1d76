// FIXME(stable): Constant traits

pub(crate) const fn boolusize(val: bool) -> usize {
  val as usize
}

pub(crate) const fn u8u16(val: u8) -> u16 {
  val as u16
}

pub(crate) const fn u8u32(val: u8) -> u32 {
  val as u32
}

pub(crate) const fn u8u64(val: u8) -> u64 {
  val as u64
}

pub(crate) const fn u16i32(val: u16) -> i32 {
  val as i32
}

pub(crate) const fn u16u32(val: u16) -> u32 {
  val as u32
}

pub(crate) const fn u16u64(val: u16) -> u64 {
  val as u64
}

pub(crate) const fn u32u64(val: u32) -> u64 {
  val as u64
}
