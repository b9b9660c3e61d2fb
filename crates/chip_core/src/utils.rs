#[inline(always)]
pub fn u16_from_two(a: u8, b: u8) -> u16 {
    (a as u16) << 8 | b as u16
}

/// Decimal hundreds, tens and ones of `val`
#[inline(always)]
pub fn bcd(val: u8) -> [u8; 3] {
    [val / 100, val / 10 % 10, val % 10]
}
