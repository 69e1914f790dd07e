//! Byte-serial engine: one galois step per input byte.

use crate::{clmul::Multiplier, gf::Gf32};

/// Advance `crc` over the first `bits` bits of `data`, one byte at a time.
///
/// Each byte folds the register by `x^8` and mixes in `byte · poly`. A trailing
/// partial byte is right-aligned and folds the register by only its own bit
/// count.
#[inline(always)]
pub(crate) fn advance<M: Multiplier>(field: &Gf32, mut crc: u32, data: &[u8], bits: u32) -> u32 {
  let poly = field.poly();
  let full_bytes = (bits >> 3) as usize;
  let leftover = bits & 7;

  for i in 0..full_bytes {
    let byte = data.get(i).copied().unwrap_or(0);
    crc = M::gmpy(field, poly, u32::from(byte)) ^ M::gmpy(field, crc, 1 << 8);
  }

  if leftover > 0 {
    let byte = data.get(full_bytes).copied().unwrap_or(0) >> (8 - leftover);
    crc = M::gmpy(field, poly, u32::from(byte)) ^ M::gmpy(field, crc, 1 << leftover);
  }

  crc
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{clmul::Portable, params::POLYNOMIAL_CRC8};

  #[test]
  fn single_step_matches_field_multiply() {
    let field = Gf32::new(POLYNOMIAL_CRC8);
    let crc = advance::<Portable>(&field, 0, &[0xFF], 8);
    assert_eq!(crc, field.mul(POLYNOMIAL_CRC8, 0xFF));
  }

  #[test]
  fn trailing_bits_are_ignored() {
    let field = Gf32::new(POLYNOMIAL_CRC8);
    let a = advance::<Portable>(&field, 0, &[0xA5, 0b1010_0000], 11);
    let b = advance::<Portable>(&field, 0, &[0xA5, 0b1011_1111], 11);
    assert_eq!(a, b);
  }

  #[test]
  fn bytes_past_the_bit_count_are_ignored() {
    let field = Gf32::new(POLYNOMIAL_CRC8);
    let a = advance::<Portable>(&field, 0x5500_0000, &[1, 2, 3], 16);
    let b = advance::<Portable>(&field, 0x5500_0000, &[1, 2], 16);
    assert_eq!(a, b);
  }

  #[test]
  fn short_buffer_reads_as_zero_padded() {
    let field = Gf32::new(POLYNOMIAL_CRC8);
    for bits in 0..=40 {
      let short = advance::<Portable>(&field, 0x9A00_0000, &[0x12, 0x34, 0x56], bits);
      let padded = advance::<Portable>(&field, 0x9A00_0000, &[0x12, 0x34, 0x56, 0, 0], bits);
      assert_eq!(short, padded, "bits={bits}");
    }
  }

  #[test]
  fn zero_bits_returns_state() {
    let field = Gf32::new(POLYNOMIAL_CRC8);
    assert_eq!(advance::<Portable>(&field, 0xC300_0000, &[0xFF], 0), 0xC300_0000);
  }
}
