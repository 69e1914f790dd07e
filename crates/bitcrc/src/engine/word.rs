//! Word-serial engine: one galois step per 16-bit unit.
//!
//! Each unit is two wire bytes `b0, b1`. The register folds by `x^16` (two
//! `x^8` folds) while `b0` enters scaled by `poly · x^8` and `b1` by `poly`,
//! which preserves transmission order. `poly · x^8` is computed once per call.
//!
//! # Byte Order
//!
//! Full units and the "one extra byte" tail read the unit little-endian, so the
//! first wire byte is the low half. The "leftover bits only" tail reads the unit
//! big-endian instead: there the partial byte is the *first* byte of the unit,
//! and it has to land in the high half for `unit >> (16 - leftover)` to pick
//! out its top bits. Both tails agree with the byte-serial engine bit for bit.

use crate::{clmul::Multiplier, gf::Gf32};

/// Load the two bytes at `offset`; bytes past the end read as zero.
#[inline(always)]
fn unit(data: &[u8], offset: usize) -> [u8; 2] {
  [
    data.get(offset).copied().unwrap_or(0),
    data.get(offset.wrapping_add(1)).copied().unwrap_or(0),
  ]
}

/// Advance `crc` over the first `bits` bits of `data`, two bytes at a time.
#[inline(always)]
pub(crate) fn advance<M: Multiplier>(field: &Gf32, mut crc: u32, data: &[u8], bits: u32) -> u32 {
  let poly = field.poly();
  let full_words = (bits >> 4) as usize;
  let has_extra_byte = bits & 8 != 0;
  let leftover = bits & 7;

  let scale8 = M::gmpy(field, poly, 1 << 8);

  for i in 0..full_words {
    let word = u16::from_le_bytes(unit(data, i.wrapping_mul(2)));
    let b0 = u32::from(word & 0xFF);
    let b1 = u32::from(word >> 8);

    let folded = M::gmpy(field, M::gmpy(field, crc, 1 << 8), 1 << 8);
    crc = M::gmpy(field, scale8, b0) ^ M::gmpy(field, poly, b1) ^ folded;
  }

  let tail = full_words.wrapping_mul(2);
  if has_extra_byte {
    let word = u16::from_le_bytes(unit(data, tail));
    let b0 = u32::from(word & 0xFF);
    crc = M::gmpy(field, crc, 1 << 8) ^ M::gmpy(field, poly, b0);

    if leftover > 0 {
      let b1 = u32::from(word >> (16 - leftover));
      crc = M::gmpy(field, poly, b1) ^ M::gmpy(field, crc, 1 << leftover);
    }
  } else if leftover > 0 {
    let word = u16::from_be_bytes(unit(data, tail));
    let b0 = u32::from(word >> (16 - leftover));
    crc = M::gmpy(field, poly, b0) ^ M::gmpy(field, crc, 1 << leftover);
  }

  crc
}
