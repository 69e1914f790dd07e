//! Bitwise reference CRC.
//!
//! One register shift per input bit, MSB-first, no galois multiply and no
//! tables. This is the oracle every kernel is checked against; it is slow on
//! purpose.
//!
//! ```text
//! for each input bit b:
//!   top      = register[31] ^ b
//!   register = register << 1
//!   if top: register ^= poly
//! result = register >> (32 - width)
//! ```

// Indices are bounded by the loop conditions; `get` is not usable in const fn.
#![allow(clippy::indexing_slicing)]

/// Bitwise CRC of the first `bits` bits of `data`.
///
/// `poly` and `init` are left-justified. Bits past the end of `data` read as
/// zero and `width == 0` yields zero, matching the engines.
///
/// # Examples
///
/// ```
/// use bitcrc::{POLYNOMIAL_CRC8, reference::crc_bitwise};
///
/// assert_eq!(crc_bitwise(POLYNOMIAL_CRC8, 0, &[0xFF], 8, 8), 0x7B);
/// ```
#[must_use]
pub const fn crc_bitwise(poly: u32, init: u32, data: &[u8], bits: u32, width: u8) -> u32 {
  let mut register = init;
  let mut i: u32 = 0;
  while i < bits {
    let index = (i >> 3) as usize;
    let byte = if index < data.len() { data[index] } else { 0 };
    let bit = ((byte >> (7 - (i & 7))) & 1) as u32;
    let top = (register >> 31) ^ bit;
    register <<= 1;
    if top != 0 {
      register ^= poly;
    }
    i += 1;
  }
  crate::engine::finish(register, width)
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-time check values ("123456789", zero init)
// ─────────────────────────────────────────────────────────────────────────────

const CHECK: &[u8] = b"123456789";

const _: () = assert!(crc_bitwise(crate::POLYNOMIAL_CRC8, 0, CHECK, 72, 8) == 0xEA);
const _: () = assert!(crc_bitwise(crate::POLYNOMIAL_CRC12, 0, CHECK, 72, 12) == 0xF5B);
const _: () = assert!(crc_bitwise(crate::POLYNOMIAL_CRC16, 0, CHECK, 72, 16) == 0x31C3);
const _: () = assert!(crc_bitwise(crate::POLYNOMIAL_CRC16W, 0, CHECK, 72, 16) == 0xFEE8);
const _: () = assert!(crc_bitwise(crate::POLYNOMIAL_CRC24A, 0, CHECK, 72, 24) == 0xCD_E703);
const _: () = assert!(crc_bitwise(crate::POLYNOMIAL_CRC24B, 0, CHECK, 72, 24) == 0x23_EF52);
const _: () = assert!(crc_bitwise(crate::POLYNOMIAL_CRC8, 0, &[0xFF], 8, 8) == 0x7B);
