//! Byte-serial and word-serial CRC engines.
//!
//! Both engines run the same single-register automaton:
//!
//! ```text
//! state      : 32-bit register, left-justified
//! initial    : init_cond
//! transition : register = register · x^k  ⊕  chunk · poly      (mod x^32 + poly)
//!              k = 8 for a byte, 16 for a byte pair, 1..=7 for a partial byte
//! terminal   : register >> (32 - out_width), exactly once
//! ```
//!
//! The byte-serial engine is the simpler of the two; the word-serial engine
//! halves the number of iterations at the cost of more tail handling. They
//! return identical results for every input.
//!
//! # Preconditions
//!
//! `num_input_bits <= 8 * input.len()` and `0 < out_width <= 32`. They are
//! asserted in debug builds. Release builds never read out of bounds: missing
//! bytes read as zero and `out_width == 0` yields zero. For validated entry
//! points see [`CrcParams`](crate::CrcParams).

pub(crate) mod byte;
pub(crate) mod word;

use crate::{clmul::Portable, dispatch, gf::Gf32};

/// Register-level kernel: `(field, state, data, bits) -> state`.
///
/// Kernels return the unshifted register so calls can be chained.
pub type RegisterFn = fn(&Gf32, u32, &[u8], u32) -> u32;

/// Terminal step: keep the top `width` bits of the register.
///
/// # Examples
///
/// ```
/// assert_eq!(bitcrc::engine::finish(0xEA00_0000, 8), 0xEA);
/// assert_eq!(bitcrc::engine::finish(0xDEAD_BEEF, 32), 0xDEAD_BEEF);
/// ```
#[inline]
#[must_use]
pub const fn finish(register: u32, width: u8) -> u32 {
  if width == 0 {
    return 0;
  }
  match register.checked_shr(32u32.saturating_sub(width as u32)) {
    Some(value) => value,
    None => 0,
  }
}

#[inline(always)]
fn debug_check(input: &[u8], num_input_bits: u32, out_width: u8) {
  debug_assert!(
    u64::from(num_input_bits) <= (input.len() as u64).saturating_mul(8),
    "num_input_bits ({num_input_bits}) exceeds the buffer ({} bytes)",
    input.len()
  );
  debug_assert!(
    (1..=32).contains(&out_width),
    "out_width ({out_width}) must be in 1..=32"
  );
}

/// Byte-serial CRC.
///
/// Consumes `input` one byte at a time:
/// `crc = gmpy(poly, byte) ^ gmpy(crc, 1 << 8)`. A trailing partial byte is
/// right-aligned and folds the register by its own bit count.
///
/// # Examples
///
/// ```
/// use bitcrc::{POLYNOMIAL_CRC8, crc_byte};
///
/// assert_eq!(crc_byte(&[0x00], 8, POLYNOMIAL_CRC8, 0, 8), 0x00);
/// assert_eq!(crc_byte(&[0xFF], 8, POLYNOMIAL_CRC8, 0, 8), 0x7B);
/// assert_eq!(crc_byte(b"123456789", 72, POLYNOMIAL_CRC8, 0, 8), 0xEA);
/// ```
#[inline]
#[must_use]
pub fn crc_byte(input: &[u8], num_input_bits: u32, poly: u32, init_cond: u32, out_width: u8) -> u32 {
  debug_check(input, num_input_bits, out_width);
  let field = Gf32::new(poly);
  finish(byte_register(&field, init_cond, input, num_input_bits), out_width)
}

/// Word-serial CRC.
///
/// Same result as [`crc_byte`] for every input; consumes two bytes per
/// iteration.
///
/// # Examples
///
/// ```
/// use bitcrc::{POLYNOMIAL_CRC24A, crc_byte, crc_word};
///
/// let data = b"123456789";
/// assert_eq!(crc_word(data, 72, POLYNOMIAL_CRC24A, 0, 24), 0xCDE703);
/// assert_eq!(crc_word(data, 61, POLYNOMIAL_CRC24A, 0, 24), crc_byte(data, 61, POLYNOMIAL_CRC24A, 0, 24));
/// ```
#[inline]
#[must_use]
pub fn crc_word(input: &[u8], num_input_bits: u32, poly: u32, init_cond: u32, out_width: u8) -> u32 {
  debug_check(input, num_input_bits, out_width);
  let field = Gf32::new(poly);
  finish(word_register(&field, init_cond, input, num_input_bits), out_width)
}

/// CRC through whichever engine the active configuration picks for this length.
///
/// See [`config`](crate::config) for the selection knobs.
#[inline]
#[must_use]
pub fn crc(input: &[u8], num_input_bits: u32, poly: u32, init_cond: u32, out_width: u8) -> u32 {
  debug_check(input, num_input_bits, out_width);
  let field = Gf32::new(poly);
  finish(register(&field, init_cond, input, num_input_bits), out_width)
}

/// Byte-serial register kernel on the selected multiply backend.
#[inline]
#[must_use]
pub fn byte_register(field: &Gf32, state: u32, data: &[u8], bits: u32) -> u32 {
  (dispatch::kernels().byte.func)(field, state, data, bits)
}

/// Word-serial register kernel on the selected multiply backend.
#[inline]
#[must_use]
pub fn word_register(field: &Gf32, state: u32, data: &[u8], bits: u32) -> u32 {
  (dispatch::kernels().word.func)(field, state, data, bits)
}

/// Register kernel chosen by configuration for `bits` input bits.
#[inline]
#[must_use]
pub fn register(field: &Gf32, state: u32, data: &[u8], bits: u32) -> u32 {
  (dispatch::kernel_for_bits(bits).func)(field, state, data, bits)
}

/// Portable byte-serial kernel.
pub(crate) fn portable_byte(field: &Gf32, state: u32, data: &[u8], bits: u32) -> u32 {
  byte::advance::<Portable>(field, state, data, bits)
}

/// Portable word-serial kernel.
pub(crate) fn portable_word(field: &Gf32, state: u32, data: &[u8], bits: u32) -> u32 {
  word::advance::<Portable>(field, state, data, bits)
}
