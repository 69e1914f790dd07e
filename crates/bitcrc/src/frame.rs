//! Attaching and checking CRCs on bit-granular frames.
//!
//! A frame is a payload of any bit length followed directly by its CRC, most
//! significant CRC bit first, with no padding between the two. Only the end
//! of the frame is padded (with zero bits) to a byte boundary.
//!
//! ```text
//! | payload: n bits | crc: width bits | pad: 0..=7 zero bits |
//! ```

use traits::{CrcMismatch, FrameError, ParamError};

use crate::params::{CrcParams, check_bits};

/// Read `count` (at most 32) bits starting at bit `offset`, MSB-first.
/// Bits past the end of `data` read as zero.
fn read_bits(data: &[u8], offset: u64, count: u8) -> u32 {
  let mut value = 0u32;
  for i in 0..u64::from(count) {
    let pos = offset.saturating_add(i);
    let byte = usize::try_from(pos >> 3).ok().and_then(|index| data.get(index)).copied().unwrap_or(0);
    value = (value << 1) | u32::from((byte >> (7 - (pos & 7))) & 1);
  }
  value
}

/// Write the low `count` bits of `value` at bit `offset`, MSB-first.
/// Bits that fall past the end of `data` are dropped.
#[cfg(feature = "alloc")]
fn write_bits(data: &mut [u8], offset: u64, value: u32, count: u8) {
  for i in 0..u64::from(count) {
    let pos = offset.saturating_add(i);
    let shift = u64::from(count) - 1 - i;
    let bit = ((value >> shift) & 1) as u8;
    if let Some(byte) = usize::try_from(pos >> 3).ok().and_then(|index| data.get_mut(index)) {
      let mask = 0x80u8 >> (pos & 7);
      if bit != 0 {
        *byte |= mask;
      } else {
        *byte &= !mask;
      }
    }
  }
}

/// Append the CRC of the first `bits` bits of `payload`.
///
/// Returns the framed bytes; the frame is `bits + params.width()` bits long.
///
/// # Errors
///
/// [`ParamError::BitCountExceedsBuffer`] if `bits > 8 * payload.len()`.
///
/// # Examples
///
/// ```
/// use bitcrc::{CrcParams, frame};
///
/// let framed = frame::attach(CrcParams::CRC8, &[0xFF], 8).unwrap();
/// assert_eq!(framed, [0xFF, 0x7B]);
/// assert_eq!(frame::verify(CrcParams::CRC8, &framed, 16), Ok(0x7B));
/// ```
#[cfg(feature = "alloc")]
pub fn attach(params: CrcParams, payload: &[u8], bits: u32) -> Result<alloc::vec::Vec<u8>, ParamError> {
  let crc = params.checksum_bits(payload, bits)?;

  let total_bits = u64::from(bits) + u64::from(params.width());
  let len = usize::try_from(total_bits.div_ceil(8)).map_err(|_| ParamError::BitCountExceedsBuffer {
    bits: total_bits,
    capacity: (usize::MAX as u64).saturating_mul(8),
  })?;

  let mut frame = alloc::vec![0u8; len];
  let full = (bits >> 3) as usize;
  if let (Some(dst), Some(src)) = (frame.get_mut(..full), payload.get(..full)) {
    dst.copy_from_slice(src);
  }
  let leftover = (bits & 7) as u8;
  if leftover > 0 {
    let partial = read_bits(payload, u64::from(bits & !7), leftover);
    write_bits(&mut frame, u64::from(bits & !7), partial, leftover);
  }
  write_bits(&mut frame, u64::from(bits), crc, params.width());
  Ok(frame)
}

/// Check the CRC carried in the last `params.width()` bits of a
/// `total_bits`-long frame.
///
/// Returns the CRC on success.
///
/// # Errors
///
/// - [`FrameError::Param`] if `total_bits > 8 * frame.len()`
/// - [`FrameError::TooShort`] if the frame cannot hold the CRC
/// - [`FrameError::Mismatch`] if the carried CRC is wrong
pub fn verify(params: CrcParams, frame: &[u8], total_bits: u32) -> Result<u32, FrameError> {
  check_bits(frame, total_bits)?;
  let width = params.width();
  let payload_bits = total_bits.checked_sub(u32::from(width)).ok_or(FrameError::TooShort {
    bits: total_bits,
    width,
  })?;

  let expected = params.checksum_bits(frame, payload_bits)?;
  let found = read_bits(frame, u64::from(payload_bits), width);
  if expected != found {
    return Err(CrcMismatch::new(expected, found).into());
  }
  Ok(found)
}

/// CRC over the whole frame, carried CRC included.
///
/// An intact frame leaves a zero residue.
///
/// # Errors
///
/// [`ParamError::BitCountExceedsBuffer`] if `total_bits > 8 * frame.len()`.
#[inline]
pub fn residue(params: CrcParams, frame: &[u8], total_bits: u32) -> Result<u32, ParamError> {
  params.checksum_bits(frame, total_bits)
}
