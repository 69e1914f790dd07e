//! Bit-granular checksum trait.
//!
//! Byte-oriented checksum APIs assume input arrives in whole octets. Radio
//! transport blocks do not: a CRC-24A is attached to a transport block of any
//! bit length. This trait keeps the familiar `update`/`finalize` shape and adds
//! an exact bit count to every update.

use core::fmt::Debug;

use crate::error::ParamError;

/// Streaming checksum over an MSB-first bit-stream.
///
/// # Usage
///
/// ```rust,ignore
/// use bitcrc::{BitChecksum, Crc, CrcParams};
///
/// let mut crc = Crc::new(CrcParams::CRC24A);
/// crc.update(b"1234");
/// crc.update_bits(&[0b1010_0000], 3)?;
/// let value = crc.finalize();
/// ```
///
/// # Implementor Requirements
///
/// - Consecutive updates behave as one update over the concatenated bit-stream,
///   regardless of where the boundaries fall inside a byte
/// - `finalize()` must be idempotent
/// - `reset()` must restore the initial state
pub trait BitChecksum: Clone {
  /// The checksum output type.
  type Output: Copy + Eq + Debug + Default;

  /// Feed whole bytes.
  fn update(&mut self, data: &[u8]);

  /// Feed the first `bits` bits of `data`, MSB-first.
  ///
  /// Bits past `bits` in the last touched byte are ignored.
  ///
  /// # Errors
  ///
  /// Returns [`ParamError::BitCountExceedsBuffer`] if `bits > 8 * data.len()`.
  /// The state is left untouched in that case.
  fn update_bits(&mut self, data: &[u8], bits: u32) -> Result<(), ParamError>;

  /// Return the checksum of everything fed so far.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset to the initial state.
  fn reset(&mut self);

  /// Number of input bits consumed since construction or the last reset.
  #[must_use]
  fn bits_processed(&self) -> u64;
}
