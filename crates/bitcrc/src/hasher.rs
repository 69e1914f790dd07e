//! Streaming, bit-granular CRC.

use traits::{BitChecksum, ParamError};

use crate::{
  engine::{self, finish},
  gf::Gf32,
  params::{CrcParams, advance_bytes, check_bits},
};

/// Streaming CRC over an MSB-first bit-stream.
///
/// Updates may end anywhere inside a byte; the next update's first bit
/// follows the previous update's last bit.
///
/// # Examples
///
/// ```
/// use bitcrc::{BitChecksum, Crc, CrcParams};
///
/// let mut crc = Crc::new(CrcParams::CRC24A);
/// crc.update(b"1234");
/// crc.update(b"56789");
/// assert_eq!(crc.finalize(), 0xCD_E703);
///
/// // 13 bits, split 5 + 8.
/// let mut split = Crc::new(CrcParams::CRC8);
/// split.update_bits(&[0b1011_0000], 5).unwrap();
/// split.update_bits(&[0b1100_1010], 8).unwrap();
/// assert_eq!(split.finalize(), CrcParams::CRC8.checksum_bits(&[0b1011_0110, 0b0101_0000], 13).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct Crc {
  params: CrcParams,
  field: Gf32,
  register: u32,
  bits: u64,
}

impl Crc {
  /// Start a CRC with `params`.
  #[inline]
  #[must_use]
  pub const fn new(params: CrcParams) -> Self {
    Self {
      params,
      field: params.field(),
      register: params.init(),
      bits: 0,
    }
  }

  /// Continue from a previously finalized CRC value.
  ///
  /// Bits above `params.width()` in `crc` are ignored. The bit counter starts
  /// at zero.
  #[inline]
  #[must_use]
  pub const fn resume(params: CrcParams, crc: u32) -> Self {
    Self {
      params,
      field: params.field(),
      register: params.to_register(crc),
      bits: 0,
    }
  }

  /// The parameters this CRC was created with.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> CrcParams {
    self.params
  }

  /// CRC of `a || b`, given the CRC of `a`, the CRC of `b` and the bit length
  /// of `b`. Both CRCs must have been computed with `params`.
  ///
  /// # Examples
  ///
  /// ```
  /// use bitcrc::{Crc, CrcParams};
  ///
  /// let p = CrcParams::CRC16;
  /// let a = p.checksum(b"1234");
  /// let b = p.checksum(b"56789");
  /// assert_eq!(Crc::combine(p, a, b, 40), p.checksum(b"123456789"));
  /// ```
  #[must_use]
  pub const fn combine(params: CrcParams, crc_a: u32, crc_b: u32, bits_b: u64) -> u32 {
    let field = params.field();
    let reg_a = params.to_register(crc_a);
    let reg_b = params.to_register(crc_b);
    // B's register already carries init · x^bits_b; swap it for A's register.
    let shifted = field.mul(reg_a ^ params.init(), field.x_pow(bits_b));
    finish(reg_b ^ shifted, params.width())
  }
}

impl BitChecksum for Crc {
  type Output = u32;

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.register = advance_bytes(&self.field, self.register, data);
    self.bits = self.bits.wrapping_add((data.len() as u64).wrapping_mul(8));
  }

  #[inline]
  fn update_bits(&mut self, data: &[u8], bits: u32) -> Result<(), ParamError> {
    check_bits(data, bits)?;
    self.register = engine::register(&self.field, self.register, data, bits);
    self.bits = self.bits.wrapping_add(u64::from(bits));
    Ok(())
  }

  #[inline]
  fn finalize(&self) -> u32 {
    finish(self.register, self.params.width())
  }

  #[inline]
  fn reset(&mut self) {
    self.register = self.params.init();
    self.bits = 0;
  }

  #[inline]
  fn bits_processed(&self) -> u64 {
    self.bits
  }
}
