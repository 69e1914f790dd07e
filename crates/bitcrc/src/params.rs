//! CRC parameters and polynomial presets.
//!
//! Polynomials and initial conditions are *left-justified*: the coefficient
//! of `x^(width - 1)` sits in bit 31 and the implicit `x^width` term is
//! dropped. The presets are the generator polynomials used for 3GPP transport
//! block and code block framing.

use traits::ParamError;

use crate::{
  engine::{self, finish},
  gf::Gf32,
};

/// CRC-8 generator `x^8 + x^7 + x^4 + x^3 + x + 1`.
pub const POLYNOMIAL_CRC8: u32 = 0x9B00_0000;
/// CRC-12 generator `x^12 + x^11 + x^3 + x^2 + x + 1`.
pub const POLYNOMIAL_CRC12: u32 = 0x80F0_0000;
/// CRC-16 generator `x^16 + x^12 + x^5 + 1` (CCITT).
pub const POLYNOMIAL_CRC16: u32 = 0x1021_0000;
/// CRC-16 generator `x^16 + x^15 + x^2 + 1` (the "W" variant).
pub const POLYNOMIAL_CRC16W: u32 = 0x8005_0000;
/// CRC-24A generator (transport blocks).
pub const POLYNOMIAL_CRC24A: u32 = 0x864C_FB00;
/// CRC-24B generator (code blocks).
pub const POLYNOMIAL_CRC24B: u32 = 0x8000_6300;

/// Largest whole-byte chunk handed to a kernel in one call, so the bit count
/// always fits in `u32`.
const MAX_CHUNK_BYTES: usize = 1 << 28;

/// Validated CRC parameters.
///
/// # Examples
///
/// ```
/// use bitcrc::CrcParams;
///
/// assert_eq!(CrcParams::CRC24A.checksum(b"123456789"), 0xCD_E703);
///
/// // Catalogue form: right-aligned polynomial and init.
/// let crc16 = CrcParams::from_normal(16, 0x1021, 0).unwrap();
/// assert_eq!(crc16, CrcParams::CRC16);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
  width: u8,
  poly: u32,
  init: u32,
}

impl CrcParams {
  /// CRC-8, zero init.
  pub const CRC8: Self = Self::preset(8, POLYNOMIAL_CRC8);
  /// CRC-12, zero init.
  pub const CRC12: Self = Self::preset(12, POLYNOMIAL_CRC12);
  /// CRC-16 (CCITT polynomial), zero init.
  pub const CRC16: Self = Self::preset(16, POLYNOMIAL_CRC16);
  /// CRC-16W, zero init.
  pub const CRC16W: Self = Self::preset(16, POLYNOMIAL_CRC16W);
  /// CRC-24A, zero init.
  pub const CRC24A: Self = Self::preset(24, POLYNOMIAL_CRC24A);
  /// CRC-24B, zero init.
  pub const CRC24B: Self = Self::preset(24, POLYNOMIAL_CRC24B);

  const fn preset(width: u8, poly: u32) -> Self {
    Self { width, poly, init: 0 }
  }

  /// Validate left-justified parameters.
  ///
  /// # Errors
  ///
  /// - [`ParamError::InvalidWidth`] unless `1 <= width <= 32`
  /// - [`ParamError::PolyNotAligned`] / [`ParamError::InitNotAligned`] if
  ///   `poly` or `init` has bits set below the top `width` bits
  pub const fn new(width: u8, poly: u32, init: u32) -> Result<Self, ParamError> {
    if width == 0 || width > 32 {
      return Err(ParamError::InvalidWidth(width));
    }
    let mask = register_mask(width);
    if poly & !mask != 0 {
      return Err(ParamError::PolyNotAligned { poly, width });
    }
    if init & !mask != 0 {
      return Err(ParamError::InitNotAligned { init, width });
    }
    Ok(Self { width, poly, init })
  }

  /// Build parameters from right-aligned (catalogue) polynomial and init.
  ///
  /// # Errors
  ///
  /// As [`CrcParams::new`]; a value wider than `width` bits is reported as
  /// not aligned.
  pub const fn from_normal(width: u8, poly: u32, init: u32) -> Result<Self, ParamError> {
    if width == 0 || width > 32 {
      return Err(ParamError::InvalidWidth(width));
    }
    let shift = 32 - width as u32;
    if width < 32 && poly >> width != 0 {
      return Err(ParamError::PolyNotAligned { poly, width });
    }
    if width < 32 && init >> width != 0 {
      return Err(ParamError::InitNotAligned { init, width });
    }
    Self::new(width, poly << shift, init << shift)
  }

  /// CRC width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.width
  }

  /// Left-justified generator polynomial.
  #[inline]
  #[must_use]
  pub const fn poly(&self) -> u32 {
    self.poly
  }

  /// Left-justified initial condition.
  #[inline]
  #[must_use]
  pub const fn init(&self) -> u32 {
    self.init
  }

  /// Register bits that carry the CRC (the top `width` bits).
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u32 {
    register_mask(self.width)
  }

  /// The galois field the engines run in for this polynomial.
  #[inline]
  #[must_use]
  pub const fn field(&self) -> Gf32 {
    Gf32::new(self.poly)
  }

  /// CRC of whole bytes.
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u32 {
    let field = self.field();
    finish(advance_bytes(&field, self.init, data), self.width)
  }

  /// CRC of the first `bits` bits of `data`, MSB-first.
  ///
  /// # Errors
  ///
  /// [`ParamError::BitCountExceedsBuffer`] if `bits > 8 * data.len()`.
  pub fn checksum_bits(&self, data: &[u8], bits: u32) -> Result<u32, ParamError> {
    check_bits(data, bits)?;
    let field = self.field();
    Ok(finish(engine::register(&field, self.init, data, bits), self.width))
  }

  /// Left-justify a right-aligned CRC value into register form.
  #[inline]
  #[must_use]
  pub(crate) const fn to_register(&self, crc: u32) -> u32 {
    match crc.checked_shl(32 - self.width as u32) {
      Some(register) => register & self.mask(),
      None => 0,
    }
  }
}

/// Top-`width`-bits mask; `width` must be in `1..=32`.
#[inline]
const fn register_mask(width: u8) -> u32 {
  match u32::MAX.checked_shl(32u32.saturating_sub(width as u32)) {
    Some(mask) => mask,
    None => 0,
  }
}

/// Reject a bit count the buffer cannot satisfy.
#[inline]
pub(crate) fn check_bits(data: &[u8], bits: u32) -> Result<(), ParamError> {
  let capacity = (data.len() as u64).saturating_mul(8);
  if u64::from(bits) > capacity {
    return Err(ParamError::BitCountExceedsBuffer {
      bits: u64::from(bits),
      capacity,
    });
  }
  Ok(())
}

/// Advance the register over whole bytes of any length.
pub(crate) fn advance_bytes(field: &Gf32, mut state: u32, data: &[u8]) -> u32 {
  for chunk in data.chunks(MAX_CHUNK_BYTES) {
    state = engine::register(field, state, chunk, (chunk.len() as u32) << 3);
  }
  state
}
