//! Galois multiply over GF(2).
//!
//! Every CRC state transition in this crate is an XOR of galois products:
//! shifting the register by `k` bits is a multiply by `x^k`, and mixing in a
//! chunk of input is a multiply of that chunk by the generator polynomial.
//!
//! # Field Model
//!
//! Operands are 32-bit polynomials with coefficients in {0, 1}; bit `i` holds
//! the coefficient of `x^i`. Products are reduced modulo `x^32 + poly`, where
//! `poly` is the left-justified generator polynomial (highest retained
//! coefficient in bit 31, implicit `x^width` term dropped). For a `width`-bit
//! generator `G(x)` the modulus factors as `x^(32 - width) · G(x)`, so a
//! register whose low `32 - width` bits are clear reduces exactly like a
//! `width`-bit CRC register reduces modulo `G(x)`.
//!
//! With `poly == 0` the reduction degenerates to discarding every product bit
//! above bit 31, which is the plain truncating multiply [`galois_multiply`].
//!
//! # Barrett Reduction
//!
//! Hardware carry-less multipliers (PCLMULQDQ, PMULL) return the full 63-bit
//! product. [`Gf32`] carries `mu = x^64 div (x^32 + poly)` so the high half can
//! be folded back with two more carry-less multiplies instead of a bit loop.

/// GF(2) product of `a` and `b`, truncated to 32 bits.
///
/// For each set bit `i` of `b`, `a << i` is XORed into the accumulator. Bits
/// shifted past bit 31 are discarded.
///
/// # Examples
///
/// ```
/// use bitcrc::galois_multiply;
///
/// // (x + 1)(x + 1) = x^2 + 1 over GF(2)
/// assert_eq!(galois_multiply(0b11, 0b11), 0b101);
/// // x^31 · x = x^32, which falls off the register.
/// assert_eq!(galois_multiply(0x8000_0000, 0b10), 0);
/// ```
#[inline]
#[must_use]
pub const fn galois_multiply(a: u32, b: u32) -> u32 {
  let mut acc = 0u32;
  let mut i = 0;
  while i < 32 {
    if (b >> i) & 1 != 0 {
      acc ^= a << i;
    }
    i += 1;
  }
  acc
}

/// Carry-less product of two 64-bit values, truncated to 64 bits.
///
/// Only used where the true product is known to fit in 64 bits.
#[inline]
#[must_use]
pub(crate) const fn clmul64(a: u64, b: u64) -> u64 {
  let mut acc = 0u64;
  let mut i = 0;
  while i < 64 {
    if (b >> i) & 1 != 0 {
      acc ^= a << i;
    }
    i += 1;
  }
  acc
}

/// `x^64 div (x^32 + poly)`: the 33-bit Barrett constant.
#[must_use]
const fn barrett_mu(poly: u32) -> u64 {
  let modulus = (1u128 << 32) | poly as u128;
  let mut rem: u128 = 1 << 64;
  let mut quot: u64 = 0;
  let mut degree: u32 = 32;
  loop {
    if (rem >> (degree + 32)) & 1 != 0 {
      quot |= 1 << degree;
      rem ^= modulus << degree;
    }
    if degree == 0 {
      break;
    }
    degree -= 1;
  }
  quot
}

/// The field GF(2)\[x\] / (x^32 + poly).
///
/// This replaces the polynomial registers a hardware galois multiply unit is
/// configured through: the polynomial travels with the value instead of living
/// in process-wide state.
///
/// # Examples
///
/// ```
/// use bitcrc::{Gf32, POLYNOMIAL_CRC8};
///
/// let field = Gf32::new(POLYNOMIAL_CRC8);
/// // One CRC-8 step over the byte 0xFF from a zeroed register.
/// assert_eq!(field.mul(POLYNOMIAL_CRC8, 0xFF) >> 24, 0x7B);
///
/// // The zero polynomial is the truncating multiply.
/// assert_eq!(Gf32::TRUNCATING.mul(0x8000_0001, 0b10), 0b10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Gf32 {
  poly: u32,
  mu: u64,
}

impl Gf32 {
  /// The field with no reduction polynomial: products are truncated to 32 bits.
  pub const TRUNCATING: Self = Self::new(0);

  /// Build the field for a left-justified generator polynomial.
  #[inline]
  #[must_use]
  pub const fn new(poly: u32) -> Self {
    Self {
      poly,
      mu: barrett_mu(poly),
    }
  }

  /// The reduction polynomial (left-justified, implicit `x^32` dropped).
  #[inline]
  #[must_use]
  pub const fn poly(&self) -> u32 {
    self.poly
  }

  /// Barrett constant for reducing a 64-bit carry-less product.
  #[cfg_attr(not(any(target_arch = "x86_64", target_arch = "aarch64", test)), allow(dead_code))]
  #[inline]
  #[must_use]
  pub(crate) const fn mu(&self) -> u64 {
    self.mu
  }

  /// `a · b mod (x^32 + poly)`.
  ///
  /// Horner evaluation over the bits of `b`, most significant first: shift the
  /// accumulator by one degree (folding any `x^32` overflow back through the
  /// polynomial), then add `a` if the bit is set. The loop only visits bits up
  /// to the highest set bit of `b`, so scaling by a byte costs eight steps.
  #[inline]
  #[must_use]
  pub const fn mul(&self, a: u32, b: u32) -> u32 {
    let mut acc = 0u32;
    let mut bit = 32 - b.leading_zeros();
    while bit > 0 {
      bit -= 1;
      let overflow = acc & 0x8000_0000 != 0;
      acc <<= 1;
      if overflow {
        acc ^= self.poly;
      }
      if (b >> bit) & 1 != 0 {
        acc ^= a;
      }
    }
    acc
  }

  /// `x^n mod (x^32 + poly)`, by square-and-multiply.
  ///
  /// Multiplying a register by `x^n` is the effect of feeding it `n` zero bits.
  #[must_use]
  pub const fn x_pow(&self, mut n: u64) -> u32 {
    let mut result = 1u32;
    let mut base = 0b10u32;
    while n != 0 {
      if n & 1 != 0 {
        result = self.mul(result, base);
      }
      base = self.mul(base, base);
      n >>= 1;
    }
    result
  }

  /// Reduce a full carry-less product modulo `x^32 + poly`.
  ///
  /// `product` must be the product of two 32-bit operands (degree < 63).
  #[inline]
  #[must_use]
  pub const fn reduce(&self, product: u64) -> u32 {
    let hi = product >> 32;
    let q = clmul64(hi, self.mu) >> 32;
    (product as u32) ^ (clmul64(q, self.poly as u64) as u32)
  }
}
