//! Galois multiply backends.
//!
//! The engines are generic over [`Multiplier`], so the same byte-serial and
//! word-serial loops compile once against the portable Horner routine and once
//! per hardware carry-less multiply instruction:
//!
//! | Backend | Instruction | Feature gate |
//! |---------|-------------|--------------|
//! | [`Portable`] | none | always |
//! | `Pclmul` | PCLMULQDQ | x86_64, `pclmulqdq` |
//! | `Pmull` | PMULL (64-bit) | aarch64, `aes` |
//!
//! Hardware backends reduce with Barrett constants carried by [`Gf32`], so
//! every backend is bit-identical to [`Gf32::mul`].

use crate::gf::Gf32;

#[cfg(target_arch = "aarch64")]
pub(crate) mod aarch64;
#[cfg(target_arch = "x86_64")]
pub(crate) mod x86_64;

/// A galois multiply implementation the engines are instantiated with.
pub(crate) trait Multiplier {
  /// `a · b mod (x^32 + field.poly())`.
  fn gmpy(field: &Gf32, a: u32, b: u32) -> u32;
}

/// Software galois multiply; available everywhere.
pub(crate) enum Portable {}

impl Multiplier for Portable {
  #[inline(always)]
  fn gmpy(field: &Gf32, a: u32, b: u32) -> u32 {
    field.mul(a, b)
  }
}

/// Whether a hardware carry-less multiply is usable on this CPU.
///
/// Uses runtime detection under `std`, otherwise the compile-time target
/// features.
#[inline]
#[must_use]
pub(crate) fn available() -> bool {
  #[cfg(all(target_arch = "x86_64", feature = "std"))]
  {
    std::arch::is_x86_feature_detected!("pclmulqdq")
  }
  #[cfg(all(target_arch = "x86_64", not(feature = "std")))]
  {
    cfg!(target_feature = "pclmulqdq")
  }
  #[cfg(all(target_arch = "aarch64", feature = "std"))]
  {
    std::arch::is_aarch64_feature_detected!("aes")
  }
  #[cfg(all(target_arch = "aarch64", not(feature = "std")))]
  {
    cfg!(target_feature = "aes")
  }
  #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
  {
    false
  }
}

/// Name prefix of the hardware backend on this architecture.
#[inline]
#[must_use]
pub(crate) const fn hardware_name() -> &'static str {
  #[cfg(target_arch = "x86_64")]
  {
    "x86_64/pclmul"
  }
  #[cfg(target_arch = "aarch64")]
  {
    "aarch64/pmull"
  }
  #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
  {
    "portable"
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn portable_backend_is_field_multiply() {
    let field = Gf32::new(0x864C_FB00);
    for b in 0..=0x1FFu32 {
      assert_eq!(Portable::gmpy(&field, 0xDEAD_BEEF, b), field.mul(0xDEAD_BEEF, b));
    }
  }

  #[test]
  fn hardware_name_is_stable() {
    let name = hardware_name();
    assert!(!name.is_empty());
    if !cfg!(any(target_arch = "x86_64", target_arch = "aarch64")) {
      assert!(!available());
    }
  }
}
