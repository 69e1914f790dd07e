//! PCLMULQDQ galois multiply and the engine kernels built on it.
//!
//! One 64×64 carry-less multiply yields the full product of two 32-bit
//! operands; two more apply the Barrett reduction.

#![allow(unsafe_code)]
// Rust 2024 requires explicit `unsafe {}` even inside `unsafe fn` bodies.
#![allow(unsafe_op_in_unsafe_fn)]

use core::arch::x86_64::{_mm_clmulepi64_si128, _mm_cvtsi64_si128, _mm_cvtsi128_si64};

use super::Multiplier;
use crate::{
  engine::{byte, word},
  gf::Gf32,
};

#[inline(always)]
unsafe fn clmul(a: u64, b: u64) -> u64 {
  let a = _mm_cvtsi64_si128(a as i64);
  let b = _mm_cvtsi64_si128(b as i64);
  // Low lane × low lane; the callers' products fit in 64 bits.
  _mm_cvtsi128_si64(_mm_clmulepi64_si128(a, b, 0x00)) as u64
}

/// `a · b mod (x^32 + poly)` via PCLMULQDQ.
///
/// # Safety
///
/// The CPU must support `pclmulqdq`.
#[inline(always)]
pub(crate) unsafe fn gmpy(field: &Gf32, a: u32, b: u32) -> u32 {
  let product = clmul(u64::from(a), u64::from(b));
  let q = clmul(product >> 32, field.mu()) >> 32;
  (product as u32) ^ (clmul(q, u64::from(field.poly())) as u32)
}

/// PCLMULQDQ backend marker.
pub(crate) enum Pclmul {}

impl Multiplier for Pclmul {
  #[inline(always)]
  fn gmpy(field: &Gf32, a: u32, b: u32) -> u32 {
    // SAFETY: `Pclmul` only instantiates the engines inside the
    // `#[target_feature(enable = "pclmulqdq")]` kernels below, which are only
    // selected after `pclmulqdq` was detected.
    unsafe { gmpy(field, a, b) }
  }
}

#[target_feature(enable = "pclmulqdq")]
unsafe fn byte_pclmul_impl(field: &Gf32, state: u32, data: &[u8], bits: u32) -> u32 {
  byte::advance::<Pclmul>(field, state, data, bits)
}

#[target_feature(enable = "pclmulqdq")]
unsafe fn word_pclmul_impl(field: &Gf32, state: u32, data: &[u8], bits: u32) -> u32 {
  word::advance::<Pclmul>(field, state, data, bits)
}

/// Byte-serial register kernel on PCLMULQDQ.
#[inline]
pub(crate) fn byte_pclmul(field: &Gf32, state: u32, data: &[u8], bits: u32) -> u32 {
  // SAFETY: dispatch only selects this kernel when `pclmulqdq` is available.
  unsafe { byte_pclmul_impl(field, state, data, bits) }
}

/// Word-serial register kernel on PCLMULQDQ.
#[inline]
pub(crate) fn word_pclmul(field: &Gf32, state: u32, data: &[u8], bits: u32) -> u32 {
  // SAFETY: dispatch only selects this kernel when `pclmulqdq` is available.
  unsafe { word_pclmul_impl(field, state, data, bits) }
}
