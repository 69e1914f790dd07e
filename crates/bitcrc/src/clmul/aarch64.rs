//! PMULL galois multiply and the engine kernels built on it.

#![allow(unsafe_code)]
#![allow(unsafe_op_in_unsafe_fn)]

use core::arch::aarch64::vmull_p64;

use super::Multiplier;
use crate::{
  engine::{byte, word},
  gf::Gf32,
};

#[inline(always)]
unsafe fn clmul(a: u64, b: u64) -> u64 {
  vmull_p64(a, b) as u64
}

/// `a · b mod (x^32 + poly)` via PMULL.
///
/// # Safety
///
/// The CPU must support the `aes` extension (64-bit PMULL).
#[inline(always)]
pub(crate) unsafe fn gmpy(field: &Gf32, a: u32, b: u32) -> u32 {
  let product = clmul(u64::from(a), u64::from(b));
  let q = clmul(product >> 32, field.mu()) >> 32;
  (product as u32) ^ (clmul(q, u64::from(field.poly())) as u32)
}

/// PMULL backend marker.
pub(crate) enum Pmull {}

impl Multiplier for Pmull {
  #[inline(always)]
  fn gmpy(field: &Gf32, a: u32, b: u32) -> u32 {
    // SAFETY: `Pmull` only instantiates the engines inside the
    // `#[target_feature(enable = "neon,aes")]` kernels below, which are only
    // selected after `aes` was detected.
    unsafe { gmpy(field, a, b) }
  }
}

#[target_feature(enable = "neon,aes")]
unsafe fn byte_pmull_impl(field: &Gf32, state: u32, data: &[u8], bits: u32) -> u32 {
  byte::advance::<Pmull>(field, state, data, bits)
}

#[target_feature(enable = "neon,aes")]
unsafe fn word_pmull_impl(field: &Gf32, state: u32, data: &[u8], bits: u32) -> u32 {
  word::advance::<Pmull>(field, state, data, bits)
}

/// Byte-serial register kernel on PMULL.
#[inline]
pub(crate) fn byte_pmull(field: &Gf32, state: u32, data: &[u8], bits: u32) -> u32 {
  // SAFETY: dispatch only selects this kernel when `aes` is available.
  unsafe { byte_pmull_impl(field, state, data, bits) }
}

/// Word-serial register kernel on PMULL.
#[inline]
pub(crate) fn word_pmull(field: &Gf32, state: u32, data: &[u8], bits: u32) -> u32 {
  // SAFETY: dispatch only selects this kernel when `aes` is available.
  unsafe { word_pmull_impl(field, state, data, bits) }
}
