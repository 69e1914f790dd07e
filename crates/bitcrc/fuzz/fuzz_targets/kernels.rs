//! Cross-kernel equivalence fuzzing.
//!
//! Verifies that every register kernel available on this CPU (portable byte
//! and word, plus PCLMULQDQ/PMULL when detected) matches the bitwise reference
//! for arbitrary bit counts, polynomials, and initial conditions.

#![no_main]

use bitcrc::__internal::kernel_test::{run_all_kernels, verify_kernels};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u32, u32, u8, u16, &[u8])| {
  let (poly, init, width, bits, data) = input;
  let width = width % 32 + 1;
  let mask = u32::MAX << (32 - u32::from(width));
  let (poly, init) = (poly & mask, init & mask);
  let bits = u32::from(bits) % (8 * data.len() as u32 + 1);

  let results = run_all_kernels(data, bits, poly, init, width);
  let expected = results[0].crc;
  for result in &results[1..] {
    assert_eq!(
      result.crc, expected,
      "kernel mismatch: {} produced {:#010x}, but {} produced {:#010x}, bits={bits}",
      result.name, result.crc, results[0].name, expected
    );
  }

  verify_kernels(data, bits, poly, init, width).expect("kernel verification failed");
});
