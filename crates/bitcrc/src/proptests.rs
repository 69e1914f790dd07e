extern crate std;

use std::vec::Vec;

use proptest::prelude::*;

use crate::{
  BitChecksum, Crc, CrcParams, POLYNOMIAL_CRC8, POLYNOMIAL_CRC12, POLYNOMIAL_CRC16, POLYNOMIAL_CRC16W,
  POLYNOMIAL_CRC24A, POLYNOMIAL_CRC24B, crc, crc_byte, crc_word, engine, reference::crc_bitwise,
};

fn presets() -> impl Strategy<Value = CrcParams> {
  prop_oneof![
    Just(CrcParams::CRC8),
    Just(CrcParams::CRC12),
    Just(CrcParams::CRC16),
    Just(CrcParams::CRC16W),
    Just(CrcParams::CRC24A),
    Just(CrcParams::CRC24B),
  ]
}

/// Any valid parameter set: random width, left-justified random poly and init.
fn any_params() -> impl Strategy<Value = CrcParams> {
  (1u8..=32, any::<u32>(), any::<u32>()).prop_map(|(width, poly, init)| {
    let mask = u32::MAX << (32 - u32::from(width));
    CrcParams::new(width, poly & mask, init & mask).unwrap()
  })
}

/// Bytes plus a bit count that fits them.
fn bitstream() -> impl Strategy<Value = (Vec<u8>, u32)> {
  proptest::collection::vec(any::<u8>(), 0..=512).prop_flat_map(|data| {
    let max = 8 * data.len() as u32;
    (Just(data), 0..=max)
  })
}

/// Copy `bits` bits starting at bit `start` into a fresh, byte-aligned buffer.
fn realign(data: &[u8], start: u32, bits: u32) -> Vec<u8> {
  let mut out = std::vec![0u8; bits.div_ceil(8) as usize];
  for i in 0..bits {
    let src = start + i;
    let bit = (data[(src / 8) as usize] >> (7 - src % 8)) & 1;
    out[(i / 8) as usize] |= bit << (7 - i % 8);
  }
  out
}

proptest! {
  #[test]
  fn byte_word_and_reference_agree((data, bits) in bitstream(), params in any_params()) {
    let (poly, init, width) = (params.poly(), params.init(), params.width());
    let expected = crc_bitwise(poly, init, &data, bits, width);
    prop_assert_eq!(crc_byte(&data, bits, poly, init, width), expected);
    prop_assert_eq!(crc_word(&data, bits, poly, init, width), expected);
    prop_assert_eq!(crc(&data, bits, poly, init, width), expected);
  }

  #[test]
  fn result_fits_width((data, bits) in bitstream(), params in any_params()) {
    let width = params.width();
    let value = crc_word(&data, bits, params.poly(), params.init(), width);
    if width < 32 {
      prop_assert!(value < (1u32 << width));
    }
  }

  #[test]
  fn zero_length_returns_init(params in any_params(), data in proptest::collection::vec(any::<u8>(), 0..4)) {
    let expected = engine::finish(params.init(), params.width());
    prop_assert_eq!(crc_byte(&data, 0, params.poly(), params.init(), params.width()), expected);
    prop_assert_eq!(crc_word(&data, 0, params.poly(), params.init(), params.width()), expected);
  }

  #[test]
  fn single_bit_flip_changes_crc(
    (data, bits) in bitstream().prop_filter("need at least one bit", |(_, bits)| *bits > 0),
    params in presets(),
    flip in any::<u32>(),
  ) {
    let flip = flip % bits;
    let mut corrupted = data.clone();
    corrupted[(flip / 8) as usize] ^= 0x80 >> (flip % 8);
    let (poly, init, width) = (params.poly(), params.init(), params.width());
    prop_assert_ne!(crc_word(&data, bits, poly, init, width), crc_word(&corrupted, bits, poly, init, width));
  }

  #[test]
  fn streaming_at_any_bit_split_matches_oneshot(
    (data, bits) in bitstream(),
    params in any_params(),
    split in any::<u32>(),
  ) {
    let split = if bits == 0 { 0 } else { split % (bits + 1) };
    let head = realign(&data, 0, split);
    let tail = realign(&data, split, bits - split);

    let mut crc = Crc::new(params);
    crc.update_bits(&head, split).unwrap();
    crc.update_bits(&tail, bits - split).unwrap();
    prop_assert_eq!(crc.bits_processed(), u64::from(bits));
    prop_assert_eq!(crc.finalize(), params.checksum_bits(&data, bits).unwrap());

    let a = params.checksum_bits(&head, split).unwrap();
    let b = params.checksum_bits(&tail, bits - split).unwrap();
    prop_assert_eq!(Crc::combine(params, a, b, u64::from(bits - split)), crc.finalize());
  }

  #[cfg(feature = "alloc")]
  #[test]
  fn frame_round_trip((data, bits) in bitstream(), params in presets()) {
    let framed = crate::frame::attach(params, &data, bits).unwrap();
    let total = bits + u32::from(params.width());
    prop_assert_eq!(crate::frame::verify(params, &framed, total), Ok(params.checksum_bits(&data, bits).unwrap()));
    prop_assert_eq!(crate::frame::residue(params, &framed, total), Ok(0));
  }

  #[test]
  fn truncating_multiply_matches_zero_field(a in any::<u32>(), b in any::<u32>()) {
    prop_assert_eq!(crate::galois_multiply(a, b), crate::Gf32::TRUNCATING.mul(a, b));
  }
}

#[test]
fn preset_polynomials_have_expected_degree() {
  for (poly, width) in [
    (POLYNOMIAL_CRC8, 8u8),
    (POLYNOMIAL_CRC12, 12),
    (POLYNOMIAL_CRC16, 16),
    (POLYNOMIAL_CRC16W, 16),
    (POLYNOMIAL_CRC24A, 24),
    (POLYNOMIAL_CRC24B, 24),
  ] {
    // Every generator has a constant term: bit `32 - width` is set.
    assert_eq!(poly.trailing_zeros(), 32 - u32::from(width));
  }
}
