use bitcrc::{
  BitChecksum, Crc, CrcParams, FrameError, Gf32, ParamError, crc, crc_byte, crc_word, engine, frame,
  reference::crc_bitwise,
};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed | 1;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

const PRESETS: [CrcParams; 6] = [
  CrcParams::CRC8,
  CrcParams::CRC12,
  CrcParams::CRC16,
  CrcParams::CRC16W,
  CrcParams::CRC24A,
  CrcParams::CRC24B,
];

#[test]
fn engines_agree_for_every_bit_length() {
  let seeds = [0u64, 1, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];
  for &seed in &seeds {
    let data = gen_bytes(40, seed);
    for params in PRESETS {
      let init = params.poly().rotate_left(7) & params.mask();
      let (poly, width) = (params.poly(), params.width());
      for bits in 0..=(8 * data.len() as u32) {
        let reference = crc_bitwise(poly, init, &data, bits, width);
        assert_eq!(crc_byte(&data, bits, poly, init, width), reference, "byte bits={bits} poly={poly:#x}");
        assert_eq!(crc_word(&data, bits, poly, init, width), reference, "word bits={bits} poly={poly:#x}");
        assert_eq!(crc(&data, bits, poly, init, width), reference, "auto bits={bits} poly={poly:#x}");
      }
    }
  }
}

#[test]
fn output_never_exceeds_width() {
  let data = gen_bytes(64, 99);
  for width in 1u8..32 {
    let poly = 0x8000_0000u32 >> (width - 1) | 0x8000_0000;
    for bits in [1, 7, 8, 9, 100, 511, 512] {
      let value = crc_word(&data, bits, poly, 0, width);
      assert!(value < (1 << width), "width={width} bits={bits} value={value:#x}");
    }
  }
}

#[test]
fn trailing_garbage_bits_are_ignored() {
  for params in PRESETS {
    for leftover in 1..8u32 {
      let clean = [0xA5, 0x5A, 0xF0 & (0xFF << (8 - leftover)) as u8];
      let dirty = [0xA5, 0x5A, 0xF0 | (0xFF >> leftover) as u8];
      let bits = 16 + leftover;
      assert_eq!(
        crc_word(&clean, bits, params.poly(), 0, params.width()),
        crc_word(&dirty, bits, params.poly(), 0, params.width()),
        "leftover={leftover}"
      );
      assert_eq!(
        crc_byte(&clean, bits, params.poly(), 0, params.width()),
        crc_byte(&dirty, bits, params.poly(), 0, params.width()),
        "leftover={leftover}"
      );
    }
  }
}

#[test]
fn register_kernels_chain_across_byte_boundaries() {
  let data = gen_bytes(256, 5);
  for params in PRESETS {
    let field = params.field();
    let whole = engine::register(&field, params.init(), &data, 2048);
    let mut state = params.init();
    for chunk in data.chunks(13) {
      state = engine::byte_register(&field, state, chunk, 8 * chunk.len() as u32);
    }
    assert_eq!(state, whole);
    let mut state = params.init();
    for chunk in data.chunks(6) {
      state = engine::word_register(&field, state, chunk, 8 * chunk.len() as u32);
    }
    assert_eq!(state, whole);
  }
}

#[test]
fn streaming_and_resume_invariants() {
  let lengths = [0usize, 1, 2, 3, 4, 7, 8, 15, 16, 31, 32, 63, 64, 255, 256, 1024];
  for &len in &lengths {
    let data = gen_bytes(len, 0xDEAD_BEEF ^ len as u64);
    for params in PRESETS {
      let oneshot = params.checksum(&data);
      for &split in &[0usize, 1, len / 2, len.saturating_sub(1), len] {
        if split > len {
          continue;
        }
        let (a, b) = data.split_at(split);

        let mut h = Crc::new(params);
        h.update(a);
        h.update(b);
        assert_eq!(h.finalize(), oneshot, "split={split} len={len}");
        assert_eq!(h.bits_processed(), 8 * len as u64);

        let mut resumed = Crc::resume(params, params.checksum(a));
        resumed.update(b);
        assert_eq!(resumed.finalize(), oneshot, "resume split={split} len={len}");

        let combined = Crc::combine(params, params.checksum(a), params.checksum(b), 8 * b.len() as u64);
        assert_eq!(combined, oneshot, "combine split={split} len={len}");
      }
    }
  }
}

#[test]
fn frame_round_trip_every_preset() {
  let payload = gen_bytes(33, 11);
  for params in PRESETS {
    for bits in [0u32, 1, 5, 8, 13, 64, 263, 264] {
      let framed = frame::attach(params, &payload, bits).unwrap();
      let total = bits + u32::from(params.width());
      assert_eq!(framed.len(), total.div_ceil(8) as usize);
      assert!(frame::verify(params, &framed, total).is_ok(), "bits={bits}");
      assert_eq!(frame::residue(params, &framed, total), Ok(0), "bits={bits}");

      let mut broken = framed.clone();
      broken[0] ^= 0x80;
      assert!(matches!(frame::verify(params, &broken, total), Err(FrameError::Mismatch(_))));
    }
  }
}

#[test]
fn checked_layer_rejects_bad_input() {
  assert_eq!(CrcParams::new(0, 0, 0), Err(ParamError::InvalidWidth(0)));
  assert!(CrcParams::CRC24A.checksum_bits(&[0; 3], 25).is_err());
  let mut h = Crc::new(CrcParams::CRC8);
  assert!(h.update_bits(&[], 1).is_err());
  assert_eq!(h.bits_processed(), 0);
}

#[test]
fn truncating_field_is_plain_galois_multiply() {
  let data = gen_bytes(64, 3);
  for pair in data.chunks_exact(8) {
    let a = u32::from_le_bytes([pair[0], pair[1], pair[2], pair[3]]);
    let b = u32::from_le_bytes([pair[4], pair[5], pair[6], pair[7]]);
    assert_eq!(Gf32::TRUNCATING.mul(a, b), bitcrc::galois_multiply(a, b));
  }
}

#[test]
fn introspection_names_are_known() {
  let backend = bitcrc::backend_name();
  assert!(["portable", "x86_64/pclmul", "aarch64/pmull"].contains(&backend), "{backend}");
  let kernel = bitcrc::kernel_name_for_bits(1 << 20);
  assert!(kernel.ends_with("byte") || kernel.ends_with("word"), "{kernel}");
}
