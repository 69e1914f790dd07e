//! Streaming fuzzing: bit-granular splits, resume, combine, and framing must
//! agree with the one-shot CRC.

#![no_main]

use bitcrc::{BitChecksum, Crc, CrcParams, frame};
use libfuzzer_sys::fuzz_target;

/// Copy `bits` bits starting at bit `start` into a byte-aligned buffer.
fn realign(data: &[u8], start: u32, bits: u32) -> Vec<u8> {
  let mut out = vec![0u8; bits.div_ceil(8) as usize];
  for i in 0..bits {
    let src = start + i;
    let bit = (data[(src / 8) as usize] >> (7 - src % 8)) & 1;
    out[(i / 8) as usize] |= bit << (7 - i % 8);
  }
  out
}

fuzz_target!(|input: (u8, u16, u16, &[u8])| {
  let (preset, bits, split, data) = input;
  let params = [
    CrcParams::CRC8,
    CrcParams::CRC12,
    CrcParams::CRC16,
    CrcParams::CRC16W,
    CrcParams::CRC24A,
    CrcParams::CRC24B,
  ][usize::from(preset) % 6];

  let bits = u32::from(bits) % (8 * data.len() as u32 + 1);
  let split = u32::from(split) % (bits + 1);
  let oneshot = params.checksum_bits(data, bits).expect("bit count fits");

  let head = realign(data, 0, split);
  let tail = realign(data, split, bits - split);

  let mut crc = Crc::new(params);
  crc.update_bits(&head, split).expect("head fits");
  crc.update_bits(&tail, bits - split).expect("tail fits");
  assert_eq!(crc.finalize(), oneshot, "streaming mismatch: bits={bits} split={split}");

  let mut resumed = Crc::resume(params, params.checksum_bits(&head, split).expect("head fits"));
  resumed.update_bits(&tail, bits - split).expect("tail fits");
  assert_eq!(resumed.finalize(), oneshot, "resume mismatch: bits={bits} split={split}");

  let combined = Crc::combine(
    params,
    params.checksum_bits(&head, split).expect("head fits"),
    params.checksum_bits(&tail, bits - split).expect("tail fits"),
    u64::from(bits - split),
  );
  assert_eq!(combined, oneshot, "combine mismatch: bits={bits} split={split}");

  let framed = frame::attach(params, data, bits).expect("bit count fits");
  let total = bits + u32::from(params.width());
  assert_eq!(frame::verify(params, &framed, total), Ok(oneshot));
  assert_eq!(frame::residue(params, &framed, total), Ok(0));
});
