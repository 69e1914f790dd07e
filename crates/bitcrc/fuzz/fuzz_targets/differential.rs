//! Differential fuzzing against the `crc` crate catalogue.

#![no_main]

use bitcrc::CrcParams;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let cases: [(&str, CrcParams, u32); 6] = [
    ("CRC-8/LTE", CrcParams::CRC8, u32::from(crc::Crc::<u8>::new(&crc::CRC_8_LTE).checksum(data))),
    ("CRC-12/DECT", CrcParams::CRC12, u32::from(crc::Crc::<u16>::new(&crc::CRC_12_DECT).checksum(data))),
    ("CRC-16/XMODEM", CrcParams::CRC16, u32::from(crc::Crc::<u16>::new(&crc::CRC_16_XMODEM).checksum(data))),
    ("CRC-16/UMTS", CrcParams::CRC16W, u32::from(crc::Crc::<u16>::new(&crc::CRC_16_UMTS).checksum(data))),
    ("CRC-24/LTE-A", CrcParams::CRC24A, crc::Crc::<u32>::new(&crc::CRC_24_LTE_A).checksum(data)),
    ("CRC-24/LTE-B", CrcParams::CRC24B, crc::Crc::<u32>::new(&crc::CRC_24_LTE_B).checksum(data)),
  ];

  for (name, params, reference) in cases {
    let ours = params.checksum(data);
    assert_eq!(
      ours, reference,
      "{name} differential mismatch: ours={ours:#x}, reference={reference:#x}, len={}",
      data.len()
    );
  }
});
