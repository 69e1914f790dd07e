//! Engine benchmarks.
//!
//! Run: `cargo bench -p bitcrc`
//!
//! This benchmarks:
//! - byte-serial vs word-serial engines (CRC-24A) on whole bytes
//! - the auto-selected path on bit counts that end inside a byte
//! - the galois multiply primitive

use bitcrc::{CrcParams, Gf32, POLYNOMIAL_CRC24A, crc, crc_byte, crc_word};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Standard benchmark sizes.
const SIZES: [usize; 5] = [8, 64, 256, 1024, 8192];

fn bench_engines(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc24a");
  eprintln!("bitcrc backend: {}", bitcrc::backend_name());

  for size in SIZES {
    let data = vec![0xA5u8; size];
    let bits = 8 * size as u32;
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("byte", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(crc_byte(data, bits, POLYNOMIAL_CRC24A, 0, 24)));
    });
    group.bench_with_input(BenchmarkId::new("word", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(crc_word(data, bits, POLYNOMIAL_CRC24A, 0, 24)));
    });
    group.bench_with_input(BenchmarkId::new("auto", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(crc(data, bits, POLYNOMIAL_CRC24A, 0, 24)));
    });
  }

  group.finish();
}

fn bench_unaligned_bits(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc24a/unaligned");
  let data = vec![0x3Cu8; 1024];

  for bits in [61u32, 1021, 8189] {
    group.throughput(Throughput::Elements(u64::from(bits)));
    group.bench_with_input(BenchmarkId::from_parameter(bits), &data, |b, data| {
      b.iter(|| core::hint::black_box(CrcParams::CRC24A.checksum_bits(data, bits)));
    });
  }

  group.finish();
}

fn bench_gmpy(c: &mut Criterion) {
  let field = Gf32::new(POLYNOMIAL_CRC24A);
  c.bench_function("gf32/mul", |b| {
    b.iter(|| core::hint::black_box(field.mul(core::hint::black_box(0xDEAD_BEEF), core::hint::black_box(0xFF))));
  });
  c.bench_function("gf32/galois_multiply", |b| {
    b.iter(|| {
      core::hint::black_box(bitcrc::galois_multiply(
        core::hint::black_box(0xDEAD_BEEF),
        core::hint::black_box(0x8765_4321),
      ))
    });
  });
}

criterion_group!(benches, bench_engines, bench_unaligned_bits, bench_gmpy);
criterion_main!(benches);
