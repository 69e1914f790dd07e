//! Bit-granular CRC engine built on GF(2) galois multiplication.
//!
//! Computes the CRC remainder of an input bit-stream of *any* length (not only
//! whole bytes) for a left-justified generator polynomial of width 1 to 32.
//! Transport blocks and code blocks in radio framing are the motivating case:
//! their CRCs cover an exact number of bits.
//!
//! # Engines
//!
//! | Function | Consumes | Notes |
//! |----------|----------|-------|
//! | [`crc_byte`] | 1 byte / step | Byte-serial reference engine |
//! | [`crc_word`] | 2 bytes / step | Word-serial engine, identical results |
//! | [`crc`] | either | Engine picked by [`config`] |
//!
//! Every state transition is an XOR of galois products (see [`Gf32`]). The
//! galois multiply runs on PCLMULQDQ (x86_64) or PMULL (aarch64) when the CPU
//! has it, otherwise on a portable routine. All backends agree bit for bit.
//!
//! # Presets
//!
//! | Constant | Polynomial | Width | Check (`"123456789"`) |
//! |----------|------------|-------|------------------------|
//! | [`POLYNOMIAL_CRC8`] | `0x9B00_0000` | 8 | `0xEA` |
//! | [`POLYNOMIAL_CRC12`] | `0x80F0_0000` | 12 | `0xF5B` |
//! | [`POLYNOMIAL_CRC16`] | `0x1021_0000` | 16 | `0x31C3` |
//! | [`POLYNOMIAL_CRC16W`] | `0x8005_0000` | 16 | `0xFEE8` |
//! | [`POLYNOMIAL_CRC24A`] | `0x864C_FB00` | 24 | `0xCDE703` |
//! | [`POLYNOMIAL_CRC24B`] | `0x8000_6300` | 24 | `0x23EF52` |
//!
//! # Example
//!
//! ```rust
//! use bitcrc::{BitChecksum, Crc, CrcParams, POLYNOMIAL_CRC24A, crc_byte, crc_word};
//!
//! // Raw engines: input, bit count, polynomial, init, output width.
//! let data = b"123456789";
//! assert_eq!(crc_byte(data, 72, POLYNOMIAL_CRC24A, 0, 24), 0xCD_E703);
//! assert_eq!(crc_word(data, 72, POLYNOMIAL_CRC24A, 0, 24), 0xCD_E703);
//!
//! // 61 bits: the last byte contributes only its top five bits.
//! let short = crc_byte(data, 61, POLYNOMIAL_CRC24A, 0, 24);
//! assert_eq!(crc_word(data, 61, POLYNOMIAL_CRC24A, 0, 24), short);
//!
//! // Checked, streaming API.
//! let mut crc = Crc::new(CrcParams::CRC24A);
//! crc.update(&data[..7]);
//! crc.update_bits(&data[7..], 5)?;
//! assert_eq!(crc.finalize(), short);
//! # Ok::<(), bitcrc::ParamError>(())
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use
//! (hardware backends are then chosen from compile-time target features):
//!
//! ```toml
//! [dependencies]
//! bitcrc = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod clmul;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod frame;
mod gf;
mod hasher;
mod params;
pub mod reference;

#[cfg(feature = "diag")]
pub mod diag;


#[doc(hidden)]
pub mod __internal {
  #[cfg(feature = "alloc")]
  pub mod kernel_test {
    pub use crate::kernel_test::{KernelResult, run_all_kernels, verify_kernels};
  }
}

// Proptest uses file I/O for failure persistence that Miri cannot interpret.
#[cfg(all(test, not(miri)))]
mod proptests;

pub use dispatch::{backend_name, kernel_name_for_bits};
pub use engine::{crc, crc_byte, crc_word};
pub use gf::{Gf32, galois_multiply};
pub use hasher::Crc;
pub use params::{
  CrcParams, POLYNOMIAL_CRC8, POLYNOMIAL_CRC12, POLYNOMIAL_CRC16, POLYNOMIAL_CRC16W, POLYNOMIAL_CRC24A,
  POLYNOMIAL_CRC24B,
};
// Re-export traits for convenience
pub use traits::{BitChecksum, CrcMismatch, FrameError, ParamError};
