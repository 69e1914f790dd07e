//! Core traits for the bitcrc workspace.
//!
//! This crate provides the interfaces and error types shared by the CRC
//! engine crate. It is `no_std` compatible and has zero dependencies.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`BitChecksum`] | Streaming checksum over bit-granular input |
//! | [`ParamError`] | Rejected CRC parameters or bit counts |
//! | [`CrcMismatch`] | A received CRC that does not match the recomputed one |
//! | [`FrameError`] | Everything that can go wrong verifying a framed block |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;

pub use checksum::BitChecksum;
pub use error::{CrcMismatch, FrameError, ParamError};
