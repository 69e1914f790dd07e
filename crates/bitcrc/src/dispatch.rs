//! Kernel selection and caching.
//!
//! Kernels are plain function pointers ([`RegisterFn`]). Selection happens
//! once: under `std` the result is cached in a `OnceLock`; without `std` the
//! (compile-time resolved) selection is recomputed per call.
//!
//! | Kernel | Requires |
//! |--------|----------|
//! | `x86_64/pclmul-byte`, `x86_64/pclmul-word` | PCLMULQDQ |
//! | `aarch64/pmull-byte`, `aarch64/pmull-word` | PMULL (`aes`) |
//! | `portable/byte`, `portable/word` | nothing |

use crate::{
  clmul,
  config::{self, Config, EngineForce, Force},
  engine::{self, RegisterFn},
};

/// A selected kernel: its name (for diagnostics) and function pointer.
#[derive(Clone, Copy, Debug)]
pub struct Selected<F> {
  /// Human-readable kernel name, e.g. `"portable/word"`.
  pub name: &'static str,
  /// The kernel function.
  pub func: F,
}

impl<F> Selected<F> {
  /// Create a new selected result.
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, func: F) -> Self {
    Self { name, func }
  }
}

const PORTABLE_BYTE: Selected<RegisterFn> = Selected::new("portable/byte", engine::portable_byte);

const PORTABLE_WORD: Selected<RegisterFn> = Selected::new("portable/word", engine::portable_word);

/// The selected kernel set plus the engine policy it was selected under.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Kernels {
  pub backend: &'static str,
  pub byte: Selected<RegisterFn>,
  pub word: Selected<RegisterFn>,
  pub engine: EngineForce,
  pub byte_to_word: u32,
}

impl Kernels {
  /// Kernel the engine policy picks for `bits` input bits.
  #[inline]
  #[must_use]
  pub(crate) fn for_bits(&self, bits: u32) -> Selected<RegisterFn> {
    match self.engine {
      EngineForce::Byte => self.byte,
      EngineForce::Word => self.word,
      EngineForce::Auto if bits < self.byte_to_word => self.byte,
      EngineForce::Auto => self.word,
    }
  }
}

/// Hardware (byte, word) kernels, if this CPU has a carry-less multiply.
#[must_use]
fn hardware_kernels() -> Option<(Selected<RegisterFn>, Selected<RegisterFn>)> {
  if !clmul::available() {
    return None;
  }
  #[cfg(target_arch = "x86_64")]
  {
    Some((
      Selected::new("x86_64/pclmul-byte", clmul::x86_64::byte_pclmul),
      Selected::new("x86_64/pclmul-word", clmul::x86_64::word_pclmul),
    ))
  }
  #[cfg(target_arch = "aarch64")]
  {
    Some((
      Selected::new("aarch64/pmull-byte", clmul::aarch64::byte_pmull),
      Selected::new("aarch64/pmull-word", clmul::aarch64::word_pmull),
    ))
  }
  #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
  {
    None
  }
}

fn select(cfg: Config) -> Kernels {
  let hardware = match cfg.effective_force {
    Force::Portable => None,
    Force::Auto | Force::Clmul => hardware_kernels(),
  };
  let (backend, byte, word) = match hardware {
    Some((byte, word)) => (clmul::hardware_name(), byte, word),
    None => ("portable", PORTABLE_BYTE, PORTABLE_WORD),
  };

  Kernels {
    backend,
    byte,
    word,
    engine: cfg.engine,
    byte_to_word: cfg.tunables.byte_to_word,
  }
}

#[cfg(feature = "std")]
#[inline]
pub(crate) fn kernels() -> Kernels {
  use std::sync::OnceLock;
  static KERNELS: OnceLock<Kernels> = OnceLock::new();
  *KERNELS.get_or_init(|| select(config::get()))
}

#[cfg(not(feature = "std"))]
#[inline]
pub(crate) fn kernels() -> Kernels {
  select(config::get())
}

#[inline]
pub(crate) fn kernel_for_bits(bits: u32) -> Selected<RegisterFn> {
  kernels().for_bits(bits)
}

/// Every kernel usable on this CPU, portable first.
#[cfg_attr(not(feature = "alloc"), allow(dead_code))]
pub(crate) fn available_kernels() -> [Option<Selected<RegisterFn>>; 4] {
  let hardware = hardware_kernels();
  [
    Some(PORTABLE_BYTE),
    Some(PORTABLE_WORD),
    hardware.map(|(byte, _)| byte),
    hardware.map(|(_, word)| word),
  ]
}

/// Name of the selected galois multiply backend (`"portable"`,
/// `"x86_64/pclmul"`, or `"aarch64/pmull"`).
#[must_use]
pub fn backend_name() -> &'static str {
  kernels().backend
}

/// Name of the kernel [`crc`](crate::crc) would run for `bits` input bits.
#[must_use]
pub fn kernel_name_for_bits(bits: u32) -> &'static str {
  kernel_for_bits(bits).name
}
