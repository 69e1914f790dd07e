//! Optional diagnostics for kernel selection.
//!
//! This module is behind `cfg(feature = "diag")` and explains why
//! [`crc`](crate::crc) runs the kernel it runs, without affecting normal
//! builds.

use crate::{
  clmul,
  config::{self, EngineForce, Force},
  dispatch,
};

/// High-level reason for a selection outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionReason {
  /// `BITCRC_ENGINE` forced the engine.
  ForcedEngine,
  /// Below the byte→word threshold.
  BelowWordThreshold,
  /// Normal auto selection.
  Auto,
}

/// Everything that went into selecting a kernel for one input length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionDiag {
  pub bits: u32,
  pub reason: SelectionReason,
  pub requested_force: Force,
  pub effective_force: Force,
  pub engine: EngineForce,
  pub backend: &'static str,
  pub selected_kernel: &'static str,
  pub byte_to_word: u32,
  pub has_clmul: bool,
}

/// Diagnose kernel selection for `bits` input bits.
#[must_use]
pub fn selection(bits: u32) -> SelectionDiag {
  let cfg = config::get();
  let kernels = dispatch::kernels();

  let reason = match kernels.engine {
    EngineForce::Byte | EngineForce::Word => SelectionReason::ForcedEngine,
    EngineForce::Auto if bits < kernels.byte_to_word => SelectionReason::BelowWordThreshold,
    EngineForce::Auto => SelectionReason::Auto,
  };

  SelectionDiag {
    bits,
    reason,
    requested_force: cfg.requested_force,
    effective_force: cfg.effective_force,
    engine: kernels.engine,
    backend: kernels.backend,
    selected_kernel: kernels.for_bits(bits).name,
    byte_to_word: kernels.byte_to_word,
    has_clmul: clmul::available(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn agrees_with_dispatch() {
    for bits in [0, 8, 63, 64, 4096] {
      let d = selection(bits);
      assert_eq!(d.selected_kernel, dispatch::kernel_name_for_bits(bits));
      assert_eq!(d.backend, dispatch::backend_name());
      if d.engine == EngineForce::Auto {
        assert_eq!(d.reason == SelectionReason::BelowWordThreshold, bits < d.byte_to_word);
      }
    }
  }
}
