//! Runtime configuration (overrides + thresholds).
//!
//! This module centralizes the selection knobs:
//! - which galois multiply backend the engines run on
//! - which engine [`crc`](crate::crc) uses, and where `auto` switches engines
//!
//! Overrides come from the environment (read once, `std` only):
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `BITCRC_FORCE` | `auto`, `portable`, `clmul` (`pclmul`, `pmull`) | `auto` |
//! | `BITCRC_ENGINE` | `auto`, `byte`, `word` | `auto` |
//! | `BITCRC_THRESHOLD_BYTE_TO_WORD` | input bits | `64` |
//!
//! Safety note: a forced hardware backend is always clamped to detected CPU
//! capabilities.

/// Forced galois multiply backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Force {
  /// Hardware carry-less multiply when detected, otherwise portable.
  #[default]
  Auto,
  /// The portable Horner routine.
  Portable,
  /// Hardware carry-less multiply (PCLMULQDQ / PMULL), if available.
  Clmul,
}

impl Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Portable => "portable",
      Self::Clmul => "clmul",
    }
  }
}

/// Forced engine for [`crc`](crate::crc) and the streaming hasher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EngineForce {
  /// Byte-serial below [`Tunables::byte_to_word`], word-serial at or above.
  #[default]
  Auto,
  /// Always byte-serial.
  Byte,
  /// Always word-serial.
  Word,
}

impl EngineForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Byte => "byte",
      Self::Word => "word",
    }
  }
}

/// Selection thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tunables {
  /// Input bits at which `auto` switches from the byte-serial to the
  /// word-serial engine.
  pub byte_to_word: u32,
}

impl Default for Tunables {
  fn default() -> Self {
    Self { byte_to_word: 64 }
  }
}

/// Full runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
  /// Requested backend (env/programmatic).
  pub requested_force: Force,
  /// Backend clamped to detected CPU capabilities.
  pub effective_force: Force,
  /// Requested engine.
  pub engine: EngineForce,
  /// Thresholds used by the selector.
  pub tunables: Tunables,
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  force: Force,
  engine: EngineForce,
  byte_to_word: Option<u32>,
}

#[cfg_attr(not(feature = "std"), allow(dead_code))]
fn parse_force(value: &str) -> Option<Force> {
  let value = value.trim();
  if value.eq_ignore_ascii_case("auto") {
    return Some(Force::Auto);
  }
  if value.eq_ignore_ascii_case("portable") || value.eq_ignore_ascii_case("scalar") {
    return Some(Force::Portable);
  }
  if value.eq_ignore_ascii_case("clmul")
    || value.eq_ignore_ascii_case("pclmul")
    || value.eq_ignore_ascii_case("pmull")
  {
    return Some(Force::Clmul);
  }
  None
}

#[cfg_attr(not(feature = "std"), allow(dead_code))]
fn parse_engine(value: &str) -> Option<EngineForce> {
  let value = value.trim();
  if value.eq_ignore_ascii_case("auto") {
    return Some(EngineForce::Auto);
  }
  if value.eq_ignore_ascii_case("byte") || value.eq_ignore_ascii_case("byte-serial") {
    return Some(EngineForce::Byte);
  }
  if value.eq_ignore_ascii_case("word") || value.eq_ignore_ascii_case("word-serial") {
    return Some(EngineForce::Word);
  }
  None
}

#[cfg_attr(not(feature = "std"), allow(dead_code))]
fn parse_bits(value: &str) -> Option<u32> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }
  value.parse::<u32>().ok()
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn var(name: &str) -> Option<std::string::String> {
    std::env::var(name).ok()
  }

  Overrides {
    force: var("BITCRC_FORCE").as_deref().and_then(parse_force).unwrap_or_default(),
    engine: var("BITCRC_ENGINE").as_deref().and_then(parse_engine).unwrap_or_default(),
    byte_to_word: var("BITCRC_THRESHOLD_BYTE_TO_WORD").as_deref().and_then(parse_bits),
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

#[inline]
#[must_use]
fn clamp_force_to_caps(requested: Force, has_clmul: bool) -> Force {
  match requested {
    Force::Auto | Force::Portable => requested,
    Force::Clmul if has_clmul => Force::Clmul,
    Force::Clmul => Force::Auto,
  }
}

fn resolve(ov: Overrides, has_clmul: bool) -> Config {
  let mut tunables = Tunables::default();
  if let Some(bits) = ov.byte_to_word {
    tunables.byte_to_word = bits;
  }

  Config {
    requested_force: ov.force,
    effective_force: clamp_force_to_caps(ov.force, has_clmul),
    engine: ov.engine,
    tunables,
  }
}

/// Get the effective configuration for the current platform.
#[inline]
#[must_use]
pub fn get() -> Config {
  resolve(overrides(), crate::clmul::available())
}
