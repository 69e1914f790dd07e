//! Error types for CRC parameter validation and frame checking.
//!
//! The raw engines never return errors; their preconditions are debug
//! assertions. These types belong to the checked layer built on top.

use core::fmt;

/// CRC parameters or an input bit count were rejected.
///
/// # Examples
///
/// ```
/// use traits::ParamError;
///
/// let err = ParamError::InvalidWidth(33);
/// assert_eq!(err.to_string(), "crc width 33 is outside 1..=32");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParamError {
  /// The output width is zero or larger than the 32-bit register.
  InvalidWidth(u8),
  /// The polynomial has bits set below the top `width` bits of the register.
  PolyNotAligned {
    /// The offending left-justified polynomial.
    poly: u32,
    /// Requested CRC width.
    width: u8,
  },
  /// The initial condition has bits set below the top `width` bits of the register.
  InitNotAligned {
    /// The offending left-justified initial condition.
    init: u32,
    /// Requested CRC width.
    width: u8,
  },
  /// More bits were requested than the buffer holds.
  BitCountExceedsBuffer {
    /// Requested number of bits.
    bits: u64,
    /// Bits available in the buffer (`8 * len`).
    capacity: u64,
  },
}

impl fmt::Display for ParamError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::InvalidWidth(width) => write!(f, "crc width {width} is outside 1..=32"),
      Self::PolyNotAligned { poly, width } => {
        write!(f, "polynomial {poly:#010x} is not left-justified for a {width}-bit crc")
      }
      Self::InitNotAligned { init, width } => {
        write!(f, "initial value {init:#010x} is not left-justified for a {width}-bit crc")
      }
      Self::BitCountExceedsBuffer { bits, capacity } => {
        write!(f, "{bits} input bits requested but the buffer holds {capacity}")
      }
    }
  }
}

impl core::error::Error for ParamError {}

/// The CRC carried by a frame differs from the recomputed CRC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrcMismatch {
  /// CRC recomputed over the frame payload.
  pub expected: u32,
  /// CRC found at the end of the frame.
  pub found: u32,
}

impl CrcMismatch {
  /// Create a mismatch record.
  #[inline]
  #[must_use]
  pub const fn new(expected: u32, found: u32) -> Self {
    Self { expected, found }
  }
}

impl fmt::Display for CrcMismatch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "crc mismatch: computed {:#x}, frame carries {:#x}", self.expected, self.found)
  }
}

impl core::error::Error for CrcMismatch {}

/// Verifying a framed block failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FrameError {
  /// Parameters or bit count were invalid.
  Param(ParamError),
  /// The frame is shorter than the CRC it should carry.
  TooShort {
    /// Total frame length in bits.
    bits: u32,
    /// CRC width in bits.
    width: u8,
  },
  /// The frame is well-formed but the CRC does not match.
  Mismatch(CrcMismatch),
}

impl fmt::Display for FrameError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Param(err) => write!(f, "invalid frame parameters: {err}"),
      Self::TooShort { bits, width } => {
        write!(f, "frame of {bits} bits cannot carry a {width}-bit crc")
      }
      Self::Mismatch(err) => fmt::Display::fmt(err, f),
    }
  }
}

impl core::error::Error for FrameError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      Self::Param(err) => Some(err),
      Self::Mismatch(err) => Some(err),
      Self::TooShort { .. } => None,
    }
  }
}

impl From<ParamError> for FrameError {
  #[inline]
  fn from(err: ParamError) -> Self {
    Self::Param(err)
  }
}

impl From<CrcMismatch> for FrameError {
  #[inline]
  fn from(err: CrcMismatch) -> Self {
    Self::Mismatch(err)
  }
}
