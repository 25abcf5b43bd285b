//! CRC algorithm parameters.
//!
//! This module defines the runtime description of a CRC variant following
//! the conventions from the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/),
//! plus the processing-kernel knob used by the engine.

use core::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Kernel Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Processing kernel: how many input bytes one inner step folds.
///
/// All kernels compute the same mathematical update; they differ only in
/// inner-loop shape and the number of table rows consumed per step. Digests
/// never depend on the kernel choice.
///
/// | Kernel | Bytes/step | Table rows used |
/// |--------|------------|-----------------|
/// | `Byte` | 1 | 1 |
/// | `Slice4` | 4 | 4 |
/// | `Slice8` | 8 | 8 |
/// | `Slice16` | 16 | 16 |
/// | `Slice32` | 32 | 32 |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kernel {
  /// Classic one-byte table walk.
  Byte,
  /// One 32-bit word per step (slicing-by-4).
  Slice4,
  /// Two 32-bit words per step (slicing-by-8).
  Slice8,
  /// Four 32-bit words per step (slicing-by-16).
  Slice16,
  /// Eight 32-bit words per step (slicing-by-32).
  Slice32,
}

impl Kernel {
  /// All kernels, smallest step first.
  pub const ALL: [Self; 5] = [Self::Byte, Self::Slice4, Self::Slice8, Self::Slice16, Self::Slice32];

  /// Short diagnostic label.
  #[inline]
  #[must_use]
  pub const fn label(self) -> &'static str {
    match self {
      Self::Byte => "byte",
      Self::Slice4 => "slice4",
      Self::Slice8 => "slice8",
      Self::Slice16 => "slice16",
      Self::Slice32 => "slice32",
    }
  }

  /// Bytes folded per inner step.
  #[inline]
  #[must_use]
  pub const fn bytes_per_step(self) -> usize {
    match self {
      Self::Byte => 1,
      Self::Slice4 => 4,
      Self::Slice8 => 8,
      Self::Slice16 => 16,
      Self::Slice32 => 32,
    }
  }
}

impl Default for Kernel {
  #[inline]
  fn default() -> Self {
    Self::Slice16
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Construction-time parameter errors.
///
/// Both variants are programmer errors surfaced when an engine is built;
/// `update`/`finalize`/`reset` are total and cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrcError {
  /// Width is not one of 16, 32, or 64, or does not match the engine's
  /// register type.
  UnsupportedWidth(u8),
  /// The named parameter has bits set above bit `width - 1`.
  InvalidParams(&'static str),
}

impl fmt::Display for CrcError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedWidth(width) => {
        write!(f, "unsupported crc width {width} (expected 16, 32, or 64)")
      }
      Self::InvalidParams(field) => {
        write!(f, "crc parameter `{field}` has bits above the configured width")
      }
    }
  }
}

impl core::error::Error for CrcError {}

// ─────────────────────────────────────────────────────────────────────────────
// Parameters
// ─────────────────────────────────────────────────────────────────────────────

/// CRC algorithm parameters.
///
/// Captures everything needed to define a CRC variant at runtime. The
/// fields follow the CRC Catalogue conventions; `kernel` additionally
/// selects the default processing kernel for engines built from these
/// parameters.
///
/// # Reflection
///
/// "Reflected" means bit-reversed. Most common CRCs (ARC, IEEE CRC-32,
/// the 64-bit ECMA and ISO variants) use reflected input and output,
/// which maps to LSB-first processing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcParams {
  /// Width in bits (16, 32, or 64).
  pub width: u8,
  /// Generator polynomial in normal (non-reflected) form, implicit high bit
  /// omitted.
  pub polynomial: u64,
  /// Initial register value, in non-reflected representation.
  pub initial: u64,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect the final register before the output XOR.
  pub reflect_out: bool,
  /// XOR value applied to the final register.
  pub xor_out: u64,
  /// Default processing kernel for engines built from these parameters.
  pub kernel: Kernel,
}

impl CrcParams {
  /// CRC-16/ARC - Modbus, USB, many legacy protocols.
  pub const CRC16_ARC: Self = Self {
    width: 16,
    polynomial: 0x8005,
    initial: 0x0000,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
    kernel: Kernel::Slice16,
  };

  /// CRC-16/CCITT-FALSE - X.25, HDLC, Bluetooth, SD cards.
  ///
  /// One of the few widely used non-reflected variants; exercises the
  /// forward code path of every kernel.
  pub const CRC16_CCITT_FALSE: Self = Self {
    width: 16,
    polynomial: 0x1021,
    initial: 0xFFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
    kernel: Kernel::Slice16,
  };

  /// CRC-32 (ISO 3309 / IEEE) - Ethernet, gzip, PNG, zip.
  pub const CRC32_IEEE: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
    kernel: Kernel::Slice16,
  };

  /// CRC-64 (ECMA-182 polynomial, inverted ends) - XZ, storage systems.
  pub const CRC64_ECMA: Self = Self {
    width: 64,
    polynomial: 0x42F0_E1EB_A9EA_3693,
    initial: 0xFFFF_FFFF_FFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF_FFFF_FFFF,
    kernel: Kernel::Slice16,
  };

  /// CRC-64/ISO (ISO 3309 polynomial, zero ends) - HDLC-derived storage
  /// formats.
  pub const CRC64_ISO: Self = Self {
    width: 64,
    polynomial: 0x0000_0000_0000_001B,
    initial: 0x0000_0000_0000_0000,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000_0000_0000_0000,
    kernel: Kernel::Slice16,
  };

  /// Validate width and field ranges.
  ///
  /// # Errors
  ///
  /// - [`CrcError::UnsupportedWidth`] if `width` is not 16, 32, or 64
  /// - [`CrcError::InvalidParams`] if `polynomial`, `initial`, or `xor_out`
  ///   has bits set above bit `width - 1`
  pub const fn validate(&self) -> Result<(), CrcError> {
    if !matches!(self.width, 16 | 32 | 64) {
      return Err(CrcError::UnsupportedWidth(self.width));
    }
    let mask = width_mask(self.width);
    if self.polynomial & !mask != 0 {
      return Err(CrcError::InvalidParams("polynomial"));
    }
    if self.initial & !mask != 0 {
      return Err(CrcError::InvalidParams("initial"));
    }
    if self.xor_out & !mask != 0 {
      return Err(CrcError::InvalidParams("xor_out"));
    }
    Ok(())
  }

  /// Whether [`validate`](Self::validate) succeeds.
  #[inline]
  #[must_use]
  pub const fn is_valid(&self) -> bool {
    self.validate().is_ok()
  }

  /// Returns the polynomial in reflected (bit-reversed) form.
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u64 {
    reflect_bits(self.polynomial, self.width)
  }
}

/// All-ones mask covering the low `width` bits.
pub(crate) const fn width_mask(width: u8) -> u64 {
  if width >= 64 { u64::MAX } else { (1u64 << width) - 1 }
}

/// Reflect (bit-reverse) the lower `width` bits of `value`.
pub(crate) const fn reflect_bits(value: u64, width: u8) -> u64 {
  let mut result = 0u64;
  let mut i = 0u8;
  while i < width {
    if (value >> i) & 1 != 0 {
      result |= 1 << (width.wrapping_sub(1).wrapping_sub(i));
    }
    i = i.wrapping_add(1);
  }
  result
}

// The presets are relied on by infallible constructors; verify them at
// compile time.
const _: () = {
  assert!(CrcParams::CRC16_ARC.is_valid());
  assert!(CrcParams::CRC16_CCITT_FALSE.is_valid());
  assert!(CrcParams::CRC32_IEEE.is_valid());
  assert!(CrcParams::CRC64_ECMA.is_valid());
  assert!(CrcParams::CRC64_ISO.is_valid());
};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  extern crate std;

  use std::string::ToString;

  use super::*;

  #[test]
  fn presets_are_valid() {
    for params in [
      CrcParams::CRC16_ARC,
      CrcParams::CRC16_CCITT_FALSE,
      CrcParams::CRC32_IEEE,
      CrcParams::CRC64_ECMA,
      CrcParams::CRC64_ISO,
    ] {
      assert_eq!(params.validate(), Ok(()));
    }
  }

  #[test]
  fn rejects_unsupported_width() {
    for width in [0u8, 8, 24, 63, 65, 128] {
      let params = CrcParams { width, ..CrcParams::CRC32_IEEE };
      assert_eq!(params.validate(), Err(CrcError::UnsupportedWidth(width)));
    }
  }

  #[test]
  fn rejects_out_of_range_fields() {
    let params = CrcParams {
      polynomial: 0x1_0000,
      ..CrcParams::CRC16_ARC
    };
    assert_eq!(params.validate(), Err(CrcError::InvalidParams("polynomial")));

    let params = CrcParams {
      initial: u64::from(u32::MAX) + 1,
      ..CrcParams::CRC32_IEEE
    };
    assert_eq!(params.validate(), Err(CrcError::InvalidParams("initial")));

    let params = CrcParams {
      xor_out: 0x100_0000_0000,
      ..CrcParams::CRC32_IEEE
    };
    assert_eq!(params.validate(), Err(CrcError::InvalidParams("xor_out")));
  }

  #[test]
  fn width_mask_values() {
    assert_eq!(width_mask(16), 0xFFFF);
    assert_eq!(width_mask(32), 0xFFFF_FFFF);
    assert_eq!(width_mask(64), u64::MAX);
  }

  #[test]
  fn reflected_polynomials() {
    assert_eq!(CrcParams::CRC32_IEEE.polynomial_reflected(), 0xEDB8_8320);
    assert_eq!(CrcParams::CRC16_ARC.polynomial_reflected(), 0xA001);
    assert_eq!(CrcParams::CRC64_ECMA.polynomial_reflected(), 0xC96C_5795_D787_0F42);
    assert_eq!(CrcParams::CRC64_ISO.polynomial_reflected(), 0xD800_0000_0000_0000);
  }

  #[test]
  fn reflect_bits_basics() {
    assert_eq!(reflect_bits(0b1010, 4), 0b0101);
    assert_eq!(reflect_bits(0b1100, 4), 0b0011);
    assert_eq!(reflect_bits(0xFF, 8), 0xFF);
    assert_eq!(reflect_bits(0x80, 8), 0x01);
  }

  #[test]
  fn kernel_labels_unique() {
    for (i, a) in Kernel::ALL.iter().enumerate() {
      for b in Kernel::ALL.iter().skip(i + 1) {
        assert_ne!(a.label(), b.label());
      }
    }
  }

  #[test]
  fn kernel_bytes_per_step() {
    assert_eq!(Kernel::Byte.bytes_per_step(), 1);
    assert_eq!(Kernel::Slice4.bytes_per_step(), 4);
    assert_eq!(Kernel::Slice8.bytes_per_step(), 8);
    assert_eq!(Kernel::Slice16.bytes_per_step(), 16);
    assert_eq!(Kernel::Slice32.bytes_per_step(), 32);
  }

  #[test]
  fn error_display() {
    assert_eq!(
      CrcError::UnsupportedWidth(24).to_string(),
      "unsupported crc width 24 (expected 16, 32, or 64)"
    );
    assert_eq!(
      CrcError::InvalidParams("initial").to_string(),
      "crc parameter `initial` has bits above the configured width"
    );
  }

  #[test]
  fn error_trait_bounds() {
    fn assert_send_sync<T: Send + Sync + core::error::Error>() {}
    assert_send_sync::<CrcError>();
  }
}
