//! The streaming CRC engine.
//!
//! A [`Crc`] is built from a [`CrcParams`] value, owns the lookup matrix
//! derived from it, and folds input into a running register through one of
//! the five [`Kernel`]s. Digests never depend on which kernel did the
//! folding, so the kernel can be switched freely between messages, or even
//! within one.

use crate::{
  kernels,
  params::{CrcError, CrcParams, Kernel},
  tables::SliceTables,
  word::CrcWord,
};

/// Streaming table-driven CRC engine over a `W`-bit register.
///
/// Construction derives the 32 × 256 lookup matrix for the given
/// parameters; `update` is then allocation-free. Engines are `Clone` and
/// single-threaded: share one across threads only behind external
/// synchronization, or give each thread its own clone.
///
/// # Example
///
/// ```
/// use checksum::{Crc32, Kernel};
///
/// let mut crc = Crc32::ieee();
/// crc.update(b"123456789");
/// assert_eq!(crc.finalize(), 0xCBF43926);
///
/// // Same digest regardless of kernel.
/// crc.reset();
/// crc.update_with(b"1234", Kernel::Byte);
/// crc.update_with(b"56789", Kernel::Slice32);
/// assert_eq!(crc.finalize(), 0xCBF43926);
/// ```
#[derive(Clone)]
pub struct Crc<W: CrcWord> {
  state: W,
  params: CrcParams,
  tables: SliceTables<W>,
  kernel: Kernel,
}

/// 16-bit engine.
pub type Crc16 = Crc<u16>;
/// 32-bit engine.
pub type Crc32 = Crc<u32>;
/// 64-bit engine.
pub type Crc64 = Crc<u64>;

impl<W: CrcWord> Crc<W> {
  /// Build an engine for `params`.
  ///
  /// # Errors
  ///
  /// - [`CrcError::UnsupportedWidth`] if `params.width` is not 16, 32, or
  ///   64, or does not match this engine's register width
  /// - [`CrcError::InvalidParams`] if a field has bits above the width
  pub fn with_params(params: CrcParams) -> Result<Self, CrcError> {
    params.validate()?;
    if u32::from(params.width) != W::BITS {
      return Err(CrcError::UnsupportedWidth(params.width));
    }
    Ok(Self::from_valid(params))
  }

  /// Construct from parameters already known to be valid for `W`.
  ///
  /// Callers guarantee `params.validate()` passed and `params.width`
  /// equals `W::BITS`; the preset constructors satisfy this via
  /// compile-time checks.
  pub(crate) fn from_valid(params: CrcParams) -> Self {
    let tables = SliceTables::build(W::from_u64(params.polynomial), params.reflect_in);
    Self {
      state: Self::seed(&params),
      params,
      tables,
      kernel: params.kernel,
    }
  }

  /// Initial register value: reflected parameterizations run with the
  /// register in bit-reversed form.
  fn seed(params: &CrcParams) -> W {
    let initial = W::from_u64(params.initial);
    if params.reflect_in { initial.reverse_bits() } else { initial }
  }

  /// Reset the register to its initial value.
  ///
  /// Parameters, tables, and the active kernel are untouched.
  #[inline]
  pub fn reset(&mut self) {
    self.state = Self::seed(&self.params);
  }

  /// Fold `data` into the register with the active kernel.
  ///
  /// Empty input is a no-op. Successive calls compose: splitting a message
  /// across updates yields the digest of the concatenation.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.update_with(data, self.kernel);
  }

  /// Fold `data` into the register with an explicit kernel, leaving the
  /// active kernel unchanged.
  #[inline]
  pub fn update_with(&mut self, data: &[u8], kernel: Kernel) {
    self.state = match kernel {
      Kernel::Byte => kernels::byte_by_byte(self.state, data, &self.tables),
      Kernel::Slice4 => kernels::slice4(self.state, data, &self.tables),
      Kernel::Slice8 => kernels::slice8(self.state, data, &self.tables),
      Kernel::Slice16 => kernels::slice16(self.state, data, &self.tables),
      Kernel::Slice32 => kernels::slice32(self.state, data, &self.tables),
    };
  }

  /// Finalize and return the digest without disturbing the register.
  ///
  /// When exactly one of `reflect_in`/`reflect_out` is set the register is
  /// bit-reversed first: a reflected run already carries the reflection in
  /// the register, so `reflect_out` cancels it, and a forward run gains it.
  /// The output XOR is applied last.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> W {
    let register = if self.params.reflect_out != self.params.reflect_in {
      self.state.reverse_bits()
    } else {
      self.state
    };
    register ^ W::from_u64(self.params.xor_out)
  }

  /// The parameters this engine was built from.
  #[inline]
  #[must_use]
  pub fn params(&self) -> &CrcParams {
    &self.params
  }

  /// The kernel `update` currently uses.
  #[inline]
  #[must_use]
  pub fn kernel(&self) -> Kernel {
    self.kernel
  }

  /// Change the kernel `update` uses.
  #[inline]
  pub fn set_kernel(&mut self, kernel: Kernel) {
    self.kernel = kernel;
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Preset Constructors
// ─────────────────────────────────────────────────────────────────────────────

impl Crc16 {
  /// CRC-16/ARC engine ([`CrcParams::CRC16_ARC`]).
  #[must_use]
  pub fn arc() -> Self {
    Self::from_valid(CrcParams::CRC16_ARC)
  }

  /// CRC-16/CCITT-FALSE engine ([`CrcParams::CRC16_CCITT_FALSE`]).
  #[must_use]
  pub fn ccitt_false() -> Self {
    Self::from_valid(CrcParams::CRC16_CCITT_FALSE)
  }
}

impl Crc32 {
  /// CRC-32 (IEEE) engine ([`CrcParams::CRC32_IEEE`]).
  #[must_use]
  pub fn ieee() -> Self {
    Self::from_valid(CrcParams::CRC32_IEEE)
  }
}

impl Crc64 {
  /// CRC-64 (ECMA polynomial) engine ([`CrcParams::CRC64_ECMA`]).
  #[must_use]
  pub fn ecma() -> Self {
    Self::from_valid(CrcParams::CRC64_ECMA)
  }

  /// CRC-64/ISO engine ([`CrcParams::CRC64_ISO`]).
  #[must_use]
  pub fn iso() -> Self {
    Self::from_valid(CrcParams::CRC64_ISO)
  }
}

// Preset widths must match their engine aliases; from_valid relies on it.
const _: () = {
  assert!(CrcParams::CRC16_ARC.width == 16);
  assert!(CrcParams::CRC16_CCITT_FALSE.width == 16);
  assert!(CrcParams::CRC32_IEEE.width == 32);
  assert!(CrcParams::CRC64_ECMA.width == 64);
  assert!(CrcParams::CRC64_ISO.width == 64);
};

// ─────────────────────────────────────────────────────────────────────────────
// Checksum Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Implement [`traits::Checksum`] for a width alias with its default
/// parameterization.
macro_rules! impl_checksum {
  ($engine:ty, $word:ty, $bytes:expr, $default:expr) => {
    impl Default for $engine {
      fn default() -> Self {
        Self::from_valid($default)
      }
    }

    impl traits::Checksum for $engine {
      const OUTPUT_SIZE: usize = $bytes;
      type Output = $word;

      #[inline]
      fn new() -> Self {
        Self::from_valid($default)
      }

      #[inline]
      fn with_initial(initial: $word) -> Self {
        let params = CrcParams {
          initial: u64::from(initial),
          ..$default
        };
        Self::from_valid(params)
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        Crc::update(self, data);
      }

      #[inline]
      fn finalize(&self) -> $word {
        Crc::finalize(self)
      }

      #[inline]
      fn reset(&mut self) {
        Crc::reset(self);
      }
    }
  };
}

impl_checksum!(Crc16, u16, 2, CrcParams::CRC16_ARC);
impl_checksum!(Crc32, u32, 4, CrcParams::CRC32_IEEE);
impl_checksum!(Crc64, u64, 8, CrcParams::CRC64_ECMA);

// ─────────────────────────────────────────────────────────────────────────────
// std::io Integration
// ─────────────────────────────────────────────────────────────────────────────

/// Engines sink bytes infallibly, so `write` always accepts the whole
/// buffer.
#[cfg(feature = "std")]
impl<W: CrcWord> std::io::Write for Crc<W> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
