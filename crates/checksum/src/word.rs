//! Register-width abstraction.
//!
//! The engine, table builder, and kernels are written once over [`CrcWord`]
//! instead of being duplicated per width. The three implementations
//! (`u16`, `u32`, `u64`) correspond to the three supported CRC widths.

use core::{
  fmt::Debug,
  ops::{BitXor, BitXorAssign, Shl, Shr},
};

mod private {
  /// Sealed trait marker.
  pub trait Sealed {}

  impl Sealed for u16 {}
  impl Sealed for u32 {}
  impl Sealed for u64 {}
}

/// Unsigned integer type backing a CRC register.
///
/// Sealed: implemented for `u16`, `u32`, and `u64` only. Widths outside
/// {16, 32, 64} are rejected at engine construction, so no other
/// implementations can exist.
pub trait CrcWord:
  private::Sealed
  + Copy
  + Eq
  + Debug
  + Default
  + Send
  + Sync
  + BitXor<Output = Self>
  + BitXorAssign
  + Shl<u32, Output = Self>
  + Shr<u32, Output = Self>
  + 'static
{
  /// Register width in bits.
  const BITS: u32;

  /// All-zero register.
  const ZERO: Self;

  /// Truncating conversion from `u64`.
  fn from_u64(value: u64) -> Self;

  /// Widening conversion to `u64`.
  fn to_u64(self) -> u64;

  /// Reverse the bit order of the full register.
  fn reverse_bits(self) -> Self;

  /// Reverse the byte order of the full register.
  fn swap_bytes(self) -> Self;

  /// Low byte of the register, used as a table index.
  fn low_byte(self) -> u8;

  /// Whether the most significant bit is set.
  #[inline]
  fn msb_set(self) -> bool {
    self.to_u64() & (1u64 << (Self::BITS - 1)) != 0
  }
}

macro_rules! impl_crc_word {
  ($($ty:ty),* $(,)?) => {$(
    impl CrcWord for $ty {
      const BITS: u32 = <$ty>::BITS;
      const ZERO: Self = 0;

      #[inline]
      fn from_u64(value: u64) -> Self {
        value as $ty
      }

      #[inline]
      fn to_u64(self) -> u64 {
        self as u64
      }

      #[inline]
      fn reverse_bits(self) -> Self {
        <$ty>::reverse_bits(self)
      }

      #[inline]
      fn swap_bytes(self) -> Self {
        <$ty>::swap_bytes(self)
      }

      #[inline]
      fn low_byte(self) -> u8 {
        (self & 0xFF) as u8
      }
    }
  )*};
}

impl_crc_word!(u16, u32, u64);
