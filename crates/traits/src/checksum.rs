//! Non-cryptographic checksum trait.
//!
//! The streaming interface shared by every checksum engine in this
//! workspace:
//!
//! - **Streaming**: incremental updates over arbitrarily split input
//! - **Restartable**: engines can be reset and reused
//! - **Width-generic**: the output type carries the register width
//!
//! See the `checksum` crate for the table-driven CRC implementations.

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// Provides the core interface for checksum computation with support for
/// incremental updates and streaming data.
///
/// # Implementors
///
/// - `checksum::Crc16` - 16-bit table-driven CRC (ARC parameters by default)
/// - `checksum::Crc32` - 32-bit table-driven CRC (IEEE parameters by default)
/// - `checksum::Crc64` - 64-bit table-driven CRC (ECMA parameters by default)
///
/// # Usage Pattern
///
/// ```text
/// // One-shot
/// let crc = Crc32::checksum(b"hello world");
///
/// // Streaming
/// let mut hasher = Crc32::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// let crc = hasher.finalize();
/// ```
///
/// # Contract
///
/// Splitting the input across any sequence of [`update`](Self::update)
/// calls must produce the same final value as a single call over the
/// concatenated input, and [`finalize`](Self::finalize) must not disturb
/// the running state.
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  ///
  /// - CRC-16: 2
  /// - CRC-32: 4
  /// - CRC-64: 8
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  ///
  /// Typically `u16` for CRC-16, `u32` for CRC-32, `u64` for CRC-64.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the algorithm's default parameters.
  fn new() -> Self;

  /// Create a new hasher with a custom initial register value.
  ///
  /// Useful for non-standard initial values; the value is interpreted in
  /// the algorithm's non-reflected representation.
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data
  /// incrementally. Empty input is a no-op.
  fn update(&mut self, data: &[u8]);

  /// Finalize and return the checksum.
  ///
  /// This method does not consume the hasher, allowing further updates
  /// if needed (though the result would include all data processed so far).
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  ///
  /// After calling this, the hasher behaves as if newly constructed.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }
}
