//! Kernel self-tuning.
//!
//! The fastest kernel depends on the host: cache sizes, load-port width,
//! and how well the compiler schedules the wider folds. [`Crc::tune`] races
//! all five kernels over a scratch buffer on the machine actually running
//! the code and makes the winner the engine's active kernel.
//!
//! Tuning perturbs only the register (which is reset before returning) and
//! the active kernel; the digest of any subsequent `update`/`finalize`
//! sequence is unaffected because every kernel computes the same update.

use core::time::Duration;

use alloc::vec;

use std::time::Instant;

use crate::{engine::Crc, params::Kernel, word::CrcWord};

/// Self-tuning knobs.
///
/// The defaults measure 128 passes over an 8191-byte buffer per kernel:
/// enough to rank the kernels well above timer resolution while staying in
/// the microsecond-to-millisecond range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TuneOptions {
  /// Scratch buffer size in bytes.
  pub buffer_size: usize,
  /// Passes over the buffer per kernel.
  pub repeats: u32,
}

impl Default for TuneOptions {
  #[inline]
  fn default() -> Self {
    Self {
      buffer_size: 8 * 1024 - 1,
      repeats: 128,
    }
  }
}

impl<W: CrcWord> Crc<W> {
  /// Race all kernels with the default [`TuneOptions`] and activate the
  /// fastest. Returns the winner.
  pub fn tune(&mut self) -> Kernel {
    self.tune_with(TuneOptions::default())
  }

  /// Race all kernels over a scratch buffer and activate the fastest.
  ///
  /// The scratch content is all zeroes; CRC folding is data-independent,
  /// so the content does not influence the ranking. The register is reset
  /// afterwards, discarding whatever the measurement runs accumulated.
  pub fn tune_with(&mut self, options: TuneOptions) -> Kernel {
    let scratch = vec![0u8; options.buffer_size];

    let mut best = self.kernel();
    let mut best_elapsed = Duration::MAX;

    for kernel in Kernel::ALL {
      let start = Instant::now();
      for _ in 0..options.repeats {
        self.update_with(core::hint::black_box(scratch.as_slice()), kernel);
      }
      core::hint::black_box(self.finalize());
      let elapsed = start.elapsed();

      if elapsed < best_elapsed {
        best_elapsed = elapsed;
        best = kernel;
      }
    }

    self.reset();
    self.set_kernel(best);
    best
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
