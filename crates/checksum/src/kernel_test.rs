//! Kernel testing utilities.
//!
//! Runs the bitwise reference and every processing kernel over one input
//! and returns the named digests. Used by the equivalence tests and fuzz
//! targets to verify cross-kernel agreement; not part of the public API.

use alloc::vec::Vec;

use crate::{engine::Crc, params::Kernel, reference::crc_bitwise, word::CrcWord};

/// Digest from one kernel run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelResult<W> {
  /// Kernel name ("reference", "byte", "slice4", ...).
  pub name: &'static str,
  /// Finalized digest.
  pub digest: W,
}

/// Run the reference and all five kernels of `engine`'s parameterization
/// over `data`.
///
/// The first entry is always the bit-at-a-time reference; all entries must
/// agree if the kernels are correct.
#[must_use]
pub fn run_all_kernels<W: CrcWord>(engine: &Crc<W>, data: &[u8]) -> Vec<KernelResult<W>> {
  let mut results = Vec::with_capacity(1 + Kernel::ALL.len());

  results.push(KernelResult {
    name: "reference",
    digest: W::from_u64(crc_bitwise(engine.params(), data)),
  });

  for kernel in Kernel::ALL {
    let mut engine = engine.clone();
    engine.reset();
    engine.update_with(data, kernel);
    results.push(KernelResult {
      name: kernel.label(),
      digest: engine.finalize(),
    });
  }

  results
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::engine::{Crc16, Crc64};

  #[test]
  fn reference_comes_first_and_all_agree() {
    let engine = Crc64::ecma();
    let results = run_all_kernels(&engine, b"kernel test harness");

    assert_eq!(results.len(), 6);
    assert_eq!(results[0].name, "reference");
    for result in &results {
      assert_eq!(result.digest, results[0].digest, "kernel={}", result.name);
    }
  }

  #[test]
  fn ignores_prior_engine_state() {
    let mut engine = Crc16::ccitt_false();
    engine.update(b"already consumed");
    let results = run_all_kernels(&engine, b"123456789");
    assert_eq!(results[0].digest, 0x29B1);
    assert_eq!(results[5].digest, 0x29B1);
  }
}
