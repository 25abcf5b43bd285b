//! Cross-kernel equivalence fuzzing.
//!
//! Verifies that every processing kernel produces the same digest as the
//! bit-at-a-time reference for any input, over every preset. This catches:
//!
//! - Slicing fold bugs (row assignment, register absorption, carries)
//! - Tail handling around the 64-byte unroll boundary
//! - Forward-path byte-swap mistakes
//!
//! The oracle is the bitwise reference implementation, which is obviously
//! correct by inspection.

#![no_main]

use checksum::{Crc16, Crc32, Crc64, kernel_test::run_all_kernels};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  check(&Crc16::arc(), data);
  check(&Crc16::ccitt_false(), data);
  check(&Crc32::ieee(), data);
  check(&Crc64::ecma(), data);
  check(&Crc64::iso(), data);
});

fn check<W: checksum::CrcWord>(engine: &checksum::Crc<W>, data: &[u8]) {
  let results = run_all_kernels(engine, data);
  let expected = results[0].digest;
  for result in &results[1..] {
    assert_eq!(
      result.digest,
      expected,
      "kernel mismatch: {} disagrees with {} for len={}",
      result.name,
      results[0].name,
      data.len()
    );
  }
}
