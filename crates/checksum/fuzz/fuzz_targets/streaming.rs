//! Streaming-update fuzzing.
//!
//! Arbitrary sequences of update calls, with arbitrary chunk boundaries
//! and per-chunk kernel overrides, must produce the one-shot digest.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Checksum as _, Crc32, Crc64, Kernel};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates.
  chunk_sizes: Vec<usize>,
  /// Kernel indices, one per chunk.
  kernels: Vec<u8>,
}

fuzz_target!(|input: Input| {
  stream_crc32(&input);
  stream_crc64(&input);
});

fn kernel_at(input: &Input, index: usize) -> Kernel {
  if input.kernels.is_empty() {
    return Kernel::Slice16;
  }
  let pick = input.kernels[index % input.kernels.len()] as usize;
  Kernel::ALL[pick % Kernel::ALL.len()]
}

fn chunk_at(input: &Input, index: usize) -> usize {
  if input.chunk_sizes.is_empty() {
    return 1;
  }
  (input.chunk_sizes[index % input.chunk_sizes.len()] % 256).max(1)
}

fn stream_crc32(input: &Input) {
  let expected = Crc32::checksum(&input.data);

  let mut engine = Crc32::ieee();
  let mut offset = 0;
  let mut index = 0;
  while offset < input.data.len() {
    let end = (offset + chunk_at(input, index)).min(input.data.len());
    engine.update_with(&input.data[offset..end], kernel_at(input, index));
    offset = end;
    index += 1;
  }

  assert_eq!(engine.finalize(), expected);
}

fn stream_crc64(input: &Input) {
  let expected = Crc64::checksum(&input.data);

  let mut engine = Crc64::ecma();
  let mut offset = 0;
  let mut index = 0;
  while offset < input.data.len() {
    let end = (offset + chunk_at(input, index)).min(input.data.len());
    engine.update_with(&input.data[offset..end], kernel_at(input, index));
    offset = end;
    index += 1;
  }

  assert_eq!(engine.finalize(), expected);
}
