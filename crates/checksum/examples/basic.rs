//! Basic engine usage: presets, streaming, custom parameters, tuning.
//!
//! Run with: `cargo run --example basic -p checksum`

use checksum::{Checksum as _, Crc16, Crc32, Crc64, CrcParams, Kernel};

fn main() {
  preset_examples();
  streaming_example();
  custom_params_example();
  tuning_example();
}

/// The five built-in parameterizations over the classic check input.
fn preset_examples() {
  println!("--- Presets ---\n");

  let data = b"123456789";

  let crc16 = digest(Crc16::arc(), data);
  println!("CRC-16/ARC:         0x{crc16:04X}");
  assert_eq!(crc16, 0xBB3D);

  let ccitt = digest(Crc16::ccitt_false(), data);
  println!("CRC-16/CCITT-FALSE: 0x{ccitt:04X}");
  assert_eq!(ccitt, 0x29B1);

  let crc32 = digest(Crc32::ieee(), data);
  println!("CRC-32 (IEEE):      0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  let crc64 = digest(Crc64::ecma(), data);
  println!("CRC-64 (ECMA):      0x{crc64:016X}");
  assert_eq!(crc64, 0x995D_C9BB_DF19_39FA);

  let iso = digest(Crc64::iso(), data);
  println!("CRC-64/ISO:         0x{iso:016X}\n");
}

/// Incremental updates compose; kernels can change mid-stream.
fn streaming_example() {
  println!("--- Streaming ---\n");

  let mut engine = Crc32::ieee();
  engine.update_with(b"1234", Kernel::Byte);
  engine.update_with(b"56789", Kernel::Slice32);

  println!("chunked CRC-32:     0x{:08X}\n", engine.finalize());
  assert_eq!(engine.finalize(), Crc32::checksum(b"123456789"));
}

/// Any polynomial/initial/XOR/reflection combination works.
fn custom_params_example() {
  println!("--- Custom Parameters ---\n");

  // CRC-32C (Castagnoli), not shipped as a preset.
  let castagnoli = CrcParams {
    polynomial: 0x1EDC_6F41,
    ..CrcParams::CRC32_IEEE
  };

  let mut engine = Crc32::with_params(castagnoli).expect("valid parameters");
  engine.update(b"123456789");
  println!("CRC-32C:            0x{:08X}\n", engine.finalize());
  assert_eq!(engine.finalize(), 0xE306_9283);
}

/// Pick the fastest kernel for this host.
fn tuning_example() {
  println!("--- Self-Tuning ---\n");

  let mut engine = Crc64::ecma();
  let winner = engine.tune();
  println!("fastest kernel here: {}", winner.label());

  engine.update(b"123456789");
  assert_eq!(engine.finalize(), 0x995D_C9BB_DF19_39FA);
}

fn digest<W: checksum::CrcWord>(mut engine: checksum::Crc<W>, data: &[u8]) -> W {
  engine.update(data);
  engine.finalize()
}
