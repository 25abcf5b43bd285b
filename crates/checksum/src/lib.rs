//! Generic table-driven CRC engine.
//!
//! This crate computes CRCs for arbitrary parameterizations (polynomial,
//! initial register, output XOR, input/output reflection) at widths of
//! 16, 32, and 64 bits. Each engine derives a 32 × 256 lookup matrix from
//! its parameters at construction and then streams input through one of
//! five processing kernels that trade table rows touched per step for
//! throughput.
//!
//! # Presets
//!
//! | Constructor | Polynomial | Use Cases |
//! |-------------|------------|-----------|
//! | [`Crc16::arc`] | 0x8005 (ARC) | Modbus, USB, legacy protocols |
//! | [`Crc16::ccitt_false`] | 0x1021 (CCITT-FALSE) | X.25, Bluetooth, SD cards |
//! | [`Crc32::ieee`] | 0x04C11DB7 (IEEE) | Ethernet, gzip, PNG, zip |
//! | [`Crc64::ecma`] | 0x42F0E1EBA9EA3693 (ECMA) | XZ, storage |
//! | [`Crc64::iso`] | 0x1B (ISO 3309) | HDLC-derived formats |
//!
//! Any other parameterization goes through [`Crc::with_params`] with a
//! custom [`CrcParams`] value.
//!
//! # Kernels
//!
//! The five [`Kernel`]s fold 1, 4, 8, 16, or 32 input bytes per table
//! step. They produce identical digests for identical input, always, so
//! kernel choice is purely a throughput decision. [`Crc::tune`] (with the
//! default `std` feature) measures all five on the current host and
//! activates the fastest.
//!
//! # Quick Start
//!
//! ```
//! use checksum::Crc32;
//!
//! // Streaming
//! let mut crc = Crc32::ieee();
//! crc.update(b"hello ");
//! crc.update(b"world");
//! let digest = crc.finalize();
//!
//! // One-shot via the Checksum trait
//! use checksum::Checksum as _;
//! assert_eq!(Crc32::checksum(b"hello world"), digest);
//! ```
//!
//! # Self-Tuning
//!
//! ```
//! use checksum::Crc64;
//!
//! let mut crc = Crc64::ecma();
//! let winner = crc.tune();
//! crc.update(b"123456789");
//! // Tuning never changes digests.
//! assert_eq!(crc.finalize(), 0x995DC9BBDF1939FA);
//! assert_eq!(crc.kernel(), winner);
//! ```
//!
//! # Feature Flags
//!
//! - `std` (default): kernel self-tuning ([`Crc::tune`]) and
//!   `std::io::Write` integration
//!
//! # no_std Support
//!
//! Without `std` the crate is `no_std` + `alloc`: everything except the
//! tuner and the `io::Write` adapter is available, and the default kernel
//! (or an explicit [`Crc::set_kernel`]) takes the place of tuning.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod engine;
mod kernels;
mod params;
mod reference;
mod tables;
#[cfg(feature = "std")]
mod tune;
mod word;

/// Internal module for tests and fuzz targets. Not part of the public API.
#[doc(hidden)]
pub mod kernel_test;

pub use engine::{Crc, Crc16, Crc32, Crc64};
pub use params::{CrcError, CrcParams, Kernel};
#[cfg(feature = "std")]
pub use tune::TuneOptions;
pub use word::CrcWord;
// Re-export the trait for convenience
pub use traits::Checksum;
