#![warn(missing_docs)]
#![warn(unsafe_code)]
//! genesis_rider is a library crate to inspect and convert Sega
//! Genesis / Mega Drive ROM images.
//!
//! It reads the two common on-disk layouts, linear binary dumps and
//! Super Magic Drive interleaved images, converts between them, and
//! extracts the header fields from 0x100-0x1FF.
//!
//! The rom_format module contains the format parsers and converters.
//! The convert module ties them together into the inspect and convert
//! operations.
//!
use log::error;

pub mod config;
pub mod convert;
pub mod error;
pub mod file;
pub mod rom_format;
pub mod serialize;

/// Initialize the module.
/// This should be called before any parsing is performed.
/// Panics on failure or if there are any incompatibilities.
pub fn init() {
    // Images are read into a single buffer of up to 5MB and indexed
    // with usize offsets.
    if usize::BITS < 32 {
        error!(
            "Architecture usize {} is too small for this library",
            usize::BITS
        );
        panic!(
            "Architecture usize {} is too small for this library",
            usize::BITS
        );
    }
}
