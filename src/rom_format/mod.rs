#![warn(missing_docs)]
#![warn(unsafe_code)]
//!
//! Genesis / Mega Drive ROM format parsers and converters
//!

/// Sizes, offsets and signature bytes
pub mod constants;

/// Sanity checking trait
pub mod sanity_check;

/// Checksum calculation
pub mod checksum;

/// Super Magic Drive interleave header parser
pub mod smd;

/// In-memory ROM images
pub mod image;

/// Linear and interleaved layout conversion
pub mod interleave;

/// ROM header parser
pub mod header;

/// Publisher lookup from the company code
pub mod publisher;

/// Returns true if needle occurs anywhere in haystack
pub(crate) fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}
