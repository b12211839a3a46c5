//! Serializer trait and functions to help serialize images to vectors
//! of bytes and other data types.
use crate::error::Error;
use crate::rom_format::image::RomImage;
use std::result::Result;

/// Serializer is a trait that lets you build custom serializers for
/// structures.
pub trait Serializer<'a> {
    /// Serialize a structure to a vector of bytes
    fn as_vec(&'a self) -> Result<Vec<u8>, Error>;
}

impl<'a> Serializer<'a> for RomImage {
    fn as_vec(&'a self) -> Result<Vec<u8>, Error> {
        Ok(self.data().to_vec())
    }
}

/// Format a 16-bit word as two space-separated hex bytes, high byte
/// first
pub fn word_to_hex_pair(word: u16) -> String {
    word.to_be_bytes()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<String>>()
        .join(" ")
}
