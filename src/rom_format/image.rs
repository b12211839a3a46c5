//! ROM image data model
//! A ROM image is an owned buffer tagged with its on-disk layout.
use std::fmt::{Display, Formatter, Result};

use log::debug;

use crate::rom_format::smd::is_interleaved;

/// The two on-disk layouts of a Genesis / Mega Drive ROM
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// A straight byte-for-byte ROM dump
    Linear,
    /// A Super Magic Drive image: a 512-byte header block followed by
    /// 16KB blocks with the odd and even bytes separated
    Interleaved,
}

impl Format {
    /// Guess the format from the signature bytes of the interleave header
    pub fn detect(data: &[u8]) -> Format {
        if is_interleaved(data) {
            Format::Interleaved
        } else {
            Format::Linear
        }
    }

    /// The opposite layout
    pub fn flipped(self) -> Format {
        match self {
            Format::Linear => Format::Interleaved,
            Format::Interleaved => Format::Linear,
        }
    }
}

/// Format a Format for display
impl Display for Format {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Format::Linear => write!(f, "Binary"),
            Format::Interleaved => write!(f, "Super Magic Drive"),
        }
    }
}

/// A ROM image held in memory
#[derive(Clone, Debug, PartialEq)]
pub struct RomImage {
    data: Vec<u8>,
    format: Format,
}

impl RomImage {
    /// Take ownership of raw file data and detect its layout
    pub fn new(data: Vec<u8>) -> RomImage {
        let format = Format::detect(&data);
        debug!("Detected {} image, {} bytes", format, data.len());

        RomImage { data, format }
    }

    /// Build an image from data whose layout is already known.
    /// Only the transcoder produces images this way.
    pub(crate) fn with_format(data: Vec<u8>, format: Format) -> RomImage {
        RomImage { data, format }
    }

    /// The layout of the image
    pub fn format(&self) -> Format {
        self.format
    }

    /// Number of bytes in the image
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the image holds no data
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw image bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Give up the image, returning the raw bytes
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl Display for RomImage {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "format: {}, length: {}", self.format, self.data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::{Format, RomImage};

    #[test]
    fn detect_interleaved_works() {
        let mut data = vec![0u8; 1024];
        data[1] = 0x03;
        data[8] = 0xAA;
        data[9] = 0xBB;
        data[10] = 0x06;

        let image = RomImage::new(data);
        assert_eq!(image.format(), Format::Interleaved);
        assert_eq!(image.len(), 1024);
    }

    #[test]
    fn detect_linear_works() {
        let mut data = vec![0u8; 1024];
        data[1] = 0x03;
        data[8] = 0xAA;

        assert_eq!(RomImage::new(data).format(), Format::Linear);
        assert_eq!(RomImage::new(Vec::new()).format(), Format::Linear);
    }

    #[test]
    fn format_names() {
        assert_eq!(Format::Linear.to_string(), "Binary");
        assert_eq!(Format::Interleaved.to_string(), "Super Magic Drive");
        assert_eq!(Format::Linear.flipped(), Format::Interleaved);
        assert_eq!(Format::Interleaved.flipped(), Format::Linear);
    }
}
