//! Conversion between linear images and Super Magic Drive interleaved
//! images
//!
//! Each 16KB block of an interleaved image stores the odd bytes of
//! the matching linear block in its first half and the even bytes in
//! its second half.  A trailing partial block is split the same way
//! around its own midpoint, with a leftover odd byte kept at the end.
use log::{debug, warn};

use crate::rom_format::constants::{
    BLOCK_SIZE, HEADER_SIZE, SMD_BLOCK_COUNT_OFFSET, SMD_FILE_TYPE, SMD_FILE_TYPE_OFFSET,
    SMD_SIGNATURE, SMD_SIGNATURE_OFFSET,
};
use crate::rom_format::image::{Format, RomImage};
use crate::rom_format::sanity_check::SanityCheck;
use crate::rom_format::smd::smd_header_parser;

/// Convert a linear image to the interleaved layout
///
/// Images smaller than one block are returned unchanged.
pub fn interleave(image: RomImage) -> RomImage {
    if image.len() < BLOCK_SIZE {
        debug!("Image is smaller than one block, not interleaving");
        return image;
    }

    let source = image.data();
    let length = source.len() + HEADER_SIZE;
    let mut converted = vec![0u8; length];

    // first byte is number of blocks in file
    converted[SMD_BLOCK_COUNT_OFFSET] = (length / BLOCK_SIZE) as u8;
    converted[SMD_FILE_TYPE_OFFSET] = SMD_FILE_TYPE;
    converted[SMD_SIGNATURE_OFFSET..SMD_SIGNATURE_OFFSET + SMD_SIGNATURE.len()]
        .copy_from_slice(&SMD_SIGNATURE);

    for (block, out) in source
        .chunks(BLOCK_SIZE)
        .zip(converted[HEADER_SIZE..].chunks_mut(BLOCK_SIZE))
    {
        interleave_block(block, out);
    }

    debug!("Interleaved {} bytes into {} bytes", source.len(), length);

    RomImage::with_format(converted, Format::Interleaved)
}

/// Convert an interleaved image to the linear layout
///
/// Images smaller than the header block plus one block are returned
/// unchanged.
pub fn deinterleave(image: RomImage) -> RomImage {
    if image.len() < HEADER_SIZE + BLOCK_SIZE {
        debug!("Image is smaller than the header and one block, not deinterleaving");
        return image;
    }

    match smd_header_parser(image.data()) {
        Ok((_, header)) => {
            debug!("Interleave header: {}", header);
            if !header.check() {
                warn!("Interleave header does not match the image size");
            }
        }
        Err(_) => warn!("Interleave header signature is missing"),
    }

    let source = &image.data()[HEADER_SIZE..];
    let mut converted = vec![0u8; source.len()];

    for (block, out) in source
        .chunks(BLOCK_SIZE)
        .zip(converted.chunks_mut(BLOCK_SIZE))
    {
        deinterleave_block(block, out);
    }

    debug!(
        "Deinterleaved {} bytes into {} bytes",
        image.len(),
        converted.len()
    );

    RomImage::with_format(converted, Format::Linear)
}

fn interleave_block(block: &[u8], out: &mut [u8]) {
    let half = block.len() / 2;
    let (odd, even) = out.split_at_mut(half);

    let pairs = block.chunks_exact(2);
    if let Some(last) = pairs.remainder().first() {
        even[half] = *last;
    }

    for (j, pair) in pairs.enumerate() {
        even[j] = pair[0];
        odd[j] = pair[1];
    }
}

fn deinterleave_block(block: &[u8], out: &mut [u8]) {
    let half = block.len() / 2;
    let (odd, even) = block.split_at(half);

    if block.len() % 2 != 0 {
        out[block.len() - 1] = even[half];
    }

    for (j, pair) in out.chunks_exact_mut(2).enumerate() {
        pair[0] = even[j];
        pair[1] = odd[j];
    }
}
