//! Parse the interleave header block of a Super Magic Drive image
//!
//! The header is 512 bytes:
//!
//! 0x00      Number of 16KB blocks in the file, including the header
//! 0x01      File type, always 0x03 for program images
//! 0x02-0x07 Unused
//! 0x08-0x0A Signature, 0xAA 0xBB 0x06
//! 0x0B-0x1FF Unused
//!
//! The payload follows as a sequence of 16KB interleaved blocks.
use std::fmt::{Display, Formatter, Result};

use log::debug;
use nom::bytes::complete::{tag, take};
use nom::combinator::verify;
use nom::number::complete::le_u8;
use nom::IResult;

use crate::rom_format::constants::{
    BLOCK_SIZE, HEADER_SIZE, SMD_FILE_TYPE, SMD_SIGNATURE, SMD_SIGNATURE_OFFSET,
};
use crate::rom_format::sanity_check::SanityCheck;

/// The identifying bytes at the start of an interleaved image
#[derive(Debug, PartialEq)]
pub struct SmdSignature<'a> {
    /// The number of blocks recorded by the writer
    pub block_count: u8,
    /// The file type, 0x03
    pub file_type: u8,
    /// Unused bytes between the file type and the signature
    pub reserved_area_1: &'a [u8],
    /// The signature bytes, 0xAA 0xBB 0x06
    pub signature: &'a [u8],
}

/// The full interleave header block
#[derive(Debug)]
pub struct SmdHeader<'a> {
    /// The identifying bytes
    pub signature: SmdSignature<'a>,
    /// Unused bytes after the signature
    pub reserved_area_2: &'a [u8],
    /// Number of payload bytes that follow the header block
    pub payload_length: usize,
}

impl Display for SmdHeader<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "block_count: {}, file_type: 0x{:02X}, payload_length: {}",
            self.signature.block_count, self.signature.file_type, self.payload_length
        )
    }
}

/// The recorded block count should match the image size, and the
/// payload should be made of whole blocks
impl SanityCheck for SmdHeader<'_> {
    fn check(&self) -> bool {
        let expected = ((self.payload_length + HEADER_SIZE) / BLOCK_SIZE) as u8;
        if self.signature.block_count != expected {
            debug!(
                "Block count {} does not match image size, expected {}",
                self.signature.block_count, expected
            );
            return false;
        }

        if self.payload_length % BLOCK_SIZE != 0 {
            debug!(
                "Payload length {} is not a multiple of the block size",
                self.payload_length
            );
            return false;
        }

        true
    }
}

/// Parse the first eleven bytes of an interleaved image
pub fn smd_signature_parser(i: &[u8]) -> IResult<&[u8], SmdSignature> {
    let (i, block_count) = le_u8(i)?;
    let (i, file_type) = verify(le_u8, |t: &u8| *t == SMD_FILE_TYPE)(i)?;
    let (i, reserved_area_1) = take(SMD_SIGNATURE_OFFSET - 2)(i)?;
    let (i, signature) = tag(&SMD_SIGNATURE[..])(i)?;

    Ok((
        i,
        SmdSignature {
            block_count,
            file_type,
            reserved_area_1,
            signature,
        },
    ))
}

/// Parse the whole interleave header block
/// Returns the payload as the remaining input
pub fn smd_header_parser(i: &[u8]) -> IResult<&[u8], SmdHeader> {
    let (i, signature) = smd_signature_parser(i)?;
    let (i, reserved_area_2) = take(HEADER_SIZE - SMD_SIGNATURE_OFFSET - SMD_SIGNATURE.len())(i)?;

    let smd_header = SmdHeader {
        signature,
        reserved_area_2,
        payload_length: i.len(),
    };

    Ok((i, smd_header))
}

/// Returns true if the data starts with an interleave header signature
pub fn is_interleaved(data: &[u8]) -> bool {
    smd_signature_parser(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::{is_interleaved, smd_header_parser, smd_signature_parser};
    use crate::rom_format::constants::{BLOCK_SIZE, HEADER_SIZE};
    use crate::rom_format::sanity_check::SanityCheck;

    fn smd_header_bytes(block_count: u8) -> Vec<u8> {
        let mut data = vec![0u8; HEADER_SIZE];
        data[0] = block_count;
        data[1] = 0x03;
        data[8] = 0xAA;
        data[9] = 0xBB;
        data[10] = 0x06;
        data
    }

    #[test]
    fn smd_signature_parser_works() {
        let data = smd_header_bytes(0x02);

        match smd_signature_parser(&data) {
            Ok((i, res)) => {
                assert_eq!(res.block_count, 0x02);
                assert_eq!(res.file_type, 0x03);
                assert_eq!(res.reserved_area_1, [0x00; 6]);
                assert_eq!(res.signature, [0xAA, 0xBB, 0x06]);
                assert_eq!(i.len(), HEADER_SIZE - 11);
            }
            Err(e) => panic!("Parsing failed on the SMD signature: {}", e),
        }
    }

    #[test]
    fn smd_signature_parser_rejects_wrong_file_type() {
        let mut data = smd_header_bytes(0x02);
        data[1] = 0x02;

        assert!(smd_signature_parser(&data).is_err());
        assert!(!is_interleaved(&data));
    }

    #[test]
    fn smd_signature_parser_rejects_wrong_signature() {
        let mut data = smd_header_bytes(0x02);
        data[10] = 0x07;

        assert!(!is_interleaved(&data));
    }

    #[test]
    fn short_buffers_are_not_interleaved() {
        let data = smd_header_bytes(0x02);

        assert!(is_interleaved(&data[..11]));
        assert!(!is_interleaved(&data[..10]));
        assert!(!is_interleaved(&[]));
    }

    #[test]
    fn smd_header_sanity_check_works() {
        let mut data = smd_header_bytes(0x01);
        data.extend(vec![0u8; BLOCK_SIZE]);

        let (payload, header) = smd_header_parser(&data).expect("Error parsing SMD header");
        assert_eq!(payload.len(), BLOCK_SIZE);
        assert_eq!(header.payload_length, BLOCK_SIZE);
        assert!(header.check());

        data[0] = 0x05;
        let (_, header) = smd_header_parser(&data).expect("Error parsing SMD header");
        assert!(!header.check());
    }
}
