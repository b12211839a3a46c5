//! Sizes and offsets for Genesis / Mega Drive ROM images
//!
//! All header offsets are relative to the start of a linear (binary)
//! image.

/// Size of the interleave header block prefixed to interleaved images,
/// and the start of the checksummed region of a linear image
pub const HEADER_SIZE: usize = 512;

/// Size of one interleaving unit
pub const BLOCK_SIZE: usize = 16 * 1024;

/// Largest image accepted for inspection or conversion
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Interleave header offset of the block count byte
pub const SMD_BLOCK_COUNT_OFFSET: usize = 0;

/// Interleave header offset of the file type byte
pub const SMD_FILE_TYPE_OFFSET: usize = 1;

/// Interleave header file type value
pub const SMD_FILE_TYPE: u8 = 0x03;

/// Interleave header offset of the three signature bytes
pub const SMD_SIGNATURE_OFFSET: usize = 8;

/// Interleave header signature bytes
pub const SMD_SIGNATURE: [u8; 3] = [0xAA, 0xBB, 0x06];

/// Console name field, carries the license signature
pub const CONSOLE_OFFSET: usize = 0x100;
/// Length of the console name field
pub const CONSOLE_LENGTH: usize = 16;

/// Company code field
pub const COMPANY_OFFSET: usize = 0x110;
/// Length of the company code field
pub const COMPANY_LENGTH: usize = 8;

/// Copyright field
pub const COPYRIGHT_OFFSET: usize = 0x118;
/// Length of the copyright field
pub const COPYRIGHT_LENGTH: usize = 8;

/// Domestic title field
pub const DOMESTIC_NAME_OFFSET: usize = 0x120;
/// International title field
pub const INTERNATIONAL_NAME_OFFSET: usize = 0x150;
/// Length of both title fields
pub const NAME_LENGTH: usize = 48;

/// Product type field
pub const PRODUCT_TYPE_OFFSET: usize = 0x180;
/// Length of the product type field
pub const PRODUCT_TYPE_LENGTH: usize = 2;

/// Product code field
pub const PRODUCT_CODE_OFFSET: usize = 0x183;
/// Length of the product code field
pub const PRODUCT_CODE_LENGTH: usize = 11;

/// Stored checksum, big-endian
pub const CHECKSUM_OFFSET: usize = 0x18E;
/// Length of the stored checksum
pub const CHECKSUM_LENGTH: usize = 2;

/// I/O device support field
pub const IO_DEVICES_OFFSET: usize = 0x190;
/// Length of the I/O device support field
pub const IO_DEVICES_LENGTH: usize = 16;

/// Region support field
pub const REGIONS_OFFSET: usize = 0x1F0;
/// Length of the region support field
pub const REGIONS_LENGTH: usize = 3;

/// Smallest buffer every header field can be read from
pub const HEADER_END: usize = REGIONS_OFFSET + REGIONS_LENGTH;
