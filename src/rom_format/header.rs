//! Genesis / Mega Drive ROM header parsing
//!
//! The header occupies 0x100 to 0x1FF of a linear image.  Every field
//! is fixed width and usually padded with spaces.  Fields are copied
//! verbatim, including the padding.
//!
//! 0x100 Console name, "SEGA MEGA DRIVE " or "SEGA GENESIS    "
//! 0x110 Company code, e.g. "(C)SEGA " or "(C)T-50 "
//! 0x118 Copyright date, e.g. "1991.APR"
//! 0x120 Domestic title
//! 0x150 International title
//! 0x180 Product type, "GM" for games
//! 0x183 Product code and revision
//! 0x18E Checksum, big-endian
//! 0x190 Supported I/O devices
//! 0x1F0 Supported regions
use std::fmt::{Display, Formatter, Result};

use log::debug;
use nom::bytes::complete::take;
use nom::number::complete::be_u16;
use nom::sequence::preceded;
use nom::IResult;

use crate::error::{Error, ErrorKind, InvalidErrorKind};
use crate::rom_format::constants::{
    CHECKSUM_OFFSET, COMPANY_LENGTH, COMPANY_OFFSET, CONSOLE_LENGTH, CONSOLE_OFFSET,
    COPYRIGHT_LENGTH, COPYRIGHT_OFFSET, DOMESTIC_NAME_OFFSET, HEADER_END,
    INTERNATIONAL_NAME_OFFSET, IO_DEVICES_LENGTH, IO_DEVICES_OFFSET, NAME_LENGTH,
    PRODUCT_CODE_LENGTH, PRODUCT_CODE_OFFSET, PRODUCT_TYPE_LENGTH, PRODUCT_TYPE_OFFSET,
    REGIONS_LENGTH, REGIONS_OFFSET,
};
use crate::rom_format::contains_bytes;

/// The text fields of the header
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HeaderField {
    /// Console name, carries the license signature
    Console,
    /// Company code
    Company,
    /// Copyright date
    Copyright,
    /// Title used in Japan
    DomesticName,
    /// Title used everywhere else
    InternationalName,
    /// Product type
    ProductType,
    /// Product code
    ProductCode,
    /// Supported I/O devices
    IoDevices,
    /// Supported regions
    Regions,
}

/// Position of a text field in a linear image
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldLayout {
    /// The field
    pub field: HeaderField,
    /// Byte offset from the start of the image
    pub offset: usize,
    /// Width of the field in bytes
    pub length: usize,
}

/// Layout of every text field, in header order
pub static HEADER_FIELDS: [FieldLayout; 9] = [
    FieldLayout {
        field: HeaderField::Console,
        offset: CONSOLE_OFFSET,
        length: CONSOLE_LENGTH,
    },
    FieldLayout {
        field: HeaderField::Company,
        offset: COMPANY_OFFSET,
        length: COMPANY_LENGTH,
    },
    FieldLayout {
        field: HeaderField::Copyright,
        offset: COPYRIGHT_OFFSET,
        length: COPYRIGHT_LENGTH,
    },
    FieldLayout {
        field: HeaderField::DomesticName,
        offset: DOMESTIC_NAME_OFFSET,
        length: NAME_LENGTH,
    },
    FieldLayout {
        field: HeaderField::InternationalName,
        offset: INTERNATIONAL_NAME_OFFSET,
        length: NAME_LENGTH,
    },
    FieldLayout {
        field: HeaderField::ProductType,
        offset: PRODUCT_TYPE_OFFSET,
        length: PRODUCT_TYPE_LENGTH,
    },
    FieldLayout {
        field: HeaderField::ProductCode,
        offset: PRODUCT_CODE_OFFSET,
        length: PRODUCT_CODE_LENGTH,
    },
    FieldLayout {
        field: HeaderField::IoDevices,
        offset: IO_DEVICES_OFFSET,
        length: IO_DEVICES_LENGTH,
    },
    FieldLayout {
        field: HeaderField::Regions,
        offset: REGIONS_OFFSET,
        length: REGIONS_LENGTH,
    },
];

/// The license signatures accepted in the console name field
pub const LICENSE_SIGNATURES: [&[u8]; 2] = [b"SEGA ", b" SEGA"];

/// How the license signature in the console name is checked
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SignatureCheck {
    /// The console name must contain "SEGA " or " SEGA"
    Strict,
    /// Any console name is accepted, matching the behavior of older
    /// converters
    Lenient,
}

/// A fixed-width text field copied verbatim from the header
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HeaderText(Vec<u8>);

impl HeaderText {
    /// The raw field bytes, including any padding
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Displays the field up to the first NUL byte
impl Display for HeaderText {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let end = self.0.iter().position(|b| *b == 0).unwrap_or(self.0.len());
        write!(f, "{}", String::from_utf8_lossy(&self.0[..end]))
    }
}

/// The fields of a ROM header
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HeaderRecord {
    /// Console name
    pub console: HeaderText,
    /// Company code
    pub company: HeaderText,
    /// Copyright date
    pub copyright: HeaderText,
    /// Domestic title
    pub domestic_name: HeaderText,
    /// International title
    pub international_name: HeaderText,
    /// Product type
    pub product_type: HeaderText,
    /// Product code
    pub product_code: HeaderText,
    /// Supported I/O devices
    pub io_devices: HeaderText,
    /// Supported regions
    pub regions: HeaderText,
    /// The checksum recorded by the publisher
    pub stored_checksum: u16,
}

impl HeaderRecord {
    /// Look up a text field
    pub fn field(&self, field: HeaderField) -> &HeaderText {
        match field {
            HeaderField::Console => &self.console,
            HeaderField::Company => &self.company,
            HeaderField::Copyright => &self.copyright,
            HeaderField::DomesticName => &self.domestic_name,
            HeaderField::InternationalName => &self.international_name,
            HeaderField::ProductType => &self.product_type,
            HeaderField::ProductCode => &self.product_code,
            HeaderField::IoDevices => &self.io_devices,
            HeaderField::Regions => &self.regions,
        }
    }

    fn field_mut(&mut self, field: HeaderField) -> &mut HeaderText {
        match field {
            HeaderField::Console => &mut self.console,
            HeaderField::Company => &mut self.company,
            HeaderField::Copyright => &mut self.copyright,
            HeaderField::DomesticName => &mut self.domestic_name,
            HeaderField::InternationalName => &mut self.international_name,
            HeaderField::ProductType => &mut self.product_type,
            HeaderField::ProductCode => &mut self.product_code,
            HeaderField::IoDevices => &mut self.io_devices,
            HeaderField::Regions => &mut self.regions,
        }
    }
}

impl Display for HeaderRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "console: {}, company: {}, international name: {}, checksum: 0x{:04X}",
            self.console, self.company, self.international_name, self.stored_checksum
        )
    }
}

/// Parse a single field at its fixed offset
fn field_parser(layout: &FieldLayout) -> impl Fn(&[u8]) -> IResult<&[u8], &[u8]> + '_ {
    move |i| preceded(take(layout.offset), take(layout.length))(i)
}

/// Parse the stored checksum
fn stored_checksum_parser(i: &[u8]) -> IResult<&[u8], u16> {
    preceded(take(CHECKSUM_OFFSET), be_u16)(i)
}

/// Check the console name for the license signature
///
/// Returns false if the data is too short to hold a console name.
pub fn validate(data: &[u8], check: SignatureCheck) -> bool {
    let console = match data.get(CONSOLE_OFFSET..CONSOLE_OFFSET + CONSOLE_LENGTH) {
        Some(console) => console,
        None => {
            debug!("Image is too short to hold a console name");
            return false;
        }
    };

    let signed = LICENSE_SIGNATURES
        .iter()
        .any(|signature| contains_bytes(console, signature));

    if !signed {
        debug!(
            "Console name has no license signature: {:?}",
            String::from_utf8_lossy(console)
        );
    }

    match check {
        SignatureCheck::Strict => signed,
        SignatureCheck::Lenient => true,
    }
}

/// Extract the header fields from a linear image
pub fn extract(data: &[u8]) -> std::result::Result<HeaderRecord, Error> {
    if data.len() < HEADER_END {
        return Err(Error::new(ErrorKind::TooSmall {
            length: data.len(),
            minimum: HEADER_END,
        }));
    }

    let mut record = HeaderRecord::default();

    for layout in HEADER_FIELDS.iter() {
        let (_, bytes) = field_parser(layout)(data).map_err(invalid)?;
        *record.field_mut(layout.field) = HeaderText(bytes.to_vec());
    }

    let (_, stored_checksum) = stored_checksum_parser(data).map_err(invalid)?;
    record.stored_checksum = stored_checksum;

    debug!("Header: {}", record);

    Ok(record)
}

fn invalid(e: nom::Err<nom::error::Error<&[u8]>>) -> Error {
    Error::new(ErrorKind::Invalid(InvalidErrorKind::Invalid(
        e.map_input(|i| i.len()).to_string(),
    )))
}
