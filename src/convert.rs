//! Inspect and convert ROM images
//!
//! Every operation moves through the same stages:
//! loaded, size checked, transcoded, validated and, when converting,
//! written.  A failure at any stage ends the operation and nothing is
//! written.
use std::fmt::{Display, Formatter};
use std::path::Path;

use log::{debug, info, warn};

use crate::config::Config;
use crate::error::{Error, ErrorKind, InvalidErrorKind};
use crate::file::{read_file, write_file};
use crate::rom_format::checksum::calculate_checksum;
use crate::rom_format::constants::{BLOCK_SIZE, HEADER_SIZE, MAX_FILE_SIZE};
use crate::rom_format::header::{extract, validate, HeaderRecord};
use crate::rom_format::image::{Format, RomImage};
use crate::rom_format::interleave::{deinterleave, interleave};
use crate::rom_format::publisher::publisher;
use crate::serialize::{word_to_hex_pair, Serializer};

/// What is being done with an image
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Print the header, never write anything
    Inspect,
    /// Flip the image layout and write it out
    Convert,
}

impl Mode {
    /// Smallest image the mode accepts
    pub fn minimum_size(self) -> usize {
        match self {
            Mode::Inspect => HEADER_SIZE,
            Mode::Convert => HEADER_SIZE + BLOCK_SIZE,
        }
    }
}

/// Stages an image passes through
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    /// Read into memory
    Loaded,
    /// Within the size bounds of the mode
    SizeChecked,
    /// Converted to the layout the mode needs
    Transcoded,
    /// Header signature checked
    Validated,
    /// Written to the output file
    Written,
    /// Finished
    Done,
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

fn enter(stage: Stage) {
    debug!("Stage: {}", stage);
}

/// Check an image length against the bounds of a mode
pub fn check_size(length: usize, mode: Mode) -> Result<(), Error> {
    let minimum = mode.minimum_size();

    if length < minimum {
        return Err(Error::new(ErrorKind::TooSmall { length, minimum }));
    }

    if length > MAX_FILE_SIZE {
        return Err(Error::new(ErrorKind::TooLarge {
            length,
            maximum: MAX_FILE_SIZE,
        }));
    }

    Ok(())
}

/// The header information of an inspected image
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderReport {
    /// The name the image was loaded from
    pub file_name: String,
    /// The layout the image was stored in
    pub format: Format,
    /// The parsed header
    pub header: HeaderRecord,
    /// The publisher resolved from the company code
    pub publisher: &'static str,
    /// The checksum of the linear image
    pub calculated_checksum: u16,
}

impl HeaderReport {
    /// Returns true if the stored checksum matches the image contents
    pub fn checksum_matches(&self) -> bool {
        self.header.stored_checksum == self.calculated_checksum
    }

    /// The report fields in print order: label, TOML key, value
    pub fn fields(&self) -> Vec<(&'static str, &'static str, String)> {
        let header = &self.header;

        vec![
            ("File name", "file-name", self.file_name.clone()),
            ("File format", "file-format", self.format.to_string()),
            ("Console", "console", header.console.to_string()),
            ("Publisher", "publisher", self.publisher.to_string()),
            ("Domestic name", "domestic-name", header.domestic_name.to_string()),
            (
                "International name",
                "international-name",
                header.international_name.to_string(),
            ),
            ("Copyright", "copyright", header.copyright.to_string()),
            ("Product type", "product-type", header.product_type.to_string()),
            ("Product code", "product-code", header.product_code.to_string()),
            ("I/O devices", "io-devices", header.io_devices.to_string()),
            ("Regions", "regions", header.regions.to_string()),
            (
                "Stored checksum",
                "stored-checksum",
                word_to_hex_pair(header.stored_checksum),
            ),
            (
                "Calculated checksum",
                "calculated-checksum",
                word_to_hex_pair(self.calculated_checksum),
            ),
        ]
    }

    /// Render the report as a TOML table
    pub fn to_toml(&self) -> Result<String, Error> {
        let mut table = toml::Table::new();
        for (_, key, value) in self.fields() {
            table.insert(key.to_string(), toml::Value::String(value));
        }

        toml::to_string(&table).map_err(|e| Error::new(ErrorKind::Message(e.to_string())))
    }
}

impl Display for HeaderReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (label, _, value) in self.fields() {
            writeln!(f, "{:>19}: {}", label, value)?;
        }
        Ok(())
    }
}

/// Read the header of an image held in memory
///
/// Interleaved images are deinterleaved first.  The checksum is
/// calculated over the linear image.
pub fn inspect(file_name: &str, data: Vec<u8>, config: &Config) -> Result<HeaderReport, Error> {
    enter(Stage::Loaded);
    check_size(data.len(), Mode::Inspect)?;
    enter(Stage::SizeChecked);

    let image = RomImage::new(data);
    let format = image.format();
    info!("{}: {}", file_name, image);

    let image = match format {
        Format::Interleaved => deinterleave(image),
        Format::Linear => image,
    };
    enter(Stage::Transcoded);

    if !validate(image.data(), config.signature_check()) {
        return Err(Error::new(ErrorKind::Invalid(InvalidErrorKind::Header)));
    }
    enter(Stage::Validated);

    let header = extract(image.data())?;
    let report = HeaderReport {
        file_name: file_name.to_string(),
        format,
        publisher: publisher(&header),
        calculated_checksum: calculate_checksum(image.data()),
        header,
    };

    if !report.checksum_matches() {
        info!(
            "Stored checksum 0x{:04X} does not match calculated checksum 0x{:04X}",
            report.header.stored_checksum, report.calculated_checksum
        );
    }
    enter(Stage::Done);

    Ok(report)
}

/// Flip the layout of an image held in memory
///
/// The header is validated on the linear side of the conversion: the
/// source when interleaving, the result when deinterleaving.
pub fn convert(data: Vec<u8>, config: &Config) -> Result<RomImage, Error> {
    enter(Stage::Loaded);
    check_size(data.len(), Mode::Convert)?;
    enter(Stage::SizeChecked);

    let image = RomImage::new(data);
    info!("Converting {}", image);

    let (linear_is_valid, converted) = match image.format() {
        Format::Linear => {
            let valid = validate(image.data(), config.signature_check());
            (valid, interleave(image))
        }
        Format::Interleaved => {
            let converted = deinterleave(image);
            (
                validate(converted.data(), config.signature_check()),
                converted,
            )
        }
    };
    enter(Stage::Transcoded);

    if !linear_is_valid {
        return Err(Error::new(ErrorKind::Invalid(InvalidErrorKind::Header)));
    }
    enter(Stage::Validated);

    info!("Converted to {}", converted);

    Ok(converted)
}

/// Read an image file and report its header
pub fn inspect_file<P: AsRef<Path>>(filename: P, config: &Config) -> Result<HeaderReport, Error> {
    let data = read_file(&filename)?;

    inspect(&filename.as_ref().display().to_string(), data, config).map_err(|e| {
        debug!("Inspecting {} failed: {}", filename.as_ref().display(), e);
        e
    })
}

/// Read an image file, flip its layout and write the result
///
/// Nothing is written unless every stage succeeds.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: &Config,
) -> Result<RomImage, Error> {
    let data = read_file(&input)?;

    let converted = convert(data, config).map_err(|e| {
        debug!("Converting {} failed: {}", input.as_ref().display(), e);
        e
    })?;

    if input.as_ref() == output.as_ref() {
        warn!("Overwriting the input file {}", input.as_ref().display());
    }

    write_file(&output, &converted.as_vec()?)?;
    enter(Stage::Written);
    enter(Stage::Done);

    Ok(converted)
}

/// The one line shown to the user when an operation fails
pub fn error_message(e: &Error, input: &str, output: &str) -> String {
    match e.kind() {
        ErrorKind::Io(_) => format!("Could not open file: {}", input),
        ErrorKind::TooSmall { .. } => format!("File is too small: {}", input),
        ErrorKind::TooLarge { .. } => format!("File is too large: {}", input),
        ErrorKind::Invalid(_) => format!("Invalid ROM header: {}", input),
        ErrorKind::WriteFailed(_) => format!("Could not write file: {}", output),
        ErrorKind::Message(_) => format!("{}: {}", e, input),
    }
}
