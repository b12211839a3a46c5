//! Functions for dealing with files
#![warn(missing_docs)]
#![warn(unsafe_code)]

use std::{fs, path::Path, result::Result};

use log::info;

use crate::error::{Error, ErrorKind};

/// Open up a file and read in the data
///
/// # Arguments
///
/// * `filename` - A path to a file to open and read
///
/// # Returns
///   Returns all the data as a u8 vector
///      Returns an Err result with ErrorKind::Io if the file could
///      not be opened or read.
///
/// # Examples
///
/// ```
/// use std::fs;
/// use genesis_rider::file::read_file;
///
/// let filename = std::env::temp_dir().join("genesis-rider-file-read_file.bin");
/// fs::write(&filename, [1, 2, 3, 4]).unwrap();
///
/// let data = read_file(&filename);
/// assert!(data.is_ok());
/// assert_eq!(data.unwrap(), vec![1, 2, 3, 4]);
///
/// fs::remove_file(&filename).unwrap();
/// ```
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<Vec<u8>, Error> {
    let data = fs::read(filename.as_ref())?;
    info!("Read {}: {} bytes", filename.as_ref().display(), data.len());

    Ok(data)
}

/// Write data out to a file, replacing anything already there
///
/// Returns an Err result with ErrorKind::WriteFailed if the file could
/// not be created or written.
pub fn write_file<P: AsRef<Path>>(filename: P, data: &[u8]) -> Result<(), Error> {
    fs::write(filename.as_ref(), data).map_err(|e| Error::new(ErrorKind::WriteFailed(e)))?;
    info!("Wrote {}: {} bytes", filename.as_ref().display(), data.len());

    Ok(())
}
