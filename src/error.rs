//! Error results that can occur working with ROM images
use std::{
    fmt::{Debug, Display, Formatter, Result},
    io,
};

/// An error that can occur when reading, converting or inspecting a
/// ROM image.
pub struct Error {
    kind: ErrorKind,
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.kind)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Io(e) | ErrorKind::WriteFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl Error {
    /// Create a new Error with a given ErrorKind variant
    pub fn new(kind: ErrorKind) -> Error {
        Error { kind }
    }

    /// The kind of error that occurred
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::new(ErrorKind::Io(e))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::new(kind)
    }
}

/// The kinds of errors that can occur when processing a ROM image.
pub enum ErrorKind {
    /// Generic error type
    Message(String),

    /// The file could not be opened or read.
    Io(io::Error),

    /// The image is smaller than the minimum size for the requested
    /// operation.
    TooSmall {
        /// Length of the image in bytes
        length: usize,
        /// Minimum length accepted
        minimum: usize,
    },

    /// The image is larger than the maximum supported size.
    TooLarge {
        /// Length of the image in bytes
        length: usize,
        /// Maximum length accepted
        maximum: usize,
    },

    /// An error that occurs when dealing with invalid or unexpected
    /// data.
    Invalid(InvalidErrorKind),

    /// The converted image could not be written.
    WriteFailed(io::Error),
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            ErrorKind::Message(message) => write!(f, "An error occurred: {}", message),
            ErrorKind::Io(e) => write!(f, "{}", e),
            ErrorKind::TooSmall { length, minimum } => write!(
                f,
                "Image is too small: {} bytes, minimum is {} bytes",
                length, minimum
            ),
            ErrorKind::TooLarge { length, maximum } => write!(
                f,
                "Image is too large: {} bytes, maximum is {} bytes",
                length, maximum
            ),
            ErrorKind::Invalid(e) => write!(f, "{}", e),
            ErrorKind::WriteFailed(e) => write!(f, "Write failed: {}", e),
        }
    }
}

impl ErrorKind {
    /// Return a new generic ErrorKind::Message with a given string message.
    pub fn new(message: &str) -> ErrorKind {
        ErrorKind::Message(message.to_string())
    }
}

/// An InvalidErrorKind is returned when the data is invalid.
#[derive(Debug, PartialEq)]
pub enum InvalidErrorKind {
    /// The data was invalid
    Invalid(String),
    /// The console name field does not carry the license signature
    Header,
}

impl Display for InvalidErrorKind {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            InvalidErrorKind::Invalid(message) => write!(f, "Image is invalid: {}", message),
            InvalidErrorKind::Header => write!(f, "Image has an invalid ROM header"),
        }
    }
}
