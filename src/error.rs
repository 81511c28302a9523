//! Error types for the whitepaper_pdf crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for whitepaper_pdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning a text file into a PDF.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file does not exist. Checked before any other work happens.
    #[error("input file '{}' not found", .0.display())]
    MissingInput(PathBuf),

    /// The input file exists but could not be read as UTF-8 text.
    #[error("failed to read '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No usable TrueType font family could be located.
    #[error("no usable font family")]
    Fonts(#[source] genpdf::error::Error),

    /// Layout or PDF serialization failed.
    #[error("failed to render PDF")]
    Render(#[source] genpdf::error::Error),

    /// The rendered PDF could not be written to disk.
    #[error("failed to write '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Returns `true` for the precondition failure raised when the input path is absent.
    ///
    /// Every other variant is a generation failure.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Error::MissingInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_is_distinguished() {
        let err = Error::MissingInput(PathBuf::from("absent.txt"));
        assert!(err.is_missing_input());
        assert_eq!(err.to_string(), "input file 'absent.txt' not found");
    }

    #[test]
    fn read_error_keeps_io_source() {
        let err = Error::Read {
            path: PathBuf::from("paper.txt"),
            source: io::Error::new(
                io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            ),
        };
        assert!(!err.is_missing_input());
        let source = std::error::Error::source(&err).expect("io source");
        assert!(source.to_string().contains("valid UTF-8"));
    }
}
