//! Input text and its decomposition into sections.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Boundary separating two sections of the input.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// The full text of a whitepaper.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    content: String,
}

impl Document {
    /// Wraps already loaded text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Reads the whole file at `path` as UTF-8 text.
    ///
    /// A path that does not exist yields [`Error::MissingInput`]; any other I/O or
    /// decoding failure yields [`Error::Read`].
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::MissingInput(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(content))
    }

    /// Splits the text on blank lines and yields every non-empty, trimmed section in order.
    pub fn sections(&self) -> impl Iterator<Item = &str> + '_ {
        self.content
            .split(SECTION_SEPARATOR)
            .map(str::trim)
            .filter(|section| !section.is_empty())
    }
}
