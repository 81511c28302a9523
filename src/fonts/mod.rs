//! Font discovery for the whitepaper_pdf crate.
//!
//! `genpdf` embeds TrueType fonts and ships none of its own, so a family with
//! regular, bold, italic and bold-italic faces has to be found on disk. The
//! search walks the configured directories first and falls back to system font
//! locations; see [`FontSearch::candidates`] for the exact order.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::{Error, ErrorKind};
use genpdf::fonts::{self, FontData, FontFamily};
use log::{debug, warn};

/// Environment variable pointing at a directory with the font family files.
pub const FONTS_DIR_ENV: &str = "WHITEPAPER_PDF_FONTS_DIR";

/// Name of the preferred font family, used as the file name prefix.
pub const DEFAULT_FONT_FAMILY_NAME: &str = "LiberationSans";

const FONT_FILES: &[&str] = &[
    "LiberationSans-Regular.ttf",
    "LiberationSans-Bold.ttf",
    "LiberationSans-Italic.ttf",
    "LiberationSans-BoldItalic.ttf",
];

/// Well-known locations of Liberation Sans across Linux distributions and macOS.
const SYSTEM_FONT_DIRECTORIES: &[&str] = &[
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/truetype/liberation2",
    "/usr/share/fonts/liberation-sans",
    "/usr/share/fonts/liberation-sans-fonts",
    "/usr/share/fonts/liberation",
    "/usr/share/fonts/TTF",
    "/usr/local/share/fonts",
    "/Library/Fonts",
];

const WINDOWS_FALLBACK_FAMILY_NAME: &str = "Arial";

struct WindowsFontFiles {
    regular: &'static str,
    bold: &'static str,
    italic: &'static str,
    bold_italic: &'static str,
}

const WINDOWS_FONT_FILES: WindowsFontFiles = WindowsFontFiles {
    regular: "arial.ttf",
    bold: "arialbd.ttf",
    italic: "ariali.ttf",
    bold_italic: "arialbi.ttf",
};

/// Describes where to look for the font family used to render documents.
#[derive(Clone, Debug, Default)]
pub struct FontSearch {
    directory: Option<PathBuf>,
}

impl FontSearch {
    /// Creates a search over the default locations only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `directory` in front of every other location.
    pub fn with_directory(mut self, directory: impl Into<Option<PathBuf>>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Returns the directories searched for the Liberation Sans files, in priority order.
    ///
    /// The order is: the explicit directory, [`FONTS_DIR_ENV`], `assets/fonts` next to the
    /// executable, `assets/fonts` in the crate manifest directory, then the system locations.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        let mut push = |candidate: PathBuf| {
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        };

        if let Some(directory) = &self.directory {
            push(directory.clone());
        }

        if let Some(path) = env_path(FONTS_DIR_ENV) {
            push(path);
        }

        if let Ok(current_exe) = env::current_exe() {
            if let Some(bin_dir) = current_exe.parent() {
                push(bin_dir.join("assets/fonts"));
            }
        }

        push(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts"));

        for directory in SYSTEM_FONT_DIRECTORIES {
            push(PathBuf::from(*directory));
        }

        candidates
    }

    /// Returns the first candidate directory holding every required font file.
    pub fn resolve_directory(&self) -> Result<PathBuf, Error> {
        let mut attempts = Vec::new();

        for candidate in self.candidates() {
            let exists = candidate.is_dir();
            let missing = missing_font_files(&candidate);

            if exists && missing.is_empty() {
                debug!("Using font directory {}", candidate.display());
                return Ok(candidate);
            }

            let reason = if !exists {
                "directory missing".to_owned()
            } else {
                let missing_list = missing
                    .iter()
                    .map(|path| path.file_name().unwrap_or_default().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("missing files [{}]", missing_list)
            };

            attempts.push(format!("{} ({})", candidate.display(), reason));
        }

        Err(Error::new(
            format!(
                "Unable to locate the {} font family. Checked: {}. Set {} or pass a fonts directory.",
                DEFAULT_FONT_FAMILY_NAME,
                attempts.join(", "),
                FONTS_DIR_ENV
            ),
            io::Error::new(io::ErrorKind::NotFound, "font directory not found"),
        ))
    }

    /// Loads the font family, falling back to the Windows Arial family when Liberation Sans
    /// cannot be found.
    pub fn load(&self) -> Result<FontFamily<FontData>, Error> {
        match self.load_liberation() {
            Ok(family) => Ok(family),
            Err(err) if fonts_missing(&err) => match windows_fallback_font_family() {
                Ok(fallback) => {
                    warn!(
                        "{} unavailable ({}); falling back to Windows '{}' family.",
                        DEFAULT_FONT_FAMILY_NAME, err, WINDOWS_FALLBACK_FAMILY_NAME
                    );
                    Ok(fallback)
                }
                Err(fallback_err) => {
                    debug!("Windows font fallback failed: {}", fallback_err);
                    Err(err)
                }
            },
            Err(err) => Err(err),
        }
    }

    /// Indicates whether a font family can be located without loading it.
    pub fn is_available(&self) -> bool {
        self.resolve_directory().is_ok() || windows_font_directory().is_some()
    }

    fn load_liberation(&self) -> Result<FontFamily<FontData>, Error> {
        let directory = self.resolve_directory()?;

        fonts::from_files(&directory, DEFAULT_FONT_FAMILY_NAME, None).map_err(|err| {
            Error::new(
                format!(
                    "Failed to load font family '{}' from {}: {}",
                    DEFAULT_FONT_FAMILY_NAME,
                    directory.display(),
                    err
                ),
                io::Error::new(io::ErrorKind::Other, err.to_string()),
            )
        })
    }
}

fn missing_font_files(path: &Path) -> Vec<PathBuf> {
    FONT_FILES
        .iter()
        .map(|name| path.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect()
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var).and_then(|value| {
        let path = PathBuf::from(value);
        if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        }
    })
}

fn windows_font_directory() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        for var in ["WINDIR", "SystemRoot"] {
            if let Some(root) = env_path(var) {
                let candidate = root.join("Fonts");
                if candidate.join(WINDOWS_FONT_FILES.regular).is_file() {
                    return Some(candidate);
                }
            }
        }
    }

    None
}

fn load_windows_font(directory: &Path, file: &str, style: &str) -> Result<FontData, Error> {
    let path = directory.join(file);
    FontData::load(&path, None).map_err(|err| {
        let io_kind = if path.is_file() {
            io::ErrorKind::Other
        } else {
            io::ErrorKind::NotFound
        };
        Error::new(
            format!(
                "Failed to load Windows fallback {} font at {}: {}",
                style,
                path.display(),
                err
            ),
            io::Error::new(io_kind, err.to_string()),
        )
    })
}

fn windows_fallback_font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = windows_font_directory().ok_or_else(|| {
        Error::new(
            "Windows font directory not found for fallback",
            io::Error::new(io::ErrorKind::NotFound, "windows fonts directory not found"),
        )
    })?;

    Ok(FontFamily {
        regular: load_windows_font(&directory, WINDOWS_FONT_FILES.regular, "regular")?,
        bold: load_windows_font(&directory, WINDOWS_FONT_FILES.bold, "bold")?,
        italic: load_windows_font(&directory, WINDOWS_FONT_FILES.italic, "italic")?,
        bold_italic: load_windows_font(&directory, WINDOWS_FONT_FILES.bold_italic, "bold italic")?,
    })
}

fn fonts_missing(err: &Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::IoError(io_err)
            if io_err.kind() == io::ErrorKind::NotFound
                || io_err.kind() == io::ErrorKind::PermissionDenied
    )
}
