//! Converts plain-text whitepapers into styled PDF documents.
//!
//! The input is split into blank-line separated sections. Each section is
//! classified by a fixed table of heading sentinels and a `**bold**` marker
//! convention, turned into a [`model::Story`], and laid out with `genpdf`.
//!
//! ```no_run
//! use whitepaper_pdf::{create_pdf, FormatterConfig};
//!
//! let written = create_pdf("paper.txt", "paper.pdf", FormatterConfig::new())?;
//! println!("PDF generated successfully: {}", written.display());
//! # Ok::<(), whitepaper_pdf::Error>(())
//! ```

pub mod builder;
pub mod document;
pub mod elements;
pub mod error;
pub mod fonts;
pub mod formatter;
pub mod model;
pub mod rules;
pub mod style;

pub use document::Document;
pub use error::{Error, Result};
pub use formatter::{
    create_pdf, Formatter, FormatterConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH,
};
pub use model::{Story, StoryElement, StyleKind};
