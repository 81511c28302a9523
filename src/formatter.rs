//! End-to-end conversion of a whitepaper text file into a PDF.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::builder::{render_story, DocumentBuilder};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::fonts::FontSearch;
use crate::model::Story;
use crate::rules::RuleSet;
use crate::style::{PageSettings, StyleSheet};

/// Input path used when none is given.
pub const DEFAULT_INPUT_PATH: &str = "stolas_whitepaper.txt";

/// Output path used when none is given.
pub const DEFAULT_OUTPUT_PATH: &str = "stolas_whitepaper_formatted.pdf";

/// Settings that shape the generated document.
#[derive(Clone, Debug, Default)]
pub struct FormatterConfig {
    styles: StyleSheet,
    page: PageSettings,
    fonts: FontSearch,
}

impl FormatterConfig {
    /// Creates the default configuration: A4, one inch margins, the stock style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the style sheet and returns the updated configuration.
    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the page settings and returns the updated configuration.
    pub fn with_page(mut self, page: PageSettings) -> Self {
        self.page = page;
        self
    }

    /// Looks for fonts in `directory` before the default locations.
    pub fn with_fonts_dir(mut self, directory: impl Into<Option<PathBuf>>) -> Self {
        self.fonts = FontSearch::new().with_directory(directory);
        self
    }
}

/// Turns whitepaper text into a styled PDF.
#[derive(Clone, Debug, Default)]
pub struct Formatter {
    config: FormatterConfig,
    rules: RuleSet,
}

impl Formatter {
    /// Creates a formatter with the standard classification rules.
    pub fn new(config: FormatterConfig) -> Self {
        Self {
            config,
            rules: RuleSet::default(),
        }
    }

    /// Classifies every section of `document` and returns the resulting story.
    pub fn build_story(&self, document: &Document) -> Story {
        document
            .sections()
            .map(|section| {
                let element = self.rules.classify(section);
                debug!(
                    "{:<8} {}",
                    element.style(),
                    element.text().lines().next().unwrap_or_default()
                );
                element
            })
            .collect()
    }

    /// Renders `story` into PDF bytes.
    ///
    /// `title` is stored in the document metadata.
    pub fn render(&self, story: Story, title: &str) -> Result<Vec<u8>> {
        let font_family = self.config.fonts.load().map_err(Error::Fonts)?;
        let document = DocumentBuilder::new(font_family)
            .with_page_settings(&self.config.page)
            .with_font_size(self.config.styles.body.font_size())
            .with_title(title)
            .build();

        render_story(document, story, &self.config.styles).map_err(Error::Render)
    }

    /// Converts the text file at `input` into a PDF written to `output`.
    ///
    /// The input is checked for existence before anything else happens. The PDF is
    /// rendered in memory first, so a failed render leaves no file behind. Returns the
    /// path of the written file.
    pub fn format_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        let input = input.as_ref();
        let output = output.as_ref();

        let document = Document::read(input)?;
        info!("Formatting {} into {}", input.display(), output.display());

        let story = self.build_story(&document);
        info!("Classified {} sections", story.len());

        let title = output
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let bytes = self.render(story, &title)?;

        fs::write(output, &bytes).map_err(|source| Error::Write {
            path: output.to_path_buf(),
            source,
        })?;
        info!("Wrote {} ({} bytes)", output.display(), bytes.len());

        Ok(output.to_path_buf())
    }
}

/// Converts `input` into a PDF at `output` using `config`.
pub fn create_pdf(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: FormatterConfig,
) -> Result<PathBuf> {
    Formatter::new(config).format_file(input, output)
}
