//! Document construction and story rendering.

use genpdf::error::Error;
use genpdf::fonts::{FontData, FontFamily};
use genpdf::{self, Element, Margins, SimplePageDecorator, Size};
use log::debug;

use crate::elements::{aligned_paragraph, JustifiedParagraph, Spacer};
use crate::model::{Story, StoryElement};
use crate::style::{PageSettings, StyleSheet};

/// Builder for `genpdf::Document` instances pre-configured with page geometry.
pub struct DocumentBuilder {
    font_family: FontFamily<FontData>,
    paper_size: Option<Size>,
    margins: Option<Margins>,
    title: Option<String>,
    font_size: Option<u8>,
}

impl DocumentBuilder {
    /// Creates a new builder rendering with `font_family`.
    pub fn new(font_family: FontFamily<FontData>) -> Self {
        Self {
            font_family,
            paper_size: None,
            margins: None,
            title: None,
            font_size: None,
        }
    }

    /// Applies the paper size and margins of `page`.
    pub fn with_page_settings(self, page: &PageSettings) -> Self {
        self.with_paper_size(page.paper_size())
            .with_margins(page.margins())
    }

    /// Sets the paper size used for newly created documents.
    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = Some(paper_size.into());
        self
    }

    /// Sets the margins applied through the page decorator.
    pub fn with_margins(mut self, margins: impl Into<Margins>) -> Self {
        self.margins = Some(margins.into());
        self
    }

    /// Sets the title stored in the PDF metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the base font size inherited by elements without an explicit size.
    pub fn with_font_size(mut self, font_size: u8) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Builds a fully configured `genpdf::Document` instance.
    pub fn build(self) -> genpdf::Document {
        let mut document = genpdf::Document::new(self.font_family);

        if let Some(paper_size) = self.paper_size {
            document.set_paper_size(paper_size);
        }

        if let Some(title) = self.title {
            document.set_title(title);
        }

        if let Some(font_size) = self.font_size {
            document.set_font_size(font_size);
        }

        let mut decorator = SimplePageDecorator::new();
        if let Some(margins) = self.margins {
            decorator.set_margins(margins);
        }
        document.set_page_decorator(decorator);

        document
    }
}

/// Appends the elements for one story entry, followed by its spacers.
fn push_story_element(
    document: &mut genpdf::Document,
    element: &StoryElement,
    sheet: &StyleSheet,
) {
    let style = sheet.get(element.style());
    let text_style = style.text_style();

    match style.alignment().to_genpdf() {
        Some(alignment) => document.push(
            aligned_paragraph(element.text(), alignment)
                .styled(text_style)
                .padded(style.margins()),
        ),
        None => document.push(
            JustifiedParagraph::new(element.text())
                .styled(text_style)
                .padded(style.margins()),
        ),
    }

    for spacer in element.spacers() {
        document.push(Spacer::from_points(*spacer));
    }
}

/// Lays out `story` into `document` and serializes the result as PDF bytes.
pub fn render_story(
    mut document: genpdf::Document,
    story: Story,
    sheet: &StyleSheet,
) -> Result<Vec<u8>, Error> {
    debug!("Rendering story with {} elements", story.len());

    for element in story.elements() {
        push_story_element(&mut document, element, sheet);
    }

    let mut bytes = Vec::new();
    document.render(&mut bytes)?;
    Ok(bytes)
}
