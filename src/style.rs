//! Paragraph styles and page geometry used when rendering a story.
//!
//! Sizes are expressed in PostScript points, the unit the layout constants are
//! usually quoted in, and converted to millimetres at the `genpdf` boundary.

use genpdf::style::{Color, Style};
use genpdf::{Margins, Mm, PaperSize, Size};

use crate::model::StyleKind;

/// Millimetres per PostScript point.
const MM_PER_POINT: f64 = 25.4 / 72.0;

/// Accent color used for titles and top-level headings (dark blue).
pub const ACCENT_PRIMARY: Color = Color::Rgb(0, 0, 139);

/// Accent color used for sub-headings (dark green).
pub const ACCENT_SECONDARY: Color = Color::Rgb(0, 100, 0);

/// Page margin applied on all four sides, in points.
pub const DEFAULT_MARGIN_PT: f64 = 72.0;

/// Converts points into `genpdf` millimetres.
pub fn points_to_mm(points: f64) -> Mm {
    Mm::from(printpdf::Mm(points * MM_PER_POINT))
}

/// Converts `genpdf` millimetres into a plain `f64` millimetre value.
pub fn mm_to_f64(value: Mm) -> f64 {
    let mm: printpdf::Mm = value.into();
    mm.0
}

/// Converts a plain `f64` millimetre value into `genpdf` millimetres.
pub fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

/// Horizontal placement of paragraph lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Left aligned content.
    #[default]
    Left,
    /// Center aligned content.
    Center,
    /// Lines stretched to the full width, except the last one.
    Justified,
}

impl HorizontalAlignment {
    /// Maps to the `genpdf` alignment, or `None` for justified text which `genpdf` lacks.
    pub fn to_genpdf(self) -> Option<genpdf::Alignment> {
        match self {
            HorizontalAlignment::Left => Some(genpdf::Alignment::Left),
            HorizontalAlignment::Center => Some(genpdf::Alignment::Center),
            HorizontalAlignment::Justified => None,
        }
    }
}

/// Visual attributes of one paragraph style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParagraphStyle {
    font_size: u8,
    bold: bool,
    alignment: HorizontalAlignment,
    space_before: f64,
    space_after: f64,
    color: Option<Color>,
}

impl ParagraphStyle {
    /// Creates a regular, left aligned style with the given font size and no spacing.
    pub fn new(font_size: u8) -> Self {
        Self {
            font_size,
            bold: false,
            alignment: HorizontalAlignment::Left,
            space_before: 0.0,
            space_after: 0.0,
            color: None,
        }
    }

    /// Font size, in points.
    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    /// Returns `true` when the paragraph uses the bold face.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Horizontal placement of the paragraph lines.
    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    /// Space above the paragraph, in points.
    pub fn space_before(&self) -> f64 {
        self.space_before
    }

    /// Space below the paragraph, in points.
    pub fn space_after(&self) -> f64 {
        self.space_after
    }

    /// Text colour, or `None` for the renderer default.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Sets the bold flag and returns the updated style.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Sets the alignment and returns the updated style.
    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the space above and below the paragraph, in points.
    pub fn with_spacing(mut self, before: f64, after: f64) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    /// Sets the text color and returns the updated style.
    pub fn with_color(mut self, color: impl Into<Option<Color>>) -> Self {
        self.color = color.into();
        self
    }

    /// Builds the `genpdf` text style for this paragraph style.
    pub fn text_style(&self) -> Style {
        let mut style = Style::new();
        style.set_font_size(self.font_size);
        if self.bold {
            style.set_bold();
        }
        if let Some(color) = self.color {
            style.set_color(color);
        }
        style
    }

    /// Vertical padding around the paragraph.
    pub fn margins(&self) -> Margins {
        Margins::trbl(
            points_to_mm(self.space_before),
            0,
            points_to_mm(self.space_after),
            0,
        )
    }
}

/// The four paragraph styles a story is rendered with.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSheet {
    pub title: ParagraphStyle,
    pub heading1: ParagraphStyle,
    pub heading2: ParagraphStyle,
    pub body: ParagraphStyle,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            title: ParagraphStyle::new(24)
                .with_bold(true)
                .with_alignment(HorizontalAlignment::Center)
                .with_spacing(0.0, 30.0)
                .with_color(ACCENT_PRIMARY),
            heading1: ParagraphStyle::new(18)
                .with_bold(true)
                .with_spacing(20.0, 12.0)
                .with_color(ACCENT_PRIMARY),
            heading2: ParagraphStyle::new(14)
                .with_bold(true)
                .with_spacing(16.0, 8.0)
                .with_color(ACCENT_SECONDARY),
            body: ParagraphStyle::new(11)
                .with_alignment(HorizontalAlignment::Justified)
                .with_spacing(0.0, 6.0),
        }
    }
}

impl StyleSheet {
    /// Returns the paragraph style registered for `kind`.
    pub fn get(&self, kind: StyleKind) -> &ParagraphStyle {
        match kind {
            StyleKind::Title => &self.title,
            StyleKind::Heading1 => &self.heading1,
            StyleKind::Heading2 => &self.heading2,
            StyleKind::Body => &self.body,
        }
    }
}

/// Page geometry of the generated document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageSettings {
    paper_size: Size,
    margin_pt: f64,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4.into(),
            margin_pt: DEFAULT_MARGIN_PT,
        }
    }
}

impl PageSettings {
    /// Page dimensions.
    pub fn paper_size(&self) -> Size {
        self.paper_size
    }

    /// Margin applied on every side, in points.
    pub fn margin_pt(&self) -> f64 {
        self.margin_pt
    }

    /// Sets the paper size and returns the updated settings.
    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = paper_size.into();
        self
    }

    /// Sets the uniform margin, in points, and returns the updated settings.
    pub fn with_margin_pt(mut self, margin_pt: f64) -> Self {
        self.margin_pt = margin_pt;
        self
    }

    /// Margins as understood by the page decorator.
    pub fn margins(&self) -> Margins {
        Margins::all(points_to_mm(self.margin_pt))
    }
}
