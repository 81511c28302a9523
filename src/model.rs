//! Data structures describing the styled content of a generated document.
//!
//! The story is built without touching `genpdf` so classification can be
//! exercised and inspected on its own. [`crate::builder`] turns it into
//! rendering elements once the whole input has been processed.

use std::fmt;

/// Vertical space, in points, appended after every element.
pub const ELEMENT_SPACING_PT: f64 = 6.0;

/// Extra vertical space, in points, inserted after a title before the regular element spacing.
pub const TITLE_GAP_PT: f64 = 20.0;

/// The four paragraph styles a section can be rendered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleKind {
    /// Large centered document opener.
    Title,
    /// Top-level section heading.
    Heading1,
    /// Sub-heading produced by `**bold**` sections.
    Heading2,
    /// Justified running text.
    Body,
}

impl StyleKind {
    /// Spacers, in points, rendered after an element of this style, in order.
    pub fn trailing_spacers(self) -> &'static [f64] {
        match self {
            StyleKind::Title => &[TITLE_GAP_PT, ELEMENT_SPACING_PT],
            _ => &[ELEMENT_SPACING_PT],
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StyleKind::Title => "title",
            StyleKind::Heading1 => "heading1",
            StyleKind::Heading2 => "heading2",
            StyleKind::Body => "body",
        };
        f.pad(name)
    }
}

/// A single styled paragraph of the story together with its trailing space.
#[derive(Clone, Debug, PartialEq)]
pub struct StoryElement {
    text: String,
    style: StyleKind,
}

impl StoryElement {
    /// Creates an element with the spacing implied by `style`.
    pub fn new(text: impl Into<String>, style: StyleKind) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Returns the text rendered for this element.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the style the element is rendered with.
    pub fn style(&self) -> StyleKind {
        self.style
    }

    /// Returns the individual spacers following the element.
    pub fn spacers(&self) -> &'static [f64] {
        self.style.trailing_spacers()
    }

    /// Total vertical space, in points, following the element.
    pub fn spacing(&self) -> f64 {
        self.spacers().iter().sum()
    }
}

/// Ordered sequence of styled elements handed to the renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Story {
    elements: Vec<StoryElement>,
}

impl Story {
    /// Creates an empty story.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element at the end of the story.
    pub fn push(&mut self, element: StoryElement) {
        self.elements.push(element);
    }

    /// Returns the elements in story order.
    pub fn elements(&self) -> &[StoryElement] {
        &self.elements
    }

    /// Number of elements in the story.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` when no element has been added.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl FromIterator<StoryElement> for Story {
    fn from_iter<I: IntoIterator<Item = StoryElement>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_carry_extra_gap() {
        let title = StoryElement::new("Disclaimer", StyleKind::Title);
        assert_eq!(title.spacers(), &[20.0, 6.0]);
        assert_eq!(title.spacing(), 26.0);
    }

    #[test]
    fn other_styles_use_element_spacing() {
        for style in [StyleKind::Heading1, StyleKind::Heading2, StyleKind::Body] {
            assert_eq!(StoryElement::new("x", style).spacing(), ELEMENT_SPACING_PT);
        }
    }

    #[test]
    fn story_preserves_insertion_order() {
        let mut story = Story::new();
        story.push(StoryElement::new("first", StyleKind::Body));
        story.push(StoryElement::new("second", StyleKind::Heading2));

        let texts: Vec<_> = story.elements().iter().map(StoryElement::text).collect();
        assert_eq!(texts, ["first", "second"]);
    }
}
