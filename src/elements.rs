//! Element implementations built on top of `genpdf` primitives.
//!
//! `genpdf` can align paragraph lines left, right or centered but cannot
//! justify them, and its `Break` element measures space in lines rather than in
//! absolute units. This module adds both pieces.

use genpdf::elements::Paragraph;
use genpdf::error::Error;
use genpdf::fonts::FontCache;
use genpdf::style::{Style, StyledString};
use genpdf::{render, Alignment, Element, Mm, Position, RenderResult, Size};

use crate::style::{mm_from_f64, mm_to_f64, points_to_mm};

/// Joins all whitespace runs, line breaks included, into single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Builds a `genpdf` paragraph from flowing text with the given alignment.
pub fn aligned_paragraph(text: &str, alignment: Alignment) -> Paragraph {
    let mut paragraph = Paragraph::new(collapse_whitespace(text));
    paragraph.set_alignment(alignment);
    paragraph
}

fn text_width(font_cache: &FontCache, text: &str, style: Style) -> f64 {
    mm_to_f64(StyledString::new(text.to_owned(), style).width(font_cache))
}

/// A paragraph whose lines are stretched to the full available width.
///
/// Words are wrapped greedily. Every line except the last one distributes the
/// leftover width evenly across its gaps; the last line and lines holding a
/// single word keep the natural word spacing. A word wider than the line is
/// placed on a line of its own and allowed to overflow.
pub struct JustifiedParagraph {
    words: Vec<String>,
    next_word: usize,
}

impl JustifiedParagraph {
    /// Creates a justified paragraph from flowing text.
    pub fn new(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_owned).collect(),
            next_word: 0,
        }
    }

    /// Returns the words of the paragraph in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the index one past the last word fitting on a line that starts at `start`.
    fn line_end(&self, start: usize, widths: &[f64], space: f64, available: f64) -> usize {
        let mut end = start + 1;
        let mut used = widths[start];
        while end < self.words.len() && used + space + widths[end] <= available {
            used += space + widths[end];
            end += 1;
        }
        end
    }
}

impl Element for JustifiedParagraph {
    fn render(
        &mut self,
        context: &genpdf::Context,
        mut area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let font_cache = &context.font_cache;
        let mut result = RenderResult::default();

        let available = mm_to_f64(area.size().width);
        let line_height = style.line_height(font_cache);
        let space = text_width(font_cache, " ", style);
        let widths: Vec<f64> = self
            .words
            .iter()
            .map(|word| text_width(font_cache, word, style))
            .collect();

        while self.next_word < self.words.len() {
            if line_height > area.size().height {
                result.has_more = true;
                return Ok(result);
            }

            let start = self.next_word;
            let end = self.line_end(start, &widths, space, available);
            let gaps = end - start - 1;
            let gap = if end == self.words.len() || gaps == 0 {
                space
            } else {
                let used: f64 = widths[start..end].iter().sum();
                (available - used) / gaps as f64
            };

            let mut x = 0.0;
            for index in start..end {
                match area.text_section(font_cache, Position::new(mm_from_f64(x), 0), style) {
                    Some(mut section) => section.print_str(&self.words[index], style)?,
                    None => {
                        result.has_more = true;
                        return Ok(result);
                    }
                }
                x += widths[index] + gap;
            }

            self.next_word = end;
            result.size = result
                .size
                .stack_vertical(Size::new(area.size().width, line_height));
            area.add_offset(Position::new(0, line_height));
        }

        Ok(result)
    }
}

/// Fixed vertical space.
///
/// The space is clipped to what is left on the current page, so a spacer never
/// pushes content onto the next page by itself.
pub struct Spacer {
    height: Mm,
}

impl Spacer {
    /// Creates a spacer of the given height.
    pub fn new(height: impl Into<Mm>) -> Self {
        Self {
            height: height.into(),
        }
    }

    /// Creates a spacer measured in points.
    pub fn from_points(points: f64) -> Self {
        Self::new(points_to_mm(points))
    }

    pub fn height(&self) -> Mm {
        self.height
    }
}

impl Element for Spacer {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size().height;
        let height = if self.height > available {
            available
        } else {
            self.height
        };

        let mut result = RenderResult::default();
        result.size = Size::new(0, height);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_line_breaks_and_runs_of_spaces() {
        assert_eq!(
            collapse_whitespace("  first line\nsecond\t\tline  "),
            "first line second line"
        );
    }

    #[test]
    fn justified_paragraph_splits_words() {
        let paragraph = JustifiedParagraph::new("Liquid staking\nfor  OLAS");
        assert_eq!(paragraph.words(), ["Liquid", "staking", "for", "OLAS"]);
    }

    #[test]
    fn greedy_wrapping_respects_available_width() {
        let paragraph = JustifiedParagraph::new("aa bb cc dd");
        let widths = [2.0, 2.0, 2.0, 2.0];
        assert_eq!(paragraph.line_end(0, &widths, 1.0, 5.0), 2);
        assert_eq!(paragraph.line_end(2, &widths, 1.0, 5.0), 4);
        assert_eq!(paragraph.line_end(0, &widths, 1.0, 100.0), 4);
    }

    #[test]
    fn oversized_word_gets_its_own_line() {
        let paragraph = JustifiedParagraph::new("enormous tiny");
        let widths = [50.0, 1.0];
        assert_eq!(paragraph.line_end(0, &widths, 1.0, 10.0), 1);
    }

    #[test]
    fn spacer_converts_points() {
        let spacer = Spacer::from_points(72.0);
        assert!((mm_to_f64(spacer.height()) - 25.4).abs() < 1e-9);
    }
}
