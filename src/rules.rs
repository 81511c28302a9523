//! Classification of sections into paragraph styles.
//!
//! Sections are matched against an ordered table of [`StyleRule`]s. The first
//! rule that matches decides the style; sections no rule accepts are body text.

use crate::model::{StoryElement, StyleKind};

/// Marker wrapped around a section to turn it into a sub-heading.
pub const BOLD_MARKER: &str = "**";

/// Sentinels rendered as document titles.
pub const TITLE_SENTINELS: &[&str] = &[
    "Disclaimer",
    "Executive Summary",
    "Introduction to stOLAS",
];

/// Sentinels rendered as top-level headings.
pub const HEADING1_SENTINELS: &[&str] = &[
    "Token Utility",
    "Architecture",
    "Technical",
    "DeFi Integration",
    "Security",
    "Governance",
    "Roadmap",
    "Economic Model",
    "Risk Factors",
    "Conclusion",
    "Glossary",
    "Contact Information",
];

/// How a rule recognises a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Matcher {
    /// Case-sensitive literal prefix.
    Prefix(&'static str),
    /// Section starts and ends with the given marker. The two may overlap.
    Wrapped(&'static str),
}

impl Matcher {
    /// Returns the text to render when `section` matches, `None` otherwise.
    ///
    /// Prefix matches keep the whole section. Wrapped matches strip one marker from each
    /// end; when the markers overlap, only the leading one is removed.
    pub fn apply<'a>(&self, section: &'a str) -> Option<&'a str> {
        match *self {
            Matcher::Prefix(prefix) => section.starts_with(prefix).then_some(section),
            Matcher::Wrapped(marker) => section
                .strip_prefix(marker)
                .filter(|_| section.ends_with(marker))
                .map(|inner| inner.strip_suffix(marker).unwrap_or(inner)),
        }
    }
}

/// A single entry of the classification table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleRule {
    matcher: Matcher,
    style: StyleKind,
}

impl StyleRule {
    /// Rule matching sections that start with `prefix`.
    pub const fn prefix(prefix: &'static str, style: StyleKind) -> Self {
        Self {
            matcher: Matcher::Prefix(prefix),
            style,
        }
    }

    /// Rule matching sections wrapped in `marker`.
    pub const fn wrapped(marker: &'static str, style: StyleKind) -> Self {
        Self {
            matcher: Matcher::Wrapped(marker),
            style,
        }
    }

    /// Style assigned to sections this rule accepts.
    pub fn style(&self) -> StyleKind {
        self.style
    }
}

/// Ordered rule table evaluated top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<StyleRule>,
    fallback: StyleKind,
}

impl Default for RuleSet {
    fn default() -> Self {
        let rules = TITLE_SENTINELS
            .iter()
            .copied()
            .map(|sentinel| StyleRule::prefix(sentinel, StyleKind::Title))
            .chain(
                HEADING1_SENTINELS
                    .iter()
                    .copied()
                    .map(|sentinel| StyleRule::prefix(sentinel, StyleKind::Heading1)),
            )
            .chain(std::iter::once(StyleRule::wrapped(
                BOLD_MARKER,
                StyleKind::Heading2,
            )))
            .collect();

        Self {
            rules,
            fallback: StyleKind::Body,
        }
    }
}

impl RuleSet {
    /// Returns the rules in priority order.
    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// Classifies a trimmed section into a story element.
    pub fn classify(&self, section: &str) -> StoryElement {
        self.rules
            .iter()
            .find_map(|rule| {
                rule.matcher
                    .apply(section)
                    .map(|text| StoryElement::new(text, rule.style))
            })
            .unwrap_or_else(|| StoryElement::new(section, self.fallback))
    }
}
