use std::fs;

use genpdf::PaperSize;
use whitepaper_pdf::fonts::FontSearch;
use whitepaper_pdf::style::{HorizontalAlignment, PageSettings, StyleSheet};
use whitepaper_pdf::{create_pdf, Document, Formatter, FormatterConfig, StyleKind};

const SAMPLE: &str = "Disclaimer\n\nThis is a test.\n\n**Important**\n\nRegular text here.";

fn fonts_available() -> bool {
    FontSearch::new().is_available()
}

fn skip(test: &str) {
    eprintln!(
        "Skipping {test}: LiberationSans fonts missing. Set WHITEPAPER_PDF_FONTS_DIR or install fonts-liberation."
    );
}

fn long_paper() -> String {
    let paragraph = "Liquid staking lets holders keep their tokens productive while \
                     delegating the operational work of running services to a staking \
                     processor that distributes rewards across every participating chain.";
    let mut text = String::from("Executive Summary\n\n");
    for chapter in ["Token Utility", "Architecture", "Security", "Roadmap", "Conclusion"] {
        text.push_str(chapter);
        text.push_str("\n\n**Overview**\n\n");
        for _ in 0..12 {
            text.push_str(paragraph);
            text.push_str("\n\n");
        }
    }
    text
}

#[test]
fn sample_story_matches_expected_styles() {
    let story = Formatter::default().build_story(&Document::new(SAMPLE));

    let styles: Vec<_> = story.elements().iter().map(|e| e.style()).collect();
    assert_eq!(
        styles,
        [
            StyleKind::Title,
            StyleKind::Body,
            StyleKind::Heading2,
            StyleKind::Body
        ]
    );
    assert_eq!(story.elements()[2].text(), "Important");
}

#[test]
fn bare_bold_markers_become_sub_headings() {
    let story = Formatter::default().build_story(&Document::new("**\n\n***\n\n*"));

    let elements: Vec<_> = story
        .elements()
        .iter()
        .map(|e| (e.style(), e.text()))
        .collect();
    assert_eq!(
        elements,
        [
            (StyleKind::Heading2, ""),
            (StyleKind::Heading2, "*"),
            (StyleKind::Body, "*")
        ]
    );
}

#[test]
fn every_non_empty_section_yields_one_element() {
    let text = long_paper();
    let expected = text.split("\n\n").filter(|s| !s.trim().is_empty()).count();
    let story = Formatter::default().build_story(&Document::new(text.as_str()));
    assert_eq!(story.len(), expected);
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("paper.pdf");

    let err = create_pdf(dir.path().join("missing.txt"), &output, FormatterConfig::new())
        .expect_err("missing input must fail");

    assert!(err.is_missing_input());
    assert!(!output.exists());
}

#[test]
fn invalid_utf8_input_is_a_generation_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("paper.txt");
    let output = dir.path().join("paper.pdf");
    fs::write(&input, [0xff, 0xfe, 0x00, 0x9f]).expect("write input");

    let err = create_pdf(&input, &output, FormatterConfig::new()).expect_err("bad utf-8");

    assert!(!err.is_missing_input());
    assert!(!output.exists());
}

#[test]
fn unusable_font_directory_reports_fonts_error() {
    if fonts_available() {
        skip("unusable_font_directory_reports_fonts_error");
        return;
    }

    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("paper.txt");
    let output = dir.path().join("paper.pdf");
    fs::write(&input, SAMPLE).expect("write input");

    let err = create_pdf(&input, &output, FormatterConfig::new()).expect_err("no fonts");

    assert!(matches!(err, whitepaper_pdf::Error::Fonts(_)));
    assert!(!output.exists());
}

#[test]
fn renders_sample_to_pdf() {
    if !fonts_available() {
        skip("renders_sample_to_pdf");
        return;
    }

    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("paper.txt");
    let output = dir.path().join("paper.pdf");
    fs::write(&input, SAMPLE).expect("write input");

    let written = create_pdf(&input, &output, FormatterConfig::new()).expect("render sample");

    assert_eq!(written, output);
    let bytes = fs::read(&output).expect("read output");
    assert!(bytes.starts_with(b"%PDF-"), "output should be a PDF file");
}

#[test]
fn renders_multi_page_document() {
    if !fonts_available() {
        skip("renders_multi_page_document");
        return;
    }

    let formatter = Formatter::default();
    let story = formatter.build_story(&Document::new(long_paper()));
    let short = formatter
        .render(formatter.build_story(&Document::new(SAMPLE)), "short")
        .expect("render short");
    let long = formatter.render(story, "long").expect("render long");

    assert!(long.starts_with(b"%PDF-"));
    assert!(long.len() > short.len());
}

#[test]
fn empty_input_still_produces_a_pdf() {
    if !fonts_available() {
        skip("empty_input_still_produces_a_pdf");
        return;
    }

    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("empty.txt");
    let output = dir.path().join("empty.pdf");
    fs::write(&input, "\n\n\n").expect("write input");

    create_pdf(&input, &output, FormatterConfig::new()).expect("render empty story");
    assert!(output.is_file());
}

#[test]
fn renders_with_custom_page_and_styles() {
    if !fonts_available() {
        skip("renders_with_custom_page_and_styles");
        return;
    }

    let mut styles = StyleSheet::default();
    styles.body = styles.body.with_alignment(HorizontalAlignment::Left);
    let config = FormatterConfig::new().with_styles(styles).with_page(
        PageSettings::default()
            .with_paper_size(PaperSize::Letter)
            .with_margin_pt(36.0),
    );

    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("paper.txt");
    let output = dir.path().join("paper.pdf");
    fs::write(&input, format!("{SAMPLE}\n\n**\n\n***")).expect("write input");

    create_pdf(&input, &output, config).expect("render with custom config");

    let bytes = fs::read(&output).expect("read output");
    assert!(bytes.starts_with(b"%PDF-"));
}
