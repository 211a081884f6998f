//! Markdown → LinkedIn conversion tests

use crate::common::fixture;
use insta::assert_snapshot;
use pilot_babel::formats::linkedin::serializer::length_warning;
use pilot_babel::{
    convert, convert_with_options, BoldStyle, ConvertOptions, FormatError, SourceFormat,
    TargetFormat,
};

fn to_linkedin(md: &str) -> String {
    convert(md, SourceFormat::Markdown, TargetFormat::LinkedIn).unwrap()
}

#[test]
fn test_title_bold_italic_code() {
    let out = to_linkedin("# Title\n\n**Bold** and *italic* and `code`");

    assert!(out.contains("Title"));
    assert!(out.contains("BOLD"));
    assert!(out.contains("and italic and code"));
    assert!(!out.contains('#'));
    assert!(!out.contains('*'));
    assert!(!out.contains('`'));
    assert_eq!(out, "Title\n\nBOLD and italic and code");
}

#[test]
fn test_blank_input_rejected() {
    for input in ["", "   "] {
        assert_eq!(
            convert(input, SourceFormat::Markdown, TargetFormat::LinkedIn),
            Err(FormatError::EmptyInput)
        );
    }
}

#[test]
fn test_html_source_rejected() {
    let err = convert("<p>hi</p>", SourceFormat::Html, TargetFormat::LinkedIn).unwrap_err();
    assert!(matches!(err, FormatError::UnsupportedConversion { .. }));
    assert!(err.to_string().contains("'html'"));
    assert!(err.to_string().contains("'linkedin'"));
}

#[test]
fn test_warning_only_past_limit() {
    let exact = "x".repeat(3000);
    assert_eq!(to_linkedin(&exact), exact);

    let long = "x".repeat(3200);
    let out = to_linkedin(&long);
    assert_eq!(out, format!("{long}{}", length_warning(3200, 3000)));
}

#[test]
fn test_limit_measured_after_conversion() {
    // 3000 characters once the bold markers are gone
    let md = format!("**{}**", "y".repeat(3000));
    assert_eq!(to_linkedin(&md), "Y".repeat(3000));
}

#[test]
fn test_ordered_items_renumbered_from_one() {
    let out = to_linkedin("5. alpha\n7. beta\n9. gamma");
    assert_eq!(out, "1. alpha\n2. beta\n3. gamma");
}

#[test]
fn test_link_and_image_keep_targets() {
    assert_snapshot!(
        to_linkedin("[site](https://a.io) ![logo](https://a.io/l.png)"),
        @"site (https://a.io) logo (https://a.io/l.png)"
    );
}

#[test]
fn test_launch_notes_fixture() {
    let out = to_linkedin(&fixture("launch-notes.md"));
    assert_eq!(
        out,
        "Launch notes\n\n\
         We shipped VERSION 2 today 🚀\n\n\
         What changed\n\n\
         • Faster startup\n\
         • New --quiet flag\n\
         • See the docs (https://example.com/docs)\n\n\
         1. Install\n\
         2. Configure\n\
         3. Run\n\n\
         Thanks!"
    );
}

#[test]
fn test_options_change_output() {
    let mut options = ConvertOptions::default();
    options.linkedin.bold_style = BoldStyle::Plain;
    options.linkedin.bullet = "→ ".to_string();
    options.linkedin.char_limit = 20;

    let out = convert_with_options(
        "**Note**\n\n- first point\n- second point",
        SourceFormat::Markdown,
        TargetFormat::LinkedIn,
        &options,
    )
    .unwrap();

    assert!(out.starts_with("Note\n\n→ first point\n→ second point"));
    assert!(out.contains("20-character limit"));
}
