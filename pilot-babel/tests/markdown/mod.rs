//! HTML → Markdown conversion tests

use crate::common::fixture;
use insta::assert_snapshot;
use pilot_babel::{convert, SourceFormat, TargetFormat};

fn to_markdown(html: &str) -> String {
    convert(html, SourceFormat::Html, TargetFormat::Markdown).unwrap()
}

#[test]
fn test_heading_and_paragraph() {
    assert_eq!(
        to_markdown("<h1>Title</h1><p>Hello <strong>world</strong></p>"),
        "# Title\n\nHello **world**"
    );
}

#[test]
fn test_entities_decoded() {
    assert_snapshot!(to_markdown("<p>a &lt; b &amp;&amp; c &gt; d</p>"), @"a < b && c > d");
}

#[test]
fn test_anchor_attribute_order() {
    assert_snapshot!(
        to_markdown(r#"<a class="ext" href="https://x.io">x</a>"#),
        @"[x](https://x.io)"
    );
}

#[test]
fn test_unknown_tags_stripped() {
    assert_snapshot!(
        to_markdown("<div><span>kept</span> <section>text</section></div>"),
        @"kept text"
    );
}

#[test]
fn test_launch_notes_fixture() {
    let out = to_markdown(&fixture("launch-notes.html"));

    for fragment in [
        "# Launch notes",
        "We shipped **version 2** today & it is *fast*.",
        "## What changed",
        "- Faster startup",
        "- New `--quiet` flag",
        "- See [the docs](https://example.com/docs)",
        "![diagram](https://example.com/d.png)",
        "```\ncargo install formatpilot\n```",
        "---",
        "Questions? Ask <here>.\nThanks!",
    ] {
        assert!(out.contains(fragment), "missing {fragment:?} in:\n{out}");
    }
    assert!(!out.contains("<article"));
    assert!(!out.contains("</li>"));
}

#[test]
fn test_round_trip_keeps_content_not_bytes() {
    // Ordered numbering is not recoverable: <li> always comes back as "- ".
    let md = "# Plan\n\n1. draft\n2. ship";
    let html = convert(md, SourceFormat::Markdown, TargetFormat::Html).unwrap();
    let back = to_markdown(&html);

    assert!(back.contains("# Plan"));
    assert!(back.contains("- draft"));
    assert!(back.contains("- ship"));
    assert_ne!(back, md);
}
