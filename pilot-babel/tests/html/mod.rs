//! Markdown → HTML conversion tests

use crate::common::fixture;
use insta::assert_snapshot;
use pilot_babel::{convert, SourceFormat, TargetFormat};

fn to_html(md: &str) -> String {
    convert(md, SourceFormat::Markdown, TargetFormat::Html).unwrap()
}

#[test]
fn test_list_then_paragraph() {
    assert_eq!(
        to_html("- one\n- two\n\nparagraph"),
        "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n\n<p>paragraph</p>"
    );
}

#[test]
fn test_link() {
    assert_snapshot!(
        to_html("[x](http://a.b)"),
        @r#"<p><a href="http://a.b">x</a></p>"#
    );
}

#[test]
fn test_ordered_list_switches_to_unordered() {
    assert_eq!(
        to_html("1. a\n2. b\n- c"),
        "<ol>\n<li>a</li>\n<li>b</li>\n</ol>\n<ul>\n<li>c</li>\n</ul>"
    );
}

#[test]
fn test_code_is_not_rewritten() {
    assert_snapshot!(
        to_html("use `**ptr` and `a<b`"),
        @"<p>use <code>**ptr</code> and <code>a&lt;b</code></p>"
    );
}

#[test]
fn test_launch_notes_fixture() {
    let out = to_html(&fixture("launch-notes.md"));

    let expected_in_order = [
        "<h1>Launch notes</h1>",
        "<p>We shipped <strong>version 2</strong> today :rocket:</p>",
        "<h2>What changed</h2>",
        "<ul>",
        "<li>Faster <em>startup</em></li>",
        "<li>New <code>--quiet</code> flag</li>",
        r#"<li>See <a href="https://example.com/docs">the docs</a></li>"#,
        "</ul>",
        "<ol>",
        "<li>Install</li>",
        "<li>Configure</li>",
        "<li>Run</li>",
        "</ol>",
        r#"<pre><code class="language-bash">cargo install formatpilot</code></pre>"#,
        "<hr />",
        "<p>Thanks!</p>",
    ];

    let mut cursor = 0;
    for fragment in expected_in_order {
        let found = out[cursor..]
            .find(fragment)
            .unwrap_or_else(|| panic!("missing {fragment:?} after byte {cursor} in:\n{out}"));
        cursor += found + fragment.len();
    }

    assert!(!out.contains("<p><pre>"));
    assert!(!out.contains("<p><h"));
    assert!(!out.contains('\u{E000}'));
    assert!(!out.contains('\u{E002}'));
}

#[test]
fn test_no_match_still_wraps_paragraph() {
    assert_snapshot!(to_html("just words"), @"<p>just words</p>");
}
