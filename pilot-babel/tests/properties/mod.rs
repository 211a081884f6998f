//! Property tests over generated input

use pilot_babel::{convert, FormatError, SourceFormat, TargetFormat};
use proptest::prelude::*;

proptest! {
    #[test]
    fn markdown_to_html_accepts_any_nonblank_text(text in "\\PC{1,200}") {
        prop_assume!(!text.trim().is_empty());
        prop_assert!(convert(&text, SourceFormat::Markdown, TargetFormat::Html).is_ok());
    }

    #[test]
    fn blank_text_is_always_rejected(text in "[ \\t\\n]{0,20}") {
        for (from, to) in [
            (SourceFormat::Markdown, TargetFormat::LinkedIn),
            (SourceFormat::Markdown, TargetFormat::Html),
            (SourceFormat::Html, TargetFormat::Markdown),
        ] {
            prop_assert_eq!(convert(&text, from, to), Err(FormatError::EmptyInput));
        }
    }

    #[test]
    fn linkedin_warns_only_past_the_limit(length in 2900usize..3100) {
        let text = "x".repeat(length);
        let out = convert(&text, SourceFormat::Markdown, TargetFormat::LinkedIn).unwrap();
        prop_assert_eq!(out.contains("Warning"), length > 3000);
    }

    #[test]
    fn ordered_items_are_renumbered(
        items in prop::collection::vec((0u16..500, "[a-z]{1,8}"), 1..12)
    ) {
        let md = items
            .iter()
            .map(|(n, word)| format!("{n}. {word}"))
            .collect::<Vec<_>>()
            .join("\n");
        let expected = items
            .iter()
            .enumerate()
            .map(|(i, (_, word))| format!("{}. {word}", i + 1))
            .collect::<Vec<_>>()
            .join("\n");
        let out = convert(&md, SourceFormat::Markdown, TargetFormat::LinkedIn).unwrap();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn unordered_items_share_one_list(words in prop::collection::vec("[a-z]{1,8}", 1..12)) {
        let md = words.iter().map(|w| format!("- {w}")).collect::<Vec<_>>().join("\n");
        let out = convert(&md, SourceFormat::Markdown, TargetFormat::Html).unwrap();
        prop_assert_eq!(out.matches("<ul>").count(), 1);
        prop_assert_eq!(out.matches("</ul>").count(), 1);
        prop_assert_eq!(out.matches("<li>").count(), words.len());
    }

    #[test]
    fn known_tags_never_survive(
        blocks in prop::collection::vec(
            (prop::sample::select(vec!["p", "b", "strong", "em", "i", "li", "h2", "div"]), "[a-z ]{1,16}"),
            1..8
        )
    ) {
        let html: String = blocks
            .iter()
            .map(|(tag, body)| format!("<{tag}>{body}</{tag}>"))
            .collect();
        let out = convert(&html, SourceFormat::Html, TargetFormat::Markdown).unwrap();
        prop_assert!(!out.contains('<'), "tag left in {:?}", out);
    }
}
