//! Markdown serialization (HTML → Markdown)
//!
//! Tag pairs are rewritten one rule at a time, case-insensitively and
//! non-greedily. Whatever markup is left afterwards is stripped, entities are
//! decoded, and whitespace is normalized.

use crate::common::attributes::Attributes;
use crate::common::entities::decode_entities;
use crate::common::text;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PRE_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<pre(?:\s[^>]*)?>\s*<code(?:\s[^>]*)?>(.*?)</code>\s*</pre\s*>").unwrap()
});
static PRE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<pre(?:\s[^>]*)?>(.*?)</pre\s*>").unwrap());
static HEADINGS: Lazy<Vec<Regex>> = Lazy::new(|| {
    (1..=6)
        .map(|level| {
            Regex::new(&format!(r"(?is)<h{level}(?:\s[^>]*)?>(.*?)</h{level}\s*>")).unwrap()
        })
        .collect()
});
static STRONG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(?:strong|b)(?:\s[^>]*)?>(.*?)</(?:strong|b)\s*>").unwrap()
});
static EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<(?:em|i)(?:\s[^>]*)?>(.*?)</(?:em|i)\s*>").unwrap());
static CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<code(?:\s[^>]*)?>(.*?)</code\s*>").unwrap());
static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<img(\s[^>]*)?/?>").unwrap());
static ANCHOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<a(\s[^>]*)?>(.*?)</a\s*>").unwrap());
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<li(?:\s[^>]*)?>(.*?)</li\s*>").unwrap());
static LIST_CONTAINER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?(?:ul|ol)(?:\s[^>]*)?>").unwrap());
static PARAGRAPH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<p(?:\s[^>]*)?>(.*?)</p\s*>").unwrap());
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<hr(?:\s[^>]*)?/?>").unwrap());
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Serialize an HTML fragment as Markdown
pub fn serialize_to_markdown(source: &str) -> String {
    let text = PRE_CODE.replace_all(source, fenced);
    let mut text = PRE.replace_all(&text, fenced).into_owned();

    for (index, heading) in HEADINGS.iter().enumerate() {
        let hashes = "#".repeat(index + 1);
        text = heading
            .replace_all(&text, |caps: &Captures| {
                format!("\n{hashes} {}\n\n", caps[1].trim())
            })
            .into_owned();
    }

    let text = STRONG.replace_all(&text, "**${1}**");
    let text = EMPHASIS.replace_all(&text, "*${1}*");
    let text = CODE.replace_all(&text, "`${1}`");
    let text = IMAGE.replace_all(&text, |caps: &Captures| {
        let attrs = Attributes::parse(caps.get(1).map_or("", |m| m.as_str()));
        match attrs.get("src") {
            Some(src) => format!("![{}]({src})", attrs.get("alt").unwrap_or_default()),
            None => String::new(),
        }
    });
    let text = ANCHOR.replace_all(&text, |caps: &Captures| {
        let attrs = Attributes::parse(caps.get(1).map_or("", |m| m.as_str()));
        match attrs.get("href") {
            Some(href) => format!("[{}]({href})", &caps[2]),
            None => caps[2].to_string(),
        }
    });
    let text = LIST_ITEM.replace_all(&text, |caps: &Captures| format!("- {}\n", caps[1].trim()));
    let text = LIST_CONTAINER.replace_all(&text, "");
    let text = PARAGRAPH.replace_all(&text, |caps: &Captures| format!("{}\n\n", caps[1].trim()));
    let text = LINE_BREAK.replace_all(&text, "\n");
    let text = RULE.replace_all(&text, "\n---\n");
    let text = ANY_TAG.replace_all(&text, "");

    let text = decode_entities(&text);
    text::tidy(&text)
}

fn fenced(caps: &Captures) -> String {
    let body = caps[1].trim_matches('\n');
    format!("\n```\n{body}\n```\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        assert_eq!(serialize_to_markdown("<h1>One</h1>"), "# One");
        assert_eq!(serialize_to_markdown("<h3 id=\"x\">Three</h3>"), "### Three");
        assert_eq!(serialize_to_markdown("<H6>Six</H6>"), "###### Six");
    }

    #[test]
    fn test_heading_then_paragraph() {
        assert_eq!(
            serialize_to_markdown("<h1>Title</h1><p>Hello <strong>world</strong></p>"),
            "# Title\n\nHello **world**"
        );
    }

    #[test]
    fn test_strong_and_b() {
        assert_eq!(serialize_to_markdown("<strong>a</strong> <b>b</b>"), "**a** **b**");
        assert_eq!(serialize_to_markdown("<STRONG>x</STRONG>"), "**x**");
    }

    #[test]
    fn test_em_and_i() {
        assert_eq!(serialize_to_markdown("<em>a</em> <i>b</i>"), "*a* *b*");
    }

    #[test]
    fn test_b_does_not_swallow_br() {
        assert_eq!(serialize_to_markdown("a<br>b<br/>c<br />d"), "a\nb\nc\nd");
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(serialize_to_markdown("run <code>ls</code>"), "run `ls`");
    }

    #[test]
    fn test_pre_code_block() {
        assert_eq!(
            serialize_to_markdown("<pre><code class=\"language-rust\">let x = 1;\nlet y = 2;</code></pre>"),
            "```\nlet x = 1;\nlet y = 2;\n```"
        );
    }

    #[test]
    fn test_anchor() {
        assert_eq!(
            serialize_to_markdown(r#"<a class="ext" href="https://x.io">site</a>"#),
            "[site](https://x.io)"
        );
        assert_eq!(serialize_to_markdown("<a name=\"top\">top</a>"), "top");
    }

    #[test]
    fn test_image_attribute_orders() {
        assert_eq!(serialize_to_markdown(r#"<img src="a.png" alt="A">"#), "![A](a.png)");
        assert_eq!(serialize_to_markdown(r#"<img alt="A" src="a.png" />"#), "![A](a.png)");
        assert_eq!(serialize_to_markdown(r#"<img src="a.png">"#), "![](a.png)");
        assert_eq!(serialize_to_markdown(r#"<img alt="orphan">"#), "");
    }

    #[test]
    fn test_lists_flattened() {
        assert_eq!(
            serialize_to_markdown("<ul><li>a</li><li>b</li></ul>"),
            "- a\n- b"
        );
        assert_eq!(
            serialize_to_markdown("<ol><li>one</li><li>two <em>2</em></li></ol>"),
            "- one\n- two *2*"
        );
    }

    #[test]
    fn test_rule() {
        assert_eq!(serialize_to_markdown("<p>a</p><hr/><p>b</p>"), "a\n\n---\nb");
    }

    #[test]
    fn test_unknown_tags_stripped() {
        assert_eq!(serialize_to_markdown("<div><span>hi</span></div>"), "hi");
        assert_eq!(serialize_to_markdown("<!-- note -->text"), "text");
    }

    #[test]
    fn test_entities_decoded_once() {
        assert_eq!(serialize_to_markdown("&amp;lt;"), "&lt;");
        assert_eq!(
            serialize_to_markdown("<p>a &lt; b &amp;&amp; &quot;c&quot; &#39;d&#39;</p>"),
            "a < b && \"c\" 'd'"
        );
    }

    #[test]
    fn test_whitespace_cleanup() {
        assert_eq!(
            serialize_to_markdown("<p>a    b</p>\n\n\n\n<p>c</p>"),
            "a b\n\nc"
        );
    }
}
