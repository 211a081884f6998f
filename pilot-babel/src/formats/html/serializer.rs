//! HTML serialization (Markdown → HTML)
//!
//! Inline rules are pattern rewrites over the whole text. Block structure
//! (lists and paragraphs) comes from a single line scan, since Markdown marks
//! list membership per line with no explicit open or close.
//!
//! Code and horizontal rules are lifted out before any rule runs and put back at
//! the end, so emphasis and link rules never see them. Placeholder characters
//! already present in the source are lifted too, so they come back unchanged.

use crate::common::entities::{escape_attribute, escape_text};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Marks an inline code placeholder: `\u{E000}<index>\u{E001}`
const INLINE_OPEN: char = '\u{E000}';
const INLINE_CLOSE: char = '\u{E001}';
/// Marks a block placeholder (code block or rule), which always occupies a line of its own
const BLOCK_OPEN: char = '\u{E002}';

static SENTINEL: Lazy<Regex> = Lazy::new(|| Regex::new("[\u{E000}-\u{E002}]").unwrap());
/// A fence closes only on a line opening with the same delimiter.
static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ms)^(?:```([A-Za-z0-9_+\-]*)[^\n]*\n(.*?)^```|~~~([A-Za-z0-9_+\-]*)[^\n]*\n(.*?)^~~~)[ \t]*$",
    )
    .unwrap()
});
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").unwrap());
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new("[\u{E000}\u{E002}]([0-9]+)\u{E001}").unwrap());

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(#{1,6}) (.+)$").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\s][^*\n]*?)\*").unwrap());
static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)\s]+)\)").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").unwrap());

static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[-*+]\s+(.*)$").unwrap());
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\.\s+(.*)$").unwrap());
static HEADING_TAG_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<h[1-6]>").unwrap());
static HORIZONTAL_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*(?:-{3,}|\*{3,}|_{3,})[ \t]*$").unwrap());

/// Serialize Markdown source to an HTML fragment
pub fn serialize_to_html(source: &str) -> String {
    let mut shelf = CodeShelf::default();
    let text = shelf.lift(source);

    let text = HEADING.replace_all(&text, |caps: &Captures| {
        let level = caps[1].len();
        format!("<h{level}>{}</h{level}>", caps[2].trim_end())
    });
    let text = BOLD.replace_all(&text, "<strong>${1}</strong>");
    let text = ITALIC.replace_all(&text, "<em>${1}</em>");
    let text = IMAGE.replace_all(&text, |caps: &Captures| {
        format!(
            r#"<img src="{}" alt="{}" />"#,
            escape_attribute(&caps[2]),
            escape_attribute(&caps[1])
        )
    });
    let text = LINK.replace_all(&text, |caps: &Captures| {
        format!(r#"<a href="{}">{}</a>"#, escape_attribute(&caps[2]), &caps[1])
    });

    let text = wrap_blocks(&text);

    shelf.restore(&text).trim().to_string()
}

/// Rendered code fragments, indexed by placeholder number.
#[derive(Default)]
struct CodeShelf {
    fragments: Vec<String>,
}

impl CodeShelf {
    fn lift(&mut self, source: &str) -> String {
        let text = SENTINEL.replace_all(source, |caps: &Captures| {
            self.store(INLINE_OPEN, caps[0].to_string())
        });
        let text = FENCED_BLOCK.replace_all(&text, |caps: &Captures| {
            let lang = caps.get(1).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
            let body = caps.get(2).or_else(|| caps.get(4)).map_or("", |m| m.as_str());
            let body = escape_text(body.strip_suffix('\n').unwrap_or(body));
            let rendered = match lang {
                "" => format!("<pre><code>{body}</code></pre>"),
                lang => format!(r#"<pre><code class="language-{lang}">{body}</code></pre>"#),
            };
            self.store(BLOCK_OPEN, rendered)
        });
        let text = HORIZONTAL_RULE.replace_all(&text, |_: &Captures| {
            self.store(BLOCK_OPEN, "<hr />".to_string())
        });
        INLINE_CODE
            .replace_all(&text, |caps: &Captures| {
                let rendered = format!("<code>{}</code>", escape_text(&caps[1]));
                self.store(INLINE_OPEN, rendered)
            })
            .into_owned()
    }

    fn store(&mut self, open: char, rendered: String) -> String {
        let index = self.fragments.len();
        self.fragments.push(rendered);
        format!("{open}{index}{INLINE_CLOSE}")
    }

    fn restore(&self, text: &str) -> String {
        PLACEHOLDER
            .replace_all(text, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.fragments.get(index))
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

/// Line scan that opens and closes list containers and wraps loose lines in paragraphs.
fn wrap_blocks(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut in_unordered = false;
    let mut in_ordered = false;

    for line in text.lines() {
        if let Some(caps) = UNORDERED_ITEM.captures(line) {
            if in_ordered {
                out.push("</ol>".to_string());
                in_ordered = false;
            }
            if !in_unordered {
                out.push("<ul>".to_string());
                in_unordered = true;
            }
            out.push(format!("<li>{}</li>", &caps[1]));
            continue;
        }

        if let Some(caps) = ORDERED_ITEM.captures(line) {
            if in_unordered {
                out.push("</ul>".to_string());
                in_unordered = false;
            }
            if !in_ordered {
                out.push("<ol>".to_string());
                in_ordered = true;
            }
            out.push(format!("<li>{}</li>", &caps[1]));
            continue;
        }

        if in_unordered {
            out.push("</ul>".to_string());
            in_unordered = false;
        }
        if in_ordered {
            out.push("</ol>".to_string());
            in_ordered = false;
        }

        if line.trim().is_empty() || is_block_line(line) {
            out.push(line.to_string());
        } else {
            out.push(format!("<p>{}</p>", line.trim()));
        }
    }

    if in_unordered {
        out.push("</ul>".to_string());
    }
    if in_ordered {
        out.push("</ol>".to_string());
    }

    out.join("\n")
}

/// Lines already rendered as block elements are never wrapped in `<p>`.
fn is_block_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with(BLOCK_OPEN) || HEADING_TAG_LINE.is_match(trimmed)
}
