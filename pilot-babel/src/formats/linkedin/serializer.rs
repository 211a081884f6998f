//! LinkedIn plain-text serialization (Markdown → LinkedIn)
//!
//! The target renders no markup, so structure is expressed with characters:
//! bold becomes capitals, list markers become bullets, links keep their URL in
//! parentheses. Rules run in a fixed order; later rules rely on the line shapes
//! left by earlier ones.

use super::emoji;
use super::rules::{BoldStyle, LinkedInOptions};
use crate::common::text;
use once_cell::sync::Lazy;
use regex::{Captures, NoExpand, Regex};
use tracing::warn;

static FENCED_BACKTICKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?ms)^```.*?^```[ \t]*$").unwrap());
static FENCED_TILDES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?ms)^~~~.*?^~~~[ \t]*$").unwrap());
static HEADING_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{1,6}[ \t]+").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\s][^*\n]*?)\*").unwrap());
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").unwrap());
static UNORDERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*[-*+][ \t]+").unwrap());
static ORDERED_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]*\d+\.[ \t]+").unwrap());
static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)\s]+)\)").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").unwrap());
static HORIZONTAL_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*(?:-{3,}|_{3,}|\*{3,})[ \t]*$").unwrap());
static TABLE_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[|\s:-]+$").unwrap());

/// Serialize Markdown source as LinkedIn-ready plain text
pub fn serialize_to_linkedin(source: &str, options: &LinkedInOptions) -> String {
    // Fences and rules go first: nothing inside a block is rewritten before it is
    // dropped, and `*****` must not reach the bold rule.
    let result = FENCED_BACKTICKS.replace_all(source, "");
    let result = FENCED_TILDES.replace_all(&result, "");
    let result = HORIZONTAL_RULE.replace_all(&result, "");

    let result = HEADING_MARKER.replace_all(&result, "");
    let result = render_bold(&result, options.bold_style);
    let result = ITALIC.replace_all(&result, "${1}");
    let result = INLINE_CODE.replace_all(&result, "${1}");
    let result = UNORDERED_MARKER.replace_all(&result, NoExpand(&options.bullet));
    let result = renumber_ordered_items(&result);
    let result = IMAGE.replace_all(&result, |caps: &Captures| {
        if caps[1].is_empty() {
            format!("({})", &caps[2])
        } else {
            format!("{} ({})", &caps[1], &caps[2])
        }
    });
    let result = LINK.replace_all(&result, "${1} (${2})");

    let mut result = result.into_owned();
    if options.flatten_tables {
        result = flatten_tables(&result);
    }
    if options.emoji_shortcodes {
        result = emoji::emojize(&result);
    }

    let mut result = text::tidy(&result);
    if options.word_counts {
        result = annotate_word_counts(&result);
    }

    let length = result.chars().count();
    if length > options.char_limit {
        warn!(length, limit = options.char_limit, "LinkedIn text exceeds length limit");
        result.push_str(&length_warning(length, options.char_limit));
    }

    result
}

/// Advisory line appended to over-long results.
pub fn length_warning(length: usize, limit: usize) -> String {
    format!(
        "\n\n⚠️ Warning: this text has {length} characters and exceeds LinkedIn's \
         {limit}-character limit; it may be truncated when posted."
    )
}

fn render_bold(text: &str, style: BoldStyle) -> String {
    match style {
        BoldStyle::Uppercase => BOLD
            .replace_all(text, |caps: &Captures| caps[1].to_uppercase())
            .into_owned(),
        BoldStyle::Plain => BOLD.replace_all(text, "${1}").into_owned(),
    }
}

/// Number ordered items by how many ordered lines precede them, ignoring the written numbers.
fn renumber_ordered_items(text: &str) -> String {
    let mut seen = 0usize;
    ORDERED_MARKER
        .replace_all(text, |_: &Captures| {
            seen += 1;
            format!("{seen}. ")
        })
        .into_owned()
}

/// Rewrite pipe tables as one ` | `-joined line per row, dropping the separator row.
///
/// A run of `|`-delimited lines only counts as a table when its second line is a
/// separator; other runs are left as written.
fn flatten_tables(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let start = i;
        while i < lines.len() && is_table_row(lines[i]) {
            i += 1;
        }

        if i == start {
            out.push(lines[i].to_string());
            i += 1;
            continue;
        }

        let run = &lines[start..i];
        let is_table = run.len() >= 2 && is_separator_row(run[1]);
        for line in run {
            if !is_table {
                out.push(line.to_string());
            } else if !is_separator_row(line) {
                out.push(join_cells(line));
            }
        }
    }

    out.join("\n")
}

fn is_table_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 2 && trimmed.starts_with('|') && trimmed.ends_with('|')
}

fn is_separator_row(line: &str) -> bool {
    TABLE_SEPARATOR.is_match(line.trim()) && line.contains('-')
}

fn join_cells(line: &str) -> String {
    line.trim()
        .trim_matches('|')
        .split('|')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" | ")
}

fn annotate_word_counts(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                let words = line.split_whitespace().count();
                format!("[{words} words] {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
