//! Whitespace normalization shared by the plain-text targets.

use once_cell::sync::Lazy;
use regex::Regex;

static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
static HORIZONTAL_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());

/// Collapse three or more consecutive newlines into exactly one blank line.
pub fn collapse_blank_lines(text: &str) -> String {
    EXCESS_NEWLINES.replace_all(text, "\n\n").into_owned()
}

/// Collapse runs of spaces and tabs into a single space.
pub fn collapse_horizontal_whitespace(text: &str) -> String {
    HORIZONTAL_RUNS.replace_all(text, " ").into_owned()
}

/// Blank-line collapse, horizontal collapse, then trim, in that order.
pub fn tidy(text: &str) -> String {
    let text = collapse_blank_lines(text);
    let text = collapse_horizontal_whitespace(&text);
    text.trim().to_string()
}
