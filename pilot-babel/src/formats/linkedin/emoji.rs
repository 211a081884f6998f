//! `:alias:` shortcode replacement.
//!
//! Aliases are the GitHub/gemoji set shipped with the `emojis` crate; anything
//! else between colons (timestamps, `std::` paths, unknown names) is left untouched.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SHORTCODE: Lazy<Regex> = Lazy::new(|| Regex::new(r":([a-z0-9_+\-]+):").unwrap());

/// Look up the emoji for a shortcode alias (without colons).
pub fn lookup(alias: &str) -> Option<&'static str> {
    emojis::get_by_shortcode(alias).map(|emoji| emoji.as_str())
}

/// Replace every known `:alias:` in `text`.
pub fn emojize(text: &str) -> String {
    SHORTCODE
        .replace_all(text, |caps: &Captures| match lookup(&caps[1]) {
            Some(emoji) => emoji.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
