//! Minimal attribute scanner for start-tag bodies.
//!
//! Tag rewrite rules capture everything between the tag name and the closing `>`
//! and hand it here, so attribute order never matters to a rule. Values are
//! returned raw; entity decoding happens once, at the end of the HTML pass.

/// Parsed attributes of a single start tag, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pairs: Vec<(String, String)>,
}

impl Attributes {
    /// Scan `name="value"`, `name='value'`, `name=value` and bare `name` forms.
    ///
    /// Names are lower-cased. A trailing self-closing `/` is ignored.
    pub fn parse(source: &str) -> Self {
        let mut pairs = Vec::new();
        let mut rest = source.trim_start();

        while !rest.is_empty() {
            let name_end = rest
                .find(|c: char| c.is_whitespace() || c == '=' || c == '/')
                .unwrap_or(rest.len());

            if name_end == 0 {
                // Stray '/' or '='
                rest = rest[1..].trim_start();
                continue;
            }

            let name = rest[..name_end].to_ascii_lowercase();
            rest = rest[name_end..].trim_start();

            let value = if let Some(after_eq) = rest.strip_prefix('=') {
                let after_eq = after_eq.trim_start();
                let (value, remaining) = read_value(after_eq);
                rest = remaining;
                value
            } else {
                String::new()
            };

            pairs.push((name, value));
            rest = rest.trim_start();
        }

        Attributes { pairs }
    }

    /// First value for `name` (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

fn read_value(input: &str) -> (String, &str) {
    let mut chars = input.chars();
    match chars.next() {
        Some(quote @ ('"' | '\'')) => {
            let body = &input[1..];
            match body.find(quote) {
                Some(end) => (body[..end].to_string(), &body[end + 1..]),
                // Unterminated quote: take the remainder
                None => (body.to_string(), ""),
            }
        }
        Some(_) => {
            let end = input
                .find(|c: char| c.is_whitespace() || c == '>')
                .unwrap_or(input.len());
            let value = input[..end].trim_end_matches('/');
            (value.to_string(), &input[end..])
        }
        None => (String::new(), ""),
    }
}
