use serde::{Deserialize, Serialize};

/// Practical post length on LinkedIn, in characters.
pub const LINKEDIN_CHAR_LIMIT: usize = 3000;

/// Bullet prefix used for unordered list items.
pub const DEFAULT_BULLET: &str = "• ";

/// How `**bold**` spans are rendered in plain text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoldStyle {
    /// Upper-case the enclosed text
    Uppercase,
    /// Drop the markers and keep the text as written
    Plain,
}

/// Configuration for the LinkedIn plain-text serializer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedInOptions {
    /// Results longer than this get an advisory warning appended (never truncated)
    pub char_limit: usize,

    pub bold_style: BoldStyle,

    /// Prefix replacing `-`, `*` and `+` list markers
    pub bullet: String,

    /// Whether pipe tables are flattened into ` | `-joined rows
    pub flatten_tables: bool,

    /// Whether `:alias:` shortcodes are replaced by emoji
    pub emoji_shortcodes: bool,

    /// Prefix every non-blank line with its word count
    pub word_counts: bool,
}

impl Default for LinkedInOptions {
    fn default() -> Self {
        Self {
            char_limit: LINKEDIN_CHAR_LIMIT,
            bold_style: BoldStyle::Uppercase,
            bullet: DEFAULT_BULLET.to_string(),
            flatten_tables: true,
            emoji_shortcodes: true,
            word_counts: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = LinkedInOptions::default();
        assert_eq!(options.char_limit, 3000);
        assert_eq!(options.bold_style, BoldStyle::Uppercase);
        assert_eq!(options.bullet, "• ");
        assert!(!options.word_counts);
    }
}
