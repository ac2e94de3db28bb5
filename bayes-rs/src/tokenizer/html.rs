//! HTML-aware tokenizer
//!
//! Splits at whitespace and additionally at the punctuation that
//! typically carries HTML tag structure, so that tag-heavy spam
//! bodies break into the words inside the markup instead of yielding
//! whole tags as tokens.

use super::{is_punctuation, TokenizerConfig};

/// Punctuation treated as a delimiter inside HTML-ish text.
pub const HTML_MARKERS: &str = "<>=.\":/_?@";

pub struct HtmlTokens {
    chars: Vec<char>,
    pos: usize,
    config: TokenizerConfig,
}

impl HtmlTokens {
    pub fn new(line: &str, config: TokenizerConfig) -> Self {
        Self {
            chars: line.chars().collect(),
            pos: 0,
            config,
        }
    }

    fn is_delimiter(&self, ch: char) -> bool {
        ch.is_whitespace() || HTML_MARKERS.contains(ch)
    }

    fn is_skip(&self, ch: char) -> bool {
        !self.config.keep_punctuation && is_punctuation(ch)
    }

    fn find_next_token(&self) -> Option<usize> {
        let mut loc = self.pos;
        while loc < self.chars.len() {
            let ch = self.chars[loc];
            if !self.is_delimiter(ch) && !self.is_skip(ch) {
                return Some(loc);
            }
            loc += 1;
        }
        None
    }
}

impl Iterator for HtmlTokens {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.pos = self.find_next_token()?;

        let mut token = String::new();
        while self.pos < self.chars.len() {
            let ch = self.chars[self.pos];
            self.pos += 1;
            if self.is_delimiter(ch) {
                break;
            }
            if self.is_skip(ch) {
                continue;
            }
            token.push(ch);
        }

        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<String> {
        HtmlTokens::new(line, TokenizerConfig::default()).collect()
    }

    #[test]
    fn test_splits_inside_tags() {
        assert_eq!(
            tokens(r#"<a href="http://spam.example">Click here"#),
            vec!["a", "href", "http", "spam", "example", "Click", "here"]
        );
    }

    #[test]
    fn test_marker_set_breaks_tokens() {
        assert_eq!(tokens("user@example.com"), vec!["user", "example", "com"]);
        assert_eq!(tokens("width=120"), vec!["width", "120"]);
    }

    #[test]
    fn test_residual_punctuation_still_skipped() {
        // Comma is not in the marker set: dropped from the body, not
        // a delimiter.
        assert_eq!(tokens("buy, now!"), vec!["buy", "now"]);
    }

    #[test]
    fn test_plain_text_matches_whitespace_behavior() {
        assert_eq!(tokens("hello world"), vec!["hello", "world"]);
    }
}
