//! Whitespace tokenizer
//!
//! Splits a line at whitespace. Punctuation is excluded from token
//! bodies unless the configuration keeps it; letters and digits are
//! never dropped.

use super::{is_punctuation, TokenizerConfig};

pub struct WhitespaceTokens {
    chars: Vec<char>,
    pos: usize,
    config: TokenizerConfig,
}

impl WhitespaceTokens {
    pub fn new(line: &str, config: TokenizerConfig) -> Self {
        Self {
            chars: line.chars().collect(),
            pos: 0,
            config,
        }
    }

    fn is_delimiter(&self, ch: char) -> bool {
        ch.is_whitespace()
    }

    /// A skip character is dropped from the token body without
    /// ending the token.
    fn is_skip(&self, ch: char) -> bool {
        !self.config.keep_punctuation && is_punctuation(ch)
    }

    /// Position of the next token start: the first character that is
    /// neither a delimiter nor skipped.
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

impl Iterator for WhitespaceTokens {
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

    fn tokens(line: &str, config: TokenizerConfig) -> Vec<String> {
        WhitespaceTokens::new(line, config).collect()
    }

    #[test]
    fn test_splits_at_whitespace_discarding_punctuation() {
        assert_eq!(
            tokens("hello, world!", TokenizerConfig::default()),
            vec!["hello", "world"]
        );
    }

    #[test]
    fn test_keeps_punctuation_when_configured() {
        let config = TokenizerConfig {
            keep_punctuation: true,
            ..TokenizerConfig::default()
        };
        assert_eq!(tokens("hello, world!", config), vec!["hello,", "world!"]);
    }

    #[test]
    fn test_inner_punctuation_is_skipped_not_split() {
        assert_eq!(
            tokens("don't stop-now", TokenizerConfig::default()),
            vec!["dont", "stopnow"]
        );
    }

    #[test]
    fn test_blank_and_punctuation_only_lines_yield_nothing() {
        assert!(tokens("", TokenizerConfig::default()).is_empty());
        assert!(tokens("   \t ", TokenizerConfig::default()).is_empty());
        assert!(tokens("!!! ... ???", TokenizerConfig::default()).is_empty());
    }

    #[test]
    fn test_digits_survive() {
        assert_eq!(
            tokens("win $1,000,000 now", TokenizerConfig::default()),
            vec!["win", "1000000", "now"]
        );
    }
}
