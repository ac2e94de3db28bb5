//! Fixed-width n-gram tokenizer
//!
//! Ignores word boundaries entirely: consumes the line left to
//! right, drops skip characters, and emits every run of exactly
//! `ngram_width` content characters. The final token of a line may
//! come up short; the caller-side wraparound rule in
//! [`crate::message`] decides what happens to it.

use super::TokenizerConfig;

pub struct NgramTokens {
    chars: Vec<char>,
    pos: usize,
    width: usize,
    config: TokenizerConfig,
}

impl NgramTokens {
    pub fn new(line: &str, config: TokenizerConfig) -> Self {
        Self {
            chars: line.chars().collect(),
            pos: 0,
            width: config.ngram_width as usize,
            config,
        }
    }

    /// Letters and digits are never skipped; whitespace and
    /// punctuation fall to their keep flags.
    fn is_skip(&self, ch: char) -> bool {
        if ch.is_alphanumeric() {
            return false;
        }
        if ch.is_whitespace() {
            return !self.config.keep_whitespace;
        }
        !self.config.keep_punctuation
    }
}

impl Iterator for NgramTokens {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        // More tokens exist exactly while the cursor has not reached
        // the end of the line. A width of 0 never reaches here in a
        // validated pipeline; bail out rather than spin.
        if self.width == 0 || self.pos >= self.chars.len() {
            return None;
        }

        let mut token = String::new();
        let mut count = 0;
        while self.pos < self.chars.len() && count < self.width {
            let ch = self.chars[self.pos];
            self.pos += 1;
            if self.is_skip(ch) {
                continue;
            }
            token.push(ch);
            count += 1;
        }

        // Possibly shorter than `width` at line end, possibly empty
        // when only skip characters remained.
        Some(token)
    }
}
