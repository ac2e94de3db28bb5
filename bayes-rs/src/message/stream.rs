//! Token stream driver
//!
//! Pulls lines from a source, runs them through the line classifier
//! and the configured tokenizer, and yields one flat event stream of
//! message boundaries and tokens. Owns the wraparound rule for
//! fixed-width tokens split across line boundaries: a short final
//! n-gram is withheld and prepended literally to the next tokenized
//! line; if the input ends first it is dropped.

use super::classifier::{LineAction, LineClassifier, SourceMode};
use crate::error::Result;
use crate::io::LineSource;
use crate::tokenizer::{LineTokens, TokenizerConfig, TokenizerKind};

/// One event of the stream.
#[derive(Debug, PartialEq, Eq)]
pub enum TokenEvent {
    /// A postmark was crossed: everything that follows belongs to a
    /// new message.
    MessageStart,
    /// An accepted, non-empty token.
    Token(String),
}

pub struct TokenStream<S> {
    source: S,
    classifier: LineClassifier,
    kind: TokenizerKind,
    config: TokenizerConfig,
    tokens: Option<LineTokens>,
    /// Wraparound fragment awaiting the next tokenized line.
    pending: String,
    /// Token width that triggers wraparound; 0 disables the rule.
    wrap_width: usize,
    lines_read: u64,
}

impl<S: LineSource> TokenStream<S> {
    /// Builds a stream over `source`. Fails fast on an invalid
    /// tokenizer configuration, before any input is consumed.
    pub fn new(
        source: S,
        kind: TokenizerKind,
        config: TokenizerConfig,
        mode: SourceMode,
    ) -> Result<Self> {
        kind.validate(&config)?;
        let wrap_width = if kind.fixed_width() {
            config.ngram_width as usize
        } else {
            0
        };
        Ok(Self {
            source,
            classifier: LineClassifier::new(mode),
            kind,
            config,
            tokens: None,
            pending: String::new(),
            wrap_width,
            lines_read: 0,
        })
    }

    /// Lines pulled from the source so far.
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }
}

impl<S: LineSource> Iterator for TokenStream<S> {
    type Item = Result<TokenEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(tokens) = self.tokens.as_mut() {
                while let Some(token) = tokens.next() {
                    // Highly selective tokenizers can produce empty
                    // tokens; they carry no signal.
                    if token.is_empty() {
                        continue;
                    }
                    if self.wrap_width > 0 && token.chars().count() != self.wrap_width {
                        // Line ended inside an n-gram: hold the
                        // fragment for the next line.
                        self.pending = token;
                        break;
                    }
                    return Some(Ok(TokenEvent::Token(token)));
                }
                self.tokens = None;
            }

            let line = match self.source.read_line() {
                Ok(Some(line)) => line,
                // End of input: a pending fragment never reached
                // full width and is dropped.
                Ok(None) => return None,
                Err(e) => return Some(Err(e)),
            };
            self.lines_read += 1;

            match self.classifier.classify(&line) {
                LineAction::BeginMessage => return Some(Ok(TokenEvent::MessageStart)),
                LineAction::Discard => {}
                LineAction::Tokenize(text) => {
                    self.tokens = Some(if self.pending.is_empty() {
                        self.kind.tokenize(text, self.config)
                    } else {
                        let mut combined = std::mem::take(&mut self.pending);
                        combined.push_str(text);
                        self.kind.tokenize(&combined, self.config)
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::StringSource;

    fn events(text: &str, kind: TokenizerKind, config: TokenizerConfig, mode: SourceMode) -> Vec<TokenEvent> {
        TokenStream::new(StringSource::new(text), kind, config, mode)
            .unwrap()
            .map(|event| event.unwrap())
            .collect()
    }

    fn tokens(text: &str, kind: TokenizerKind, config: TokenizerConfig, mode: SourceMode) -> Vec<String> {
        events(text, kind, config, mode)
            .into_iter()
            .filter_map(|event| match event {
                TokenEvent::Token(token) => Some(token),
                TokenEvent::MessageStart => None,
            })
            .collect()
    }

    #[test]
    fn test_mailbox_emits_message_starts_and_header_tokens() {
        let mbox = "From a@example.com Fri Jan 09 04:11:20 2004\n\
                    Subject: hello world\n\
                    Received: by mx.example.com\n\
                    \n\
                    pay attention\n\
                    \n\
                    From b@example.com Sat Jan 10 09:00:00 2004\n\
                    Subject: again\n\
                    \n\
                    more text\n";
        let got = events(
            mbox,
            TokenizerKind::Whitespace,
            TokenizerConfig::default(),
            SourceMode::Mailbox,
        );
        let expected = vec![
            TokenEvent::MessageStart,
            TokenEvent::Token("hello".into()),
            TokenEvent::Token("world".into()),
            TokenEvent::Token("pay".into()),
            TokenEvent::Token("attention".into()),
            TokenEvent::MessageStart,
            TokenEvent::Token("again".into()),
            TokenEvent::Token("more".into()),
            TokenEvent::Token("text".into()),
        ];
        assert_eq!(got, expected);
    }

    #[test]
    fn test_ngram_wraparound_across_lines() {
        // "abcde" leaves the fragment "de"; prepended to "fgh" it
        // tokenizes as "def" + "gh", and the trailing "gh" is
        // dropped at end of input.
        let text = "\nabcde\nfgh";
        let got = tokens(
            text,
            TokenizerKind::FixedWidthNgram,
            TokenizerConfig::ngram(3),
            SourceMode::SingleMessage,
        );
        assert_eq!(got, vec!["abc", "def"]);
    }

    #[test]
    fn test_ngram_short_tail_dropped_without_next_line() {
        let got = tokens(
            "\nabcde",
            TokenizerKind::FixedWidthNgram,
            TokenizerConfig::ngram(3),
            SourceMode::SingleMessage,
        );
        assert_eq!(got, vec!["abc"]);
    }

    #[test]
    fn test_ngram_exact_fit_has_no_wraparound() {
        let got = tokens(
            "\nabcdef\nghi",
            TokenizerKind::FixedWidthNgram,
            TokenizerConfig::ngram(3),
            SourceMode::SingleMessage,
        );
        assert_eq!(got, vec!["abc", "def", "ghi"]);
    }

    #[test]
    fn test_invalid_ngram_config_fails_before_reading() {
        let result = TokenStream::new(
            StringSource::new("anything"),
            TokenizerKind::FixedWidthNgram,
            TokenizerConfig::ngram(0),
            SourceMode::SingleMessage,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_single_message_header_then_body() {
        let text = "Subject: win big money\n\
                    X-Mailer: spamblaster\n\
                    \n\
                    click here now\n";
        let got = tokens(
            text,
            TokenizerKind::Whitespace,
            TokenizerConfig::default(),
            SourceMode::SingleMessage,
        );
        assert_eq!(got, vec!["win", "big", "money", "click", "here", "now"]);
    }
}
