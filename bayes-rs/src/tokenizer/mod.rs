//! Tokenizer family
//!
//! Turns one line of message text into an ordered token sequence.
//! Three variants: plain whitespace splitting, HTML-aware splitting
//! for tag-heavy bodies, and fixed-width n-gram extraction. Variants
//! are selected through a static string-id registry; unknown ids are
//! a configuration error.

pub mod html;
pub mod ngram;
pub mod whitespace;

use serde::{Deserialize, Serialize};

use crate::error::{BayesError, Result};

pub use html::HtmlTokens;
pub use ngram::NgramTokens;
pub use whitespace::WhitespaceTokens;

/// Per-line tokenizer settings. `ngram_width` of 0 means n-gram
/// extraction is disabled (only meaningful for the n-gram variant,
/// which requires a width of at least 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    pub keep_punctuation: bool,
    pub keep_whitespace: bool,
    pub ngram_width: u32,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            keep_punctuation: false,
            keep_whitespace: false,
            ngram_width: 0,
        }
    }
}

impl TokenizerConfig {
    /// Settings for a fixed-width n-gram tokenizer.
    pub fn ngram(width: u32) -> Self {
        Self {
            ngram_width: width,
            ..Self::default()
        }
    }
}

/// The tokenizer registry. Each variant maps to a stable string id
/// recorded in persisted models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenizerKind {
    #[serde(rename = "whitespace")]
    Whitespace,
    #[serde(rename = "html")]
    HtmlAware,
    #[serde(rename = "ngram")]
    FixedWidthNgram,
}

impl TokenizerKind {
    /// Looks up a tokenizer by id.
    pub fn from_id(id: &str) -> Result<Self> {
        match id {
            "whitespace" => Ok(Self::Whitespace),
            "html" => Ok(Self::HtmlAware),
            "ngram" => Ok(Self::FixedWidthNgram),
            other => Err(BayesError::InvalidConfig(format!(
                "unknown tokenizer id: {other}"
            ))),
        }
    }

    /// The registry id for this variant.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            Self::HtmlAware => "html",
            Self::FixedWidthNgram => "ngram",
        }
    }

    /// Checks the configuration against this variant before any
    /// corpus is touched.
    pub fn validate(&self, config: &TokenizerConfig) -> Result<()> {
        if *self == Self::FixedWidthNgram && config.ngram_width < 1 {
            return Err(BayesError::InvalidConfig(format!(
                "invalid n-gram width ({}): the ngram tokenizer requires a width of 1 or more",
                config.ngram_width
            )));
        }
        Ok(())
    }

    /// Whether the caller-side wraparound rule for tokens split
    /// across line boundaries applies to this variant.
    pub fn fixed_width(&self) -> bool {
        *self == Self::FixedWidthNgram
    }

    /// Builds the token iterator for one line. The iterator is
    /// scoped to that line; each new line gets a fresh one.
    pub fn tokenize(&self, line: &str, config: TokenizerConfig) -> LineTokens {
        match self {
            Self::Whitespace => LineTokens::Whitespace(WhitespaceTokens::new(line, config)),
            Self::HtmlAware => LineTokens::Html(HtmlTokens::new(line, config)),
            Self::FixedWidthNgram => LineTokens::Ngram(NgramTokens::new(line, config)),
        }
    }
}

impl std::fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Token iterator over one line, dispatching to the selected variant.
pub enum LineTokens {
    Whitespace(WhitespaceTokens),
    Html(HtmlTokens),
    Ngram(NgramTokens),
}

impl Iterator for LineTokens {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self {
            Self::Whitespace(tokens) => tokens.next(),
            Self::Html(tokens) => tokens.next(),
            Self::Ngram(tokens) => tokens.next(),
        }
    }
}

/// Punctuation is any character other than whitespace, letters or
/// digits.
pub(crate) fn is_punctuation(ch: char) -> bool {
    !ch.is_whitespace() && !ch.is_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_round_trip() {
        for id in ["whitespace", "html", "ngram"] {
            let kind = TokenizerKind::from_id(id).unwrap();
            assert_eq!(kind.id(), id);
        }
    }

    #[test]
    fn test_unknown_id_is_config_error() {
        assert!(matches!(
            TokenizerKind::from_id("com.example.FancyTokenizer"),
            Err(BayesError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_ngram_width_validation() {
        let kind = TokenizerKind::FixedWidthNgram;
        assert!(kind.validate(&TokenizerConfig::ngram(0)).is_err());
        assert!(kind.validate(&TokenizerConfig::ngram(1)).is_ok());

        // Width is irrelevant for delimiter-based variants.
        assert!(TokenizerKind::Whitespace
            .validate(&TokenizerConfig::default())
            .is_ok());
    }

    #[test]
    fn test_kind_serializes_as_id() {
        let json = serde_json::to_string(&TokenizerKind::HtmlAware).unwrap();
        assert_eq!(json, "\"html\"");
        let kind: TokenizerKind = serde_json::from_str("\"ngram\"").unwrap();
        assert_eq!(kind, TokenizerKind::FixedWidthNgram);
    }
}
