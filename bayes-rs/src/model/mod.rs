//! Persisted statistical model
//!
//! The trained corpus pair plus the tokenizer configuration it was
//! built with, as one serializable unit. Keeping both tables and the
//! tokenizer identity in a single file guarantees the normal and
//! spam statistics can never drift apart configuration-wise.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::corpus::{CorpusClass, TokenTable};
use crate::error::{BayesError, Result};
use crate::io::LineSource;
use crate::tokenizer::{TokenizerConfig, TokenizerKind};

/// A trained corpus pair. Both tables share one tokenizer identity
/// and n-gram width by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    tokenizer: TokenizerKind,
    ngram_width: u32,
    normal: TokenTable,
    spam: TokenTable,
}

impl Model {
    /// Creates an empty model for the given tokenizer configuration.
    /// Fails fast on an invalid configuration.
    pub fn new(tokenizer: TokenizerKind, ngram_width: u32) -> Result<Self> {
        tokenizer.validate(&TokenizerConfig::ngram(ngram_width))?;
        Ok(Self {
            tokenizer,
            ngram_width,
            normal: TokenTable::new(),
            spam: TokenTable::new(),
        })
    }

    pub fn tokenizer(&self) -> TokenizerKind {
        self.tokenizer
    }

    pub fn ngram_width(&self) -> u32 {
        self.ngram_width
    }

    /// The tokenizer configuration every training and classification
    /// run against this model uses.
    pub fn config(&self) -> TokenizerConfig {
        TokenizerConfig::ngram(self.ngram_width)
    }

    /// The trained table for one corpus.
    pub fn table(&self, class: CorpusClass) -> &TokenTable {
        match class {
            CorpusClass::Normal => &self.normal,
            CorpusClass::Spam => &self.spam,
        }
    }

    /// Trains one corpus from `source` with the model's own
    /// tokenizer configuration. Returns the number of messages
    /// processed.
    pub fn train<S: LineSource>(&mut self, class: CorpusClass, source: S) -> Result<u64> {
        let kind = self.tokenizer;
        let config = self.config();
        let table = match class {
            CorpusClass::Normal => &mut self.normal,
            CorpusClass::Spam => &mut self.spam,
        };
        table.train(source, kind, config)
    }

    /// Compares a freshly requested tokenizer setup against the one
    /// recorded in the model. The stored configuration always wins;
    /// a mismatch is only worth a warning.
    pub fn check_requested(&self, kind: Option<TokenizerKind>, ngram_width: Option<u32>) {
        if let Some(requested) = kind {
            if requested != self.tokenizer {
                warn!(
                    requested = %requested,
                    stored = %self.tokenizer,
                    "requested tokenizer differs from the stored model; reverting to stored"
                );
                return;
            }
        }
        if let Some(requested) = ngram_width {
            if requested != self.ngram_width {
                warn!(
                    requested,
                    stored = self.ngram_width,
                    "requested n-gram width differs from the stored model; reverting to stored"
                );
            }
        }
    }

    /// Serializes the model. Round-trips per-token counts, message
    /// counts, tokenizer id and n-gram width exactly.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Inverse of [`Model::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Loads a model file. A missing file is a distinct error so the
    /// CLI can tell "train first" apart from real I/O failures.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(BayesError::MissingModel(path.display().to_string()));
        }
        let bytes = std::fs::read(path)?;
        let model = Self::decode(&bytes)?;
        info!(
            path = %path.display(),
            tokenizer = %model.tokenizer,
            "model loaded"
        );
        Ok(model)
    }

    /// Writes the model file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.encode()?)?;
        info!(path = %path.display(), "model saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::StringSource;

    fn sample_model() -> Model {
        let mut model = Model::new(TokenizerKind::Whitespace, 0).unwrap();
        model
            .train(
                CorpusClass::Normal,
                StringSource::new("Subject: meeting agenda\n\nsee you tomorrow\n"),
            )
            .unwrap();
        model
            .train(
                CorpusClass::Spam,
                StringSource::new("Subject: free money\n\nclick here\n"),
            )
            .unwrap();
        model
    }

    #[test]
    fn test_new_validates_configuration() {
        assert!(Model::new(TokenizerKind::FixedWidthNgram, 0).is_err());
        assert!(Model::new(TokenizerKind::FixedWidthNgram, 4).is_ok());
        assert!(Model::new(TokenizerKind::Whitespace, 0).is_ok());
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let model = sample_model();
        let bytes = model.encode().unwrap();
        let back = Model::decode(&bytes).unwrap();

        assert_eq!(back.tokenizer(), TokenizerKind::Whitespace);
        assert_eq!(back.ngram_width(), 0);
        assert_eq!(
            back.table(CorpusClass::Normal).message_count(),
            model.table(CorpusClass::Normal).message_count()
        );
        assert_eq!(back.table(CorpusClass::Spam).count("money"), 1);
        assert_eq!(
            back.table(CorpusClass::Normal).total_token_count(),
            model.table(CorpusClass::Normal).total_token_count()
        );
    }

    #[test]
    fn test_load_missing_file_is_missing_model() {
        assert!(matches!(
            Model::load("/nonexistent/model.json"),
            Err(BayesError::MissingModel(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bayes.model");

        let model = sample_model();
        model.save(&path).unwrap();

        let back = Model::load(&path).unwrap();
        assert_eq!(back.table(CorpusClass::Spam).count("click"), 1);
        assert_eq!(back.table(CorpusClass::Normal).message_count(), 1);
    }
}
