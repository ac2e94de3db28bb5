//! Naive Bayes scorer and classification orchestrator

use tracing::debug;

use super::types::{Classification, Label, TokenScore, Verdict};
use crate::corpus::TokenTable;
use crate::error::{BayesError, Result};
use crate::io::LineSource;
use crate::message::{SourceMode, TokenEvent, TokenStream};
use crate::store::HashTable;
use crate::tokenizer::{TokenizerConfig, TokenizerKind};

/// Laplace-smoothed log-likelihood of `token` under `table`. An
/// absent token has count 0 and still contributes
/// `ln(1 / (total + 1))` instead of a fatal zero probability.
pub fn bayes(table: &TokenTable, token: &str) -> f64 {
    let count = table.count(token) as f64;
    ((count + 1.0) / (table.total_token_count() as f64 + 1.0)).ln()
}

/// Classifies unknown messages against two trained, read-only token
/// tables. Both tables must have been built with the tokenizer
/// configuration given here; the persisted model guarantees that.
pub struct Classifier<'a> {
    normal: &'a TokenTable,
    spam: &'a TokenTable,
    kind: TokenizerKind,
    config: TokenizerConfig,
}

impl<'a> Classifier<'a> {
    pub fn new(
        normal: &'a TokenTable,
        spam: &'a TokenTable,
        kind: TokenizerKind,
        config: TokenizerConfig,
    ) -> Self {
        Self {
            normal,
            spam,
            kind,
            config,
        }
    }

    /// Scores one message and returns the verdict with per-token
    /// diagnostics. The message is driven through the same line
    /// classifier and tokenizer as training, wraparound rule
    /// included.
    pub fn classify<S: LineSource>(&self, source: S) -> Result<Classification> {
        let total_messages = self.normal.message_count() + self.spam.message_count();
        if total_messages == 0 {
            return Err(BayesError::DivisionByZero);
        }

        // Log-priors seed the running scores.
        let mut running_normal =
            (self.normal.message_count() as f64 / total_messages as f64).ln();
        let mut running_spam = (self.spam.message_count() as f64 / total_messages as f64).ln();

        let mut tokens: HashTable<String, TokenScore> = HashTable::new();
        let stream = TokenStream::new(source, self.kind, self.config, SourceMode::SingleMessage)?;

        for event in stream {
            let token = match event? {
                // A stray postmark inside the sample carries no
                // token weight, exactly as in training.
                TokenEvent::MessageStart => continue,
                TokenEvent::Token(token) => token,
            };

            let n_bayes = bayes(self.normal, &token);
            let s_bayes = bayes(self.spam, &token);
            running_normal += n_bayes;
            running_spam += s_bayes;

            let entry = match tokens.get(token.as_str())? {
                None => TokenScore {
                    count: 1,
                    normal: n_bayes,
                    spam: s_bayes,
                },
                Some(prev) => TokenScore {
                    count: prev.count + 1,
                    normal: prev.normal + n_bayes,
                    spam: prev.spam + s_bayes,
                },
            };
            tokens.put(token, entry)?;
        }

        let label = if running_normal > running_spam {
            Label::Normal
        } else {
            Label::Spam
        };
        let verdict = Verdict {
            label,
            normal_score: running_normal,
            spam_score: running_spam,
            difference: (running_normal - running_spam).abs(),
        };
        debug!(%label, "message classified");

        Ok(Classification { verdict, tokens })
    }
}
