//! Token frequency table and training pipeline

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::Result;
use crate::io::LineSource;
use crate::message::{SourceMode, TokenEvent, TokenStream};
use crate::store::HashTable;
use crate::tokenizer::{TokenizerConfig, TokenizerKind};

/// Frequency statistics for one corpus: token counts plus how many
/// messages and tokens in total went into them. Mutated only by
/// [`TokenTable::train`]; classification reads it through shared
/// references.
#[derive(Debug, Clone, Default)]
pub struct TokenTable {
    store: HashTable<String, u64>,
    message_count: u64,
    total_token_count: u64,
}

impl TokenTable {
    pub fn new() -> Self {
        Self {
            store: HashTable::new(),
            message_count: 0,
            total_token_count: 0,
        }
    }

    /// Messages trained into this table.
    pub fn message_count(&self) -> u64 {
        self.message_count
    }

    /// Tokens observed, counting repeats. Always equals the sum of
    /// the stored per-token counts.
    pub fn total_token_count(&self) -> u64 {
        self.total_token_count
    }

    /// Distinct tokens stored.
    pub fn unique_token_count(&self) -> usize {
        self.store.len()
    }

    /// The stored count for `token`; 0 when absent.
    pub fn count(&self, token: &str) -> u64 {
        if token.is_empty() {
            return 0;
        }
        match self.store.get(token) {
            Ok(Some(count)) => *count,
            _ => 0,
        }
    }

    /// Slot-order iteration over `(token, count)` pairs.
    pub fn tokens(&self) -> impl Iterator<Item = (&String, &u64)> {
        self.store.iter()
    }

    /// Ingests one source: every accepted token increments its count
    /// and the running total, every postmark increments the message
    /// count. Returns the number of messages this call contributed.
    ///
    /// A source that produced lines but no postmark still counts as
    /// one message, so single RFC-822 messages move the prior the
    /// same way a one-message mailbox does. Reprocessing a source
    /// appends to existing counts; callers own double-training.
    pub fn train<S: LineSource>(
        &mut self,
        source: S,
        kind: TokenizerKind,
        config: TokenizerConfig,
    ) -> Result<u64> {
        let mut stream = TokenStream::new(source, kind, config, SourceMode::Mailbox)?;
        let mut messages = 0u64;

        for event in &mut stream {
            match event? {
                TokenEvent::MessageStart => {
                    messages += 1;
                    self.message_count += 1;
                }
                TokenEvent::Token(token) => self.observe(token)?,
            }
        }

        if messages == 0 && stream.lines_read() > 0 {
            messages = 1;
            self.message_count += 1;
        }

        debug!(
            messages,
            total_tokens = self.total_token_count,
            unique = self.unique_token_count(),
            "corpus updated"
        );
        Ok(messages)
    }

    /// Counts one accepted token.
    fn observe(&mut self, token: String) -> Result<()> {
        let count = self.count(&token);
        self.store.put(token, count + 1)?;
        self.total_token_count += 1;
        Ok(())
    }
}

/// Wire shape of a token table: the store flattens to its entries
/// and is rebuilt, probe layout and all, on the way back in.
#[derive(Serialize, Deserialize)]
struct TokenTableRepr {
    message_count: u64,
    total_token_count: u64,
    tokens: Vec<(String, u64)>,
}

impl Serialize for TokenTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let repr = TokenTableRepr {
            message_count: self.message_count,
            total_token_count: self.total_token_count,
            tokens: self
                .tokens()
                .map(|(token, count)| (token.clone(), *count))
                .collect(),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TokenTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let repr = TokenTableRepr::deserialize(deserializer)?;
        let mut store = HashTable::with_capacity(repr.tokens.len().saturating_mul(2).max(1));
        for (token, count) in repr.tokens {
            store.put(token, count).map_err(D::Error::custom)?;
        }
        Ok(Self {
            store,
            message_count: repr.message_count,
            total_token_count: repr.total_token_count,
        })
    }
}
