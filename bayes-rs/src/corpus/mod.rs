//! Trained corpora
//!
//! A token table holds the frequency statistics of one corpus of
//! labeled messages (normal or spam) and is the unit the training
//! pipeline writes and the classifier reads.

pub mod table;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use table::TokenTable;

/// The two message classes the suite distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum CorpusClass {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "spam")]
    Spam,
}

impl std::fmt::Display for CorpusClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
            Self::Spam => f.write_str("spam"),
        }
    }
}
