//! Message structure handling
//!
//! Separates envelope headers from body text, detects message
//! boundaries in mailbox-style sources, and drives the tokenizers
//! over a line source as one continuous token stream. Both the
//! training and the classification paths run through here so the two
//! always see identical token sequences.

pub mod classifier;
pub mod stream;

pub use classifier::{LineAction, LineClassifier, SourceMode};
pub use stream::{TokenEvent, TokenStream};
