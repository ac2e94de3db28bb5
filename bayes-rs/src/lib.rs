//! bayes-rs: Naive Bayes mail classification
//!
//! A training and classification toolkit that labels email messages
//! as normal or spam from token-frequency statistics gathered over
//! two labeled corpora.
//!
//! # Features
//!
//! - **Custom store**: open-addressing hash table with quadratic
//!   probing backs every frequency table
//! - **Pluggable tokenizers**: whitespace, HTML-aware and
//!   fixed-width n-gram token extraction
//! - **Mailbox aware**: mbox-style multi-message sources and single
//!   RFC-822 messages are both understood
//! - **Durable models**: trained corpus pairs round-trip through a
//!   single model file
//!
//! # Example
//!
//! ```no_run
//! use bayes_rs::classify::Classifier;
//! use bayes_rs::corpus::CorpusClass;
//! use bayes_rs::io::{StringSource, TextReader};
//! use bayes_rs::model::Model;
//! use bayes_rs::tokenizer::TokenizerKind;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut model = Model::new(TokenizerKind::Whitespace, 0)?;
//!     model.train(CorpusClass::Normal, TextReader::open("normal.mbox")?)?;
//!     model.train(CorpusClass::Spam, TextReader::open("spam.mbox")?)?;
//!     model.save("bayes.model")?;
//!
//!     let model = Model::load("bayes.model")?;
//!     let classifier = Classifier::new(
//!         model.table(CorpusClass::Normal),
//!         model.table(CorpusClass::Spam),
//!         model.tokenizer(),
//!         model.config(),
//!     );
//!     let result = classifier.classify(StringSource::new("Subject: hello\n\nlunch?"))?;
//!     println!("{}", result.verdict.status_line());
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`store`]: the associative store all tables sit on
//! - [`tokenizer`]: the tokenizer family and registry
//! - [`message`]: header/body line classification and token streaming
//! - [`corpus`]: token tables and the training pipeline
//! - [`classify`]: the Bayes scorer and classification orchestrator
//! - [`model`]: persisted corpus pairs
//! - [`report`]: statistics dumps and classification logs
//! - [`io`]: line source and sink adapters
//! - [`config`]: configuration management
//! - [`error`]: error types and handling

pub mod classify;
pub mod config;
pub mod corpus;
pub mod error;
pub mod io;
pub mod message;
pub mod model;
pub mod report;
pub mod store;
pub mod tokenizer;

// Re-export commonly used types
pub use config::Config;
pub use error::{BayesError, Result};
pub use model::Model;
