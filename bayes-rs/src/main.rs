//! CLI front end for training and running the Bayes mail classifier
//!
//! # Usage
//!
//! ```bash
//! # Train the spam corpus from a mailbox file
//! bayes-rs train --class spam --tokenizer whitespace --model bayes.model --file spam.mbox
//!
//! # Train the normal corpus from standard input
//! bayes-rs train --class normal --model bayes.model < normal.mbox
//!
//! # Summary statistics of a trained model
//! bayes-rs dump --model bayes.model
//!
//! # Classify one message, with a detailed log
//! bayes-rs test --model bayes.model --file unknown.eml --log verdict.log
//! ```

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use bayes_rs::classify::Classifier;
use bayes_rs::corpus::CorpusClass;
use bayes_rs::io::{LineSource, TextReader, TextWriter};
use bayes_rs::model::Model;
use bayes_rs::report;
use bayes_rs::tokenizer::TokenizerKind;
use bayes_rs::{BayesError, Config};

#[derive(Parser)]
#[command(name = "bayes-rs")]
#[command(about = "Train and run a naive Bayes mail classifier", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train one corpus from a mailbox and persist the model
    Train {
        /// Which corpus the input belongs to
        #[arg(long, value_enum)]
        class: CorpusClass,
        /// Tokenizer id: whitespace, html or ngram
        #[arg(short = 'k', long)]
        tokenizer: Option<String>,
        /// N-gram width (ngram tokenizer only)
        #[arg(short = 'g', long)]
        ngram: Option<u32>,
        /// Model file to create or update
        #[arg(short, long)]
        model: Option<String>,
        /// Mailbox to read; standard input when omitted
        #[arg(short, long)]
        file: Option<String>,
    },
    /// Dump statistics of a persisted model
    Dump {
        /// Model file to read
        #[arg(short, long)]
        model: Option<String>,
        /// Write the full per-token dump here; summary only otherwise
        #[arg(short, long)]
        log: Option<String>,
    },
    /// Classify one message against a persisted model
    Test {
        /// Model file to read
        #[arg(short, long)]
        model: Option<String>,
        /// Tokenizer id; the one stored in the model always wins
        #[arg(short = 'k', long)]
        tokenizer: Option<String>,
        /// Message to read; standard input when omitted
        #[arg(short, long)]
        file: Option<String>,
        /// Write the detailed classification log here
        #[arg(short, long)]
        log: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Load configuration
    let config = if Path::new(&cli.config).exists() {
        match Config::from_file(&cli.config) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    // Initialize logging
    let level: Level = config.logging.level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    if let Err(e) = run(cli.command, &config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Commands, config: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Train {
            class,
            tokenizer,
            ngram,
            model,
            file,
        } => {
            let model_path = resolve_model_path(model, config)?;
            let requested_kind = tokenizer
                .as_deref()
                .or(config.defaults.tokenizer.as_deref())
                .map(TokenizerKind::from_id)
                .transpose()?;
            let requested_width = ngram.or(config.defaults.ngram_width);

            // All configuration checks happen before any corpus is
            // touched; a stored model overrides the request.
            let mut model = if Path::new(&model_path).exists() {
                let model = Model::load(&model_path)?;
                model.check_requested(requested_kind, requested_width);
                model
            } else {
                let kind = requested_kind.ok_or_else(|| {
                    BayesError::InvalidConfig("a tokenizer was not specified".into())
                })?;
                Model::new(kind, requested_width.unwrap_or(0))?
            };

            match &file {
                Some(path) => println!(
                    "Processing {class} email ({path}) using {}...",
                    model.tokenizer()
                ),
                None => println!(
                    "Processing {class} email (standard input) using {}...",
                    model.tokenizer()
                ),
            }

            let source = open_source(file.as_deref())?;
            let processed = model.train(class, source)?;

            println!("Processed: {processed} message(s).");
            println!("Total now: {} message(s).", model.table(class).message_count());
            println!("Token cnt: {}", model.table(class).total_token_count());

            // Nothing read means nothing worth persisting.
            if processed > 0 {
                model.save(&model_path)?;
                println!("✓ Model saved to {model_path}");
            }
        }
        Commands::Dump { model, log } => {
            let model_path = resolve_model_path(model, config)?;
            let model = Model::load(&model_path)?;

            match log {
                Some(path) => {
                    let mut sink = TextWriter::create(&path)?;
                    report::dump_model(&model, &mut sink, true)?;
                    sink.flush()?;
                    println!("✓ Full dump written to {path}");
                }
                None => {
                    let mut sink = TextWriter::stdout();
                    report::dump_model(&model, &mut sink, false)?;
                    sink.flush()?;
                }
            }
        }
        Commands::Test {
            model,
            tokenizer,
            file,
            log,
        } => {
            let model_path = resolve_model_path(model, config)?;
            let model = Model::load(&model_path)?;
            let requested_kind = tokenizer
                .as_deref()
                .map(TokenizerKind::from_id)
                .transpose()?;
            model.check_requested(requested_kind, None);

            let classifier = Classifier::new(
                model.table(CorpusClass::Normal),
                model.table(CorpusClass::Spam),
                model.tokenizer(),
                model.config(),
            );
            let source = open_source(file.as_deref())?;
            let classification = classifier.classify(source)?;

            println!("{}", classification.verdict.status_line());

            if let Some(path) = log {
                let mut sink = TextWriter::create(&path)?;
                report::write_classification(&model, &classification, &mut sink)?;
                sink.flush()?;
                println!("✓ Classification log written to {path}");
            }
        }
    }

    Ok(())
}

/// The model path comes from the flag, then the config file; having
/// neither is a configuration error.
fn resolve_model_path(flag: Option<String>, config: &Config) -> bayes_rs::Result<String> {
    flag.or_else(|| config.defaults.model.clone())
        .ok_or_else(|| BayesError::InvalidConfig("a model file was not specified".into()))
}

fn open_source(file: Option<&str>) -> bayes_rs::Result<Box<dyn LineSource>> {
    Ok(match file {
        Some(path) => Box::new(TextReader::open(path)?),
        None => Box::new(TextReader::stdin()),
    })
}
