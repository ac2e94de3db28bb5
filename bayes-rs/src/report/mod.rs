//! Human-readable statistics reports
//!
//! Formats corpus dumps and classification logs onto a line sink.
//! The full per-token tables get large, so they are only produced
//! when the caller supplies a log sink; summary blocks go anywhere.

use chrono::Utc;

use crate::classify::Classification;
use crate::corpus::{CorpusClass, TokenTable};
use crate::error::{BayesError, Result};
use crate::io::LineSink;
use crate::model::Model;

/// Dumps one model: a summary block per corpus and, when `full` is
/// set, the per-token count/frequency table.
pub fn dump_model<S: LineSink>(model: &Model, sink: &mut S, full: bool) -> Result<()> {
    sink.write_line(&format!(
        "Generated : {}",
        Utc::now().format("%a %b %d %H:%M:%S %Y")
    ))?;
    sink.write_line("")?;

    for class in [CorpusClass::Normal, CorpusClass::Spam] {
        let table = model.table(class);
        sink.write_line(&format!("{} email token dump:", heading(class)))?;
        sink.write_line(&format!("Tokenizer used    : {}", model.tokenizer()))?;
        if model.ngram_width() > 0 {
            sink.write_line(&format!("NGram width       : {}", model.ngram_width()))?;
        }
        sink.write_line(&format!("Email processed   : {}", table.message_count()))?;
        sink.write_line(&format!("Total token count : {}", table.total_token_count()))?;
        sink.write_line(&format!("Unique token count: {}", table.unique_token_count()))?;

        if full {
            sink.write_line("")?;
            sink.write_line("Count\t\tProb (cnt/tot)\t\tKey")?;
            sink.write_line("-----\t\t--------------\t\t---------")?;
            for (token, count) in table.tokens() {
                let freq = *count as f64 / table.total_token_count() as f64;
                sink.write_line(&format!("{count}\t\t{freq:.10}\t\t{token}"))?;
            }
        }
        sink.write_line("")?;
    }

    Ok(())
}

/// Writes the full classification log: per-corpus summaries with
/// priors, the status line, and one row per distinct token of the
/// unknown message.
pub fn write_classification<S: LineSink>(
    model: &Model,
    classification: &Classification,
    sink: &mut S,
) -> Result<()> {
    let normal = model.table(CorpusClass::Normal);
    let spam = model.table(CorpusClass::Spam);
    let total = normal.message_count() + spam.message_count();
    if total == 0 {
        return Err(BayesError::DivisionByZero);
    }

    sink.write_line(&format!(
        "Generated : {}",
        Utc::now().format("%a %b %d %H:%M:%S %Y")
    ))?;
    sink.write_line(&format!("Tokenizer: {}", model.tokenizer()))?;
    sink.write_line("")?;
    write_table_summary(sink, "Norm", normal, total)?;
    write_table_summary(sink, "Spam", spam, total)?;

    sink.write_line("")?;
    sink.write_line(&classification.verdict.status_line())?;

    sink.write_line("")?;
    sink.write_line("Bayes Norm\t\tBayes Spam\t\t  Diff\t\t\tCount\tToken")?;
    sink.write_line("----------\t\t----------\t\t  ----\t\t\t-----\t-----")?;
    for (token, score) in classification.tokens.iter() {
        let dominant = if score.normal > score.spam { "n" } else { "s" };
        sink.write_line(&format!(
            "{:.6}\t\t{:.6}\t\t{} {:.1}\t\t\t{}\t\t{}",
            score.normal,
            score.spam,
            dominant,
            (score.normal - score.spam).abs(),
            score.count,
            token
        ))?;
    }

    sink.write_line("")?;
    sink.write_line("End.")?;
    Ok(())
}

fn write_table_summary<S: LineSink>(
    sink: &mut S,
    name: &str,
    table: &TokenTable,
    total_messages: u64,
) -> Result<()> {
    let prior = table.message_count() as f64 / total_messages as f64;
    sink.write_line(&format!(
        "{} Table: Email={}, Tokens={}, Unique={}, Prior={:.6}",
        name,
        table.message_count(),
        table.total_token_count(),
        table.unique_token_count(),
        prior
    ))
}

fn heading(class: CorpusClass) -> &'static str {
    match class {
        CorpusClass::Normal => "NORMAL",
        CorpusClass::Spam => "SPAM",
    }
}
