//! Line-oriented source and sink adapters
//!
//! Training and classification consume input strictly line by line,
//! so the rest of the crate only ever sees these two small traits.
//! Files, standard input and in-memory strings all plug in here.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Stdin, Write};
use std::path::Path;

use crate::error::{BayesError, Result};

/// A source of lines. End of input is signalled by `None`.
pub trait LineSource {
    fn read_line(&mut self) -> Result<Option<String>>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn read_line(&mut self) -> Result<Option<String>> {
        (**self).read_line()
    }
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn read_line(&mut self) -> Result<Option<String>> {
        (**self).read_line()
    }
}

/// A sink for report lines.
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }
}

/// Captures written lines; used by tests and diagnostics.
impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Buffered line reader over a file or standard input.
pub struct TextReader<R> {
    reader: R,
}

impl TextReader<BufReader<File>> {
    /// Opens a file for line reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| BayesError::Source(format!("{}: {e}", path.display())))?;
        Ok(Self {
            reader: BufReader::new(file),
        })
    }
}

impl TextReader<BufReader<Stdin>> {
    /// Reads from standard input.
    pub fn stdin() -> Self {
        Self {
            reader: BufReader::new(std::io::stdin()),
        }
    }
}

impl<R: BufRead> LineSource for TextReader<R> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        // Strip the terminator; the pipeline works on bare lines.
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// In-memory source, one item per input line.
pub struct StringSource {
    lines: std::vec::IntoIter<String>,
}

impl StringSource {
    /// Splits `text` on newlines. A trailing newline does not
    /// produce a final empty line.
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(|line| line.to_string()).collect();
        Self {
            lines: lines.into_iter(),
        }
    }
}

impl LineSource for StringSource {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.next())
    }
}

/// Buffered line writer over a file or standard output.
pub struct TextWriter<W: Write> {
    writer: BufWriter<W>,
}

impl TextWriter<File> {
    /// Creates (or truncates) a file for line writing.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| BayesError::Source(format!("{}: {e}", path.display())))?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl TextWriter<std::io::Stdout> {
    /// Writes to standard output.
    pub fn stdout() -> Self {
        Self {
            writer: BufWriter::new(std::io::stdout()),
        }
    }
}

impl<W: Write> TextWriter<W> {
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> LineSink for TextWriter<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }
}
