//! Output writers for the generated series.
//!
//! Each [`OutputWriter`] renders a [`SeriesReport`] in one format: the
//! terminal writer prints the collected sequence's textual representation,
//! the stream writer emits values space-separated as the original module
//! printed them, and the JSON writer serializes the full report.

use crate::cli::OutputFormat;
use crate::core::{write_series, SeriesReport};
use crate::errors::{FiboError, Result};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

pub trait OutputWriter {
    fn write_report(&mut self, report: &SeriesReport) -> Result<()>;
}

/// Prints the collected sequence like `[1, 1, 2, 3, 5, 8]`.
pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &SeriesReport) -> Result<()> {
        writeln!(self.writer, "{:?}", report.values)?;
        Ok(())
    }
}

/// Emits values space-separated on a single newline-terminated line.
pub struct StreamWriter<W: Write> {
    writer: W,
}

impl<W: Write> StreamWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for StreamWriter<W> {
    fn write_report(&mut self, report: &SeriesReport) -> Result<()> {
        write_series(&mut self.writer, report.bound)?;
        Ok(())
    }
}

/// Serializes the full report as pretty-printed JSON.
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &SeriesReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Create a writer for the requested format and destination.
///
/// `stream` selects the space-separated streaming form and only applies to
/// the terminal format; JSON output always carries the full report.
pub fn create_writer(
    format: OutputFormat,
    output: Option<PathBuf>,
    stream: bool,
) -> Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(&path).map_err(|source| {
            FiboError::OutputFile { path, source }
        })?),
        None => Box::new(std::io::stdout()),
    };
    let writer: Box<dyn OutputWriter> = match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Terminal if stream => Box::new(StreamWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    };
    Ok(writer)
}
