//! Output sinks for the computed team triples.
//!
//! Triples are sorted by player count (descending, ties broken by the sorted
//! team names) and rendered either as text lines `A|B|C, 12` under a short
//! header, or as a JSON array.

use std::{
    fs::File,
    io::{self, Write},
    path::PathBuf,
};
use tracing::{info, warn};

use crate::{cli::CONSOLE_SINK_NAME, triples::TripleCount, Result};


pub const HEADER: &str = "Team triple         Count\n-------------------------";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Destination named on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkTarget {
    Console,
    File(PathBuf),
}

impl SinkTarget {
    /// `console` selects standard output; anything else is a file path.
    pub fn parse(output: &str) -> Self {
        if output == CONSOLE_SINK_NAME {
            Self::Console
        } else {
            Self::File(PathBuf::from(output))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkOutcome {
    /// Nothing qualified, nothing was written.
    Empty,
    /// Number of triples written.
    Written(usize),
}

pub trait Sink {
    fn write(&mut self, triples: &[TripleCount]) -> Result<SinkOutcome>;
}

/// Highest count first; equal counts in lexicographic team order.
pub fn sort_triples(triples: &[TripleCount]) -> Vec<&TripleCount> {
    let mut sorted: Vec<&TripleCount> = triples.iter().collect();
    sorted.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.teams.cmp(&b.teams)));
    sorted
}

pub fn format_line(triple: &TripleCount) -> String {
    format!("{}, {}", triple.teams, triple.count)
}

pub fn render(triples: &[TripleCount], format: OutputFormat) -> Result<String> {
    let sorted = sort_triples(triples);
    match format {
        OutputFormat::Text => {
            let mut out = String::from(HEADER);
            out.push('\n');
            for triple in sorted {
                out.push_str(&format_line(triple));
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&sorted)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Rendered output, or `None` (after warning the operator) when there is nothing to write.
fn prepare(triples: &[TripleCount], format: OutputFormat) -> Result<Option<String>> {
    if triples.is_empty() {
        warn!("No triple fulfilled the minimum count over the requested range");
        warn!("No results were written to the requested output sink");
        return Ok(None);
    }
    render(triples, format).map(Some)
}

/// Sink over any writer.
pub struct WriterSink<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn write(&mut self, triples: &[TripleCount]) -> Result<SinkOutcome> {
        let Some(out) = prepare(triples, self.format)? else {
            return Ok(SinkOutcome::Empty);
        };
        self.writer.write_all(out.as_bytes())?;
        self.writer.flush()?;
        Ok(SinkOutcome::Written(triples.len()))
    }
}

/// Standard output.
pub struct ConsoleSink {
    format: OutputFormat,
}

impl ConsoleSink {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, triples: &[TripleCount]) -> Result<SinkOutcome> {
        let stdout = io::stdout();
        WriterSink::new(stdout.lock(), self.format).write(triples)
    }
}

/// Text file on the local file system; its directory must exist.
///
/// The file is only created when there is something to write.
pub struct FileSink {
    path: PathBuf,
    format: OutputFormat,
}

impl FileSink {
    pub fn new(path: PathBuf, format: OutputFormat) -> Self {
        Self { path, format }
    }
}

impl Sink for FileSink {
    fn write(&mut self, triples: &[TripleCount]) -> Result<SinkOutcome> {
        let Some(out) = prepare(triples, self.format)? else {
            return Ok(SinkOutcome::Empty);
        };
        info!("Writing results to {}", self.path.display());
        let mut file = File::create(&self.path)?;
        file.write_all(out.as_bytes())?;
        Ok(SinkOutcome::Written(triples.len()))
    }
}

pub fn build_sink(target: SinkTarget, format: OutputFormat) -> Box<dyn Sink> {
    match target {
        SinkTarget::Console => Box::new(ConsoleSink::new(format)),
        SinkTarget::File(path) => Box::new(FileSink::new(path, format)),
    }
}
