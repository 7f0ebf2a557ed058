//! Transcript sinks: where emitted segments go.

use crate::error::Result;
use crate::pipeline::types::Segment;
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};

/// Pluggable transcript output handler.
///
/// Receives `(index, text)` emissions in order: repeated emissions under the
/// same index are in-progress updates to that segment.
pub trait TranscriptSink {
    /// Handle one emission.
    fn emit(&mut self, segment: &Segment) -> Result<()>;

    /// Called once after the final emission.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }

    /// Name for logging/debugging.
    fn name(&self) -> &'static str {
        "sink"
    }
}

impl TranscriptSink for Box<dyn TranscriptSink> {
    fn emit(&mut self, segment: &Segment) -> Result<()> {
        (**self).emit(segment)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Pipe mode sink: one line per emission on stdout.
pub struct StdoutSink;

impl TranscriptSink for StdoutSink {
    fn emit(&mut self, segment: &Segment) -> Result<()> {
        println!("{}: {}", segment.index, segment.text);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "stdout"
    }
}

/// Collects emissions for library use and tests.
#[derive(Debug, Default)]
pub struct CollectorSink {
    emissions: Vec<Segment>,
}

impl CollectorSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All emissions in order, including in-progress updates.
    pub fn emissions(&self) -> &[Segment] {
        &self.emissions
    }

    /// The last emission under each index: the finalized transcript stream.
    pub fn finalized(&self) -> Vec<Segment> {
        let mut out: Vec<Segment> = Vec::new();
        for segment in &self.emissions {
            match out.last_mut() {
                Some(last) if last.index == segment.index => *last = segment.clone(),
                _ => out.push(segment.clone()),
            }
        }
        out
    }

    pub fn into_emissions(self) -> Vec<Segment> {
        self.emissions
    }
}

impl TranscriptSink for CollectorSink {
    fn emit(&mut self, segment: &Segment) -> Result<()> {
        self.emissions.push(segment.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "collector"
    }
}

/// Live terminal display on stderr.
///
/// In-progress updates overwrite the current line; a new segment index
/// finishes the previous line first. Colors only when stderr is a terminal.
pub struct DisplaySink {
    current_index: Option<usize>,
    colored: bool,
}

impl DisplaySink {
    pub fn new() -> Self {
        Self {
            current_index: None,
            colored: io::stderr().is_terminal(),
        }
    }

    fn render(&self, segment: &Segment) {
        if self.colored {
            eprint!("{} {}", format!("{}:", segment.index).dimmed(), segment.text);
        } else {
            eprint!("{}: {}", segment.index, segment.text);
        }
        let _ = io::stderr().flush();
    }
}

impl Default for DisplaySink {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptSink for DisplaySink {
    fn emit(&mut self, segment: &Segment) -> Result<()> {
        match self.current_index {
            Some(index) if index == segment.index => {
                // Same segment: overwrite the line in place
                eprint!("\r\x1b[2K");
            }
            Some(_) => {
                // Previous segment is final; keep its line
                eprintln!();
            }
            None => {}
        }
        self.current_index = Some(segment.index);
        self.render(segment);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.current_index.is_some() {
            eprintln!();
            self.current_index = None;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "display"
    }
}
