//! Acquisition of the input text, line by line

use crate::{
    progress::{ProgressReport, ProgressTracker},
    Result,
};
use anyhow::Context;
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

/// Source of the text whose words are counted
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Input {
    /// Standard input of the process
    Stdin,

    /// Named file
    File(PathBuf),
}

/// Open the input source
pub fn open(input: &Input, report: &ProgressReport) -> Result<LineReader> {
    match input {
        Input::Stdin => {
            log::info!("Reading words from standard input");
            Ok(LineReader::new(io::stdin().lock(), None))
        }
        Input::File(path) => {
            let context = || format!("opening input file {}", path.display());
            let file = File::open(path).with_context(context)?;
            let len = file.metadata().with_context(context)?.len();
            log::info!("Reading words from {} ({len} bytes)", path.display());
            let tracker = report.add("Reading input", len);
            Ok(LineReader::new(BufReader::new(file), Some((tracker, len))))
        }
    }
}

/// Reader that yields the lines of a text without their terminators
///
/// Lines are yielded as raw bytes, so text which is not valid UTF-8 can still
/// be processed.
pub struct LineReader {
    /// Underlying buffered reader
    reader: Box<dyn BufRead>,

    /// Storage for the current line
    line: Vec<u8>,

    /// Progress tracker, with the number of bytes it still expects
    progress: Option<(ProgressTracker, u64)>,
}
//
impl LineReader {
    /// Read lines from a buffered reader, optionally tracking progress
    pub fn new(
        reader: impl BufRead + 'static,
        progress: Option<(ProgressTracker, u64)>,
    ) -> Self {
        Self {
            reader: Box::new(reader),
            line: Vec::new(),
            progress,
        }
    }

    /// Read the next line, or return `None` once the input is exhausted
    ///
    /// The returned line is writable so that it can be tokenized in place.
    pub fn next_line(&mut self) -> io::Result<Option<&mut [u8]>> {
        self.line.clear();
        let num_bytes = self.reader.read_until(b'\n', &mut self.line)?;
        if num_bytes == 0 {
            return Ok(None);
        }

        // Files may grow while being read, don't report beyond expectations
        if let Some((tracker, remaining)) = &mut self.progress {
            let progress = (num_bytes as u64).min(*remaining);
            if progress > 0 {
                *remaining -= progress;
                tracker.make_progress(progress);
            }
        }

        // Strip "\n" or "\r\n" terminator
        if self.line.last() == Some(&b'\n') {
            self.line.pop();
            if self.line.last() == Some(&b'\r') {
                self.line.pop();
            }
        }
        Ok(Some(&mut self.line[..]))
    }
}
