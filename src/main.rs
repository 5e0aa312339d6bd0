//! Word frequency counter
//!
//! Reads a text from a file or from standard input, and prints how many times
//! each word occurs in it, most frequent words first. Words are maximal runs of
//! ASCII letters, compared case-insensitively.

mod config;
mod input;
mod output;
mod progress;
mod stats;
mod top;
mod words;

use crate::{config::Config, progress::ProgressReport, stats::FrequencyTable};
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use std::{
    io::{self, ErrorKind},
    num::NonZeroU64,
    path::PathBuf,
};

/// Count the words of a text and list them by decreasing frequency
///
/// Each output line contains an occurence count followed by a lowercase word.
/// Words that occur equally often are listed in alphabetical order.
#[derive(Parser, Debug)]
#[command(version, author)]
struct Args {
    /// Text file to be read
    ///
    /// Standard input will be read if not specified.
    input: Option<PathBuf>,
}
//
impl Args {
    /// Decode and validate CLI arguments
    pub fn parse_and_check() -> Result<Self> {
        // Decode CLI arguments
        let args = Args::parse();

        // Check CLI arguments for basic sanity
        if let Some(path) = &args.input {
            anyhow::ensure!(
                !path.is_dir(),
                "input path {} is a directory, not a text file",
                path.display()
            );
        }
        Ok(args)
    }
}
//
fn main() -> Result<()> {
    // Set up logging, which is nice to have but not required
    if let Err(e) = setup_logging() {
        eprintln!("Logging is disabled, failed to connect to syslog: {e}");
    }

    // Decode CLI arguments
    let config = Config::new(Args::parse_and_check()?);

    // Count words from the input
    let report = ProgressReport::new();
    let lines = input::open(&config.input, &report)?;
    let table = FrequencyTable::count_lines(lines).context("reading input")?;
    log::info!(
        "Counted {} occurences of {} distinct words",
        table.total(),
        table.len()
    );

    // Display the words by decreasing popularity
    let ranking = top::rank(table);
    match output::write_ranking(io::stdout().lock(), &ranking, config.count_width) {
        // Output consumers like `head` may legitimately stop reading early
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            log::debug!("Output was closed before all word counts were written");
            Ok(())
        }
        other => other.context("writing word counts"),
    }
}

/// Use anyhow for Result type erasure
pub use anyhow::Result;

/// Case-folded word
pub type Word = Box<str>;

/// Number of occurences of a word
///
/// Counting bytes of input text, 32 bits would only accomodate a few GB of
/// single-letter words, so 64-bit counts are used.
pub type Count = NonZeroU64;

/// Set up logging
fn setup_logging() -> syslog::Result<()> {
    syslog::init(
        syslog::Facility::LOG_USER,
        if cfg!(feature = "log-trace") {
            LevelFilter::Trace
        } else if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::LineReader;
    use std::io::Cursor;

    /// Run the whole pipeline on an in-memory text
    fn word_freq(text: &str) -> String {
        let lines = LineReader::new(Cursor::new(text.as_bytes().to_vec()), None);
        let table = FrequencyTable::count_lines(lines).unwrap();
        let mut out = Vec::new();
        output::write_ranking(&mut out, &top::rank(table), config::DEFAULT_COUNT_WIDTH).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn quick_brown_fox() {
        assert_eq!(
            word_freq("the quick brown fox jumps over the lazy dog the fox runs"),
            "   3 the\n   2 fox\n   1 brown\n   1 dog\n   1 jumps\n   1 lazy\n   1 over\n   1 quick\n   1 runs\n"
        );
    }

    #[test]
    fn punctuation_and_case_are_ignored() {
        assert_eq!(word_freq("Hello, hello! HELLO?"), "   3 hello\n");
        assert_eq!(word_freq("Cat cat CAT"), word_freq("cat cat cat"));
        assert_eq!(word_freq("Cat cat CAT"), "   3 cat\n");
    }

    #[test]
    fn no_words_gives_no_output() {
        assert_eq!(word_freq(""), "");
        assert_eq!(word_freq("123 !!! ---"), "");
        assert_eq!(word_freq("\n\n\r\n"), "");
    }

    #[test]
    fn output_is_well_formed_and_idempotent() {
        let text = "It was the best of times, it was the worst of times;\n\
                    it was the age of wisdom, it was the age of foolishness...\r\n\
                    Ünïcödé & 42 b1n4ry \u{0} bytes";
        let output = word_freq(text);
        assert_eq!(output, word_freq(text));

        let mut total = 0;
        let mut previous: Option<(u64, String)> = None;
        for line in output.lines() {
            let (count, word) = line.trim_start().split_once(' ').unwrap();
            let count = count.parse::<u64>().unwrap();
            assert!(!word.is_empty());
            assert!(word.bytes().all(|b| b.is_ascii_lowercase()), "{word:?}");
            if let Some((prev_count, prev_word)) = &previous {
                assert!(*prev_count > count || (*prev_count == count && prev_word.as_str() < word));
            }
            total += count;
            previous = Some((count, word.to_owned()));
        }
        let runs = text
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|run| !run.is_empty())
            .count() as u64;
        assert_eq!(total, runs);
    }
}
