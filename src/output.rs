//! Display of the word frequency table

use crate::{Count, Word};
use std::io::{self, BufWriter, Write};

/// Write one "count word" line per ranked word, with right-aligned counts
pub fn write_ranking(
    out: impl Write,
    ranking: &[(Word, Count)],
    count_width: usize,
) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    for (word, count) in ranking {
        writeln!(out, "{count:>count_width$} {word}")?;
    }
    out.flush()
}
