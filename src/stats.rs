//! Word occurence statistics

use crate::{input::LineReader, words::Words, Count, Word};
use std::{collections::HashMap, io};

/// Number of occurences of each word seen so far
///
/// Words are accumulated in no particular order. Use [`crate::top::rank`] once
/// all the input has been processed to get them sorted.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FrequencyTable(HashMap<Word, Count>);
//
impl FrequencyTable {
    /// Set up an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count all the words from a source of lines
    pub fn count_lines(mut lines: LineReader) -> io::Result<Self> {
        let mut table = Self::new();
        while let Some(line) = lines.next_line()? {
            table.add_line(line);
        }
        Ok(table)
    }

    /// Count the words of a line, which gets lowercased in the process
    pub fn add_line(&mut self, line: &mut [u8]) {
        for word in Words::new(line) {
            self.add_word(word);
        }
    }

    /// Record one more occurence of a word
    pub fn add_word(&mut self, word: &str) {
        // Only allocate storage for words that were never seen before
        if let Some(count) = self.0.get_mut(word) {
            *count = count
                .checked_add(1)
                .expect("overflow while counting word occurences");
        } else {
            log::trace!("First occurence of word {word:?}");
            self.0.insert(word.into(), Count::MIN);
        }
    }

    /// Number of occurences of a word, if it was seen
    pub fn get(&self, word: &str) -> Option<Count> {
        self.0.get(word).copied()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Truth that no word was seen
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of word occurences
    pub fn total(&self) -> u64 {
        self.0.values().map(|count| count.get()).sum()
    }

    /// Extract the words and their counts, in no particular order
    pub fn into_counts(self) -> impl Iterator<Item = (Word, Count)> {
        self.0.into_iter()
    }
}
