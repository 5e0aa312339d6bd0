//! Ranking of words by decreasing popularity

use crate::{stats::FrequencyTable, Count, Word};
use std::cmp::Reverse;

/// Sort the words of a frequency table by decreasing occurence count
///
/// Words with the same count are sorted alphabetically. Since words are
/// unique, this is a total order and the result is fully deterministic.
pub fn rank(table: FrequencyTable) -> Vec<(Word, Count)> {
    let mut ranking = table.into_counts().collect::<Vec<_>>();
    ranking.sort_unstable_by(|(word1, count1), (word2, count2)| {
        (Reverse(count1), word1).cmp(&(Reverse(count2), word2))
    });
    log::debug!("Ranked {} distinct words", ranking.len());
    ranking
}
