//! Processing pipeline configuration

use crate::{input::Input, Args};

/// Minimal width of the count column in the output
///
/// Counts that need more digits than this are printed in full.
pub const DEFAULT_COUNT_WIDTH: usize = 4;

/// Final process configuration
///
/// This is the result of digesting the [`Args`]. Please refer to [`Args`] to
/// know more about the user-facing side of each setting.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Config {
    /// Where the text comes from
    pub input: Input,

    /// Minimal width of the count column
    pub count_width: usize,
}
//
impl Config {
    /// Determine process configuration from CLI arguments
    pub(crate) fn new(args: Args) -> Self {
        let Args { input } = args;
        Self {
            input: input.map_or(Input::Stdin, Input::File),
            count_width: DEFAULT_COUNT_WIDTH,
        }
    }
}
