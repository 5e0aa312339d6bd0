//! Splitting of input lines into case-folded words

/// Classify a byte and fold it to lowercase if it is an ASCII letter
///
/// Anything outside of `A-Z` and `a-z` is a word separator, including bytes
/// from multi-byte UTF-8 sequences.
pub fn fold_letter(byte: u8) -> Option<u8> {
    byte.is_ascii_alphabetic().then(|| byte.to_ascii_lowercase())
}

/// Words of a single line of text
///
/// Letters are lowercased in place as the line gets scanned, so the words
/// that are produced borrow from the line itself.
#[derive(Debug)]
pub struct Words<'line> {
    /// Part of the line that has not been scanned yet
    remainder: &'line mut [u8],
}
//
impl<'line> Words<'line> {
    /// Start scanning a line, which must not contain line terminators
    pub fn new(line: &'line mut [u8]) -> Self {
        Self { remainder: line }
    }
}
//
impl<'line> Iterator for Words<'line> {
    type Item = &'line str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let remainder = std::mem::take(&mut self.remainder);
            if remainder.is_empty() {
                return None;
            }

            // Fold letters until a separator or the end of the line is reached
            let mut len = 0;
            while let Some(folded) = remainder.get(len).copied().and_then(fold_letter) {
                remainder[len] = folded;
                len += 1;
            }

            // Resume after the separator on the next iteration
            let (run, rest) = remainder.split_at_mut(len);
            self.remainder = rest.get_mut(1..).unwrap_or_default();

            // Consecutive separators produce empty runs, which aren't words
            if !run.is_empty() {
                let run: &'line [u8] = run;
                return Some(
                    std::str::from_utf8(run).expect("lowercase ASCII letters should be valid UTF-8"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words_of(line: &str) -> Vec<String> {
        let mut line = line.as_bytes().to_vec();
        Words::new(&mut line).map(str::to_owned).collect()
    }

    #[test]
    fn letters_are_folded() {
        assert_eq!(fold_letter(b'A'), Some(b'a'));
        assert_eq!(fold_letter(b'z'), Some(b'z'));
        assert_eq!(fold_letter(b'Z'), Some(b'z'));
        for separator in [b' ', b'0', b'9', b'!', b'-', b'_', b'\t', b'@', b'[', b'`', b'{'] {
            assert_eq!(fold_letter(separator), None, "{:?}", separator as char);
        }
    }

    #[test]
    fn non_ascii_bytes_are_separators() {
        assert!((128..=255).all(|byte| fold_letter(byte).is_none()));
        assert_eq!(words_of("café crème"), ["caf", "cr", "me"]);
    }

    #[test]
    fn words_are_maximal_letter_runs() {
        assert_eq!(words_of("Hello, hello! HELLO?"), ["hello", "hello", "hello"]);
        assert_eq!(words_of("don't stop-me now"), ["don", "t", "stop", "me", "now"]);
        assert_eq!(words_of("abc123def"), ["abc", "def"]);
    }

    #[test]
    fn trailing_word_is_flushed() {
        assert_eq!(words_of("the end"), ["the", "end"]);
        assert_eq!(words_of("x"), ["x"]);
    }

    #[test]
    fn separators_alone_yield_nothing() {
        assert!(words_of("").is_empty());
        assert!(words_of("123 !!! ---").is_empty());
        assert_eq!(words_of("  ,,a,,  "), ["a"]);
    }

    #[test]
    fn line_is_folded_in_place() {
        let mut line = b"MiXeD Case".to_vec();
        assert_eq!(Words::new(&mut line).count(), 2);
        assert_eq!(line, b"mixed case");
    }
}
