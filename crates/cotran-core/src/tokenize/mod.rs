//! Text segmentation into word and punctuation tokens.
//!
//! Tokenizers produce ordered, non-overlapping byte ranges into the input;
//! whitespace is never a token. Upstream, these token boundaries feed the
//! candidate data model; downstream, the session derives prefix state from
//! them.

mod latin;
mod whitespace;

pub use latin::LatinWordTokenizer;
pub use whitespace::WhitespaceTokenizer;

use std::ops::Range;

/// Contract for segmentation: raw text in, ordered non-overlapping byte
/// ranges out.
pub trait Tokenizer {
    fn tokenize_as_ranges(&self, text: &str) -> Vec<Range<usize>>;

    /// Token substrings, borrowed from the input.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.tokenize_as_ranges(text)
            .into_iter()
            .map(|range| &text[range])
            .collect()
    }
}
