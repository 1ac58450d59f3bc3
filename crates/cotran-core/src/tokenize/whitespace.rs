use std::ops::Range;

use crate::unicode;

use super::Tokenizer;

/// Splits on runs of whitespace. The simplest segmentation: anything that is
/// not whitespace is part of a word.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize_as_ranges(&self, text: &str) -> Vec<Range<usize>> {
        let mut tokens = Vec::new();
        let mut start = None;
        for (i, c) in text.char_indices() {
            if unicode::is_whitespace(c) {
                if let Some(s) = start.take() {
                    tokens.push(s..i);
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }
        if let Some(s) = start {
            tokens.push(s..text.len());
        }
        tokens
    }
}
