use std::collections::HashSet;
use std::ops::Range;

use crate::settings::settings;
use crate::unicode;

use super::Tokenizer;

/// Word tokenizer for Latin-script text.
///
/// Splits on whitespace like [`super::WhitespaceTokenizer`], but emits
/// punctuation and symbol characters as their own tokens. Selected
/// punctuation is word-internal when followed by a word character (`5,000`,
/// `e.g`, `co-op`), a configurable abbreviation set keeps trailing periods
/// attached (`Mr.`), and the ASCII apostrophe is part of the word unless
/// `treat_apostrophe_as_single_quote` turns it into a paired quote mark.
#[derive(Debug, Clone, Default)]
pub struct LatinWordTokenizer {
    abbreviations: HashSet<String>,
    pub treat_apostrophe_as_single_quote: bool,
}

impl LatinWordTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_abbreviations<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            abbreviations: abbreviations
                .into_iter()
                .map(|a| a.as_ref().to_lowercase())
                .collect(),
            treat_apostrophe_as_single_quote: false,
        }
    }

    /// Build from the global settings (`[tokenize]` section).
    pub fn from_settings() -> Self {
        let t = &settings().tokenize;
        let mut tokenizer = Self::with_abbreviations(&t.abbreviations);
        tokenizer.treat_apostrophe_as_single_quote = t.treat_apostrophe_as_single_quote;
        tokenizer
    }

    fn is_word_char(&self, c: char) -> bool {
        if c == '\'' {
            return !self.treat_apostrophe_as_single_quote;
        }
        !unicode::is_whitespace(c) && !unicode::is_punctuation(c) && !unicode::is_symbol(c)
    }

    /// Punctuation that continues a word when a word character follows.
    /// The apostrophe only behaves this way in single-quote mode; otherwise
    /// it is a word character outright.
    fn is_inner_word_punct(&self, c: char) -> bool {
        matches!(c, ',' | '.' | '-' | ':' | '=' | '&' | '\u{2019}')
            || (c == '\'' && self.treat_apostrophe_as_single_quote)
    }

    fn is_abbreviation(&self, word: &str) -> bool {
        !self.abbreviations.is_empty() && self.abbreviations.contains(&word.to_lowercase())
    }
}

impl Tokenizer for LatinWordTokenizer {
    fn tokenize_as_ranges(&self, text: &str) -> Vec<Range<usize>> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut tokens = Vec::new();
        let mut word_start: Option<usize> = None;
        let mut i = 0;
        while i < chars.len() {
            let (pos, c) = chars[i];
            if unicode::is_whitespace(c) {
                if let Some(start) = word_start.take() {
                    tokens.push(start..pos);
                }
                i += 1;
                continue;
            }
            if self.is_word_char(c) {
                word_start.get_or_insert(pos);
                i += 1;
                continue;
            }

            // Punctuation or symbol.
            let next = chars.get(i + 1).map(|&(_, ch)| ch);
            if word_start.is_some()
                && self.is_inner_word_punct(c)
                && next.is_some_and(|ch| self.is_word_char(ch))
            {
                i += 1;
                continue;
            }
            if let Some(start) = word_start.take() {
                if c == '.' && self.is_abbreviation(&text[start..pos]) {
                    tokens.push(start..pos + c.len_utf8());
                    i += 1;
                    continue;
                }
                tokens.push(start..pos);
            }
            // Runs of the same character form one token ("<<", ">>").
            let mut end = pos + c.len_utf8();
            let mut j = i + 1;
            while j < chars.len() && chars[j].1 == c {
                end = chars[j].0 + c.len_utf8();
                j += 1;
            }
            tokens.push(pos..end);
            i = j;
        }
        if let Some(start) = word_start {
            tokens.push(start..text.len());
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string() {
        assert!(LatinWordTokenizer::new().tokenize("").is_empty());
    }

    #[test]
    fn whitespace_only_string() {
        assert!(LatinWordTokenizer::new().tokenize(" ").is_empty());
    }

    #[test]
    fn punctuation_at_end_of_word() {
        assert_eq!(
            LatinWordTokenizer::new().tokenize("This is a test, also."),
            vec!["This", "is", "a", "test", ",", "also", "."]
        );
    }

    #[test]
    fn punctuation_at_start_of_word() {
        assert_eq!(
            LatinWordTokenizer::new().tokenize("Is this a test? (yes)"),
            vec!["Is", "this", "a", "test", "?", "(", "yes", ")"]
        );
    }

    #[test]
    fn word_internal_punctuation() {
        assert_eq!(
            LatinWordTokenizer::new().tokenize("This isn't a test."),
            vec!["This", "isn't", "a", "test", "."]
        );
        assert_eq!(
            LatinWordTokenizer::new().tokenize("He had $5,000."),
            vec!["He", "had", "$", "5,000", "."]
        );
    }

    #[test]
    fn symbol_splits_off() {
        assert_eq!(
            LatinWordTokenizer::new().tokenize("He had $50."),
            vec!["He", "had", "$", "50", "."]
        );
    }

    #[test]
    fn abbreviations_keep_their_period() {
        let tokenizer = LatinWordTokenizer::with_abbreviations(["mr", "dr", "ms"]);
        assert_eq!(
            tokenizer.tokenize("Mr. Smith went to Washington."),
            vec!["Mr.", "Smith", "went", "to", "Washington", "."]
        );
    }

    #[test]
    fn quotes_split_off() {
        assert_eq!(
            LatinWordTokenizer::new().tokenize("\"This is a test.\""),
            vec!["\"", "This", "is", "a", "test", ".", "\""]
        );
    }

    #[test]
    fn apostrophe_not_treated_as_single_quote() {
        assert_eq!(
            LatinWordTokenizer::new().tokenize("“Moses' cat said ‘Meow’ to the dog.”"),
            vec!["“", "Moses'", "cat", "said", "‘", "Meow", "’", "to", "the", "dog", ".", "”"]
        );
        assert_eq!(
            LatinWordTokenizer::new().tokenize("i ha''on 'ot ano'."),
            vec!["i", "ha''on", "'ot", "ano'", "."]
        );
    }

    #[test]
    fn apostrophe_treated_as_single_quote() {
        let mut tokenizer = LatinWordTokenizer::new();
        tokenizer.treat_apostrophe_as_single_quote = true;
        assert_eq!(
            tokenizer.tokenize("'Moses's cat said 'Meow' to the dog.'"),
            vec!["'", "Moses's", "cat", "said", "'", "Meow", "'", "to", "the", "dog", ".", "'"]
        );
    }

    #[test]
    fn slash_splits_words() {
        assert_eq!(
            LatinWordTokenizer::new().tokenize("This is a test/trial."),
            vec!["This", "is", "a", "test", "/", "trial", "."]
        );
    }

    #[test]
    fn angle_bracket_runs_group() {
        assert_eq!(
            LatinWordTokenizer::new().tokenize("This is a <<test>>."),
            vec!["This", "is", "a", "<<", "test", ">>", "."]
        );
    }

    #[test]
    fn non_ascii_dash_splits() {
        assert_eq!(
            LatinWordTokenizer::new().tokenize("This is—a test."),
            vec!["This", "is", "—", "a", "test", "."]
        );
    }

    #[test]
    fn hyphenated_word_stays_together() {
        assert_eq!(
            LatinWordTokenizer::new().tokenize("a co-op deal"),
            vec!["a", "co-op", "deal"]
        );
    }

    #[test]
    fn ranges_are_byte_offsets() {
        let text = "é, test";
        let ranges = LatinWordTokenizer::new().tokenize_as_ranges(text);
        let tokens: Vec<&str> = ranges.iter().cloned().map(|r| &text[r]).collect();
        assert_eq!(tokens, vec!["é", ",", "test"]);
    }
}
