//! Suggestion generation for interactive translation.
//!
//! Turns a ranked list of candidate translations into short, deduplicated
//! continuations of the translator's confirmed prefix. The engine is a pure
//! function of its inputs: no state, no I/O, safe to call from any thread.

mod phrase;


use tracing::{debug, debug_span};

use crate::result::TranslationResult;
use crate::settings::settings;

use phrase::{walk_candidate, WalkOutcome};

/// Joins suggestion words for duplicate detection. U+0001 cannot occur
/// inside a token, so containment on joined text is containment on whole
/// word sequences.
const JOIN_SEPARATOR: char = '\u{1}';

/// A proposed continuation of the prefix, drawn from one candidate.
///
/// Holds the indices of the suggested words within the candidate's target
/// tokens (strictly increasing, not necessarily contiguous — punctuation
/// may be skipped mid-run) and the minimum confidence among them.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion<'a> {
    result: &'a TranslationResult,
    word_indices: Vec<usize>,
    confidence: f64,
}

impl<'a> Suggestion<'a> {
    pub fn new(result: &'a TranslationResult, word_indices: Vec<usize>, confidence: f64) -> Self {
        Self {
            result,
            word_indices,
            confidence,
        }
    }

    /// The candidate this suggestion was drawn from.
    pub fn result(&self) -> &'a TranslationResult {
        self.result
    }

    /// Indices into the candidate's target tokens.
    pub fn word_indices(&self) -> &[usize] {
        &self.word_indices
    }

    /// Minimum per-word confidence among the suggested words.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// The suggested words, in order.
    pub fn target_words(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.word_indices
            .iter()
            .map(|&j| self.result.target_tokens[j].as_str())
    }

    fn joined_text(&self) -> String {
        let mut text = String::new();
        for (i, word) in self.target_words().enumerate() {
            if i > 0 {
                text.push(JOIN_SEPARATOR);
            }
            text.push_str(word);
        }
        text
    }
}

/// Seam for suggestion generation strategies.
///
/// Precondition: `results` is ranked best-first by the caller; an
/// implementation never re-sorts and may exploit the ranking to stop early.
pub trait Suggester {
    fn suggest<'a>(
        &self,
        n: usize,
        prefix_count: usize,
        is_last_word_complete: bool,
        results: &'a [TranslationResult],
    ) -> Vec<Suggestion<'a>>;
}

/// Phrase-based suggester: walks each candidate's phrase alignments from the
/// prefix boundary, filtering on phrase confidence and token provenance.
#[derive(Debug, Clone, Copy)]
pub struct PhraseSuggester {
    /// Minimum phrase confidence required to extend a suggestion through
    /// that phrase.
    pub confidence_threshold: f64,
    /// Stop appending words once an all-punctuation token is seen.
    pub break_on_punctuation: bool,
}

impl Default for PhraseSuggester {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.0,
            break_on_punctuation: true,
        }
    }
}

impl PhraseSuggester {
    /// Build from the global settings (`[suggest]` section).
    pub fn from_settings() -> Self {
        let s = &settings().suggest;
        Self {
            confidence_threshold: s.confidence_threshold,
            break_on_punctuation: s.break_on_punctuation,
        }
    }
}

impl Suggester for PhraseSuggester {
    fn suggest<'a>(
        &self,
        n: usize,
        prefix_count: usize,
        is_last_word_complete: bool,
        results: &'a [TranslationResult],
    ) -> Vec<Suggestion<'a>> {
        let _span = debug_span!("suggest", n, prefix_count, is_last_word_complete).entered();
        let mut suggestions: Vec<Suggestion<'a>> = Vec::new();
        let mut accepted_texts: Vec<String> = Vec::new();

        for result in results {
            if suggestions.len() >= n {
                break;
            }
            match walk_candidate(
                result,
                prefix_count,
                is_last_word_complete,
                self.confidence_threshold,
                self.break_on_punctuation,
            ) {
                WalkOutcome::Words {
                    indices,
                    confidence,
                } => {
                    let suggestion = Suggestion::new(result, indices, confidence);
                    // A suggestion already offered by a better-ranked
                    // candidate subsumes this one if its text is at least as
                    // long and contains it whole.
                    let joined = suggestion.joined_text();
                    let duplicate = accepted_texts
                        .iter()
                        .any(|text| text.len() >= joined.len() && text.contains(&joined));
                    if !duplicate {
                        accepted_texts.push(joined);
                        suggestions.push(suggestion);
                    }
                }
                WalkOutcome::Skip => continue,
                WalkOutcome::Abort => break,
            }
        }

        debug!(count = suggestions.len());
        suggestions
    }
}
