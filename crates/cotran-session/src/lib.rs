//! Interactive suggestion session for one source sentence.
//!
//! `TranslationSession` owns the ranked candidate translations and the
//! translator's typed prefix. It derives the engine's inputs (confirmed
//! token count, partial-word state) from raw text via the tokenizer, queries
//! the stateless engine on demand, and applies accepted suggestions back
//! onto the prefix.

#[cfg(test)]
mod tests;

use tracing::debug;

use cotran_core::result::TranslationResult;
use cotran_core::settings::settings;
use cotran_core::suggest::{PhraseSuggester, Suggester, Suggestion};
use cotran_core::tokenize::{LatinWordTokenizer, Tokenizer};
use cotran_core::unicode;

pub struct TranslationSession {
    suggester: PhraseSuggester,
    tokenizer: LatinWordTokenizer,
    results: Vec<TranslationResult>,
    prefix_text: String,
    prefix_tokens: Vec<String>,
    is_last_word_complete: bool,
}

impl TranslationSession {
    /// Start a session over a ranked (best-first) candidate list, with
    /// suggester and tokenizer built from the global settings.
    pub fn new(results: Vec<TranslationResult>) -> Self {
        Self::with_suggester(results, PhraseSuggester::from_settings())
    }

    pub fn with_suggester(results: Vec<TranslationResult>, suggester: PhraseSuggester) -> Self {
        Self {
            suggester,
            tokenizer: LatinWordTokenizer::from_settings(),
            results,
            prefix_text: String::new(),
            prefix_tokens: Vec::new(),
            is_last_word_complete: true,
        }
    }

    pub fn results(&self) -> &[TranslationResult] {
        &self.results
    }

    /// The raw prefix text as typed so far.
    pub fn prefix(&self) -> &str {
        &self.prefix_text
    }

    pub fn prefix_tokens(&self) -> &[String] {
        &self.prefix_tokens
    }

    /// False while the translator is mid-word (no trailing whitespace).
    pub fn is_last_word_complete(&self) -> bool {
        self.is_last_word_complete
    }

    /// Replace the whole prefix with `text`.
    pub fn set_prefix(&mut self, text: &str) {
        self.prefix_text = text.to_string();
        self.refresh_prefix_state();
    }

    /// Append raw typed text to the prefix.
    pub fn append_to_prefix(&mut self, addition: &str) {
        self.prefix_text.push_str(addition);
        self.refresh_prefix_state();
    }

    fn refresh_prefix_state(&mut self) {
        self.prefix_tokens = self
            .tokenizer
            .tokenize(&self.prefix_text)
            .into_iter()
            .map(str::to_string)
            .collect();
        self.is_last_word_complete = self
            .prefix_text
            .chars()
            .next_back()
            .map_or(true, unicode::is_whitespace);
    }

    /// Up to `n` suggestions for the current prefix.
    pub fn suggest(&self, n: usize) -> Vec<Suggestion<'_>> {
        self.suggester.suggest(
            n,
            self.prefix_tokens.len(),
            self.is_last_word_complete,
            &self.results,
        )
    }

    /// Suggestions with the settings-default count.
    pub fn suggestions(&self) -> Vec<Suggestion<'_>> {
        self.suggest(settings().suggest.max_results)
    }

    /// Apply the `index`-th current suggestion to the prefix: an in-progress
    /// partial word is replaced (the suggestion re-proposes its completion),
    /// then the suggested words are appended, each followed by a space.
    /// Returns the updated prefix, or `None` when no such suggestion exists.
    pub fn accept(&mut self, index: usize) -> Option<&str> {
        let words: Vec<String> = {
            let suggestions = self.suggestions();
            let suggestion = suggestions.get(index)?;
            suggestion.target_words().map(str::to_string).collect()
        };
        if !self.is_last_word_complete {
            if let Some(last) = self.prefix_tokens.last() {
                self.prefix_text.truncate(self.prefix_text.len() - last.len());
            }
        }
        for word in &words {
            self.prefix_text.push_str(word);
            self.prefix_text.push(' ');
        }
        self.refresh_prefix_state();
        debug!(accepted = words.len(), prefix_len = self.prefix_tokens.len());
        Some(self.prefix())
    }
}
