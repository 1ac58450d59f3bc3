
use cotran_core::result::{Phrase, TranslationResult, TranslationSources};

use super::TranslationSession;

pub(super) fn make_result(tokens: &[&str], confidence: f64) -> TranslationResult {
    TranslationResult::new(
        tokens.iter().map(|t| t.to_string()).collect(),
        vec![confidence; tokens.len()],
        vec![TranslationSources::SMT; tokens.len()],
        vec![Phrase {
            target_segment_cut: tokens.len(),
            confidence,
        }],
    )
}

/// Two ranked hypotheses for the same source sentence.
pub(super) fn dog_results() -> Vec<TranslationResult> {
    vec![
        make_result(&["I", "saw", "the", "dog", "."], 0.9),
        make_result(&["I", "saw", "a", "dog", "."], 0.8),
    ]
}

pub(super) fn dog_session() -> TranslationSession {
    TranslationSession::new(dog_results())
}
