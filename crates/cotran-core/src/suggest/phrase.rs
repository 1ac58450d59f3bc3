//! Phrase walk over a single candidate translation.

use crate::result::{TranslationResult, TranslationSources};
use crate::unicode;

/// Outcome of walking one candidate.
///
/// The two empty-handed variants carry the two-level early-exit policy:
/// `Skip` moves on to the next candidate, `Abort` gives up on every
/// remaining candidate. Since the candidate list is ranked best-first, a
/// candidate that failed before inspecting a single token means no
/// lower-ranked candidate will do better.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum WalkOutcome {
    /// Collected word indices and their minimum confidence.
    Words { indices: Vec<usize>, confidence: f64 },
    /// Every inspected token was suppressed (punctuation lead-in): try the
    /// next candidate.
    Skip,
    /// No token was ever inspected, or the in-progress prefix word cannot
    /// be completed from this list: stop entirely.
    Abort,
}

/// Walk a candidate's phrases from the prefix boundary, collecting token
/// indices that pass the confidence and provenance filters.
pub(super) fn walk_candidate(
    result: &TranslationResult,
    prefix_count: usize,
    is_last_word_complete: bool,
    confidence_threshold: f64,
    break_on_punctuation: bool,
) -> WalkOutcome {
    // Starting cursor. A partial prefix word is re-proposed (cursor backs up
    // one token) only when the model actually produced that token; an
    // incompletable in-progress word means the candidate list cannot help.
    // The prefix may run past this candidate's tokens when the translator
    // has typed more than the candidate predicted; such a last word is
    // unattested by definition.
    let mut cursor = prefix_count;
    if !is_last_word_complete {
        let attested = cursor
            .checked_sub(1)
            .and_then(|last| result.sources.get(last))
            .is_some_and(|s| s.contains(TranslationSources::SMT));
        if !attested {
            return WalkOutcome::Abort;
        }
        cursor -= 1;
    }

    // Skip phrases already fully behind the cursor.
    let first = result
        .phrases
        .iter()
        .position(|p| p.target_segment_cut > cursor)
        .unwrap_or(result.phrases.len());

    let mut indices = Vec::new();
    let mut min_confidence = -1.0_f64;
    let mut num_words = 0_usize;
    let mut hit_punctuation = false;

    'phrases: for phrase in &result.phrases[first..] {
        if phrase.confidence < confidence_threshold {
            // Low-confidence phrase: the remainder is too uncertain to
            // extend through.
            break;
        }
        for j in cursor..phrase.target_segment_cut {
            if result.sources[j].is_empty() {
                // Unattested word: keep what was collected, stop extending.
                break 'phrases;
            }
            if unicode::is_all_punctuation(&result.target_tokens[j]) {
                hit_punctuation = true;
            }
            if !break_on_punctuation || !hit_punctuation {
                indices.push(j);
                let word_confidence = result.confidences[j];
                if min_confidence < 0.0 || word_confidence < min_confidence {
                    min_confidence = word_confidence;
                }
            }
            num_words += 1;
        }
        cursor = phrase.target_segment_cut;
    }

    if indices.is_empty() {
        if num_words > 0 {
            WalkOutcome::Skip
        } else {
            WalkOutcome::Abort
        }
    } else {
        WalkOutcome::Words {
            indices,
            confidence: if min_confidence < 0.0 {
                0.0
            } else {
                min_confidence
            },
        }
    }
}
