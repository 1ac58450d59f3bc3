//! Candidate translation data supplied by the decoder.
//!
//! A [`TranslationResult`] is one ranked hypothesis for a source sentence:
//! the full target token sequence with per-token confidence and provenance,
//! partitioned into contiguous phrase segments. The suggestion engine only
//! reads this data; producing and ranking it is the decoder's job.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Provenance of a target token. A token may carry several attributions
    /// at once (e.g. produced by the SMT model *and* echoed from the prefix),
    /// so this is a flag set rather than an enum. An empty set means the
    /// token is unattested — the decoder passed it through without knowing it.
    // Serialize/Deserialize come from the bitflags `serde` feature.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TranslationSources: u8 {
        /// Attributed to the statistical alignment model.
        const SMT = 1;
        /// Produced by a transfer rule.
        const TRANSFER = 2;
        /// Echoed from the user-confirmed prefix.
        const PREFIX = 4;
    }
}

/// One contiguous segment of the target token sequence, produced as a unit
/// by the decoder. Phrases partition the token sequence: each carries the
/// exclusive upper bound of its segment, and the cuts increase strictly,
/// ending at the token count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    /// Exclusive upper bound into `target_tokens`.
    pub target_segment_cut: usize,
    /// Phrase-level confidence, independent of the per-token scores.
    pub confidence: f64,
}

/// One ranked candidate translation.
///
/// `confidences` and `sources` are parallel to `target_tokens`; `phrases`
/// must cover index 0 through `target_tokens.len()` with strictly increasing
/// cuts. The suggestion engine assumes these invariants and does not
/// re-validate them (callers enforce them when decoding).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub target_tokens: Vec<String>,
    pub confidences: Vec<f64>,
    pub sources: Vec<TranslationSources>,
    pub phrases: Vec<Phrase>,
}

impl TranslationResult {
    pub fn new(
        target_tokens: Vec<String>,
        confidences: Vec<f64>,
        sources: Vec<TranslationSources>,
        phrases: Vec<Phrase>,
    ) -> Self {
        debug_assert_eq!(target_tokens.len(), confidences.len());
        debug_assert_eq!(target_tokens.len(), sources.len());
        debug_assert!(phrases
            .windows(2)
            .all(|w| w[0].target_segment_cut < w[1].target_segment_cut));
        debug_assert!(
            phrases.last().map_or(target_tokens.is_empty(), |p| p
                .target_segment_cut
                == target_tokens.len()),
            "phrases must cover the whole token sequence"
        );
        Self {
            target_tokens,
            confidences,
            sources,
            phrases,
        }
    }
}
