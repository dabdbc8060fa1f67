use crate::types::{HypWord, HypWordInput, RefToken};

/// Canonical comparable form of a token: lower-cased, with everything that is
/// not a basic Latin letter removed. Applied identically to hypothesis and
/// reference tokens so comparisons are symmetric.
pub fn normalize_token(token: &str) -> String {
    token
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Split reference text on whitespace and keep tokens whose normalized form
/// is non-empty.
///
/// Dropped tokens leave no placeholder: indices into the returned vec do not
/// correspond to whitespace-split positions of the raw text, and callers that
/// need raw-text offsets must recompute that mapping themselves.
pub fn tokenize_reference(text: &str) -> Vec<RefToken> {
    text.split_whitespace()
        .filter_map(|tok| {
            let norm = normalize_token(tok);
            if norm.is_empty() {
                return None;
            }
            Some(RefToken {
                raw: tok.to_string(),
                norm,
            })
        })
        .collect()
}

/// Attach normalized forms to recognizer words, in input order.
pub fn prepare_hypothesis(words: &[HypWordInput]) -> Vec<HypWord> {
    words
        .iter()
        .map(|w| HypWord {
            raw: w.word.clone(),
            norm: normalize_token(&w.word),
            start_sec: w.start,
            end_sec: w.end,
            confidence: w.confidence,
        })
        .collect()
}
