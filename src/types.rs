use serde::{Deserialize, Serialize};

/// One recognized word as handed in by the speech-recognition collaborator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HypWordInput {
    pub word: String,
    pub start: f64,
    pub end: f64,
    /// Recognizer confidence in [0, 1]; absent means fully trusted.
    #[serde(default = "default_confidence", alias = "conf")]
    pub confidence: f64,
}

fn default_confidence() -> f64 {
    1.0
}

/// Hypothesis word with its normalized form attached, ready for alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct HypWord {
    pub raw: String,
    pub norm: String,
    pub start_sec: f64,
    pub end_sec: f64,
    pub confidence: f64,
}

/// Reference word kept after normalization.
///
/// Tokens whose normalized form is empty (pure punctuation) are dropped with
/// no placeholder, so indices here do not map back to whitespace-split
/// positions in the raw reference text.
#[derive(Debug, Clone, PartialEq)]
pub struct RefToken {
    pub raw: String,
    pub norm: String,
}

/// A contiguous block pairing hypothesis tokens `[hyp_start, hyp_start+hyp_len)`
/// with reference tokens `[ref_start, ref_start+ref_len)`. Groups returned by
/// the aligner partition both streams in order, with no gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub hyp_start: usize,
    pub hyp_len: usize,
    pub ref_start: usize,
    pub ref_len: usize,
}

/// Corrected output word: reference wording, synthesized timing.
///
/// Seconds interval is [start_sec, end_sec] with `end_sec >= start_sec`;
/// across a transcript start times never decrease.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrectedWord {
    pub word: String,
    #[serde(rename = "start")]
    pub start_sec: f64,
    #[serde(rename = "end")]
    pub end_sec: f64,
    #[serde(rename = "conf")]
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CorrectedTranscript {
    pub words: Vec<CorrectedWord>,
}
