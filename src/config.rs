/// Tuning knobs for grouped alignment and timing synthesis.
///
/// The defaults are the values the correction pipeline ships with; every
/// documented output property assumes them.
#[derive(Debug, Clone)]
pub struct AlignConfig {
    /// Maximum hypothesis tokens a single group may consume.
    pub max_hyp_span: usize,
    /// Maximum reference tokens a single group may consume.
    pub max_ref_span: usize,
    /// Cost added per extra token in a group beyond the 1x1 minimum.
    pub group_penalty: f64,
    /// Cost added per token of imbalance between the two sides of a group.
    pub size_penalty: f64,
    /// Duration of each synthetic trailer word, in seconds.
    pub trailer_word_sec: f64,
    /// Confidence assigned to synthetic trailer words.
    pub trailer_confidence: f64,
}

impl AlignConfig {
    pub const DEFAULT_MAX_SPAN: usize = 3;
    pub const DEFAULT_GROUP_PENALTY: f64 = 0.005;
    pub const DEFAULT_SIZE_PENALTY: f64 = 0.01;
    pub const DEFAULT_TRAILER_WORD_SEC: f64 = 0.25;
    pub const DEFAULT_TRAILER_CONFIDENCE: f64 = 0.5;
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            max_hyp_span: Self::DEFAULT_MAX_SPAN,
            max_ref_span: Self::DEFAULT_MAX_SPAN,
            group_penalty: Self::DEFAULT_GROUP_PENALTY,
            size_penalty: Self::DEFAULT_SIZE_PENALTY,
            trailer_word_sec: Self::DEFAULT_TRAILER_WORD_SEC,
            trailer_confidence: Self::DEFAULT_TRAILER_CONFIDENCE,
        }
    }
}
