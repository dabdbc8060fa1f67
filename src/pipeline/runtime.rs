use crate::alignment::normalize::prepare_hypothesis;
use crate::config::AlignConfig;
use crate::pipeline::traits::{GroupAligner, ReferenceTokenizer, TimingSynthesizer};
use crate::types::{CorrectedTranscript, CorrectedWord, HypWordInput};

/// Stateless transcript-correction engine. Holds only configuration and the
/// pluggable pipeline stages; every call works on fresh data, so independent
/// calls may run concurrently without coordination.
pub struct TranscriptCorrector {
    config: AlignConfig,
    tokenizer: Box<dyn ReferenceTokenizer>,
    aligner: Box<dyn GroupAligner>,
    synthesizer: Box<dyn TimingSynthesizer>,
}

pub(crate) struct TranscriptCorrectorParts {
    pub config: AlignConfig,
    pub tokenizer: Box<dyn ReferenceTokenizer>,
    pub aligner: Box<dyn GroupAligner>,
    pub synthesizer: Box<dyn TimingSynthesizer>,
}

impl TranscriptCorrector {
    pub(crate) fn from_parts(parts: TranscriptCorrectorParts) -> Self {
        Self {
            config: parts.config,
            tokenizer: parts.tokenizer,
            aligner: parts.aligner,
            synthesizer: parts.synthesizer,
        }
    }

    pub fn config(&self) -> &AlignConfig {
        &self.config
    }

    /// Align recognizer words against trusted reference text and return the
    /// corrected, re-timed word sequence.
    ///
    /// Degenerate inputs are data, not errors: an empty reference yields an
    /// empty transcript, and an empty hypothesis yields the whole reference
    /// as low-confidence trailer words.
    pub fn correct(
        &self,
        hypothesis: &[HypWordInput],
        reference_text: &str,
    ) -> CorrectedTranscript {
        let reference = self.tokenizer.tokenize(reference_text);
        let hyp = prepare_hypothesis(hypothesis);
        tracing::debug!(
            hyp_words = hyp.len(),
            ref_tokens = reference.len(),
            "correct: prepared token streams"
        );

        let groups = self.aligner.align_groups(&hyp, &reference, &self.config);
        let words = self
            .synthesizer
            .synthesize(&groups, &hyp, &reference, &self.config);
        tracing::debug!(
            groups = groups.len(),
            corrected_words = words.len(),
            "correct: alignment complete"
        );

        CorrectedTranscript { words }
    }
}

/// One-shot correction with the default pipeline and configuration.
pub fn align_and_correct(
    hypothesis: &[HypWordInput],
    reference_text: &str,
) -> Vec<CorrectedWord> {
    use crate::pipeline::defaults::{
        GroupedDpAligner, ProportionalTimingSynthesizer, WhitespaceReferenceTokenizer,
    };

    TranscriptCorrector::from_parts(TranscriptCorrectorParts {
        config: AlignConfig::default(),
        tokenizer: Box::new(WhitespaceReferenceTokenizer),
        aligner: Box::new(GroupedDpAligner),
        synthesizer: Box::new(ProportionalTimingSynthesizer),
    })
    .correct(hypothesis, reference_text)
    .words
}
