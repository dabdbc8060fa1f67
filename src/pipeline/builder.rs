use crate::config::AlignConfig;
use crate::error::AlignError;
use crate::pipeline::defaults::{
    GroupedDpAligner, ProportionalTimingSynthesizer, WhitespaceReferenceTokenizer,
};
use crate::pipeline::runtime::{TranscriptCorrector, TranscriptCorrectorParts};
use crate::pipeline::traits::{GroupAligner, ReferenceTokenizer, TimingSynthesizer};

pub struct TranscriptCorrectorBuilder {
    config: AlignConfig,
    tokenizer: Option<Box<dyn ReferenceTokenizer>>,
    aligner: Option<Box<dyn GroupAligner>>,
    synthesizer: Option<Box<dyn TimingSynthesizer>>,
}

impl TranscriptCorrectorBuilder {
    pub fn new(config: AlignConfig) -> Self {
        Self {
            config,
            tokenizer: None,
            aligner: None,
            synthesizer: None,
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Box<dyn ReferenceTokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    pub fn with_aligner(mut self, aligner: Box<dyn GroupAligner>) -> Self {
        self.aligner = Some(aligner);
        self
    }

    pub fn with_synthesizer(mut self, synthesizer: Box<dyn TimingSynthesizer>) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }

    pub fn build(self) -> Result<TranscriptCorrector, AlignError> {
        validate_config(&self.config)?;

        Ok(TranscriptCorrector::from_parts(TranscriptCorrectorParts {
            config: self.config,
            tokenizer: self
                .tokenizer
                .unwrap_or_else(|| Box::new(WhitespaceReferenceTokenizer)),
            aligner: self.aligner.unwrap_or_else(|| Box::new(GroupedDpAligner)),
            synthesizer: self
                .synthesizer
                .unwrap_or_else(|| Box::new(ProportionalTimingSynthesizer)),
        }))
    }
}

fn validate_config(config: &AlignConfig) -> Result<(), AlignError> {
    if config.max_hyp_span == 0 || config.max_ref_span == 0 {
        return Err(AlignError::invalid_input(
            "group spans must allow at least one token per side",
        ));
    }
    if !config.group_penalty.is_finite()
        || !config.size_penalty.is_finite()
        || config.group_penalty < 0.0
        || config.size_penalty < 0.0
    {
        return Err(AlignError::invalid_input(
            "group and size penalties must be finite and non-negative",
        ));
    }
    if config.trailer_word_sec.is_nan() || config.trailer_word_sec <= 0.0 {
        return Err(AlignError::invalid_input(
            "trailer word duration must be positive",
        ));
    }
    if !(0.0..=1.0).contains(&config.trailer_confidence) {
        return Err(AlignError::invalid_input(
            "trailer confidence must lie in [0, 1]",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HypWordInput;

    #[test]
    fn builder_defaults_build() {
        let corrector = TranscriptCorrectorBuilder::new(AlignConfig::default())
            .build()
            .expect("default config should build");
        let out = corrector.correct(&[], "");
        assert!(out.words.is_empty());
    }

    #[test]
    fn build_rejects_zero_span() {
        let config = AlignConfig {
            max_hyp_span: 0,
            ..AlignConfig::default()
        };
        assert!(TranscriptCorrectorBuilder::new(config).build().is_err());
    }

    #[test]
    fn build_rejects_negative_penalty() {
        let config = AlignConfig {
            size_penalty: -0.1,
            ..AlignConfig::default()
        };
        assert!(TranscriptCorrectorBuilder::new(config).build().is_err());
    }

    #[test]
    fn build_rejects_out_of_range_trailer_confidence() {
        let config = AlignConfig {
            trailer_confidence: 1.5,
            ..AlignConfig::default()
        };
        assert!(TranscriptCorrectorBuilder::new(config).build().is_err());
    }

    #[test]
    fn custom_tokenizer_is_used() {
        use crate::pipeline::traits::ReferenceTokenizer;
        use crate::types::RefToken;

        struct FixedTokenizer;
        impl ReferenceTokenizer for FixedTokenizer {
            fn tokenize(&self, _text: &str) -> Vec<RefToken> {
                vec![RefToken {
                    raw: "fixed".to_string(),
                    norm: "fixed".to_string(),
                }]
            }
        }

        let corrector = TranscriptCorrectorBuilder::new(AlignConfig::default())
            .with_tokenizer(Box::new(FixedTokenizer))
            .build()
            .expect("build should succeed");
        let hyp = vec![HypWordInput {
            word: "fixd".to_string(),
            start: 0.0,
            end: 0.4,
            confidence: 0.7,
        }];
        let out = corrector.correct(&hyp, "ignored text");
        assert_eq!(out.words.len(), 1);
        assert_eq!(out.words[0].word, "fixed");
    }
}
