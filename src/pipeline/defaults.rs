use crate::alignment::grouped_dp::align_groups;
use crate::alignment::normalize::tokenize_reference;
use crate::alignment::timing::synthesize_words;
use crate::config::AlignConfig;
use crate::pipeline::traits::{GroupAligner, ReferenceTokenizer, TimingSynthesizer};
use crate::types::{CorrectedWord, Group, HypWord, RefToken};

pub struct WhitespaceReferenceTokenizer;

impl ReferenceTokenizer for WhitespaceReferenceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<RefToken> {
        tokenize_reference(text)
    }
}

pub struct GroupedDpAligner;

impl GroupAligner for GroupedDpAligner {
    fn align_groups(
        &self,
        hyp: &[HypWord],
        reference: &[RefToken],
        config: &AlignConfig,
    ) -> Vec<Group> {
        align_groups(hyp, reference, config)
    }
}

pub struct ProportionalTimingSynthesizer;

impl TimingSynthesizer for ProportionalTimingSynthesizer {
    fn synthesize(
        &self,
        groups: &[Group],
        hyp: &[HypWord],
        reference: &[RefToken],
        config: &AlignConfig,
    ) -> Vec<CorrectedWord> {
        synthesize_words(groups, hyp, reference, config)
    }
}
