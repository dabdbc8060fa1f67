use crate::config::AlignConfig;
use crate::types::{CorrectedWord, Group, HypWord, RefToken};

pub trait ReferenceTokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<RefToken>;
}

pub trait GroupAligner: Send + Sync {
    fn align_groups(
        &self,
        hyp: &[HypWord],
        reference: &[RefToken],
        config: &AlignConfig,
    ) -> Vec<Group>;
}

pub trait TimingSynthesizer: Send + Sync {
    fn synthesize(
        &self,
        groups: &[Group],
        hyp: &[HypWord],
        reference: &[RefToken],
        config: &AlignConfig,
    ) -> Vec<CorrectedWord>;
}
