pub mod alignment;
pub mod config;
pub mod error;
pub mod formats;
pub mod pipeline;
pub mod types;

pub use config::AlignConfig;
pub use error::AlignError;
pub use pipeline::builder::TranscriptCorrectorBuilder;
pub use pipeline::runtime::{align_and_correct, TranscriptCorrector};
pub use pipeline::traits::{GroupAligner, ReferenceTokenizer, TimingSynthesizer};
pub use types::{CorrectedTranscript, CorrectedWord, Group, HypWord, HypWordInput, RefToken};
