pub mod config;
pub mod normalizer;

pub use config::NormalizerConfig;
pub use normalizer::{
    normalize_latin, normalize_numbers, NormalizationResult, NumeralExpander, Replacement,
    ReplacementReason, SpeechNormalizer, Transliterator,
};
