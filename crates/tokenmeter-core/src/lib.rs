//! Token/cost estimation and prompt optimization heuristics

mod breakdown;
mod currency;
mod error;
mod estimator;
mod fillers;
mod models;
mod optimizer;
mod types;

pub use breakdown::{
    breakdown, preview, reading_minutes, Breakdown, ParagraphTokens, WordFrequency,
};
pub use currency::Currency;
pub use error::EstimateError;
pub use estimator::{
    compare_models, count_text, estimate, is_cjk, projected_output_tokens, try_estimate,
    ModelComparison,
};
pub use fillers::{FillerPhrase, FILLER_PHRASES};
pub use models::{ModelId, ModelProfile, DEFAULT_MODEL, MODELS};
pub use optimizer::{
    analyze, apply_all, apply_suggestion, LONG_SENTENCE_HINT, LONG_SENTENCE_LABEL,
};
pub use types::{
    OptimizationResult, OptimizationSuggestion, RepeatedPhrase, TokenCost, TokenCount, TokenResult,
};
