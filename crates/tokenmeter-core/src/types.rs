//! Value types produced by the estimator and the optimizer

use crate::currency::Currency;
use serde::{Deserialize, Serialize};

/// Token, character and word counts for one piece of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCount {
    pub tokens: usize,
    pub characters: usize,
    pub words: usize,
}

/// Cost breakdown in a single currency
///
/// `total_cost` is always `input_cost + output_cost`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCost {
    pub input_cost: f64,
    pub output_cost: f64,
    pub total_cost: f64,
    pub currency: Currency,
}

impl TokenCost {
    pub fn zero(currency: Currency) -> Self {
        Self {
            input_cost: 0.0,
            output_cost: 0.0,
            total_cost: 0.0,
            currency,
        }
    }

    pub fn new(input_cost: f64, output_cost: f64, currency: Currency) -> Self {
        Self {
            input_cost,
            output_cost,
            total_cost: input_cost + output_cost,
            currency,
        }
    }
}

/// Snapshot of one estimate (the payload stored in history records)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResult {
    pub count: TokenCount,
    pub cost: TokenCost,
}

/// A filler phrase found in the text, or the synthetic overlong-sentence hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationSuggestion {
    pub original: String,
    /// `None` means the phrase should simply be deleted
    pub replacement: Option<String>,
    pub count: usize,
    pub token_savings: usize,
}

/// A 4-word sequence that occurs more than once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatedPhrase {
    pub phrase: String,
    pub count: usize,
}

/// Full report of one `analyze` call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub redundant_phrases: Vec<OptimizationSuggestion>,
    pub repeated_phrases: Vec<RepeatedPhrase>,
    pub total_token_savings: usize,
}

impl OptimizationResult {
    pub fn is_empty(&self) -> bool {
        self.redundant_phrases.is_empty() && self.repeated_phrases.is_empty()
    }
}
