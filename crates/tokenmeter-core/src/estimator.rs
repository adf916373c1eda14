//! Token and cost estimation
//!
//! No real tokenizer is involved: each CJK ideograph counts as one token
//! and every other character as a quarter token, rounded up over the
//! whole text.

use crate::currency::Currency;
use crate::error::EstimateError;
use crate::models::{ModelId, ModelProfile};
use crate::types::{TokenCost, TokenCount, TokenResult};
use serde::Serialize;

const TOKENS_PER_MILLION: f64 = 1_000_000.0;

/// Assumed output length as a fraction of input length
const OUTPUT_RATIO: f64 = 0.5;

/// CJK Unified Ideographs, U+4E00..=U+9FA5
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Count tokens, characters and words without pricing anything
pub fn count_text(text: &str) -> TokenCount {
    if text.is_empty() {
        return TokenCount::default();
    }

    let mut characters: usize = 0;
    let mut cjk: usize = 0;
    for c in text.chars() {
        characters += 1;
        if is_cjk(c) {
            cjk += 1;
        }
    }

    // Whitespace-only text has no words
    let words = text.split_whitespace().count();

    // ceil(cjk + other / 4) with an integral cjk part
    let tokens = cjk + (characters - cjk).div_ceil(4);

    TokenCount {
        tokens,
        characters,
        words,
    }
}

fn price(count: TokenCount, profile: &ModelProfile, currency: Currency) -> TokenCost {
    let rate = currency.rate();
    let tokens = count.tokens as f64;
    let input_cost = tokens * profile.input_price / TOKENS_PER_MILLION * rate;
    let output_cost = tokens * OUTPUT_RATIO * profile.output_price / TOKENS_PER_MILLION * rate;
    TokenCost::new(input_cost, output_cost, currency)
}

/// Estimate tokens and cost for `text`
///
/// Unknown models are priced as `DEFAULT_MODEL`, unknown currencies at
/// USD parity. Empty text short-circuits to an all-zero result.
pub fn estimate(text: &str, model: &ModelId, currency: &Currency) -> TokenResult {
    if text.is_empty() {
        return TokenResult {
            count: TokenCount::default(),
            cost: TokenCost::zero(currency.clone()),
        };
    }

    let count = count_text(text);
    TokenResult {
        count,
        cost: price(count, model.resolve(), currency.clone()),
    }
}

/// Like [`estimate`], but refuses models outside the pricing table
pub fn try_estimate(
    text: &str,
    model: &ModelId,
    currency: &Currency,
) -> Result<TokenResult, EstimateError> {
    if model.profile().is_none() {
        return Err(EstimateError::UnknownModel(model.clone()));
    }
    Ok(estimate(text, model, currency))
}

/// What-if output size for an output/input ratio given in percent
pub fn projected_output_tokens(tokens: usize, ratio_percent: u8) -> usize {
    let ratio = ratio_percent.min(100) as f64;
    (tokens as f64 * ratio / 100.0).round() as usize
}

/// One row of a cross-model comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelComparison {
    pub model: ModelId,
    pub result: TokenResult,
}

/// Estimate `text` against every known model, in table order
pub fn compare_models(text: &str, currency: &Currency) -> Vec<ModelComparison> {
    ModelId::all()
        .map(|model| {
            let result = estimate(text, &model, currency);
            ModelComparison { model, result }
        })
        .collect()
}
