//! Heuristic prompt optimizer
//!
//! Three passes over the text, each adding to the savings estimate:
//! filler phrases from a fixed table, 4-word sequences that repeat, and
//! sentences too long to read comfortably.

use crate::fillers::FILLER_PHRASES;
use crate::types::{OptimizationResult, OptimizationSuggestion, RepeatedPhrase};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Words per candidate phrase in repeat detection
const PHRASE_WORDS: usize = 4;
/// Repeated phrases kept in the report
const MAX_REPEATED_PHRASES: usize = 5;
/// Trimmed length (in characters) above which a sentence is overlong
const LONG_SENTENCE_CHARS: usize = 100;
const LONG_SENTENCE_SAVINGS: usize = 2;

pub const LONG_SENTENCE_LABEL: &str = "过长句子";
pub const LONG_SENTENCE_HINT: &str = "将长句拆分为多个短句";

const SENTENCE_TERMINATORS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Analyze `text` for filler, repetition and overlong sentences
pub fn analyze(text: &str) -> OptimizationResult {
    if text.trim().is_empty() {
        return OptimizationResult::default();
    }

    let mut redundant_phrases = find_fillers(text);
    let repeated_phrases = find_repeated_phrases(text);

    let mut total_token_savings: usize = redundant_phrases.iter().map(|s| s.token_savings).sum();
    total_token_savings += repeated_phrases
        .iter()
        .map(|p| (p.count - 1) * p.phrase.chars().count() / 4)
        .sum::<usize>();

    let long_sentences = count_long_sentences(text);
    if long_sentences > 0 {
        let token_savings = long_sentences * LONG_SENTENCE_SAVINGS;
        redundant_phrases.push(OptimizationSuggestion {
            original: LONG_SENTENCE_LABEL.to_string(),
            replacement: Some(LONG_SENTENCE_HINT.to_string()),
            count: long_sentences,
            token_savings,
        });
        total_token_savings += token_savings;
    }

    tracing::debug!(
        suggestions = redundant_phrases.len(),
        repeated = repeated_phrases.len(),
        total_token_savings,
        "text analyzed"
    );

    OptimizationResult {
        redundant_phrases,
        repeated_phrases,
        total_token_savings,
    }
}

/// Literal, non-overlapping matches; not word-boundary aware
fn find_fillers(text: &str) -> Vec<OptimizationSuggestion> {
    FILLER_PHRASES
        .iter()
        .filter_map(|filler| {
            let count = text.matches(filler.phrase).count();
            (count > 0).then(|| OptimizationSuggestion {
                original: filler.phrase.to_string(),
                replacement: filler.replacement.map(str::to_string),
                count,
                token_savings: filler.token_savings * count,
            })
        })
        .collect()
}

/// Sliding 4-word windows seen at least twice, most frequent first
///
/// The text is split on whitespace runs without trimming, so leading or
/// trailing whitespace contributes an empty word. Ties keep the order in
/// which the phrases first appeared.
fn find_repeated_phrases(text: &str) -> Vec<RepeatedPhrase> {
    let words: Vec<&str> = WHITESPACE_RUN.split(text).collect();

    // phrase -> (count, first window index)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (pos, window) in words.windows(PHRASE_WORDS).enumerate() {
        counts.entry(window.join(" ")).or_insert((0, pos)).0 += 1;
    }

    let mut repeated: Vec<(String, usize, usize)> = counts
        .into_iter()
        .filter(|(_, (count, _))| *count >= 2)
        .map(|(phrase, (count, first))| (phrase, count, first))
        .collect();
    repeated.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    repeated.truncate(MAX_REPEATED_PHRASES);

    repeated
        .into_iter()
        .map(|(phrase, count, _)| RepeatedPhrase { phrase, count })
        .collect()
}

fn count_long_sentences(text: &str) -> usize {
    text.split(SENTENCE_TERMINATORS)
        .filter(|s| s.trim().chars().count() > LONG_SENTENCE_CHARS)
        .count()
}

/// Apply one suggestion to `text`, replacing or deleting every occurrence
///
/// The overlong-sentence hint needs a human and leaves the text as is.
pub fn apply_suggestion(text: &str, suggestion: &OptimizationSuggestion) -> String {
    if suggestion.original == LONG_SENTENCE_LABEL || suggestion.original.is_empty() {
        return text.to_string();
    }
    text.replace(
        &suggestion.original,
        suggestion.replacement.as_deref().unwrap_or(""),
    )
}

/// Apply every suggestion of `result` in report order
pub fn apply_all(text: &str, result: &OptimizationResult) -> String {
    result
        .redundant_phrases
        .iter()
        .fold(text.to_string(), |acc, s| apply_suggestion(&acc, s))
}
