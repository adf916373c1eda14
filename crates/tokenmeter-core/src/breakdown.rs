//! Per-paragraph and per-word views of a text, for charts and reports

use crate::currency::Currency;
use crate::estimator::{estimate, projected_output_tokens};
use crate::models::ModelId;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

const PREVIEW_CHARS: usize = 50;
const TOP_WORDS: usize = 10;
const WORDS_PER_MINUTE: usize = 200;

static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParagraphTokens {
    /// 1-based position among all paragraphs, blank ones included
    pub index: usize,
    pub preview: String,
    pub tokens: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub paragraphs: Vec<ParagraphTokens>,
    pub top_words: Vec<WordFrequency>,
    pub input_tokens: usize,
    pub projected_output_tokens: usize,
    pub reading_minutes: usize,
}

/// First 50 characters, with an ellipsis when anything was cut
pub fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

pub fn reading_minutes(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE)
}

fn paragraph_tokens(text: &str, model: &ModelId) -> Vec<ParagraphTokens> {
    BLANK_LINE
        .split(text)
        .enumerate()
        .filter(|(_, p)| !p.trim().is_empty())
        .map(|(i, p)| ParagraphTokens {
            index: i + 1,
            preview: preview(p),
            tokens: estimate(p, model, &Currency::Usd).count.tokens,
        })
        .collect()
}

/// Lower-cased words longer than two characters, most frequent first
fn top_words(text: &str) -> Vec<WordFrequency> {
    let lowered = text.to_lowercase();
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (pos, word) in lowered
        .split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .enumerate()
    {
        counts.entry(word).or_insert((0, pos)).0 += 1;
    }

    let mut ranked: Vec<_> = counts.into_iter().collect();
    ranked.sort_by(|(_, (ca, pa)), (_, (cb, pb))| cb.cmp(ca).then(pa.cmp(pb)));
    ranked
        .into_iter()
        .take(TOP_WORDS)
        .map(|(word, (count, _))| WordFrequency {
            word: word.to_string(),
            count,
        })
        .collect()
}

/// Build the full breakdown of `text` for `model`
pub fn breakdown(text: &str, model: &ModelId, output_ratio: u8) -> Breakdown {
    let total = estimate(text, model, &Currency::Usd).count;
    Breakdown {
        paragraphs: paragraph_tokens(text, model),
        top_words: top_words(text),
        input_tokens: total.tokens,
        projected_output_tokens: projected_output_tokens(total.tokens, output_ratio),
        reading_minutes: reading_minutes(total.words),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates() {
        assert_eq!(preview("short"), "short");
        let long = "x".repeat(60);
        assert_eq!(preview(&long), format!("{}...", "x".repeat(50)));
        assert_eq!(preview(&"y".repeat(50)), "y".repeat(50));
    }

    #[test]
    fn test_paragraphs_skip_blank() {
        let text = "first paragraph\n\n\n  \nsecond one here\n\nthird";
        let result = breakdown(text, &ModelId::Gpt4o, 50);
        assert_eq!(result.paragraphs.len(), 3);
        assert_eq!(result.paragraphs[0].preview, "first paragraph");
        assert_eq!(result.paragraphs[0].tokens, 4);
        assert_eq!(result.paragraphs[2].preview, "third");
    }

    #[test]
    fn test_top_words_ranked() {
        let text = "Rust rust RUST is fun and fun is rust";
        let words = top_words(text);
        assert_eq!(words[0].word, "rust");
        assert_eq!(words[0].count, 4);
        assert_eq!(words[1].word, "fun");
        assert_eq!(words[1].count, 2);
        // "is" is too short
        assert!(words.iter().all(|w| w.word != "is"));
    }

    #[test]
    fn test_top_words_capped() {
        let text: String = (0..20).map(|i| format!("word{i} ")).collect();
        assert_eq!(top_words(&text).len(), TOP_WORDS);
    }

    #[test]
    fn test_reading_minutes() {
        assert_eq!(reading_minutes(0), 0);
        assert_eq!(reading_minutes(1), 1);
        assert_eq!(reading_minutes(200), 1);
        assert_eq!(reading_minutes(201), 2);
    }

    #[test]
    fn test_distribution() {
        let result = breakdown(&"abcd".repeat(25), &ModelId::O3, 40);
        assert_eq!(result.input_tokens, 25);
        assert_eq!(result.projected_output_tokens, 10);
    }
}
