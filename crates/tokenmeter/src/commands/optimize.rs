use super::read_input;
use crate::cli::InputArgs;
use serde::Serialize;
use tokenmeter_core::{analyze, apply_all, count_text, OptimizationResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OptimizeReport<'a> {
    tokens: usize,
    #[serde(flatten)]
    result: &'a OptimizationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    optimized_text: Option<&'a str>,
}

/// Share of `tokens` the suggestions would save, in percent
fn savings_percent(savings: usize, tokens: usize) -> f64 {
    if tokens == 0 {
        return 0.0;
    }
    (savings as f64 / tokens as f64 * 100.0).min(100.0)
}

fn format_report(tokens: usize, result: &OptimizationResult) -> String {
    if result.is_empty() {
        return "No optimization suggestions.".to_string();
    }

    let mut lines = Vec::new();
    if !result.redundant_phrases.is_empty() {
        lines.push("Suggestions".to_string());
        lines.push("===========".to_string());
        for s in &result.redundant_phrases {
            let action = match &s.replacement {
                Some(replacement) => format!("-> {replacement}"),
                None => "-> (delete)".to_string(),
            };
            lines.push(format!(
                "  {} {} x{}  saves ~{} tokens",
                s.original, action, s.count, s.token_savings
            ));
        }
    }

    if !result.repeated_phrases.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("Repeated phrases".to_string());
        lines.push("================".to_string());
        for p in &result.repeated_phrases {
            lines.push(format!("  \"{}\" x{}", p.phrase, p.count));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Estimated savings: {} of {} tokens ({:.1}%)",
        result.total_token_savings,
        tokens,
        savings_percent(result.total_token_savings, tokens)
    ));
    lines.join("\n")
}

pub fn run(input: &InputArgs, apply: bool, json: bool) -> anyhow::Result<()> {
    let text = read_input(input)?;
    let tokens = count_text(&text).tokens;
    let result = analyze(&text);
    let optimized = apply.then(|| apply_all(&text, &result));

    if json {
        let report = OptimizeReport {
            tokens,
            result: &result,
            optimized_text: optimized.as_deref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match optimized {
        Some(optimized) => println!("{optimized}"),
        None => println!("{}", format_report(tokens, &result)),
    }
    Ok(())
}
