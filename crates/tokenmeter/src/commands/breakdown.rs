use super::{load_settings, read_input, resolve_model};
use crate::cli::InputArgs;
use tokenmeter_core::{breakdown, Breakdown};
use tokenmeter_history::Paths;

const BAR_WIDTH: usize = 30;

fn bar(value: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    "#".repeat((value * BAR_WIDTH).div_ceil(max))
}

fn format_breakdown(report: &Breakdown, output_ratio: u8) -> String {
    let mut lines = vec![
        format!("Input tokens:     {}", report.input_tokens),
        format!(
            "Projected output: {} tokens ({}% of input)",
            report.projected_output_tokens, output_ratio
        ),
        format!("Reading time:     {} min", report.reading_minutes),
    ];

    if !report.paragraphs.is_empty() {
        let max = report
            .paragraphs
            .iter()
            .map(|p| p.tokens)
            .max()
            .unwrap_or(0);
        lines.push(String::new());
        lines.push("Paragraphs".to_string());
        lines.push("==========".to_string());
        for p in &report.paragraphs {
            lines.push(format!(
                "  {:>3} {:>6} {:<width$} {}",
                p.index,
                p.tokens,
                bar(p.tokens, max),
                p.preview,
                width = BAR_WIDTH
            ));
        }
    }

    if !report.top_words.is_empty() {
        lines.push(String::new());
        lines.push("Top words".to_string());
        lines.push("=========".to_string());
        for w in &report.top_words {
            lines.push(format!("  {:<20} {}", w.word, w.count));
        }
    }

    lines.join("\n")
}

pub fn run(input: &InputArgs, model: Option<&str>, json: bool) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let settings = load_settings(&paths)?;
    let text = read_input(input)?;
    let model = resolve_model(model);

    let report = breakdown(&text, &model, settings.output_ratio);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_breakdown(&report, settings.output_ratio));
    }
    Ok(())
}
