use super::{load_settings, read_input, resolve_currency};
use crate::cli::InputArgs;
use tokenmeter_core::{compare_models, ModelComparison};
use tokenmeter_history::Paths;

fn format_table(rows: &[ModelComparison]) -> String {
    let mut lines = vec![
        format!(
            "{:<22} {:>8} {:>16} {:>16} {:>16}",
            "Model", "Tokens", "Input", "Output", "Total"
        ),
        "-".repeat(82),
    ];

    for row in rows {
        let cost = &row.result.cost;
        lines.push(format!(
            "{:<22} {:>8} {:>16.6} {:>16.6} {:>16.6}",
            row.model.to_string(),
            row.result.count.tokens,
            cost.input_cost,
            cost.output_cost,
            cost.total_cost
        ));
    }

    if let Some(first) = rows.first() {
        lines.push(format!("Costs in {}", first.result.cost.currency));
    }
    lines.join("\n")
}

/// Cheapest model by total cost; the first listed wins a tie
fn cheapest(rows: &[ModelComparison]) -> Option<&ModelComparison> {
    rows.iter().fold(None, |best, row| match best {
        Some(b) if b.result.cost.total_cost <= row.result.cost.total_cost => Some(b),
        _ => Some(row),
    })
}

pub fn run(input: &InputArgs, currency: Option<&str>, json: bool) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let settings = load_settings(&paths)?;
    let text = read_input(input)?;
    let currency = resolve_currency(currency, &settings);

    let rows = compare_models(&text, &currency);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", format_table(&rows));
    if let Some(best) = cheapest(&rows) {
        println!(
            "Cheapest: {} ({})",
            best.model,
            currency.format_amount(best.result.cost.total_cost)
        );
    }
    Ok(())
}
