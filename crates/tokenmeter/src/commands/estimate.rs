use super::{load_settings, read_input, resolve_currency, resolve_model};
use crate::cli::InputArgs;
use serde::Serialize;
use tokenmeter_core::{estimate, projected_output_tokens, ModelId, TokenResult};
use tokenmeter_history::{HistoryItem, HistoryStore, Paths};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EstimateReport<'a> {
    model: &'a ModelId,
    #[serde(flatten)]
    result: &'a TokenResult,
    output_ratio: u8,
    projected_output_tokens: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved_id: Option<&'a str>,
}

fn format_report(report: &EstimateReport) -> String {
    let count = &report.result.count;
    let cost = &report.result.cost;
    let mut out = format!(
        "Model:        {}\n\
         Tokens:       {}\n\
         Characters:   {}\n\
         Words:        {}\n\
         Input cost:   {}\n\
         Output cost:  {}\n\
         Total cost:   {} ({})\n\
         Projected output at {}%: {} tokens",
        report.model,
        count.tokens,
        count.characters,
        count.words,
        cost.currency.format_precise(cost.input_cost),
        cost.currency.format_precise(cost.output_cost),
        cost.currency.format_precise(cost.total_cost),
        cost.currency.format_amount(cost.total_cost),
        report.output_ratio,
        report.projected_output_tokens,
    );
    if let Some(id) = report.saved_id {
        out.push_str(&format!("\nSaved to history: {id}"));
    }
    out
}

pub fn run(
    input: &InputArgs,
    model: Option<&str>,
    currency: Option<&str>,
    ratio: Option<u8>,
    save: bool,
    json: bool,
) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let settings = load_settings(&paths)?;
    let text = read_input(input)?;
    let model = resolve_model(model);
    let currency = resolve_currency(currency, &settings);
    let output_ratio = ratio.unwrap_or(settings.output_ratio);

    let result = estimate(&text, &model, &currency);

    let saved = if save {
        let item = HistoryItem::new(text, model.clone(), result.clone());
        let id = item.id.clone();
        HistoryStore::new(&paths).save(item)?;
        Some(id)
    } else {
        None
    };

    let report = EstimateReport {
        model: &model,
        result: &result,
        output_ratio,
        projected_output_tokens: projected_output_tokens(result.count.tokens, output_ratio),
        saved_id: saved.as_deref(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_report(&report));
    }
    Ok(())
}
