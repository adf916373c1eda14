//! CSV and JSON export of history records

use crate::types::HistoryItem;
use chrono::{DateTime, Local, Utc};
use tokenmeter_core::preview;

const CSV_HEADERS: [&str; 5] = ["Date", "Model", "Tokens", "Text Preview", "Cost"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn render(self, items: &[&HistoryItem]) -> serde_json::Result<String> {
        match self {
            ExportFormat::Csv => Ok(to_csv(items)),
            ExportFormat::Json => to_json(items),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unsupported export format: {other}")),
        }
    }
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// Header line plus one fully quoted row per record
pub fn to_csv(items: &[&HistoryItem]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for item in items {
        let cost = &item.result.cost;
        let row = [
            item.timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            item.model_id.to_string(),
            item.result.count.tokens.to_string(),
            preview(&item.text),
            cost.currency.format_precise(cost.total_cost),
        ];
        lines.push(
            row.iter()
                .map(|cell| quote(cell))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    lines.join("\n")
}

/// Pretty-printed JSON array of the records
pub fn to_json(items: &[&HistoryItem]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(items)
}

/// `token_history_<date>.<ext>`
pub fn default_file_name(format: ExportFormat, now: DateTime<Utc>) -> String {
    format!(
        "token_history_{}.{}",
        now.format("%Y-%m-%d"),
        format.extension()
    )
}
