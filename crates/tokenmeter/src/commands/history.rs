use chrono::Local;
use std::path::Path;
use tokenmeter_core::preview;
use tokenmeter_history::{
    default_file_name, search, ExportFormat, HistoryItem, HistoryStore, HistoryUpdate, Paths,
};

#[derive(Default)]
pub struct HistoryFilter {
    pub search: Option<String>,
    pub starred_only: bool,
    pub limit: Option<usize>,
}

fn filter_items<'a>(items: &'a [HistoryItem], filter: &HistoryFilter) -> Vec<&'a HistoryItem> {
    let matched = match filter.search.as_deref() {
        Some(query) => search(items, query),
        None => items.iter().collect(),
    };

    matched
        .into_iter()
        .filter(|item| !filter.starred_only || item.starred)
        .take(filter.limit.unwrap_or(usize::MAX))
        .collect()
}

fn compute_stats(items: &[&HistoryItem]) -> String {
    if items.is_empty() {
        return "No records to analyze.".to_string();
    }
    let total = items.len();
    let starred = items.iter().filter(|item| item.starred).count();
    let total_tokens: usize = items.iter().map(|item| item.result.count.tokens).sum();
    let avg_tokens = total_tokens as f64 / total as f64;

    let mut stats = format!(
        "Total records: {}\n\
         Starred: {}\n\
         Total tokens: {}\n\
         Avg tokens: {:.1}",
        total, starred, total_tokens, avg_tokens
    );

    // Costs only add up within one currency
    let mut currencies: Vec<_> = items.iter().map(|i| &i.result.cost.currency).collect();
    currencies.dedup();
    if let [currency] = currencies.as_slice() {
        let total_cost: f64 = items.iter().map(|i| i.result.cost.total_cost).sum();
        stats.push_str(&format!(
            "\nTotal cost: {}",
            currency.format_precise(total_cost)
        ));
    }
    stats
}

fn format_item(item: &HistoryItem) -> String {
    format!(
        "  {} {} {} | {} | {} tokens | {} | {}",
        if item.starred { "*" } else { " " },
        &item.id,
        item.timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M"),
        item.model_id,
        item.result.count.tokens,
        item.result.cost.currency.format_precise(item.result.cost.total_cost),
        preview(&item.text).replace('\n', " "),
    )
}

fn load(filter: &HistoryFilter) -> anyhow::Result<Vec<HistoryItem>> {
    let items = HistoryStore::new(&Paths::new()?).list()?;
    Ok(filter_items(&items, filter).into_iter().cloned().collect())
}

pub fn run_list(filter: &HistoryFilter) -> anyhow::Result<()> {
    let items = load(filter)?;
    if items.is_empty() {
        println!("No history");
        return Ok(());
    }

    println!("Saved Estimates ({})", items.len());
    println!("=====================");
    for item in &items {
        println!("{}", format_item(item));
    }
    Ok(())
}

pub fn run_stats(filter: &HistoryFilter) -> anyhow::Result<()> {
    let items = load(filter)?;
    let refs: Vec<_> = items.iter().collect();
    println!("{}", compute_stats(&refs));
    Ok(())
}

pub fn run_star(id: &str, starred: bool) -> anyhow::Result<()> {
    let store = HistoryStore::new(&Paths::new()?);
    let item = store.update(id, &HistoryUpdate::starred(starred))?;
    println!("{}", format_item(&item));
    Ok(())
}

pub fn run_remove(id: &str) -> anyhow::Result<()> {
    let store = HistoryStore::new(&Paths::new()?);
    store.remove(id)?;
    println!("Removed {id}");
    Ok(())
}

pub fn run_clear() -> anyhow::Result<()> {
    let store = HistoryStore::new(&Paths::new()?);
    store.clear()?;
    println!("History cleared");
    Ok(())
}

pub fn run_export(
    filter: &HistoryFilter,
    format: ExportFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let items = load(filter)?;
    let refs: Vec<_> = items.iter().collect();
    let rendered = format.render(&refs)?;

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => default_file_name(format, chrono::Utc::now()).into(),
    };
    std::fs::write(&path, rendered)?;
    tracing::info!(records = refs.len(), path = %path.display(), "history exported");
    println!("Exported {} records to {}", refs.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenmeter_core::{estimate, Currency, ModelId};

    fn item(text: &str, currency: Currency, starred: bool) -> HistoryItem {
        let result = estimate(text, &ModelId::Gpt4o, &currency);
        let mut item = HistoryItem::new(text, ModelId::Gpt4o, result);
        item.starred = starred;
        item
    }

    fn sample_items() -> Vec<HistoryItem> {
        vec![
            item("Summarize this report", Currency::Usd, true),
            item("translate to French", Currency::Usd, false),
            item("another REPORT draft", Currency::Usd, false),
        ]
    }

    #[test]
    fn test_no_filter_returns_all() {
        let items = sample_items();
        let filtered = filter_items(&items, &HistoryFilter::default());
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_filter_by_search() {
        let items = sample_items();
        let filtered = filter_items(
            &items,
            &HistoryFilter {
                search: Some("report".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[1].text, "another REPORT draft");
    }

    #[test]
    fn test_filter_starred_and_limit() {
        let items = sample_items();
        let starred = filter_items(
            &items,
            &HistoryFilter {
                starred_only: true,
                ..Default::default()
            },
        );
        assert_eq!(starred.len(), 1);
        assert_eq!(starred[0].text, "Summarize this report");

        let limited = filter_items(
            &items,
            &HistoryFilter {
                limit: Some(2),
                ..Default::default()
            },
        );
        assert_eq!(limited.len(), 2);
    }

    #[test]
    fn test_stats_mode() {
        let items = sample_items();
        let refs: Vec<_> = items.iter().collect();
        let stats = compute_stats(&refs);
        assert!(stats.contains("Total records: 3"));
        assert!(stats.contains("Starred: 1"));
        assert!(stats.contains("Total cost:"));
    }

    #[test]
    fn test_stats_mixed_currency_omits_cost() {
        let a = item("one", Currency::Usd, false);
        let b = item("two", Currency::Jpy, false);
        let stats = compute_stats(&[&a, &b]);
        assert!(stats.contains("Total records: 2"));
        assert!(!stats.contains("Total cost"));
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(compute_stats(&[]), "No records to analyze.");
    }

    #[test]
    fn test_format_item_marks_star() {
        let starred = item("multi\nline", Currency::Usd, true);
        let line = format_item(&starred);
        assert!(line.starts_with("  * "));
        assert!(line.contains(&starred.id));
        assert!(line.ends_with("multi line"));
    }
}
