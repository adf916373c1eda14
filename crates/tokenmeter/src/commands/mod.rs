pub mod breakdown;
pub mod compare;
pub mod estimate;
pub mod history;
pub mod models;
pub mod optimize;
pub mod settings;
pub mod version;

use crate::cli::InputArgs;
use anyhow::Context;
use std::io::Read;
use tokenmeter_core::{Currency, ModelId};
use tokenmeter_history::{Paths, Settings, SettingsStore};

/// Text from the argument, the file, or stdin, in that order
pub fn read_input(input: &InputArgs) -> anyhow::Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }
    if let Some(path) = &input.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}

pub fn load_settings(paths: &Paths) -> anyhow::Result<Settings> {
    Ok(SettingsStore::new(paths).load()?)
}

/// Explicit flag, else the default model
pub fn resolve_model(model: Option<&str>) -> ModelId {
    let model = model.map(ModelId::parse).unwrap_or_default();
    if !model.is_known() {
        tracing::warn!(model = %model, "unknown model, pricing as {}", ModelId::default());
    }
    model
}

/// Explicit flag, else the saved currency
pub fn resolve_currency(currency: Option<&str>, settings: &Settings) -> Currency {
    let currency = currency
        .map(Currency::parse)
        .unwrap_or_else(|| settings.currency.clone());
    if !currency.is_known() {
        tracing::warn!(currency = %currency, "unknown currency, converting at USD parity");
    }
    currency
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_prefers_text() {
        let input = InputArgs {
            text: Some("inline".to_string()),
            file: None,
        };
        assert_eq!(read_input(&input).unwrap(), "inline");
    }

    #[test]
    fn test_read_input_from_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("prompt.txt");
        std::fs::write(&path, "from file").unwrap();
        let input = InputArgs {
            text: None,
            file: Some(path),
        };
        assert_eq!(read_input(&input).unwrap(), "from file");
    }

    #[test]
    fn test_read_input_missing_file() {
        let input = InputArgs {
            text: None,
            file: Some("/nonexistent/prompt.txt".into()),
        };
        let err = read_input(&input).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_resolve_model_default() {
        assert_eq!(resolve_model(None), ModelId::Gpt4o);
        assert_eq!(resolve_model(Some("o3")), ModelId::O3);
        assert!(!resolve_model(Some("GPT-5")).is_known());
    }

    #[test]
    fn test_resolve_currency_uses_settings() {
        let settings = Settings {
            currency: Currency::Gbp,
            ..Default::default()
        };
        assert_eq!(resolve_currency(None, &settings), Currency::Gbp);
        assert_eq!(resolve_currency(Some("JPY (¥)"), &settings), Currency::Jpy);
    }
}
