//! Model pricing table

use serde::{Deserialize, Serialize};
use std::fmt;

/// Static pricing profile for one model (prices in USD per 1M tokens)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelProfile {
    pub id: &'static str,
    pub name: &'static str,
    /// Reserved for exact tokenizers; the heuristic ignores it
    pub encoding: &'static str,
    pub input_price: f64,
    pub output_price: f64,
}

const fn entry(
    id: &'static str,
    name: &'static str,
    input_price: f64,
    output_price: f64,
) -> ModelProfile {
    ModelProfile {
        id,
        name,
        encoding: "cl100k_base",
        input_price,
        output_price,
    }
}

/// All supported models, in display order
pub static MODELS: [ModelProfile; 10] = [
    entry("gpt-4o", "GPT-4o", 10.0, 30.0),
    entry("o3", "o3", 10.0, 40.0),
    entry("o4-mini", "o4-mini", 1.1, 4.4),
    entry("o4-mini-high", "o4-mini-high", 1.1, 4.4),
    entry("claude-4-opus", "Claude 4 Opus", 15.0, 75.0),
    entry("claude-4-sonnet", "Claude 4 Sonnet", 3.0, 15.0),
    entry("claude-3.7-sonnet", "Claude 3.7 Sonnet", 3.0, 15.0),
    entry(
        "gemini-2.5-pro-preview-05-06",
        "Gemini 2.5 Pro Preview",
        1.25,
        10.0,
    ),
    entry("deepseek-reasoner", "DeepSeek Reasoner", 0.14, 2.19),
    entry("deepseek-chat", "DeepSeek Chat", 0.07, 1.1),
];

/// Model used when an identifier is not in the table
pub const DEFAULT_MODEL: ModelId = ModelId::Gpt4o;

/// Model selection, keyed by the table's display name (e.g. `"Claude 4 Opus"`)
///
/// Names outside the table survive as `Unknown` so records written by
/// other versions still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelId {
    Gpt4o,
    O3,
    O4Mini,
    O4MiniHigh,
    Claude4Opus,
    Claude4Sonnet,
    Claude37Sonnet,
    Gemini25ProPreview,
    DeepSeekReasoner,
    DeepSeekChat,
    Unknown(String),
}

impl ModelId {
    const KNOWN: [ModelId; 10] = [
        ModelId::Gpt4o,
        ModelId::O3,
        ModelId::O4Mini,
        ModelId::O4MiniHigh,
        ModelId::Claude4Opus,
        ModelId::Claude4Sonnet,
        ModelId::Claude37Sonnet,
        ModelId::Gemini25ProPreview,
        ModelId::DeepSeekReasoner,
        ModelId::DeepSeekChat,
    ];

    pub fn parse(key: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|m| m.key() == key)
            .unwrap_or_else(|| ModelId::Unknown(key.to_string()))
    }

    /// Known models in table order
    pub fn all() -> impl Iterator<Item = ModelId> {
        Self::KNOWN.into_iter()
    }

    fn index(&self) -> Option<usize> {
        let idx = match self {
            ModelId::Gpt4o => 0,
            ModelId::O3 => 1,
            ModelId::O4Mini => 2,
            ModelId::O4MiniHigh => 3,
            ModelId::Claude4Opus => 4,
            ModelId::Claude4Sonnet => 5,
            ModelId::Claude37Sonnet => 6,
            ModelId::Gemini25ProPreview => 7,
            ModelId::DeepSeekReasoner => 8,
            ModelId::DeepSeekChat => 9,
            ModelId::Unknown(_) => return None,
        };
        Some(idx)
    }

    pub fn key(&self) -> &str {
        match self {
            ModelId::Unknown(key) => key,
            known => known.profile().map_or("", |p| p.name),
        }
    }

    /// Strict lookup: `None` for models outside the table
    pub fn profile(&self) -> Option<&'static ModelProfile> {
        self.index().map(|idx| &MODELS[idx])
    }

    /// Lookup with the `DEFAULT_MODEL` fallback
    pub fn resolve(&self) -> &'static ModelProfile {
        match self.profile() {
            Some(profile) => profile,
            None => {
                tracing::debug!(model = %self, fallback = MODELS[0].name, "unknown model");
                &MODELS[0]
            }
        }
    }

    pub fn is_known(&self) -> bool {
        self.index().is_some()
    }
}

impl Default for ModelId {
    fn default() -> Self {
        DEFAULT_MODEL
    }
}

impl From<&str> for ModelId {
    fn from(key: &str) -> Self {
        ModelId::parse(key)
    }
}

impl From<String> for ModelId {
    fn from(key: String) -> Self {
        ModelId::parse(&key)
    }
}

impl From<ModelId> for String {
    fn from(model: ModelId) -> Self {
        model.key().to_string()
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_ten_models() {
        assert_eq!(MODELS.len(), 10);
        assert_eq!(ModelId::all().count(), 10);
    }

    #[test]
    fn test_keys_match_table_order() {
        for (model, profile) in ModelId::all().zip(MODELS.iter()) {
            assert_eq!(model.key(), profile.name);
            assert_eq!(model.profile(), Some(profile));
            assert_eq!(ModelId::parse(profile.name), model);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            ModelId::parse("gpt-4o"),
            ModelId::Unknown("gpt-4o".to_string())
        );
        assert_eq!(ModelId::parse("GPT-4o"), ModelId::Gpt4o);
    }

    #[test]
    fn test_unknown_model_resolves_to_default() {
        let unknown = ModelId::parse("GPT-4");
        assert!(unknown.profile().is_none());
        assert_eq!(unknown.resolve().name, DEFAULT_MODEL.key());
        assert_eq!(unknown.resolve().input_price, 10.0);
    }

    #[test]
    fn test_default_model_is_first_entry() {
        assert_eq!(DEFAULT_MODEL.profile(), Some(&MODELS[0]));
        assert_eq!(ModelId::default(), ModelId::Gpt4o);
    }

    #[test]
    fn test_serializes_as_key() {
        let json = serde_json::to_string(&ModelId::Claude37Sonnet).unwrap();
        assert_eq!(json, "\"Claude 3.7 Sonnet\"");
        let parsed: ModelId = serde_json::from_str("\"Future Model 9\"").unwrap();
        assert_eq!(parsed, ModelId::Unknown("Future Model 9".to_string()));
    }
}
