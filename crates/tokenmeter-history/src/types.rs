//! Persisted record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokenmeter_core::{Currency, ModelId, TokenResult};

/// One saved estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    pub text: String,
    pub model_id: ModelId,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub result: TokenResult,
    #[serde(default)]
    pub starred: bool,
}

impl HistoryItem {
    /// New unstarred record with a fresh id, stamped now
    pub fn new(text: impl Into<String>, model_id: ModelId, result: TokenResult) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            model_id,
            timestamp: Utc::now(),
            result,
            starred: false,
        }
    }
}

/// Partial update applied by `HistoryStore::update`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryUpdate {
    pub starred: Option<bool>,
}

impl HistoryUpdate {
    pub fn starred(starred: bool) -> Self {
        Self {
            starred: Some(starred),
        }
    }

    pub(crate) fn apply(&self, item: &mut HistoryItem) {
        if let Some(starred) = self.starred {
            item.starred = starred;
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        })
    }
}

/// User preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub theme: Theme,
    pub currency: Currency,
    /// Output/input ratio in percent for what-if projections
    pub output_ratio: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            currency: Currency::Usd,
            output_ratio: 50,
        }
    }
}
