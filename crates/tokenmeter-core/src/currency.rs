//! Currency labels and USD exchange rates

use serde::{Deserialize, Serialize};
use std::fmt;

/// A display currency, keyed by its UI label (e.g. `"USD ($)"`)
///
/// Labels outside the known table are kept verbatim in `Other` and
/// convert at USD parity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    #[default]
    Usd,
    Cny,
    Eur,
    Gbp,
    Jpy,
    Other(String),
}

impl Currency {
    pub const KNOWN: [Currency; 5] = [
        Currency::Usd,
        Currency::Cny,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
    ];

    pub fn parse(label: &str) -> Self {
        match label {
            "USD ($)" => Currency::Usd,
            "CNY (¥)" => Currency::Cny,
            "EUR (€)" => Currency::Eur,
            "GBP (£)" => Currency::Gbp,
            "JPY (¥)" => Currency::Jpy,
            other => Currency::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Currency::Usd => "USD ($)",
            Currency::Cny => "CNY (¥)",
            Currency::Eur => "EUR (€)",
            Currency::Gbp => "GBP (£)",
            Currency::Jpy => "JPY (¥)",
            Currency::Other(label) => label,
        }
    }

    /// Multiplier applied to a USD amount
    pub fn rate(&self) -> f64 {
        match self {
            Currency::Usd => 1.0,
            Currency::Cny => 7.2,
            Currency::Eur => 0.92,
            Currency::Gbp => 0.79,
            Currency::Jpy => 150.5,
            Currency::Other(label) => {
                tracing::debug!(currency = %label, "unknown currency, using USD parity");
                1.0
            }
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Cny | Currency::Jpy => "¥",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Other(_) => "",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Currency::Other(_))
    }

    /// Symbol plus amount at display precision (yen has no minor unit)
    pub fn format_amount(&self, amount: f64) -> String {
        match self {
            Currency::Jpy => format!("{}{:.0}", self.symbol(), amount),
            _ => format!("{}{:.2}", self.symbol(), amount),
        }
    }

    /// Six-decimal amount followed by the label, as shown in history listings
    pub fn format_precise(&self, amount: f64) -> String {
        format!("{:.6} {}", amount, self.label())
    }
}

impl From<&str> for Currency {
    fn from(label: &str) -> Self {
        Currency::parse(label)
    }
}

impl From<String> for Currency {
    fn from(label: String) -> Self {
        Currency::parse(&label)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.label().to_string()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
