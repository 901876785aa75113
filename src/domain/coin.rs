use serde::{Deserialize, Serialize};

/// A trending coin as supplied by the directory provider. Never mutated locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub id: String,
    pub name: String,
    pub symbol: String,
}

impl Coin {
    pub fn new(id: impl Into<String>, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    /// Ticker as displayed in the form (always uppercase).
    pub fn ticker(&self) -> String {
        self.symbol.to_uppercase()
    }

    /// Label used by the coin selector, e.g. "Bitcoin (BTC)".
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.ticker())
    }
}

pub fn find_coin<'a>(coins: &'a [Coin], id: &str) -> Option<&'a Coin> {
    coins.iter().find(|coin| coin.id == id)
}
