use crate::domain::coin::Coin;
use crate::domain::errors::FormError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six market metrics sent to the prediction service, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    Price,
    #[serde(rename = "price_1h")]
    Price1h,
    #[serde(rename = "price_24h")]
    Price24h,
    #[serde(rename = "price_7d")]
    Price7d,
    #[serde(rename = "volume_24h")]
    Volume24h,
    MarketCap,
}

impl MetricField {
    pub const ALL: [MetricField; 6] = [
        MetricField::Price,
        MetricField::Price1h,
        MetricField::Price24h,
        MetricField::Price7d,
        MetricField::Volume24h,
        MetricField::MarketCap,
    ];

    /// Wire name, also used as the form input name.
    pub fn key(&self) -> &'static str {
        match self {
            MetricField::Price => "price",
            MetricField::Price1h => "price_1h",
            MetricField::Price24h => "price_24h",
            MetricField::Price7d => "price_7d",
            MetricField::Volume24h => "volume_24h",
            MetricField::MarketCap => "market_cap",
        }
    }

    /// Input label: the key with underscores as spaces, uppercased.
    pub fn label(&self) -> String {
        self.key().replace('_', " ").to_uppercase()
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    fn index(&self) -> usize {
        match self {
            MetricField::Price => 0,
            MetricField::Price1h => 1,
            MetricField::Price24h => 2,
            MetricField::Price7d => 3,
            MetricField::Volume24h => 4,
            MetricField::MarketCap => 5,
        }
    }
}

impl fmt::Display for MetricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Any user-editable field. The symbol is deliberately absent: it is derived
/// from the selected coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Metric(MetricField),
    Date,
}

impl From<MetricField> for FormField {
    fn from(field: MetricField) -> Self {
        FormField::Metric(field)
    }
}

/// Raw form contents. Metric values stay text until submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    coin_id: Option<String>,
    symbol: String,
    date: String,
    metrics: [String; 6],
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coin_id(&self) -> Option<&str> {
        self.coin_id.as_deref()
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn date_text(&self) -> &str {
        &self.date
    }

    /// Parsed date, if one was entered as `YYYY-MM-DD`.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    pub fn metric(&self, field: MetricField) -> &str {
        &self.metrics[field.index()]
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Metric(metric) => self.metric(metric),
            FormField::Date => &self.date,
        }
    }

    /// Selects `coin`, or clears the selection when `None`. The symbol always
    /// follows the coin.
    pub fn set_coin(&mut self, coin: Option<&Coin>) {
        match coin {
            Some(coin) => {
                self.coin_id = Some(coin.id.clone());
                self.symbol = coin.ticker();
            }
            None => {
                self.coin_id = None;
                self.symbol.clear();
            }
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Metric(metric) => self.metrics[metric.index()] = value,
            FormField::Date => self.date = value,
        }
    }

    /// Mirrors the `required` attributes of the inputs.
    pub fn is_complete(&self) -> bool {
        self.coin_id.is_some() && self.metrics.iter().all(|value| !value.trim().is_empty())
    }

    /// Validates every metric and builds the request payload.
    pub fn to_request(&self) -> Result<PredictionRequest, FormError> {
        if self.coin_id.is_none() {
            return Err(FormError::MissingCoin);
        }

        let mut values = [0.0_f64; 6];
        for field in MetricField::ALL {
            values[field.index()] = parse_metric(field, self.metric(field))?;
        }

        Ok(PredictionRequest {
            price: values[MetricField::Price.index()],
            price_1h: values[MetricField::Price1h.index()],
            price_24h: values[MetricField::Price24h.index()],
            price_7d: values[MetricField::Price7d.index()],
            volume_24h: values[MetricField::Volume24h.index()],
            market_cap: values[MetricField::MarketCap.index()],
        })
    }
}

fn parse_metric(field: MetricField, raw: &str) -> Result<f64, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::EmptyField { field });
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FormError::NotANumber {
            field,
            value: trimmed.to_string(),
        }),
    }
}

/// Body of `POST /predict`: exactly the six metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub price: f64,
    pub price_1h: f64,
    pub price_24h: f64,
    pub price_7d: f64,
    pub volume_24h: f64,
    pub market_cap: f64,
}
