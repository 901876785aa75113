use serde::{Deserialize, Serialize};
use std::fmt;

/// Response of the prediction service, kept verbatim for display.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(default)]
    pub liquidity_level: Option<String>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub investment_advice: Option<String>,
}

impl PredictionResult {
    pub fn liquidity_tone(&self) -> LiquidityTone {
        LiquidityTone::from_level(self.liquidity_level.as_deref())
    }

    pub fn advice(&self) -> InvestmentAdvice {
        InvestmentAdvice::from_label(self.investment_advice.as_deref())
    }

    pub fn liquidity_label(&self) -> &str {
        self.liquidity_level.as_deref().unwrap_or("N/A")
    }

    pub fn advice_label(&self) -> &str {
        self.investment_advice.as_deref().unwrap_or("N/A")
    }

    pub fn confidence_label(&self) -> String {
        format_confidence(self.confidence_score)
    }
}

/// Styling bucket for the liquidity level: only "high" is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiquidityTone {
    Positive,
    Negative,
}

impl LiquidityTone {
    pub fn from_level(level: Option<&str>) -> Self {
        match level.map(|l| l.trim().to_lowercase()) {
            Some(l) if l == "high" => Self::Positive,
            _ => Self::Negative,
        }
    }

    pub fn color_hex(&self) -> &'static str {
        match self {
            Self::Positive => "#28a745",
            Self::Negative => "#dc3545",
        }
    }
}

/// Closed set of advice categories. Anything unrecognised is `Avoid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentAdvice {
    Buy,
    Hold,
    Avoid,
}

impl fmt::Display for InvestmentAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "Buy"),
            Self::Hold => write!(f, "Hold"),
            Self::Avoid => write!(f, "Avoid"),
        }
    }
}

/// Background, border and text colors of the recommendation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvicePalette {
    pub background_hex: &'static str,
    pub border_hex: &'static str,
    pub text_hex: &'static str,
}

impl InvestmentAdvice {
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_lowercase()).as_deref() {
            Some("buy") => Self::Buy,
            Some("hold") => Self::Hold,
            _ => Self::Avoid,
        }
    }

    pub fn palette(&self) -> AdvicePalette {
        match self {
            Self::Buy => AdvicePalette {
                background_hex: "#d4edda",
                border_hex: "#28a745",
                text_hex: "#28a745",
            },
            Self::Hold => AdvicePalette {
                background_hex: "#fff3cd",
                border_hex: "#ffc107",
                text_hex: "#856404",
            },
            Self::Avoid => AdvicePalette {
                background_hex: "#f8d7da",
                border_hex: "#dc3545",
                text_hex: "#dc3545",
            },
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Buy => "✅",
            Self::Hold => "⚠️",
            Self::Avoid => "❌",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Buy => "Recommended to Buy",
            Self::Hold => "Recommended not to purchase",
            Self::Avoid => "Not Recommended to Buy",
        }
    }

    /// Color of the advice value in the summary row.
    pub fn summary_color_hex(&self) -> &'static str {
        match self {
            Self::Buy => "#28a745",
            Self::Hold => "#ffc107",
            Self::Avoid => "#dc3545",
        }
    }
}

/// "87%" for whole numbers, up to two decimals otherwise.
pub fn format_confidence(score: Option<f64>) -> String {
    match score {
        Some(value) if value.is_finite() => {
            if value.fract() == 0.0 {
                format!("{:.0}%", value)
            } else {
                let text = format!("{:.2}", value);
                format!("{}%", text.trim_end_matches('0').trim_end_matches('.'))
            }
        }
        _ => "N/A".to_string(),
    }
}
