use crate::application::workflow::{PredictionWorkflow, RequestState};
use crate::domain::prediction::PredictionResult;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub struct SummaryCard {
    pub label: &'static str,
    pub value: String,
    pub color: egui::Color32,
}

pub struct RecommendationPanel {
    pub background: egui::Color32,
    pub border: egui::Color32,
    pub text_color: egui::Color32,
    pub icon: &'static str,
    pub message: &'static str,
}

/// What the result region shows for the current `RequestState`.
pub enum ResultView {
    Empty,
    Loading,
    Summary {
        cards: [SummaryCard; 3],
        recommendation: RecommendationPanel,
    },
}

pub struct PredictionViewModel;

impl PredictionViewModel {
    pub fn summary_cards(result: &PredictionResult) -> [SummaryCard; 3] {
        let advice = result.advice();
        [
            SummaryCard {
                label: "Liquidity Level",
                value: result.liquidity_label().to_string(),
                color: DesignSystem::color(result.liquidity_tone().color_hex()),
            },
            SummaryCard {
                label: "Confidence Score",
                value: result.confidence_label(),
                color: DesignSystem::WARNING,
            },
            SummaryCard {
                label: "Investment Advice",
                value: result.advice_label().to_string(),
                color: DesignSystem::color(advice.summary_color_hex()),
            },
        ]
    }

    pub fn recommendation(result: &PredictionResult) -> RecommendationPanel {
        let advice = result.advice();
        let palette = advice.palette();
        RecommendationPanel {
            background: DesignSystem::color(palette.background_hex),
            border: DesignSystem::color(palette.border_hex),
            text_color: DesignSystem::color(palette.text_hex),
            icon: advice.icon(),
            message: advice.message(),
        }
    }

    pub fn result_view(workflow: &PredictionWorkflow) -> ResultView {
        match workflow.state() {
            RequestState::Loading => ResultView::Loading,
            RequestState::Success(result) => ResultView::Summary {
                cards: Self::summary_cards(result),
                recommendation: Self::recommendation(result),
            },
            RequestState::Idle | RequestState::Failed(_) => ResultView::Empty,
        }
    }

    /// Text of the dismissable error banner, if one should be shown.
    pub fn banner(workflow: &PredictionWorkflow) -> Option<&str> {
        match workflow.state() {
            RequestState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn submit_label(workflow: &PredictionWorkflow) -> &'static str {
        if workflow.state().is_loading() {
            "Predicting..."
        } else {
            "Predict Liquidity"
        }
    }

    pub fn coin_placeholder(workflow: &PredictionWorkflow) -> &'static str {
        if workflow.coins().is_empty() {
            "No coins available"
        } else {
            "Select a coin"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DirectoryError;

    fn result(level: &str, score: f64, advice: Option<&str>) -> PredictionResult {
        PredictionResult {
            liquidity_level: Some(level.to_string()),
            confidence_score: Some(score),
            investment_advice: advice.map(str::to_string),
        }
    }

    #[test]
    fn test_high_liquidity_buy_summary() {
        let cards = PredictionViewModel::summary_cards(&result("High", 87.0, Some("Buy")));

        assert_eq!(cards[0].value, "High");
        assert_eq!(cards[0].color, egui::Color32::from_rgb(0x28, 0xa7, 0x45));
        assert_eq!(cards[1].value, "87%");
        assert_eq!(cards[2].value, "Buy");
        assert_eq!(cards[2].color, egui::Color32::from_rgb(0x28, 0xa7, 0x45));

        let panel = PredictionViewModel::recommendation(&result("High", 87.0, Some("Buy")));
        assert_eq!(panel.message, "Recommended to Buy");
        assert_eq!(panel.background, egui::Color32::from_rgb(0xd4, 0xed, 0xda));
    }

    #[test]
    fn test_low_liquidity_is_red() {
        let cards = PredictionViewModel::summary_cards(&result("Low", 40.0, Some("Hold")));
        assert_eq!(cards[0].color, egui::Color32::from_rgb(0xdc, 0x35, 0x45));
        assert_eq!(cards[2].color, egui::Color32::from_rgb(0xff, 0xc1, 0x07));
    }

    #[test]
    fn test_missing_advice_falls_back_to_avoid_panel() {
        let panel = PredictionViewModel::recommendation(&result("Medium", 50.0, None));
        assert_eq!(panel.message, "Not Recommended to Buy");
        assert_eq!(panel.border, egui::Color32::from_rgb(0xdc, 0x35, 0x45));
    }

    #[test]
    fn test_banner_only_for_failures() {
        let mut workflow = PredictionWorkflow::new();
        assert!(PredictionViewModel::banner(&workflow).is_none());
        assert_eq!(PredictionViewModel::coin_placeholder(&workflow), "No coins available");

        workflow.begin_directory_load();
        workflow.complete_directory_load(Err(DirectoryError::Status { code: 503 }));
        assert!(PredictionViewModel::banner(&workflow).is_some());
        assert!(matches!(
            PredictionViewModel::result_view(&workflow),
            ResultView::Empty
        ));
    }
}
