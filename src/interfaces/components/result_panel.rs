use crate::interfaces::components::card::{Card, render_metric_card};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::prediction_view_model::{RecommendationPanel, ResultView};
use eframe::egui;

pub fn render_result(ui: &mut egui::Ui, view: &ResultView) {
    match view {
        ResultView::Empty => {}
        ResultView::Loading => {
            Card::new().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label(
                        egui::RichText::new("Fetching prediction...")
                            .color(DesignSystem::TEXT_SECONDARY),
                    );
                });
            });
        }
        ResultView::Summary {
            cards,
            recommendation,
        } => {
            Card::new().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("📊 Prediction Summary");
                });
                ui.add_space(DesignSystem::SPACING_MEDIUM);

                ui.columns(cards.len(), |columns| {
                    for (column, card) in columns.iter_mut().zip(cards.iter()) {
                        render_metric_card(column, card.label, &card.value, card.color);
                    }
                });

                ui.add_space(DesignSystem::SPACING_MEDIUM);
                render_recommendation(ui, recommendation);
            });
        }
    }
}

fn render_recommendation(ui: &mut egui::Ui, panel: &RecommendationPanel) {
    egui::Frame::NONE
        .fill(panel.background)
        .corner_radius(DesignSystem::ROUNDING_MEDIUM)
        .stroke(egui::Stroke::new(2.0, panel.border))
        .inner_margin(DesignSystem::SPACING_LARGE as i8)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!("{} {}", panel.icon, panel.message))
                        .size(18.0)
                        .strong()
                        .color(panel.text_color),
                );
                ui.add_space(DesignSystem::SPACING_SMALL);
                ui.label(egui::RichText::new(panel.icon).size(40.0));
            });
        });
}
