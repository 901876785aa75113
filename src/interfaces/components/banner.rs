use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Error banner. Returns `true` when the user dismissed it.
pub fn render_error_banner(ui: &mut egui::Ui, message: &str) -> bool {
    let mut dismissed = false;

    egui::Frame::NONE
        .fill(DesignSystem::DANGER.linear_multiply(0.15))
        .corner_radius(DesignSystem::ROUNDING_MEDIUM)
        .stroke(egui::Stroke::new(1.0, DesignSystem::DANGER))
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").color(DesignSystem::DANGER));
                ui.label(egui::RichText::new(message).color(DesignSystem::TEXT_PRIMARY));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
                        dismissed = true;
                    }
                });
            });
        });

    dismissed
}
