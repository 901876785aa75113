use crate::application::workflow::PredictionWorkflow;
use crate::domain::form::{FormField, MetricField};
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::prediction_view_model::PredictionViewModel;
use eframe::egui;

/// User intent collected while drawing; applied after the frame's borrows end.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SelectCoin(String),
    Update(FormField, String),
    Submit,
    DismissError,
}

/// Characters a numeric input accepts: digits, sign, decimal point, exponent.
pub fn filter_numeric_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        .collect()
}

pub fn render_form(ui: &mut egui::Ui, workflow: &PredictionWorkflow, actions: &mut Vec<FormAction>) {
    Card::new()
        .title("ENTER CRYPTOCURRENCY METRICS")
        .show(ui, |ui| {
            render_coin_row(ui, workflow, actions);
            ui.add_space(DesignSystem::SPACING_MEDIUM);

            egui::Grid::new("metric_grid")
                .num_columns(3)
                .spacing([DesignSystem::SPACING_MEDIUM, DesignSystem::SPACING_SMALL])
                .show(ui, |ui| {
                    for (i, field) in MetricField::ALL.into_iter().enumerate() {
                        render_metric_input(ui, workflow, field, actions);
                        if i % 3 == 2 {
                            ui.end_row();
                        }
                    }
                });

            ui.add_space(DesignSystem::SPACING_MEDIUM);

            ui.horizontal(|ui| {
                let button = egui::Button::new(
                    egui::RichText::new(PredictionViewModel::submit_label(workflow)).strong(),
                )
                .fill(DesignSystem::ACCENT_PRIMARY)
                .min_size(egui::vec2(ui.available_width() - 32.0, 36.0));

                if ui.add_enabled(workflow.can_submit(), button).clicked() {
                    actions.push(FormAction::Submit);
                }
                if workflow.state().is_loading() {
                    ui.add(egui::Spinner::new());
                }
            });
        });
}

fn render_coin_row(ui: &mut egui::Ui, workflow: &PredictionWorkflow, actions: &mut Vec<FormAction>) {
    let form = workflow.form();

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new("COIN").small().color(DesignSystem::TEXT_SECONDARY));
            let selected_text = workflow
                .selected_coin()
                .map(|coin| coin.display_label())
                .unwrap_or_else(|| PredictionViewModel::coin_placeholder(workflow).to_string());

            egui::ComboBox::from_id_salt("coin_selector")
                .selected_text(selected_text)
                .width(220.0)
                .show_ui(ui, |ui| {
                    for coin in workflow.coins() {
                        let is_selected = form.coin_id() == Some(coin.id.as_str());
                        if ui.selectable_label(is_selected, coin.display_label()).clicked()
                            && !is_selected
                        {
                            actions.push(FormAction::SelectCoin(coin.id.clone()));
                        }
                    }
                });
        });

        ui.add_space(DesignSystem::SPACING_MEDIUM);

        ui.vertical(|ui| {
            ui.label(egui::RichText::new("SYMBOL").small().color(DesignSystem::TEXT_SECONDARY));
            // Derived from the coin; never editable.
            let mut symbol = form.symbol().to_string();
            ui.add(
                egui::TextEdit::singleline(&mut symbol)
                    .interactive(false)
                    .desired_width(90.0),
            );
        });

        ui.add_space(DesignSystem::SPACING_MEDIUM);

        ui.vertical(|ui| {
            ui.label(egui::RichText::new("DATE").small().color(DesignSystem::TEXT_SECONDARY));
            let mut date = form.date_text().to_string();
            let response = ui.add(
                egui::TextEdit::singleline(&mut date)
                    .hint_text("YYYY-MM-DD")
                    .desired_width(120.0),
            );
            if response.changed() {
                actions.push(FormAction::Update(FormField::Date, date));
            }
            if !form.date_text().trim().is_empty() && form.date().is_none() {
                ui.label(
                    egui::RichText::new("Use YYYY-MM-DD")
                        .small()
                        .color(DesignSystem::WARNING),
                );
            }
        });
    });
}

fn render_metric_input(
    ui: &mut egui::Ui,
    workflow: &PredictionWorkflow,
    field: MetricField,
    actions: &mut Vec<FormAction>,
) {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(field.label())
                .small()
                .color(DesignSystem::TEXT_SECONDARY),
        );
        let mut value = workflow.form().metric(field).to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut value)
                .id_salt(field.key())
                .hint_text("0.0")
                .desired_width(180.0),
        );
        if response.changed() {
            actions.push(FormAction::Update(field.into(), filter_numeric_input(&value)));
        }
    });
}
