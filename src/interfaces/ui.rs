use crate::application::controller::WorkflowController;
use crate::interfaces::components::banner::render_error_banner;
use crate::interfaces::components::form_panel::{FormAction, render_form};
use crate::interfaces::components::result_panel::render_result;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::prediction_view_model::PredictionViewModel;
use eframe::egui;
use std::time::Duration;
use tracing::debug;

/// The prediction page.
pub struct PredictionApp {
    controller: WorkflowController,
    endpoint_label: String,
}

impl PredictionApp {
    /// Mounting the page kicks off the one coin directory request.
    pub fn new(mut controller: WorkflowController, endpoint_label: impl Into<String>) -> Self {
        controller.load_coin_directory();
        Self {
            controller,
            endpoint_label: endpoint_label.into(),
        }
    }

    fn apply(&mut self, actions: Vec<FormAction>) {
        for action in actions {
            match action {
                FormAction::SelectCoin(id) => self.controller.select_coin(&id),
                FormAction::Update(field, value) => self.controller.update_field(field, value),
                FormAction::DismissError => self.controller.dismiss_error(),
                FormAction::Submit => {
                    // Validation failures already land in the banner.
                    if let Err(e) = self.controller.submit() {
                        debug!("Submit rejected: {}", e);
                    }
                }
            }
        }
    }
}

impl eframe::App for PredictionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        self.controller.pump();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🪙 Crypto Liquidity Predictor");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.endpoint_label)
                            .small()
                            .color(DesignSystem::TEXT_MUTED),
                    );
                });
            });
        });

        let mut actions = Vec::new();

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let workflow = self.controller.workflow();

                    if let Some(message) = PredictionViewModel::banner(workflow) {
                        if render_error_banner(ui, message) {
                            actions.push(FormAction::DismissError);
                        }
                        ui.add_space(DesignSystem::SPACING_MEDIUM);
                    }

                    render_form(ui, workflow, &mut actions);
                    ui.add_space(DesignSystem::SPACING_LARGE);
                    render_result(ui, &PredictionViewModel::result_view(workflow));
                });
            });

        self.apply(actions);

        // The notifier repaints on completion; this only keeps the spinner moving.
        if self.controller.workflow().state().is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
