use super::{EguiApp, FieldKey, flow_button, heatmap, numeric_field, section, style};
use crate::egui_app::state::Flow;
use crate::egui_app::view_model::{self, InferenceCallout};
use eframe::egui::{self, Frame, Margin, RichText, Stroke, TextEdit, Ui};

impl EguiApp {
    pub(super) fn render_training_panel(&mut self, ui: &mut Ui) {
        let busy = self.controller.is_busy(Flow::Training);
        let palette = style::palette();
        section(ui, "Model Training", |ui| {
            if flow_button(ui, Flow::Training, busy) {
                self.controller.submit_training();
            }
            let Some(result) = self.controller.ui.training.result.as_ref() else {
                return;
            };
            ui.add_space(8.0);
            ui.label(RichText::new(view_model::accuracy_line(result)).strong());
            if !result.message.is_empty() {
                ui.label(RichText::new(&result.message).color(palette.text_muted));
            }
            ui.add_space(8.0);
            ui.label(RichText::new("Confusion Matrix").color(palette.text_muted));
            heatmap::render_heatmap(ui, &view_model::heatmap(&result.confusion_matrix));
        });
    }

    pub(super) fn render_inference_panel(&mut self, ui: &mut Ui) {
        let busy = self.controller.is_busy(Flow::Inference);
        section(ui, "Availability Prediction", |ui| {
            egui::Grid::new("inference_grid")
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Product Name");
                    let mut name = self.controller.ui.inference.product_name.clone();
                    if ui
                        .add(TextEdit::singleline(&mut name).desired_width(260.0))
                        .changed()
                    {
                        self.controller.set_product_name(name);
                    }
                    ui.end_row();

                    ui.label("Price (DT)");
                    let draft = self.controller.ui.inference.price_draft.clone();
                    if let Some(text) =
                        numeric_field(ui, &draft, self.field_hints.get(&FieldKey::Price), 120.0)
                    {
                        let outcome = self.controller.set_price_text(text);
                        self.record_field(FieldKey::Price, outcome);
                    }
                    ui.end_row();
                });
            ui.add_space(8.0);
            if flow_button(ui, Flow::Inference, busy) {
                self.controller.submit_inference();
            }
            if let Some(result) = self.controller.ui.inference.result.as_ref() {
                ui.add_space(8.0);
                render_callout(ui, &view_model::inference_callout(result));
            }
        });
    }
}

fn render_callout(ui: &mut Ui, callout: &InferenceCallout) {
    let accent = style::callout_color(callout.severity);
    Frame::new()
        .fill(style::palette().bg_primary)
        .stroke(Stroke::new(1.0, accent))
        .inner_margin(Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&callout.title).strong().color(accent));
            ui.label(&callout.detail);
        });
}
