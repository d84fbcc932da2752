use super::{EguiApp, FieldKey, flow_button, numeric_field, section};
use crate::api::Criterion;
use crate::egui_app::state::Flow;
use eframe::egui::{self, Ui};

fn criterion_label(criterion: Criterion) -> &'static str {
    match criterion {
        Criterion::Brand => "Brand",
        Criterion::Processor => "Processor",
        Criterion::Ram => "RAM",
        Criterion::HasSacoche => "Has Sacoche",
        Criterion::IsAvailable => "Is Available",
    }
}

impl EguiApp {
    pub(super) fn render_weights_panel(&mut self, ui: &mut Ui) {
        let busy = self.controller.is_busy(Flow::Weights);
        section(ui, "Weight Configuration", |ui| {
            egui::Grid::new("weights_grid")
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for criterion in Criterion::ALL {
                        ui.label(criterion_label(criterion));
                        let key = FieldKey::Weight(criterion);
                        let draft = self.controller.ui.weights.draft(criterion).clone();
                        if let Some(text) =
                            numeric_field(ui, &draft, self.field_hints.get(&key), 120.0)
                        {
                            let outcome = self.controller.set_weight_text(criterion, text);
                            self.record_field(key, outcome);
                        }
                        ui.end_row();
                    }
                });
            ui.add_space(8.0);
            if flow_button(ui, Flow::Weights, busy) {
                self.controller.submit_weights();
            }
        });
    }
}
