use super::{EguiApp, FieldKey, flow_button, numeric_field, section};
use crate::api::{Brand, Processor};
use crate::egui_app::state::Flow;
use eframe::egui::{self, Ui};

impl EguiApp {
    pub(super) fn render_requirements_panel(&mut self, ui: &mut Ui) {
        let busy = self.controller.is_busy(Flow::Recommendations);
        section(ui, "Your Requirements", |ui| {
            egui::Grid::new("requirements_grid")
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Brand");
                    self.render_brand_combo(ui);
                    ui.end_row();

                    ui.label("Processor");
                    self.render_processor_combo(ui);
                    ui.end_row();

                    ui.label("RAM (GB)");
                    let draft = self.controller.ui.requirements.ram_draft.clone();
                    if let Some(text) =
                        numeric_field(ui, &draft, self.field_hints.get(&FieldKey::Ram), 80.0)
                    {
                        let outcome = self.controller.set_ram_text(text);
                        self.record_field(FieldKey::Ram, outcome);
                    }
                    ui.end_row();

                    let mut has_sacoche = self.controller.ui.requirements.values.has_sacoche;
                    ui.label("");
                    if ui.checkbox(&mut has_sacoche, "Has Sacoche").changed() {
                        self.controller.set_has_sacoche(has_sacoche);
                    }
                    ui.end_row();

                    let mut is_available = self.controller.ui.requirements.values.is_available;
                    ui.label("");
                    if ui.checkbox(&mut is_available, "Is Available").changed() {
                        self.controller.set_is_available(is_available);
                    }
                    ui.end_row();
                });
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if flow_button(ui, Flow::Recommendations, busy) {
                    self.controller.submit_recommendations();
                }
                let has_results = !self.controller.ui.recommendations.items.is_empty();
                if ui
                    .add_enabled(has_results, egui::Button::new("Show Last Results"))
                    .clicked()
                {
                    self.controller.open_recommendations_modal();
                }
            });
        });
    }

    fn render_brand_combo(&mut self, ui: &mut Ui) {
        let current = self.controller.ui.requirements.values.brand;
        egui::ComboBox::from_id_salt("brand_combo")
            .width(180.0)
            .selected_text(current.map_or("Select brand", Brand::as_str))
            .show_ui(ui, |ui| {
                if ui.selectable_label(current.is_none(), "Select brand").clicked() {
                    self.controller.set_brand(None);
                }
                for brand in Brand::ALL {
                    if ui
                        .selectable_label(current == Some(brand), brand.as_str())
                        .clicked()
                    {
                        self.controller.set_brand(Some(brand));
                    }
                }
            });
    }

    fn render_processor_combo(&mut self, ui: &mut Ui) {
        let current = self.controller.ui.requirements.values.processor;
        egui::ComboBox::from_id_salt("processor_combo")
            .width(180.0)
            .selected_text(current.map_or("Select processor", Processor::as_str))
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(current.is_none(), "Select processor")
                    .clicked()
                {
                    self.controller.set_processor(None);
                }
                for processor in Processor::ALL {
                    if ui
                        .selectable_label(current == Some(processor), processor.as_str())
                        .clicked()
                    {
                        self.controller.set_processor(Some(processor));
                    }
                }
            });
    }
}
