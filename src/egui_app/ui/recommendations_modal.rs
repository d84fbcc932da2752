use super::overlay_layers::{self, OverlayLayer};
use super::{EguiApp, style};
use crate::egui_app::view_model::{self, RecommendationTable};
use eframe::egui::{self, Align2, Id, Key, Modifiers, RichText, Ui};

impl EguiApp {
    /// Ranked results plus metrics, shown after a successful search.
    pub(super) fn render_recommendations_modal(&mut self, ctx: &egui::Context) {
        if !self.controller.ui.recommendations.modal_open {
            return;
        }
        overlay_layers::modal_backdrop(ctx, Id::new("recommendations_backdrop"));
        let state = &self.controller.ui.recommendations;
        let table = view_model::recommendation_table(&state.items);
        let metrics = view_model::metric_rows(state.metrics.as_ref());

        let mut open = true;
        let mut close_clicked = false;
        egui::Window::new("Recommendations")
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(OverlayLayer::Modal.order())
            .collapsible(false)
            .resizable(true)
            .default_width(860.0)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::ScrollArea::both()
                    .id_salt("recommendations_scroll")
                    .max_height(380.0)
                    .show(ui, |ui| render_table(ui, &table));
                if !metrics.is_empty() {
                    ui.add_space(10.0);
                    ui.label(RichText::new("Metrics").strong());
                    render_metrics(ui, &metrics);
                }
                ui.add_space(10.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    close_clicked = ui.button("Close").clicked();
                });
            });
        // A dialog stacked on top owns Escape.
        let escaped = self.controller.ui.dialogs.is_empty()
            && ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Escape));
        if !open || close_clicked || escaped {
            self.controller.close_recommendations_modal();
        }
    }
}

fn render_table(ui: &mut Ui, table: &RecommendationTable) {
    let palette = style::palette();
    egui::Grid::new("recommendations_grid")
        .num_columns(table.columns.len() + 1)
        .striped(true)
        .spacing([18.0, 6.0])
        .show(ui, |ui| {
            ui.label(RichText::new("#").strong().color(palette.text_muted));
            for header in table.headers() {
                ui.label(RichText::new(header).strong());
            }
            ui.end_row();
            for (index, row) in table.rows.iter().enumerate() {
                ui.label(RichText::new((index + 1).to_string()).color(palette.text_muted));
                for cell in row {
                    ui.label(cell);
                }
                ui.end_row();
            }
        });
}

fn render_metrics(ui: &mut Ui, metrics: &[(String, String)]) {
    egui::Grid::new("metrics_grid")
        .num_columns(2)
        .striped(true)
        .spacing([18.0, 4.0])
        .show(ui, |ui| {
            for (key, value) in metrics {
                ui.label(key);
                ui.label(value);
                ui.end_row();
            }
        });
}
