use std::time::Instant;

use super::overlay_layers::OverlayLayer;
use super::{EguiApp, style};
use eframe::egui::{self, Align2, Frame, Id, Margin, ProgressBar, RichText, Stroke};

impl EguiApp {
    /// Stack of transient notifications in the bottom-right corner.
    pub(super) fn render_toasts(&mut self, ctx: &egui::Context) {
        if self.controller.ui.toasts.is_empty() {
            return;
        }
        let now = Instant::now();
        let palette = style::palette();
        let mut dismissed = None;
        egui::Area::new(Id::new("toast_stack"))
            .order(OverlayLayer::Overlay.order())
            .anchor(Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .interactable(true)
            .show(ctx, |ui| {
                for toast in &self.controller.ui.toasts.entries {
                    let accent = style::tone_color(toast.tone);
                    Frame::new()
                        .fill(palette.bg_tertiary)
                        .stroke(Stroke::new(1.0, accent))
                        .inner_margin(Margin::symmetric(10, 6))
                        .show(ui, |ui| {
                            ui.set_width(260.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&toast.text).color(palette.text_primary));
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui.small_button("x").clicked() {
                                            dismissed = Some(toast.id);
                                        }
                                    },
                                );
                            });
                            ui.add(
                                ProgressBar::new(toast.remaining_fraction(now))
                                    .desired_height(2.0)
                                    .fill(accent),
                            );
                        });
                    ui.add_space(6.0);
                }
            });
        if let Some(id) = dismissed {
            self.controller.dismiss_toast(id);
        }
    }
}
