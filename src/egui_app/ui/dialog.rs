use super::overlay_layers::{self, OverlayLayer};
use super::{EguiApp, style};
use eframe::egui::{self, Align2, Id, Key, Modifiers, RichText};

impl EguiApp {
    /// Front of the dialog queue; input behind it is blocked until acknowledged.
    ///
    /// Enter and Escape only acknowledge a dialog that was already on screen in an
    /// earlier frame, so the key press that queued it cannot also close it.
    pub(super) fn render_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.controller.ui.dialogs.current().cloned() else {
            self.displayed_dialog = None;
            return;
        };
        let keys_armed = self.displayed_dialog == Some(dialog.id);
        overlay_layers::modal_backdrop(ctx, Id::new("feedback_dialog_backdrop"));
        let accent = style::tone_color(dialog.tone);
        let mut acknowledged = false;
        egui::Window::new(RichText::new(&dialog.title).color(accent))
            .id(Id::new("feedback_dialog"))
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(OverlayLayer::Modal.order())
            .collapsible(false)
            .resizable(false)
            .default_width(380.0)
            .show(ctx, |ui| {
                ui.set_min_width(320.0);
                ui.label(&dialog.text);
                ui.add_space(10.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    acknowledged = ui.button("OK").clicked();
                });
            });
        self.displayed_dialog = Some(dialog.id);
        let keyed = keys_armed
            && ctx.input_mut(|i| {
                i.consume_key(Modifiers::NONE, Key::Enter)
                    || i.consume_key(Modifiers::NONE, Key::Escape)
            });
        if acknowledged || keyed {
            self.controller.dismiss_dialog();
        }
    }
}
