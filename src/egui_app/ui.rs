//! egui renderer for the recommender window.

mod dialog;
mod heatmap;
mod overlay_layers;
mod recommendations_modal;
mod requirements_panel;
pub mod style;
mod toasts;
mod training_panel;
mod weights_panel;

use std::collections::BTreeMap;
use std::time::Duration;

use crate::api::Criterion;
use crate::config::AppSettings;
use crate::egui_app::controller::{EguiController, FieldError};
use crate::egui_app::state::{Flow, NumericDraft};
use eframe::egui::{self, Frame, Margin, RichText, TextEdit, Ui};

/// Smallest window the layout is designed for.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(900.0, 640.0);

/// Repaint cadence while a request is in flight or a toast is counting down.
const BUSY_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// Numeric inputs that can hold a rejected draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum FieldKey {
    Weight(Criterion),
    Ram,
    Price,
}

/// Renders the window from the controller's state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
    /// Why the last edit of a numeric field was rejected.
    field_hints: BTreeMap<FieldKey, String>,
    /// Dialog that was on screen in the previous frame.
    displayed_dialog: Option<u64>,
}

impl EguiApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &AppSettings) -> Self {
        let mut controller = EguiController::new(settings);
        controller.set_repaint_context(cc.egui_ctx.clone());
        Self::with_controller(controller)
    }

    fn with_controller(controller: EguiController) -> Self {
        Self {
            controller,
            visuals_set: false,
            field_hints: BTreeMap::new(),
            displayed_dialog: None,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn record_field(&mut self, key: FieldKey, outcome: Result<(), FieldError>) {
        match outcome {
            Ok(()) => {
                self.field_hints.remove(&key);
            }
            Err(err) => {
                self.field_hints.insert(key, err.to_string());
            }
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("PC Recommender").color(palette.text_primary));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(self.controller.client().base_url())
                                .color(palette.text_muted),
                        );
                        let busy: Vec<&str> = Flow::ALL
                            .into_iter()
                            .filter(|flow| self.controller.is_busy(*flow))
                            .map(Flow::busy_label)
                            .collect();
                        if !busy.is_empty() {
                            ui.spinner();
                            ui.label(RichText::new(busy.join("  ")).color(palette.accent_copper));
                        }
                    });
                });
            });
    }

    /// Modal, dialog and toasts, stacked in that order.
    fn render_overlays(&mut self, ctx: &egui::Context) {
        self.render_recommendations_modal(ctx);
        self.render_dialog(ctx);
        self.render_toasts(ctx);
    }

    fn render_central(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .show(ui, |ui| {
                    if self.controller.ui.show_weights_panel {
                        self.render_weights_panel(ui);
                        ui.add_space(12.0);
                    }
                    self.render_requirements_panel(ui);
                    ui.add_space(12.0);
                    self.render_training_panel(ui);
                    ui.add_space(12.0);
                    self.render_inference_panel(ui);
                });
        });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.tick();
        self.render_top_bar(ctx);
        self.render_central(ctx);
        self.render_overlays(ctx);
        if self.controller.wants_periodic_repaint() {
            ctx.request_repaint_after(BUSY_REPAINT_INTERVAL);
        }
    }
}

/// Outlined compartment with a heading.
fn section(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui)) {
    let palette = style::palette();
    Frame::new()
        .fill(style::compartment_fill())
        .stroke(style::section_stroke())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).strong().size(16.0).color(palette.text_primary));
            ui.add_space(8.0);
            add_contents(ui);
        });
}

/// Trigger for `flow`; disabled and relabelled while it is busy.
fn flow_button(ui: &mut Ui, flow: Flow, busy: bool) -> bool {
    ui.add_enabled(!busy, egui::Button::new(flow.button_label(busy)))
        .clicked()
}

/// Single-line numeric input; returns the new text when it changed.
fn numeric_field(
    ui: &mut Ui,
    draft: &NumericDraft,
    hint: Option<&String>,
    width: f32,
) -> Option<String> {
    let mut text = draft.text.clone();
    let mut edit = TextEdit::singleline(&mut text).desired_width(width);
    if draft.invalid {
        edit = edit.text_color(style::palette().error);
    }
    let mut response = ui.add(edit);
    if let Some(hint) = hint.filter(|_| draft.invalid) {
        response = response.on_hover_text(hint.as_str());
    }
    response.changed().then_some(text)
}
