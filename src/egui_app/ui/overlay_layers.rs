use eframe::egui::{self, Color32, Id, LayerId, Order};

/// Stacking tiers for floating UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum OverlayLayer {
    /// Toasts; never block input.
    Overlay,
    /// Results modal and blocking dialogs.
    Modal,
}

impl OverlayLayer {
    pub(super) fn order(self) -> Order {
        match self {
            Self::Overlay => Order::Foreground,
            Self::Modal => Order::Tooltip,
        }
    }

    pub(super) fn layer_id(self, id: impl Into<Id>) -> LayerId {
        LayerId::new(self.order(), id.into())
    }
}

/// Dim the window and swallow clicks behind a modal.
pub(super) fn modal_backdrop(ctx: &egui::Context, id: impl Into<Id>) {
    let id = id.into();
    let rect = ctx.viewport_rect();
    let painter = ctx.layer_painter(OverlayLayer::Modal.layer_id(id.with("backdrop_paint")));
    painter.rect_filled(rect, 0.0, Color32::from_rgba_premultiplied(0, 0, 0, 160));
    egui::Area::new(id.with("backdrop_blocker"))
        .order(OverlayLayer::Modal.order())
        .fixed_pos(rect.min)
        .show(ctx, |ui| {
            ui.allocate_rect(rect, egui::Sense::click_and_drag());
        });
}
