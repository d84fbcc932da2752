use super::style;
use crate::egui_app::view_model::HeatmapModel;
use eframe::egui::{self, Align2, FontId, Rect, Sense, StrokeKind, Ui, pos2, vec2};

const CELL: egui::Vec2 = vec2(110.0, 56.0);
const ROW_LABEL_WIDTH: f32 = 72.0;
const TICK_HEIGHT: f32 = 22.0;
const SCALE_GAP: f32 = 16.0;
const SCALE_WIDTH: f32 = 14.0;
const SCALE_LABEL_WIDTH: f32 = 40.0;
const SCALE_STEPS: usize = 24;

/// Paint the 2×2 matrix with row ticks, column ticks and a colour scale.
pub(super) fn render_heatmap(ui: &mut Ui, model: &HeatmapModel) {
    let palette = style::palette();
    let size = vec2(
        ROW_LABEL_WIDTH + CELL.x * 2.0 + SCALE_GAP + SCALE_WIDTH + SCALE_LABEL_WIDTH,
        CELL.y * 2.0 + TICK_HEIGHT,
    );
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    let font = FontId::proportional(13.0);
    let grid_min = rect.min + vec2(ROW_LABEL_WIDTH, 0.0);

    for (row, cells) in model.cells.iter().enumerate() {
        let top = grid_min.y + row as f32 * CELL.y;
        painter.text(
            pos2(grid_min.x - 8.0, top + CELL.y * 0.5),
            Align2::RIGHT_CENTER,
            model.y_labels[row],
            font.clone(),
            palette.text_muted,
        );
        for (col, cell) in cells.iter().enumerate() {
            let cell_rect =
                Rect::from_min_size(pos2(grid_min.x + col as f32 * CELL.x, top), CELL);
            painter.rect_filled(cell_rect, 0.0, style::heatmap_fill(cell.intensity));
            painter.rect_stroke(cell_rect, 0.0, style::inner_border(), StrokeKind::Inside);
            painter.text(
                cell_rect.center(),
                Align2::CENTER_CENTER,
                cell.value,
                FontId::proportional(16.0),
                style::heatmap_text(cell.intensity),
            );
        }
    }

    let ticks_y = grid_min.y + CELL.y * 2.0 + TICK_HEIGHT * 0.5;
    for (col, label) in model.x_labels.iter().enumerate() {
        painter.text(
            pos2(grid_min.x + (col as f32 + 0.5) * CELL.x, ticks_y),
            Align2::CENTER_CENTER,
            *label,
            font.clone(),
            palette.text_muted,
        );
    }

    let scale_rect = Rect::from_min_size(
        pos2(grid_min.x + CELL.x * 2.0 + SCALE_GAP, grid_min.y),
        vec2(SCALE_WIDTH, CELL.y * 2.0),
    );
    let band_height = scale_rect.height() / SCALE_STEPS as f32;
    for step in 0..SCALE_STEPS {
        let bottom = scale_rect.max.y - step as f32 * band_height;
        let band = Rect::from_min_max(
            pos2(scale_rect.min.x, bottom - band_height),
            pos2(scale_rect.max.x, bottom),
        );
        let intensity = (step as f32 + 0.5) / SCALE_STEPS as f32;
        painter.rect_filled(band, 0.0, style::heatmap_fill(intensity));
    }
    painter.rect_stroke(scale_rect, 0.0, style::inner_border(), StrokeKind::Inside);
    painter.text(
        pos2(scale_rect.max.x + 4.0, scale_rect.min.y),
        Align2::LEFT_TOP,
        model.scale_max,
        font.clone(),
        palette.text_muted,
    );
    painter.text(
        pos2(scale_rect.max.x + 4.0, scale_rect.max.y),
        Align2::LEFT_BOTTOM,
        "0",
        font,
        palette.text_muted,
    );
}
