use crate::egui_app::state::FeedbackTone;
use crate::egui_app::view_model::CalloutSeverity;
use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub grid_soft: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_ice: Color32,
    pub accent_copper: Color32,
    pub warning: Color32,
    pub success: Color32,
    pub error: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(10, 10, 12),
        bg_secondary: Color32::from_rgb(26, 28, 30),
        bg_tertiary: Color32::from_rgb(42, 44, 48),
        panel_outline: Color32::from_rgb(38, 42, 48),
        grid_soft: Color32::from_rgb(30, 32, 36),
        text_primary: Color32::from_rgb(185, 192, 200),
        text_muted: Color32::from_rgb(140, 146, 155),
        accent_ice: Color32::from_rgb(167, 217, 255),
        accent_copper: Color32::from_rgb(195, 165, 122),
        warning: Color32::from_rgb(200, 128, 96),
        success: Color32::from_rgb(102, 176, 136),
        error: Color32::from_rgb(214, 92, 92),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent_ice;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.grid_soft;
    visuals.error_fg_color = palette.error;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.grid_soft;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_ice);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rectilinear(&mut visuals.widgets.inactive, palette);
    set_rectilinear(&mut visuals.widgets.hovered, palette);
    set_rectilinear(&mut visuals.widgets.active, palette);
    set_rectilinear(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_rectilinear(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::ZERO;
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.grid_soft;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn section_stroke() -> Stroke {
    Stroke::new(2.0, palette().panel_outline)
}

pub fn inner_border() -> Stroke {
    Stroke::new(1.0, palette().grid_soft)
}

pub fn compartment_fill() -> Color32 {
    palette().bg_secondary
}

pub fn tone_color(tone: FeedbackTone) -> Color32 {
    let palette = palette();
    match tone {
        FeedbackTone::Success => palette.success,
        FeedbackTone::Info => palette.accent_ice,
        FeedbackTone::Warning => palette.warning,
        FeedbackTone::Error => palette.error,
    }
}

pub fn callout_color(severity: CalloutSeverity) -> Color32 {
    match severity {
        CalloutSeverity::Positive => palette().success,
        CalloutSeverity::Cautionary => palette().warning,
    }
}

/// Heatmap ramp from the panel background to the ice accent.
pub fn heatmap_fill(intensity: f32) -> Color32 {
    let palette = palette();
    lerp_color(palette.bg_tertiary, palette.accent_ice, intensity.clamp(0.0, 1.0))
}

/// Dark text on bright cells, light text on dim ones.
pub fn heatmap_text(intensity: f32) -> Color32 {
    if intensity > 0.55 {
        palette().bg_primary
    } else {
        palette().text_primary
    }
}

fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgb(
        channel(from.r(), to.r()),
        channel(from.g(), to.g()),
        channel(from.b(), to.b()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heatmap_ramp_hits_endpoints() {
        let palette = palette();
        assert_eq!(heatmap_fill(0.0), palette.bg_tertiary);
        assert_eq!(heatmap_fill(1.0), palette.accent_ice);
        assert_eq!(heatmap_fill(7.0), palette.accent_ice);
    }
}
