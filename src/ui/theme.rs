//! KeyVox palette and egui style setup

use eframe::egui::{self, Color32, CornerRadius, Margin, Stroke};

pub mod colors {
    use eframe::egui::Color32;

    pub const PINK: Color32 = Color32::from_rgb(0xe7, 0x54, 0x80);
    pub const LIGHT_PINK: Color32 = Color32::from_rgb(0xf2, 0x8c, 0xa0);
    pub const BG: Color32 = Color32::from_rgb(0x1a, 0x1a, 0x1a);
    pub const CARD: Color32 = Color32::from_rgb(0x2b, 0x2b, 0x2b);
    pub const HOVER: Color32 = Color32::from_rgb(0x2e, 0x2e, 0x2e);
    pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
    pub const TEXT_SECONDARY: Color32 = Color32::from_gray(204); // gray80
    pub const TEXT_MUTED: Color32 = Color32::from_gray(153); // gray60
    pub const ERROR: Color32 = Color32::from_rgb(0xff, 0x00, 0x00);
}

pub use colors::*;

/// Install fonts and dark visuals. Call once at startup.
pub fn apply_theme(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG;
    visuals.window_fill = BG;
    visuals.extreme_bg_color = CARD; // text edit background
    visuals.selection.bg_fill = PINK;
    visuals.selection.stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.hyperlink_color = LIGHT_PINK;

    visuals.widgets.inactive.weak_bg_fill = Color32::TRANSPARENT;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.weak_bg_fill = HOVER;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, LIGHT_PINK);
    visuals.widgets.active.weak_bg_fill = LIGHT_PINK;
    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widget.corner_radius = CornerRadius::same(12);
    }

    ctx.set_visuals(visuals);
}

/// Rounded card used by the home token, application and help panels
pub fn card_frame(corner: f32) -> egui::Frame {
    egui::Frame::NONE
        .fill(CARD)
        .corner_radius(corner)
        .inner_margin(Margin::symmetric(20, 14))
}

pub fn page_frame() -> egui::Frame {
    egui::Frame::NONE.fill(BG).inner_margin(Margin::same(20))
}
