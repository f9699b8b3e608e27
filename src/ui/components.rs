//! Reusable widgets: pink pill buttons, flat buttons, bordered text fields

use crate::ui::theme::{BG, CARD, HOVER, LIGHT_PINK, PINK, TEXT_PRIMARY, TEXT_SECONDARY};

use eframe::egui::{self, Response, RichText, Stroke, Ui};
use egui_phosphor::regular as icons;

/// Filled pink button
pub fn primary_button(ui: &mut Ui, text: &str, size: egui::Vec2) -> Response {
    ui.add(
        egui::Button::new(RichText::new(text).color(TEXT_PRIMARY).strong())
            .fill(PINK)
            .stroke(Stroke::NONE)
            .corner_radius(size.y / 2.0)
            .min_size(size),
    )
}

/// Borderless button for secondary links ("Back", "View Details", ...)
pub fn flat_button(ui: &mut Ui, text: impl Into<RichText>) -> Response {
    let text: RichText = text.into();
    ui.add(
        egui::Button::new(text)
            .fill(egui::Color32::TRANSPARENT)
            .stroke(Stroke::NONE),
    )
}

pub fn back_button(ui: &mut Ui) -> Response {
    flat_button(
        ui,
        RichText::new(format!("{} Back", icons::ARROW_LEFT)).color(TEXT_SECONDARY),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Nav bar tab; the active tab is filled pink
pub fn nav_button(ui: &mut Ui, text: &str, active: bool) -> Response {
    let fill = if active { PINK } else { egui::Color32::TRANSPARENT };
    ui.add(
        egui::Button::new(RichText::new(text).size(16.0).color(TEXT_PRIMARY))
            .fill(fill)
            .stroke(Stroke::NONE)
            .min_size(egui::vec2(110.0, 32.0)),
    )
}

/// Single-line entry with the pink border, masked when `secret`
pub fn text_field(ui: &mut Ui, value: &mut String, hint: &str, secret: bool, width: f32) -> Response {
    ui.scope(|ui| {
        let widgets = &mut ui.visuals_mut().widgets;
        widgets.inactive.bg_stroke = Stroke::new(2.0, PINK);
        widgets.hovered.bg_stroke = Stroke::new(2.0, LIGHT_PINK);
        widgets.inactive.bg_fill = CARD;
        widgets.hovered.bg_fill = HOVER;
        ui.add(
            egui::TextEdit::singleline(value)
                .hint_text(hint)
                .password(secret)
                .text_color(TEXT_PRIMARY)
                .desired_width(width)
                .margin(egui::Margin::symmetric(12, 10)),
        )
    })
    .inner
}

/// Image widget for a loaded asset, scaled to a square of `side` points
pub fn asset_image(texture: &egui::TextureHandle, side: f32) -> egui::Image<'static> {
    egui::Image::from_texture(egui::load::SizedTexture::new(
        texture.id(),
        egui::vec2(side, side),
    ))
}

/// Borderless image button used for the help/about status icons
pub fn icon_button(ui: &mut Ui, texture: &egui::TextureHandle, side: f32) -> Response {
    ui.add(egui::Button::image(asset_image(texture, side)).fill(BG).stroke(Stroke::NONE))
}

/// Bold single-glyph text button, the stand-in for a missing icon
pub fn glyph_button(ui: &mut Ui, glyph: &str) -> Response {
    ui.add(
        egui::Button::new(RichText::new(glyph).size(16.0).strong().color(TEXT_PRIMARY))
            .fill(egui::Color32::TRANSPARENT)
            .stroke(Stroke::NONE)
            .min_size(egui::vec2(24.0, 24.0)),
    )
}

pub fn heading(ui: &mut Ui, text: &str, size: f32) {
    ui.label(RichText::new(text).size(size).strong().color(PINK));
}
