//! Welcome screen shown at startup and after deactivation

use super::app::KeyVox;
use super::content::{COPYRIGHT, TAGLINE};
use crate::assets::Asset;
use crate::session::Action;
use crate::ui::components::{asset_image, primary_button};
use crate::ui::theme::{PINK, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

impl KeyVox {
    pub(super) fn display_page_welcome(&self, ui: &mut Ui) -> Option<Action> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            match self.assets.get(Asset::Logo) {
                Some(logo) => {
                    ui.add(asset_image(logo, 130.0));
                }
                None => {
                    ui.label(RichText::new(icons::KEY).size(60.0).color(PINK));
                }
            }
            ui.add_space(15.0);

            ui.label(
                RichText::new("Welcome to KeyVox")
                    .size(34.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
            ui.add_space(10.0);
            ui.label(RichText::new(TAGLINE).size(16.0).color(TEXT_SECONDARY));
            ui.add_space(40.0);

            if primary_button(ui, "Get Started", egui::vec2(200.0, 45.0)).clicked() {
                action = Some(Action::GetStarted);
            }
        });

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
            ui.add_space(20.0);
            ui.label(RichText::new(COPYRIGHT).size(12.0).color(TEXT_MUTED));
        });

        action
    }
}
