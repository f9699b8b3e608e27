use crate::app::app::KeyVox;
use crate::app::content::ABOUT_TEXT;
use crate::assets::Asset;
use crate::ui::components::{asset_image, heading};
use crate::ui::theme::TEXT_PRIMARY;

use eframe::egui::{RichText, Ui};

impl KeyVox {
    pub(super) fn display_about(&self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            heading(ui, "About KeyVox", 26.0);
            ui.add_space(20.0);
            ui.label(RichText::new(ABOUT_TEXT).size(16.0).color(TEXT_PRIMARY));

            // No fallback: the logo is simply left out
            if let Some(logo) = self.assets.get(Asset::Logo) {
                ui.add_space(20.0);
                ui.add(asset_image(logo, 80.0));
            }
        });
    }
}
