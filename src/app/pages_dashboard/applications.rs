use crate::app::app::{log_inert_click, KeyVox};
use crate::app::content::APP_CARDS;
use crate::ui::components::{asset_image, heading, primary_button};
use crate::ui::theme::{card_frame, TEXT_PRIMARY};

use eframe::egui::{self, RichText, Ui};

impl KeyVox {
    pub(super) fn display_applications(&self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            heading(ui, "Manage Applications", 26.0);
        });
        ui.add_space(30.0);

        // All three icons or none, so the cards stay the same height
        let icons = self.assets.card_icons();

        ui.columns(APP_CARDS.len(), |columns| {
            for (i, (column, card)) in columns.iter_mut().zip(APP_CARDS.iter()).enumerate() {
                card_frame(15.0).show(column, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(15.0);
                        if let Some(icons) = icons {
                            ui.add(asset_image(icons[i], 50.0));
                            ui.add_space(10.0);
                        }
                        ui.label(
                            RichText::new(card.title)
                                .size(18.0)
                                .strong()
                                .color(TEXT_PRIMARY),
                        );
                        ui.add_space(5.0);
                        ui.label(RichText::new(card.info).size(14.0).color(TEXT_PRIMARY));
                        ui.add_space(25.0);
                        if primary_button(ui, card.button, egui::vec2(160.0, 35.0)).clicked() {
                            log_inert_click(card.button);
                        }
                        ui.add_space(10.0);
                    });
                });
            }
        });
    }
}
