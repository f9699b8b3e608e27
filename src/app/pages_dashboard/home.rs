use crate::app::app::{log_inert_click, KeyVox};
use crate::app::content::{LAST_SYNC, TOKEN_ID};
use crate::ui::components::primary_button;
use crate::ui::theme::{card_frame, TEXT_PRIMARY, TEXT_SECONDARY};

use eframe::egui::{self, RichText, Ui};

impl KeyVox {
    pub(super) fn display_home(&self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            card_frame(25.0)
                .inner_margin(egui::Margin::symmetric(60, 30))
                .show(ui, |ui| {
                    ui.set_width(360.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("Security Token Detected")
                                .size(24.0)
                                .strong()
                                .color(TEXT_PRIMARY),
                        );
                        ui.add_space(20.0);
                        ui.label(
                            RichText::new(format!("Token ID: {}", TOKEN_ID))
                                .size(14.0)
                                .color(TEXT_SECONDARY),
                        );
                        ui.add_space(5.0);
                        ui.label(
                            RichText::new(format!("Last Sync: {}", LAST_SYNC))
                                .size(14.0)
                                .color(TEXT_SECONDARY),
                        );
                        ui.add_space(40.0);
                        if primary_button(ui, "Manage Applications", egui::vec2(250.0, 45.0))
                            .clicked()
                        {
                            log_inert_click("Manage Applications");
                        }
                    });
                });
        });
    }
}
