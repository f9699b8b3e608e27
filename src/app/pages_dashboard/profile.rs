use crate::app::app::KeyVox;
use crate::app::content::PROFILE_FIELDS;
use crate::session::Action;
use crate::ui::components::{heading, primary_button};
use crate::ui::theme::{card_frame, TEXT_PRIMARY, TEXT_SECONDARY};

use eframe::egui::{self, RichText, Ui};

impl KeyVox {
    /// Placeholder profile; "Deactivate Account" is the only way back to Welcome
    pub(super) fn display_profile(&self, ui: &mut Ui) -> Option<Action> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            heading(ui, "User Profile", 26.0);
            ui.add_space(30.0);

            for (key, value) in PROFILE_FIELDS {
                card_frame(10.0)
                    .inner_margin(egui::Margin::same(10))
                    .show(ui, |ui| {
                        ui.set_width(460.0);
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(format!("{}:", key))
                                    .size(14.0)
                                    .strong()
                                    .color(TEXT_PRIMARY),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        RichText::new(value).size(14.0).color(TEXT_SECONDARY),
                                    );
                                },
                            );
                        });
                    });
                ui.add_space(8.0);
            }
            ui.add_space(32.0);

            if primary_button(ui, "Deactivate Account", egui::vec2(220.0, 40.0)).clicked() {
                action = Some(Action::Deactivate);
            }
        });

        action
    }
}
