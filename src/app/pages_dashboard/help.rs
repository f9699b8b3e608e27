use crate::app::app::{log_inert_click, KeyVox};
use crate::app::content::{HELP_SECTIONS, SUPPORT_FOOTER};
use crate::ui::components::{flat_button, heading};
use crate::ui::theme::{card_frame, LIGHT_PINK, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};

use eframe::egui::{self, RichText, Ui};

impl KeyVox {
    pub(super) fn display_help(&self, ui: &mut Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    heading(ui, "Help & Support", 26.0);
                    ui.add_space(20.0);

                    for (i, (title, description)) in HELP_SECTIONS.iter().enumerate() {
                        card_frame(10.0).show(ui, |ui| {
                            ui.set_width(560.0);
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(*title)
                                        .size(18.0)
                                        .strong()
                                        .color(TEXT_PRIMARY),
                                );
                                ui.add_space(5.0);
                                ui.label(
                                    RichText::new(*description)
                                        .size(14.0)
                                        .color(TEXT_SECONDARY),
                                );
                                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                                    ui.push_id(i, |ui| {
                                        let details =
                                            RichText::new("View Details").color(LIGHT_PINK);
                                        if flat_button(ui, details).clicked() {
                                            log_inert_click(title);
                                        }
                                    });
                                });
                            });
                        });
                        ui.add_space(10.0);
                    }

                    ui.add_space(20.0);
                    ui.label(RichText::new(SUPPORT_FOOTER).size(12.0).color(TEXT_MUTED));
                    ui.add_space(20.0);
                });
            });
    }
}
